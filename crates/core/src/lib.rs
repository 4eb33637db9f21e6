// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Core foundational primitives for the Poolscope position analytics engine.
//!
//! The `poolscope-core` crate is deliberately small and dependency-light. It supplies the
//! building blocks shared by the model and analysis crates:
//!
//! - A single coercion type for loosely typed numeric fields (numbers or numeric strings).
//! - Floating-point comparison and safe division helpers.
//!
//! Upstream position payloads encode most numeric fields either as JSON numbers or as strings,
//! and any of them may be absent or malformed. Every derived value in Poolscope goes through
//! [`NumericOrString`] so that unparseable input is treated as missing and never surfaces as
//! `NaN` or infinity in a result.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod numeric;

// Re-exports
pub use crate::numeric::{NumericOrString, parse_or_default};
