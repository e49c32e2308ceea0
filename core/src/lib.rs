// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Primitive types of the OData entity data model
//!
//! Typed, nullable wrappers for the sixteen EDM primitive types that
//! have a literal form, with strict construction and lenient casting:
//! - [`PrimitiveKind`]: the closed set of literal-bearing types
//! - [`PrimitiveValue`]: a value of any kind, or the typeless null
//! - [`Native`]: the host-side inputs a value can be set from
//! - [`PrimitiveParser`]: the literal grammar, one method per
//!   production
//!
//! Notes
//! - `set` and literal parsing are strict; an out-of-range integer is
//!   an error, never a wrap.
//! - `cast` is lenient; whatever cannot be represented in the target
//!   becomes null.
//! - Values round-trip: `to_text` output parses back to an equal
//!   value.
//!
//! Example
//! ```rust
//! use nv_odata_core::PrimitiveKind;
//! use nv_odata_core::Value;
//!
//! let v = PrimitiveKind::Decimal.parse("3.140").unwrap();
//! assert_eq!(v.to_text().unwrap(), "3.140");
//! assert!(v.cast(PrimitiveKind::SByte).to_text().unwrap() == "3");
//! ```
//!
//! References:
//! - OASIS OData 4.01 CSDL, Primitive Types
//! - OData ABNF Construction Rules
//!

pub mod error;
pub mod native;
pub mod numeric;
pub mod parser;
pub mod scalar;
pub mod temporal;
pub mod value;

pub use error::ValueError;
pub use native::Native;
pub use numeric::ByteValue;
pub use numeric::DecimalValue;
pub use numeric::DoubleValue;
pub use numeric::Int16Value;
pub use numeric::Int32Value;
pub use numeric::Int64Value;
pub use numeric::SByteValue;
pub use numeric::SingleValue;
pub use parser::PrimitiveParser;
pub use parser::SyntaxError;
pub use scalar::BinaryValue;
pub use scalar::BooleanValue;
pub use scalar::GuidValue;
pub use scalar::StringValue;
pub use temporal::DateTimeOffsetValue;
pub use temporal::DateValue;
pub use temporal::DurationValue;
pub use temporal::TimeOfDayValue;
pub use value::PrimitiveKind;
pub use value::PrimitiveValue;
pub use value::Value;
