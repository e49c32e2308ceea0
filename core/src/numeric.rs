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

//! Numeric primitive wrappers
//!
//! `Edm.SByte`, `Edm.Byte`, `Edm.Int16`, `Edm.Int32`, `Edm.Int64`,
//! `Edm.Single`, `Edm.Double` and `Edm.Decimal` values. The integer
//! types reject out-of-range input; a non-integral numeric input rounds
//! toward zero before the range check. The floating types never fail on
//! range: magnitudes beyond the representable maximum saturate to signed
//! infinity, NaN and infinities pass through. `Edm.Decimal` is built
//! from exact source digits and keeps its scale, so `3.140` stays
//! distinct from `3.14`.
//!
//! References:
//! - OASIS OData 4.01 CSDL, Primitive Types
//! - OData ABNF Construction Rules, `decimalValue`/`doubleValue`/`sbyteValue`

use crate::error::ValueError;
use crate::native::Native;
use crate::parser::PrimitiveParser;
use crate::value::Value;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Truncates a float toward zero onto the `i128` lattice.
///
/// NaN has no integral form. Values beyond the `i128` range saturate;
/// the caller's width check rejects them.
fn integral_from_float(f: f64) -> Option<i128> {
    if f.is_nan() {
        None
    } else {
        Some(f.trunc() as i128)
    }
}

/// The whole `rust_decimal` domain is inside `f64`; the fallback keeps
/// the saturating float contract.
fn decimal_as_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_else(|| {
        if d.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })
}

fn render_f64(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v == f64::INFINITY {
        "INF".to_owned()
    } else if v == f64::NEG_INFINITY {
        "-INF".to_owned()
    } else {
        v.to_string()
    }
}

macro_rules! integer_value {
    ($(#[$doc:meta])* $name:ident, $repr:ty, $edm_name:literal, $production:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            value: Option<$repr>,
        }

        impl $name {
            /// The null value.
            #[must_use]
            pub const fn null() -> Self {
                Self { value: None }
            }

            /// Current payload, `None` when null.
            #[must_use]
            pub const fn value(&self) -> Option<$repr> {
                self.value
            }

            /// Sets from a native input.
            ///
            /// Integer, float and decimal inputs are accepted; a
            /// non-integral input rounds toward zero first.
            ///
            /// # Errors
            ///
            /// [`ValueError::Type`] for a non-numeric input,
            /// [`ValueError::Range`] when the rounded value is outside
            #[doc = concat!("the `", $edm_name, "` bounds.")]
            pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
                match value.into() {
                    Native::Null => {
                        self.value = None;
                        Ok(())
                    }
                    Native::Integer(n) => self.store(n, || n.to_string()),
                    Native::Float(f) => match integral_from_float(f) {
                        Some(n) => self.store(n, || render_f64(f)),
                        None => Err(ValueError::Range {
                            target: $edm_name,
                            given: render_f64(f),
                        }),
                    },
                    Native::Decimal(d) => match d.trunc().to_i128() {
                        Some(n) => self.store(n, || d.to_string()),
                        None => Err(ValueError::Range {
                            target: $edm_name,
                            given: d.to_string(),
                        }),
                    },
                    other => Err(ValueError::Type {
                        target: $edm_name,
                        given: other.kind(),
                    }),
                }
            }

            /// Sets to null.
            pub fn set_null(&mut self) {
                self.value = None;
            }

            fn store(
                &mut self,
                n: i128,
                render: impl FnOnce() -> String,
            ) -> Result<(), ValueError> {
                if n >= i128::from(<$repr>::MIN) && n <= i128::from(<$repr>::MAX) {
                    self.value = Some(n as $repr);
                    Ok(())
                } else {
                    Err(ValueError::Range {
                        target: $edm_name,
                        given: render(),
                    })
                }
            }
        }

        impl Value for $name {
            fn type_name(&self) -> &'static str {
                $edm_name
            }

            fn is_null(&self) -> bool {
                self.value.is_none()
            }

            fn to_text(&self) -> Result<String, ValueError> {
                self.value.map(|v| v.to_string()).ok_or(ValueError::Null)
            }
        }

        impl From<$repr> for $name {
            fn from(v: $repr) -> Self {
                Self { value: Some(v) }
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut p = PrimitiveParser::new(s);
                let v = p.$production()?;
                p.require_end()?;
                Ok(v)
            }
        }
    };
}

integer_value! {
    /// An `Edm.SByte` value, range `[-128, 127]`.
    SByteValue, i8, "SByte", require_sbyte_value
}

integer_value! {
    /// An `Edm.Byte` value, range `[0, 255]`.
    ByteValue, u8, "Byte", require_byte_value
}

integer_value! {
    /// An `Edm.Int16` value, range `[-32768, 32767]`.
    Int16Value, i16, "Int16", require_int16_value
}

integer_value! {
    /// An `Edm.Int32` value, range `[-2147483648, 2147483647]`.
    Int32Value, i32, "Int32", require_int32_value
}

integer_value! {
    /// An `Edm.Int64` value, range
    /// `[-9223372036854775808, 9223372036854775807]`.
    Int64Value, i64, "Int64", require_int64_value
}

/// An `Edm.Single` value.
///
/// Stored at `f32` width. Setting a magnitude beyond
/// ±(2−2⁻²³)·2¹²⁷ saturates to the signed infinity instead of failing,
/// matching IEEE 754 overflow; NaN and infinite inputs pass through.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SingleValue {
    value: Option<f32>,
}

impl SingleValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<f32> {
        self.value
    }

    /// Sets from a native input. Never fails on range.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for a non-numeric input.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Integer(n) => {
                self.value = Some(n as f32);
                Ok(())
            }
            Native::Float(f) => {
                self.value = Some(f as f32);
                Ok(())
            }
            Native::Decimal(d) => {
                self.value = Some(decimal_as_f64(d) as f32);
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Single",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for SingleValue {
    fn type_name(&self) -> &'static str {
        "Single"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self.value {
            Some(v) => Ok(render_f64(v.into())),
            None => Err(ValueError::Null),
        }
    }
}

impl From<f32> for SingleValue {
    fn from(v: f32) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for SingleValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_single_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.Double` value.
///
/// Stored at `f64` width with the same saturating contract as
/// [`SingleValue`]; since every host float is already a double, only
/// literals with out-of-range exponents actually saturate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleValue {
    value: Option<f64>,
}

impl DoubleValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Sets from a native input. Never fails on range.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for a non-numeric input.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Integer(n) => {
                self.value = Some(n as f64);
                Ok(())
            }
            Native::Float(f) => {
                self.value = Some(f);
                Ok(())
            }
            Native::Decimal(d) => {
                self.value = Some(decimal_as_f64(d));
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Double",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for DoubleValue {
    fn type_name(&self) -> &'static str {
        "Double"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self.value {
            Some(v) => Ok(render_f64(v)),
            None => Err(ValueError::Null),
        }
    }
}

impl From<f64> for DoubleValue {
    fn from(v: f64) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for DoubleValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_double_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.Decimal` value.
///
/// Fixed 96-bit mantissa with scale 0–28. Construction from a literal
/// keeps the exact source digits, so trailing zeros survive a
/// round-trip. A float converts by its shortest decimal representation;
/// a float outside the decimal range is a range error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalValue {
    value: Option<Decimal>,
}

impl DecimalValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        self.value
    }

    /// Sets from a native input.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for a non-numeric input,
    /// [`ValueError::Range`] for a value outside the decimal domain
    /// (an integer beyond 96 bits, a non-finite or out-of-range float).
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Integer(n) => match Decimal::from_i128(n) {
                Some(d) => {
                    self.value = Some(d);
                    Ok(())
                }
                None => Err(ValueError::Range {
                    target: "Decimal",
                    given: n.to_string(),
                }),
            },
            Native::Float(f) => match Decimal::from_f64(f) {
                Some(d) => {
                    self.value = Some(d);
                    Ok(())
                }
                None => Err(ValueError::Range {
                    target: "Decimal",
                    given: render_f64(f),
                }),
            },
            Native::Decimal(d) => {
                self.value = Some(d);
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Decimal",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for DecimalValue {
    fn type_name(&self) -> &'static str {
        "Decimal"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        self.value.map(|v| v.to_string()).ok_or(ValueError::Null)
    }
}

impl From<Decimal> for DecimalValue {
    fn from(v: Decimal) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for DecimalValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_decimal_value()?;
        p.require_end()?;
        Ok(v)
    }
}
