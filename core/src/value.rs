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

//! The value protocol and the closed union over the literal-bearing
//! primitive types.
//!
//! [`PrimitiveKind`] enumerates the sixteen primitive types that have a
//! literal form. Types without one, the abstract types, `Edm.Stream`
//! and the geo family, have no kind; a property of such a type holds
//! the typeless [`PrimitiveValue::Null`].
//!
//! [`PrimitiveValue::cast`] follows the OData `cast` function: failures
//! produce null, never an error, with one exception carved out by this
//! implementation: a finite number never casts to an infinity, so a
//! `Double` beyond `Single` range casts to null rather than `INF`.

use crate::error::ValueError;
use crate::native::Native;
use crate::numeric::ByteValue;
use crate::numeric::DecimalValue;
use crate::numeric::DoubleValue;
use crate::numeric::Int16Value;
use crate::numeric::Int32Value;
use crate::numeric::Int64Value;
use crate::numeric::SByteValue;
use crate::numeric::SingleValue;
use crate::parser::PrimitiveParser;
use crate::scalar::BinaryValue;
use crate::scalar::BooleanValue;
use crate::scalar::GuidValue;
use crate::scalar::StringValue;
use crate::temporal::DateTimeOffsetValue;
use crate::temporal::DateValue;
use crate::temporal::DurationValue;
use crate::temporal::TimeOfDayValue;
use std::convert::TryFrom;

/// Behavior shared by every primitive value.
pub trait Value {
    /// The unqualified EDM type name, `Boolean`, `Int32` and so on.
    fn type_name(&self) -> &'static str;

    /// True when the value is null.
    fn is_null(&self) -> bool;

    /// The literal form of the value.
    ///
    /// # Errors
    ///
    /// [`ValueError::Null`]; null has no literal form.
    fn to_text(&self) -> Result<String, ValueError>;
}

/// A primitive type with a literal form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    TimeOfDay,
}

impl PrimitiveKind {
    /// Every kind, in name order.
    pub const ALL: [Self; 16] = [
        Self::Binary,
        Self::Boolean,
        Self::Byte,
        Self::Date,
        Self::DateTimeOffset,
        Self::Decimal,
        Self::Double,
        Self::Duration,
        Self::Guid,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::SByte,
        Self::Single,
        Self::String,
        Self::TimeOfDay,
    ];

    /// The unqualified EDM name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Date => "Date",
            Self::DateTimeOffset => "DateTimeOffset",
            Self::Decimal => "Decimal",
            Self::Double => "Double",
            Self::Duration => "Duration",
            Self::Guid => "Guid",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::SByte => "SByte",
            Self::Single => "Single",
            Self::String => "String",
            Self::TimeOfDay => "TimeOfDay",
        }
    }

    /// Looks a kind up by unqualified EDM name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// A new null value of this kind.
    #[must_use]
    pub fn new_value(self) -> PrimitiveValue {
        match self {
            Self::Binary => PrimitiveValue::Binary(BinaryValue::null()),
            Self::Boolean => PrimitiveValue::Boolean(BooleanValue::null()),
            Self::Byte => PrimitiveValue::Byte(ByteValue::null()),
            Self::Date => PrimitiveValue::Date(DateValue::null()),
            Self::DateTimeOffset => {
                PrimitiveValue::DateTimeOffset(DateTimeOffsetValue::null())
            }
            Self::Decimal => PrimitiveValue::Decimal(DecimalValue::null()),
            Self::Double => PrimitiveValue::Double(DoubleValue::null()),
            Self::Duration => PrimitiveValue::Duration(DurationValue::null()),
            Self::Guid => PrimitiveValue::Guid(GuidValue::null()),
            Self::Int16 => PrimitiveValue::Int16(Int16Value::null()),
            Self::Int32 => PrimitiveValue::Int32(Int32Value::null()),
            Self::Int64 => PrimitiveValue::Int64(Int64Value::null()),
            Self::SByte => PrimitiveValue::SByte(SByteValue::null()),
            Self::Single => PrimitiveValue::Single(SingleValue::null()),
            Self::String => PrimitiveValue::String(StringValue::null()),
            Self::TimeOfDay => PrimitiveValue::TimeOfDay(TimeOfDayValue::null()),
        }
    }

    /// Parses a complete literal of this kind.
    ///
    /// # Errors
    ///
    /// [`ValueError::Syntax`] when the source is not one whole literal
    /// of the kind's production.
    pub fn parse(self, src: &str) -> Result<PrimitiveValue, ValueError> {
        let mut p = PrimitiveParser::new(src);
        let value = match self {
            Self::Binary => PrimitiveValue::Binary(p.require_binary_value()?),
            Self::Boolean => PrimitiveValue::Boolean(p.require_boolean_value()?),
            Self::Byte => PrimitiveValue::Byte(p.require_byte_value()?),
            Self::Date => PrimitiveValue::Date(p.require_date_value()?),
            Self::DateTimeOffset => {
                PrimitiveValue::DateTimeOffset(p.require_date_time_offset_value()?)
            }
            Self::Decimal => PrimitiveValue::Decimal(p.require_decimal_value()?),
            Self::Double => PrimitiveValue::Double(p.require_double_value()?),
            Self::Duration => PrimitiveValue::Duration(p.require_duration_value()?),
            Self::Guid => PrimitiveValue::Guid(p.require_guid_value()?),
            Self::Int16 => PrimitiveValue::Int16(p.require_int16_value()?),
            Self::Int32 => PrimitiveValue::Int32(p.require_int32_value()?),
            Self::Int64 => PrimitiveValue::Int64(p.require_int64_value()?),
            Self::SByte => PrimitiveValue::SByte(p.require_sbyte_value()?),
            Self::Single => PrimitiveValue::Single(p.require_single_value()?),
            Self::String => PrimitiveValue::String(StringValue::from(src)),
            Self::TimeOfDay => PrimitiveValue::TimeOfDay(p.require_time_of_day_value()?),
        };
        if let Self::String = self {
            return Ok(value);
        }
        p.require_end()?;
        Ok(value)
    }
}

/// A primitive value of any kind, or the typeless null.
///
/// The typeless [`PrimitiveValue::Null`] stands for values of types
/// without a literal form; it reports type name `PrimitiveType`,
/// accepts no payload and casts to the null of any target kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PrimitiveValue {
    #[default]
    Null,
    Binary(BinaryValue),
    Boolean(BooleanValue),
    Byte(ByteValue),
    Date(DateValue),
    DateTimeOffset(DateTimeOffsetValue),
    Decimal(DecimalValue),
    Double(DoubleValue),
    Duration(DurationValue),
    Guid(GuidValue),
    Int16(Int16Value),
    Int32(Int32Value),
    Int64(Int64Value),
    SByte(SByteValue),
    Single(SingleValue),
    String(StringValue),
    TimeOfDay(TimeOfDayValue),
}

impl PrimitiveValue {
    /// The kind, `None` for the typeless null.
    #[must_use]
    pub const fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Null => None,
            Self::Binary(_) => Some(PrimitiveKind::Binary),
            Self::Boolean(_) => Some(PrimitiveKind::Boolean),
            Self::Byte(_) => Some(PrimitiveKind::Byte),
            Self::Date(_) => Some(PrimitiveKind::Date),
            Self::DateTimeOffset(_) => Some(PrimitiveKind::DateTimeOffset),
            Self::Decimal(_) => Some(PrimitiveKind::Decimal),
            Self::Double(_) => Some(PrimitiveKind::Double),
            Self::Duration(_) => Some(PrimitiveKind::Duration),
            Self::Guid(_) => Some(PrimitiveKind::Guid),
            Self::Int16(_) => Some(PrimitiveKind::Int16),
            Self::Int32(_) => Some(PrimitiveKind::Int32),
            Self::Int64(_) => Some(PrimitiveKind::Int64),
            Self::SByte(_) => Some(PrimitiveKind::SByte),
            Self::Single(_) => Some(PrimitiveKind::Single),
            Self::String(_) => Some(PrimitiveKind::String),
            Self::TimeOfDay(_) => Some(PrimitiveKind::TimeOfDay),
        }
    }

    /// Builds the value a native input most directly maps to.
    ///
    /// Bools become `Boolean`, text becomes `String`, floats become
    /// `Double`, integers become `Int64` when they fit and `Decimal`
    /// otherwise, and each temporal or identifier payload maps to its
    /// own kind. A native null becomes the typeless null.
    ///
    /// # Errors
    ///
    /// [`ValueError::Range`] for an integer beyond even the decimal
    /// coefficient.
    pub fn from_value(value: Native) -> Result<Self, ValueError> {
        match value {
            Native::Null => Ok(Self::Null),
            Native::Bool(b) => Ok(Self::Boolean(BooleanValue::from(b))),
            Native::Integer(n) => match i64::try_from(n) {
                Ok(fits) => Ok(Self::Int64(Int64Value::from(fits))),
                Err(_) => {
                    let mut wide = DecimalValue::null();
                    wide.set(n)?;
                    Ok(Self::Decimal(wide))
                }
            },
            Native::Float(f) => Ok(Self::Double(DoubleValue::from(f))),
            Native::Decimal(d) => Ok(Self::Decimal(DecimalValue::from(d))),
            Native::Binary(b) => Ok(Self::Binary(BinaryValue::from(b))),
            Native::Text(s) => Ok(Self::String(StringValue::from(s))),
            Native::Date(d) => Ok(Self::Date(DateValue::from(d))),
            Native::DateTimeOffset(dt) => {
                Ok(Self::DateTimeOffset(DateTimeOffsetValue::from(dt)))
            }
            Native::TimeOfDay(t) => Ok(Self::TimeOfDay(TimeOfDayValue::from(t))),
            Native::Duration(d) => Ok(Self::Duration(DurationValue::from(d))),
            Native::Guid(u) => Ok(Self::Guid(GuidValue::from(u))),
        }
    }

    /// Sets from a native input, dispatching to the held kind.
    ///
    /// # Errors
    ///
    /// Whatever the kind's own `set` raises; on the typeless null,
    /// [`ValueError::Type`] for anything but a native null.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        let value = value.into();
        match self {
            Self::Null => match value {
                Native::Null => Ok(()),
                other => Err(ValueError::Type {
                    target: "PrimitiveType",
                    given: other.kind(),
                }),
            },
            Self::Binary(v) => v.set(value),
            Self::Boolean(v) => v.set(value),
            Self::Byte(v) => v.set(value),
            Self::Date(v) => v.set(value),
            Self::DateTimeOffset(v) => v.set(value),
            Self::Decimal(v) => v.set(value),
            Self::Double(v) => v.set(value),
            Self::Duration(v) => v.set(value),
            Self::Guid(v) => v.set(value),
            Self::Int16(v) => v.set(value),
            Self::Int32(v) => v.set(value),
            Self::Int64(v) => v.set(value),
            Self::SByte(v) => v.set(value),
            Self::Single(v) => v.set(value),
            Self::String(v) => v.set(value),
            Self::TimeOfDay(v) => v.set(value),
        }
    }

    /// Sets to null, keeping the kind.
    pub fn set_null(&mut self) {
        match self {
            Self::Null => {}
            Self::Binary(v) => v.set_null(),
            Self::Boolean(v) => v.set_null(),
            Self::Byte(v) => v.set_null(),
            Self::Date(v) => v.set_null(),
            Self::DateTimeOffset(v) => v.set_null(),
            Self::Decimal(v) => v.set_null(),
            Self::Double(v) => v.set_null(),
            Self::Duration(v) => v.set_null(),
            Self::Guid(v) => v.set_null(),
            Self::Int16(v) => v.set_null(),
            Self::Int32(v) => v.set_null(),
            Self::Int64(v) => v.set_null(),
            Self::SByte(v) => v.set_null(),
            Self::Single(v) => v.set_null(),
            Self::String(v) => v.set_null(),
            Self::TimeOfDay(v) => v.set_null(),
        }
    }

    /// The payload as a native value, a native null when null.
    #[must_use]
    pub fn to_native(&self) -> Native {
        match self {
            Self::Null => Native::Null,
            Self::Binary(v) => v.value().map_or(Native::Null, Native::from),
            Self::Boolean(v) => v.value().map_or(Native::Null, Native::from),
            Self::Byte(v) => v.value().map_or(Native::Null, Native::from),
            Self::Date(v) => v.value().map_or(Native::Null, Native::from),
            Self::DateTimeOffset(v) => v.value().map_or(Native::Null, Native::from),
            Self::Decimal(v) => v.value().map_or(Native::Null, Native::from),
            Self::Double(v) => v.value().map_or(Native::Null, Native::from),
            Self::Duration(v) => v.value().map_or(Native::Null, Native::from),
            Self::Guid(v) => v.value().map_or(Native::Null, Native::from),
            Self::Int16(v) => v.value().map_or(Native::Null, Native::from),
            Self::Int32(v) => v.value().map_or(Native::Null, Native::from),
            Self::Int64(v) => v.value().map_or(Native::Null, Native::from),
            Self::SByte(v) => v.value().map_or(Native::Null, Native::from),
            Self::Single(v) => v.value().map_or(Native::Null, Native::from),
            Self::String(v) => v.value().map_or(Native::Null, Native::from),
            Self::TimeOfDay(v) => v.value().map_or(Native::Null, Native::from),
        }
    }

    /// Casts to a target kind the way the OData `cast` function does.
    ///
    /// A null source casts to the null of the target. A `String` target
    /// takes the source's literal form. Any other target is set from
    /// the source payload; whatever fails leaves the target null
    /// instead of raising. A finite number whose narrowing would
    /// saturate casts to null, so a cast never invents an infinity.
    #[must_use]
    pub fn cast(&self, target: PrimitiveKind) -> Self {
        let mut result = target.new_value();
        if self.is_null() {
            return result;
        }
        if target == PrimitiveKind::String {
            if let Ok(text) = self.to_text() {
                let _ = result.set(text);
            }
            return result;
        }
        let _ = result.set(self.to_native());
        if result.is_infinite_float() && !self.is_infinite_float() {
            result.set_null();
        }
        result
    }

    fn is_infinite_float(&self) -> bool {
        match self {
            Self::Single(v) => v.value().map_or(false, f32::is_infinite),
            Self::Double(v) => v.value().map_or(false, f64::is_infinite),
            _ => false,
        }
    }
}

impl Value for PrimitiveValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "PrimitiveType",
            Self::Binary(v) => v.type_name(),
            Self::Boolean(v) => v.type_name(),
            Self::Byte(v) => v.type_name(),
            Self::Date(v) => v.type_name(),
            Self::DateTimeOffset(v) => v.type_name(),
            Self::Decimal(v) => v.type_name(),
            Self::Double(v) => v.type_name(),
            Self::Duration(v) => v.type_name(),
            Self::Guid(v) => v.type_name(),
            Self::Int16(v) => v.type_name(),
            Self::Int32(v) => v.type_name(),
            Self::Int64(v) => v.type_name(),
            Self::SByte(v) => v.type_name(),
            Self::Single(v) => v.type_name(),
            Self::String(v) => v.type_name(),
            Self::TimeOfDay(v) => v.type_name(),
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Binary(v) => v.is_null(),
            Self::Boolean(v) => v.is_null(),
            Self::Byte(v) => v.is_null(),
            Self::Date(v) => v.is_null(),
            Self::DateTimeOffset(v) => v.is_null(),
            Self::Decimal(v) => v.is_null(),
            Self::Double(v) => v.is_null(),
            Self::Duration(v) => v.is_null(),
            Self::Guid(v) => v.is_null(),
            Self::Int16(v) => v.is_null(),
            Self::Int32(v) => v.is_null(),
            Self::Int64(v) => v.is_null(),
            Self::SByte(v) => v.is_null(),
            Self::Single(v) => v.is_null(),
            Self::String(v) => v.is_null(),
            Self::TimeOfDay(v) => v.is_null(),
        }
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self {
            Self::Null => Err(ValueError::Null),
            Self::Binary(v) => v.to_text(),
            Self::Boolean(v) => v.to_text(),
            Self::Byte(v) => v.to_text(),
            Self::Date(v) => v.to_text(),
            Self::DateTimeOffset(v) => v.to_text(),
            Self::Decimal(v) => v.to_text(),
            Self::Double(v) => v.to_text(),
            Self::Duration(v) => v.to_text(),
            Self::Guid(v) => v.to_text(),
            Self::Int16(v) => v.to_text(),
            Self::Int32(v) => v.to_text(),
            Self::Int64(v) => v.to_text(),
            Self::SByte(v) => v.to_text(),
            Self::Single(v) => v.to_text(),
            Self::String(v) => v.to_text(),
            Self::TimeOfDay(v) => v.to_text(),
        }
    }
}
