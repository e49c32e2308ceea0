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

//! Native inputs accepted by primitive value `set` operations
//!
//! OData values are set from host-language values: a `bool`, an integer,
//! a float, a decimal, bytes, text or one of the temporal types. This
//! module gives that input space a closed tagged union so that `set` and
//! `PrimitiveValue::from_value` can dispatch on it exhaustively instead
//! of probing runtime types.

use rust_decimal::Decimal;
use time::Date;
use time::Duration;
use time::OffsetDateTime;
use time::Time;
use uuid::Uuid;

/// A host-language value offered to a primitive value.
///
/// `Integer` is deliberately wider than any Edm integer type so that the
/// `from_value` dispatcher can promote an out-of-`Int64` integer to
/// `Decimal` rather than reject it.
#[derive(Clone, Debug, PartialEq)]
pub enum Native {
    /// The null assignment; every target accepts it.
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    Decimal(Decimal),
    Binary(Vec<u8>),
    Text(String),
    Date(Date),
    DateTimeOffset(OffsetDateTime),
    TimeOfDay(Time),
    Duration(Duration),
    Guid(Uuid),
}

impl Native {
    /// Short kind name used in type-mismatch diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::Binary(_) => "binary",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DateTimeOffset(_) => "date-time",
            Self::TimeOfDay(_) => "time",
            Self::Duration(_) => "duration",
            Self::Guid(_) => "guid",
        }
    }
}

impl From<bool> for Native {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for Native {
    fn from(v: i8) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u8> for Native {
    fn from(v: u8) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i16> for Native {
    fn from(v: i16) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u16> for Native {
    fn from(v: u16) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i32> for Native {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u32> for Native {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i64> for Native {
    fn from(v: i64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u64> for Native {
    fn from(v: u64) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i128> for Native {
    fn from(v: i128) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Native {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Native {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for Native {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<Vec<u8>> for Native {
    fn from(v: Vec<u8>) -> Self {
        Self::Binary(v)
    }
}

impl From<&[u8]> for Native {
    fn from(v: &[u8]) -> Self {
        Self::Binary(v.to_vec())
    }
}

impl From<String> for Native {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Native {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Date> for Native {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<OffsetDateTime> for Native {
    fn from(v: OffsetDateTime) -> Self {
        Self::DateTimeOffset(v)
    }
}

impl From<Time> for Native {
    fn from(v: Time) -> Self {
        Self::TimeOfDay(v)
    }
}

impl From<Duration> for Native {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<Uuid> for Native {
    fn from(v: Uuid) -> Self {
        Self::Guid(v)
    }
}
