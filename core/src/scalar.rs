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

//! `Edm.Boolean`, `Edm.String`, `Edm.Binary` and `Edm.Guid` values.
//!
//! Boolean is strict: only a native bool sets it, there is no numeric
//! truthiness. Binary renders as URL-safe base64 and accepts literals
//! with or without padding. Guid renders in the canonical lowercase
//! hyphenated form and parses only the `8-4-4-4-12` literal shape.

use crate::error::ValueError;
use crate::native::Native;
use crate::parser::PrimitiveParser;
use crate::value::Value;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::DecodePaddingMode;
use base64::engine::GeneralPurpose;
use base64::Engine;
use std::str::FromStr;
use uuid::Uuid;

/// URL-safe alphabet, padded on encode, padding optional on decode.
pub(crate) const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// An `Edm.Boolean` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BooleanValue {
    value: Option<bool>,
}

impl BooleanValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<bool> {
        self.value
    }

    /// Sets from a native bool.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for anything but a bool; numbers carry no
    /// truth value here.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Bool(b) => {
                self.value = Some(b);
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Boolean",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for BooleanValue {
    fn type_name(&self) -> &'static str {
        "Boolean"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self.value {
            Some(true) => Ok("true".to_owned()),
            Some(false) => Ok("false".to_owned()),
            None => Err(ValueError::Null),
        }
    }
}

impl From<bool> for BooleanValue {
    fn from(v: bool) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for BooleanValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_boolean_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.String` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringValue {
    value: Option<String>,
}

impl StringValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets from text, or from binary holding ASCII text.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for a non-text input,
    /// [`ValueError::Range`] for binary with bytes outside ASCII.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Text(s) => {
                self.value = Some(s);
                Ok(())
            }
            Native::Binary(b) => match String::from_utf8(b) {
                Ok(s) if s.is_ascii() => {
                    self.value = Some(s);
                    Ok(())
                }
                _ => Err(ValueError::Range {
                    target: "String",
                    given: "non-ascii binary".to_owned(),
                }),
            },
            other => Err(ValueError::Type {
                target: "String",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for StringValue {
    fn type_name(&self) -> &'static str {
        "String"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        self.value.clone().ok_or(ValueError::Null)
    }
}

impl From<&str> for StringValue {
    fn from(v: &str) -> Self {
        Self {
            value: Some(v.to_owned()),
        }
    }
}

impl From<String> for StringValue {
    fn from(v: String) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for StringValue {
    type Err = ValueError;

    /// The literal form of a string is the string itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// An `Edm.Binary` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryValue {
    value: Option<Vec<u8>>,
}

impl BinaryValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Sets from binary, or from text via its UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for other inputs.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Binary(b) => {
                self.value = Some(b);
                Ok(())
            }
            Native::Text(s) => {
                self.value = Some(s.into_bytes());
                Ok(())
            }
            other => Err(ValueError::Type {
                target: "Binary",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for BinaryValue {
    fn type_name(&self) -> &'static str {
        "Binary"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match &self.value {
            Some(b) => Ok(BASE64.encode(b)),
            None => Err(ValueError::Null),
        }
    }
}

impl From<Vec<u8>> for BinaryValue {
    fn from(v: Vec<u8>) -> Self {
        Self { value: Some(v) }
    }
}

impl From<&[u8]> for BinaryValue {
    fn from(v: &[u8]) -> Self {
        Self {
            value: Some(v.to_vec()),
        }
    }
}

impl FromStr for BinaryValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_binary_value()?;
        p.require_end()?;
        Ok(v)
    }
}

/// An `Edm.Guid` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuidValue {
    value: Option<Uuid>,
}

impl GuidValue {
    /// The null value.
    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Current payload, `None` when null.
    #[must_use]
    pub const fn value(&self) -> Option<Uuid> {
        self.value
    }

    /// Sets from a guid, from 16 raw bytes, or from 32 hex characters.
    ///
    /// # Errors
    ///
    /// [`ValueError::Type`] for other kinds, [`ValueError::Range`] for
    /// binary or text of the wrong shape.
    pub fn set(&mut self, value: impl Into<Native>) -> Result<(), ValueError> {
        match value.into() {
            Native::Null => {
                self.value = None;
                Ok(())
            }
            Native::Guid(u) => {
                self.value = Some(u);
                Ok(())
            }
            Native::Binary(b) => match Uuid::from_slice(&b) {
                Ok(u) => {
                    self.value = Some(u);
                    Ok(())
                }
                Err(_) => Err(ValueError::Range {
                    target: "Guid",
                    given: format!("{} byte binary", b.len()),
                }),
            },
            Native::Text(s) => {
                let parsed = if s.len() == 32 {
                    Uuid::try_parse(&s).ok()
                } else {
                    None
                };
                match parsed {
                    Some(u) => {
                        self.value = Some(u);
                        Ok(())
                    }
                    None => Err(ValueError::Range {
                        target: "Guid",
                        given: s,
                    }),
                }
            }
            other => Err(ValueError::Type {
                target: "Guid",
                given: other.kind(),
            }),
        }
    }

    /// Sets to null.
    pub fn set_null(&mut self) {
        self.value = None;
    }
}

impl Value for GuidValue {
    fn type_name(&self) -> &'static str {
        "Guid"
    }

    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn to_text(&self) -> Result<String, ValueError> {
        match self.value {
            Some(u) => Ok(u.hyphenated().to_string()),
            None => Err(ValueError::Null),
        }
    }
}

impl From<Uuid> for GuidValue {
    fn from(v: Uuid) -> Self {
        Self { value: Some(v) }
    }
}

impl FromStr for GuidValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut p = PrimitiveParser::new(s);
        let v = p.require_guid_value()?;
        p.require_end()?;
        Ok(v)
    }
}
