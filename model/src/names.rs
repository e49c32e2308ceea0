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

//! Types defined in 17 Attribute Values
//!
//! Validated newtypes for the CSDL name grammar. Construction is the
//! only way in, so a held name is always well formed:
//! - [`SimpleIdentifier`]: one Unicode identifier, at most 128
//!   characters
//! - [`NamespaceName`]: dot-joined identifiers, at most 511 characters
//! - [`QualifiedName`]: namespace plus identifier, split at the last
//!   dot
//! - [`TypeName`]: a qualified name, bare or wrapped in
//!   `Collection(…)`
//!
//! References:
//! - OASIS OData 4.01 CSDL, 17 Attribute Values

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::Error as DeError;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

/// Start: letter, letter-number or underscore. Continuation adds
/// digits, combining marks, connector punctuation and format
/// characters.
static SIMPLE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Pc}\p{Cf}]*\z")
        .expect("identifier pattern")
});

const MAX_IDENTIFIER_CHARS: usize = 128;
const MAX_NAMESPACE_CHARS: usize = 511;

/// A name that does not satisfy the grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameError {
    InvalidSimpleIdentifier(String),
    InvalidNamespaceName(String),
    InvalidQualifiedName(String),
    InvalidTypeName(String),
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidSimpleIdentifier(id) => write!(f, "invalid simple identifier {id}"),
            Self::InvalidNamespaceName(id) => write!(f, "invalid namespace name {id}"),
            Self::InvalidQualifiedName(id) => write!(f, "invalid qualified name {id}"),
            Self::InvalidTypeName(id) => write!(f, "invalid type name {id}"),
        }
    }
}

/// 17.2 `SimpleIdentifier`
#[derive(Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct SimpleIdentifier(String);

impl SimpleIdentifier {
    /// Validates without constructing; name tables use this as their
    /// key check.
    ///
    /// # Errors
    ///
    /// [`NameError::InvalidSimpleIdentifier`].
    pub fn check(s: &str) -> Result<(), NameError> {
        if SIMPLE_IDENTIFIER.is_match(s) && s.chars().count() <= MAX_IDENTIFIER_CHARS {
            Ok(())
        } else {
            Err(NameError::InvalidSimpleIdentifier(s.into()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SimpleIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SimpleIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl FromStr for SimpleIdentifier {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::check(s)?;
        Ok(Self(s.into()))
    }
}

impl<'de> Deserialize<'de> for SimpleIdentifier {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct SiVisitor {}
        impl Visitor<'_> for SiVisitor {
            type Value = SimpleIdentifier;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("SimpleIdentifier string")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(DeError::custom)
            }
        }

        de.deserialize_string(SiVisitor {})
    }
}

/// 17.1 `Namespace`
///
/// Stored in the dotted form; the dotted string is also the model
/// table key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamespaceName(String);

impl NamespaceName {
    /// Validates without constructing.
    ///
    /// # Errors
    ///
    /// [`NameError::InvalidNamespaceName`].
    pub fn check(s: &str) -> Result<(), NameError> {
        let well_formed = !s.is_empty()
            && s.chars().count() <= MAX_NAMESPACE_CHARS
            && s.split('.').all(|part| SimpleIdentifier::check(part).is_ok());
        if well_formed {
            Ok(())
        } else {
            Err(NameError::InvalidNamespaceName(s.into()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated identifier segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// True for the reserved built-in namespace.
    #[must_use]
    pub fn is_edm(&self) -> bool {
        self.0 == "Edm"
    }
}

impl AsRef<str> for NamespaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for NamespaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

impl FromStr for NamespaceName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::check(s)?;
        Ok(Self(s.into()))
    }
}

impl From<SimpleIdentifier> for NamespaceName {
    fn from(id: SimpleIdentifier) -> Self {
        Self(id.0)
    }
}

impl<'de> Deserialize<'de> for NamespaceName {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct NsVisitor {}
        impl Visitor<'_> for NsVisitor {
            type Value = NamespaceName;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("Namespace string")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(DeError::custom)
            }
        }

        de.deserialize_string(NsVisitor {})
    }
}

/// 17.3 `QualifiedName`
///
/// The split is at the last dot, so `My.Schema.Type` is the name
/// `Type` in the namespace `My.Schema`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    namespace: NamespaceName,
    name: SimpleIdentifier,
}

impl QualifiedName {
    #[must_use]
    pub fn new(namespace: NamespaceName, name: SimpleIdentifier) -> Self {
        Self { namespace, name }
    }

    #[must_use]
    pub fn namespace(&self) -> &NamespaceName {
        &self.namespace
    }

    #[must_use]
    pub fn name(&self) -> &SimpleIdentifier {
        &self.name
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl FromStr for QualifiedName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .rfind('.')
            .ok_or_else(|| NameError::InvalidQualifiedName(s.into()))?;
        let namespace = NamespaceName::from_str(&s[..split])
            .map_err(|_| NameError::InvalidQualifiedName(s.into()))?;
        let name = SimpleIdentifier::from_str(&s[split + 1..])
            .map_err(|_| NameError::InvalidQualifiedName(s.into()))?;
        Ok(Self { namespace, name })
    }
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct QnVisitor {}
        impl Visitor<'_> for QnVisitor {
            type Value = QualifiedName;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("QualifiedName string")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(DeError::custom)
            }
        }

        de.deserialize_string(QnVisitor {})
    }
}

/// 17.4 `TypeName`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeName {
    One(QualifiedName),
    CollectionOf(QualifiedName),
}

impl TypeName {
    /// The element type, with any `Collection(…)` wrapper removed.
    #[must_use]
    pub const fn qualified_name(&self) -> &QualifiedName {
        match self {
            Self::One(q) | Self::CollectionOf(q) => q,
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::CollectionOf(_))
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::One(q) => q.fmt(f),
            Self::CollectionOf(q) => write!(f, "Collection({q})"),
        }
    }
}

impl FromStr for TypeName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const COLLECTION_PREFIX: &str = "Collection(";
        const COLLECTION_SUFFIX: &str = ")";
        if s.starts_with(COLLECTION_PREFIX) && s.ends_with(COLLECTION_SUFFIX) {
            let qname = s[COLLECTION_PREFIX.len()..s.len() - COLLECTION_SUFFIX.len()]
                .parse()
                .map_err(|_| NameError::InvalidTypeName(s.into()))?;
            Ok(Self::CollectionOf(qname))
        } else {
            let qname = s.parse().map_err(|_| NameError::InvalidTypeName(s.into()))?;
            Ok(Self::One(qname))
        }
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct TnVisitor {}
        impl Visitor<'_> for TnVisitor {
            type Value = TypeName;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("type name string")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(DeError::custom)
            }
        }

        de.deserialize_string(TnVisitor {})
    }
}
