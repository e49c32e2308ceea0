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

//! Nominal types of the entity data model
//!
//! A [`NominalType`] is any named, declarable type: the abstract
//! bases, the built-in primitives and everything a schema defines.
//! What a type can do is carried as data rather than as a subtype
//! hierarchy:
//! - `value_kind` names the constructor used by
//!   [`NominalType::new_value`]; types without one (abstract bases,
//!   `Edm.Stream`, the geo stubs) construct the typeless null
//! - `facets` is present exactly on primitive types; the model stores
//!   facets but does not enforce them
//! - `parent` refers to the supertype by qualified name, never by
//!   owning pointer
//!
//! References:
//! - OASIS OData 4.01 CSDL XML, 6.2 Type Facet Attributes

use crate::names::NamespaceName;
use crate::names::QualifiedName;
use crate::names::SimpleIdentifier;
use nv_odata_core::PrimitiveKind;
use nv_odata_core::PrimitiveValue;
use serde::de::Error as DeError;
use serde::de::Visitor;
use serde::Deserialize;
use serde::Deserializer;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// 6.2.4 Attribute `Scale`
///
/// A non-negative digit count or the literal `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Variable,
    Fixed(u32),
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Variable => f.write_str("variable"),
            Self::Fixed(n) => n.fmt(f),
        }
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct ScaleVisitor {}
        impl Visitor<'_> for ScaleVisitor {
            type Value = Scale;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("non-negative integer or the string \"variable\"")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                if value == "variable" {
                    Ok(Scale::Variable)
                } else {
                    value.parse().map(Scale::Fixed).map_err(DeError::custom)
                }
            }
        }

        de.deserialize_string(ScaleVisitor {})
    }
}

/// 6.2.6 Attribute `SRID`
///
/// A spatial reference identifier or the literal `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Srid {
    Variable,
    Fixed(u32),
}

impl Display for Srid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Variable => f.write_str("variable"),
            Self::Fixed(n) => n.fmt(f),
        }
    }
}

impl<'de> Deserialize<'de> for Srid {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct SridVisitor {}
        impl Visitor<'_> for SridVisitor {
            type Value = Srid;

            fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
                formatter.write_str("non-negative integer or the string \"variable\"")
            }
            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                if value == "variable" {
                    Ok(Srid::Variable)
                } else {
                    value.parse().map(Srid::Fixed).map_err(DeError::custom)
                }
            }
        }

        de.deserialize_string(SridVisitor {})
    }
}

/// 6.2 Type Facet Attributes
///
/// Structural storage only; nothing in the model enforces them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Facets {
    pub max_length: Option<u32>,
    pub unicode: Option<bool>,
    pub precision: Option<u32>,
    pub scale: Option<Scale>,
    pub srid: Option<Srid>,
}

/// A named, declarable type of the entity data model.
pub struct NominalType {
    name: SimpleIdentifier,
    namespace: Option<NamespaceName>,
    /// Supertype by qualified name; `None` at the root of a hierarchy.
    pub parent: Option<QualifiedName>,
    /// Constructor kind for [`new_value`](Self::new_value); `None`
    /// for abstract and null-only types.
    pub value_kind: Option<PrimitiveKind>,
    /// Present exactly on primitive types.
    pub facets: Option<Facets>,
}

impl NominalType {
    /// An abstract structured type: no value kind, no facets.
    #[must_use]
    pub fn new(name: SimpleIdentifier) -> Self {
        Self {
            name,
            namespace: None,
            parent: None,
            value_kind: None,
            facets: None,
        }
    }

    /// A primitive type. `kind` is `None` for the null-only
    /// primitives (`Edm.Stream` and the geo family).
    #[must_use]
    pub fn primitive(name: SimpleIdentifier, kind: Option<PrimitiveKind>) -> Self {
        Self {
            name,
            namespace: None,
            parent: None,
            value_kind: kind,
            facets: Some(Facets::default()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &SimpleIdentifier {
        &self.name
    }

    /// The owning namespace, once declared.
    #[must_use]
    pub fn namespace(&self) -> Option<&NamespaceName> {
        self.namespace.as_ref()
    }

    /// `Namespace.Name`, available once declared.
    #[must_use]
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        self.namespace
            .as_ref()
            .map(|ns| QualifiedName::new(ns.clone(), self.name.clone()))
    }

    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.facets.is_some()
    }

    /// A null value of this type; the typeless null when the type has
    /// no value kind.
    #[must_use]
    pub fn new_value(&self) -> PrimitiveValue {
        self.value_kind
            .map_or(PrimitiveValue::Null, PrimitiveKind::new_value)
    }

    /// Set at declaration, exactly once.
    pub(crate) fn bind(&mut self, namespace: NamespaceName) {
        self.namespace = Some(namespace);
    }
}
