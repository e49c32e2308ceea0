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

//! CSDL reader.
//!
//! Turns CSDL XML documents into a populated
//! [`EntityModel`](crate::EntityModel). Reading is two-phase per the
//! multi-document nature of CSDL: [`CsdlReader::add_document`] takes
//! any number of documents in any order, deferring cross-document
//! references, and [`CsdlReader::finish`] closes the model and
//! reports everything that never resolved.

/// Deserialized document elements.
pub mod elements;

/// The model-building reader.
pub mod reader;

pub use elements::CsdlDocument;
pub use reader::CsdlReader;

use crate::names::NamespaceName;
use crate::table::ModelError;
use nv_odata_core::ValueError;
use quick_xml::DeError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// CSDL reading errors.
#[derive(Debug)]
pub enum CsdlError {
    /// XML deserialization error.
    XmlDeserialize(DeError),
    /// 3.1.1: the Version attribute is not 4.0 or 4.01.
    UnsupportedVersion(String),
    /// Invalid number of `DataServices`.
    WrongDataServicesNumber,
    /// `DataServices` without a single Schema.
    NoSchemas,
    /// A declaration the model refused, with the schema it came from.
    Model {
        schema: NamespaceName,
        source: ModelError,
    },
    /// A qualified reference that never resolved.
    UnresolvedReference {
        schema: NamespaceName,
        name: String,
    },
    /// An `Edm`-qualified reference to a type `Edm` does not declare.
    UnknownEdmType {
        schema: NamespaceName,
        name: String,
    },
    /// A `DefaultValue` the property's primitive kind rejected.
    InvalidDefault {
        schema: NamespaceName,
        property: String,
        value: String,
        source: ValueError,
    },
    /// An edmx:Include whose namespace no document declared.
    UnresolvedInclude { namespace: NamespaceName },
}

impl Display for CsdlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::XmlDeserialize(err) => write!(f, "XML error: {err}"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported CSDL version {version}")
            }
            Self::WrongDataServicesNumber => {
                f.write_str("expected exactly one DataServices element")
            }
            Self::NoSchemas => f.write_str("expected at least one Schema element"),
            Self::Model { schema, source } => write!(f, "schema {schema}: {source}"),
            Self::UnresolvedReference { schema, name } => {
                write!(f, "schema {schema}: unresolved reference to {name}")
            }
            Self::UnknownEdmType { schema, name } => {
                write!(f, "schema {schema}: unknown built-in type {name}")
            }
            Self::InvalidDefault {
                schema,
                property,
                value,
                source,
            } => write!(
                f,
                "schema {schema}: invalid default value {value:?} for {property}: {source}"
            ),
            Self::UnresolvedInclude { namespace } => {
                write!(f, "included namespace {namespace} was never declared")
            }
        }
    }
}
