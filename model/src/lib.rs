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

//! Entity data model of the OData protocol
//!
//! Namespaces, nominal types and the CSDL reader that populates them:
//! - [`NameTable`]: write-once name binding with deferred lookup, the
//!   engine behind forward references
//! - [`Namespace`] and [`EntityModel`]: the two table kinds, plus the
//!   built-in [`edm()`](crate::edm::edm) namespace
//! - [`NominalType`]: any declarable type, from `Edm.Int32` to a
//!   schema-defined entity type
//! - [`CsdlReader`]: turns CSDL XML documents into a populated model
//!
//! Notes:
//! - Documents may arrive in any order; references across documents
//!   resolve through deferred lookup and unresolved ones are reported
//!   when the model closes.
//! - Name grammar is enforced at construction: a name type in hand is
//!   always well formed.
//!
//! # Examples
//!
//! ```rust
//! use nv_odata_model::CsdlReader;
//! use nv_odata_core::PrimitiveKind;
//!
//! let mut reader = CsdlReader::new();
//! reader.add_document(
//!     r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
//!   <edmx:DataServices>
//!     <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Sensors">
//!       <TypeDefinition Name="Celsius" UnderlyingType="Edm.Double"/>
//!     </Schema>
//!   </edmx:DataServices>
//! </edmx:Edmx>"#,
//! )?;
//! let model = reader.finish().expect("a valid model");
//! let sensors = model.get("Sensors").expect("declared namespace");
//! let sensors = sensors.borrow();
//! let celsius = sensors.get("Celsius").expect("declared type");
//! assert_eq!(celsius.value_kind, Some(PrimitiveKind::Double));
//! assert_eq!(
//!     celsius.qualified_name().map(|q| q.to_string()),
//!     Some("Sensors.Celsius".into())
//! );
//! # Ok::<(), nv_odata_model::CsdlError>(())
//! ```
//!
//! References:
//! - OASIS OData Version 4.01 Part 1: Protocol
//! - OASIS OData CSDL XML Representation Version 4.01

pub mod commands;
pub mod csdl;
pub mod edm;
pub mod entity_model;
pub mod names;
pub mod namespace;
pub mod table;
pub mod types;

pub use crate::csdl::CsdlDocument;
pub use crate::csdl::CsdlError;
pub use crate::csdl::CsdlReader;
pub use crate::edm::edm;
pub use crate::entity_model::EntityModel;
pub use crate::names::NameError;
pub use crate::names::NamespaceName;
pub use crate::names::QualifiedName;
pub use crate::names::SimpleIdentifier;
pub use crate::names::TypeName;
pub use crate::namespace::Namespace;
pub use crate::table::ModelError;
pub use crate::table::NameTable;
pub use crate::types::Facets;
pub use crate::types::NominalType;
pub use crate::types::Scale;
pub use crate::types::Srid;
