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

//! Deserialized CSDL document elements
//!
//! `De` structs mirror the XML structure one to one; attribute values
//! land in the validated name types, so a deserialized document
//! already satisfies the name grammar. [`CsdlDocument::parse`] adds
//! the structural checks the derive cannot express: the Version
//! attribute and the single-`DataServices` rule.
//!
//! References:
//! - OASIS OData 4.01 CSDL XML

use crate::csdl::CsdlError;
use crate::names::NamespaceName;
use crate::names::QualifiedName;
use crate::names::SimpleIdentifier;
use crate::names::TypeName;
use crate::types::Scale;
use crate::types::Srid;
use serde::Deserialize;

/// 3.1 Element edmx:Edmx
#[derive(Debug, Deserialize)]
pub struct DeEdmx {
    /// 3.1.1 Attribute Version
    /// The edmx:Edmx element MUST provide the value 4.0 or 4.01 for
    /// the Version attribute.
    #[serde(rename = "@Version")]
    pub version: String,
    /// Child elements of Edmx.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeEdmxItem>,
}

/// Child item of edmx:Edmx
#[derive(Debug, Deserialize)]
pub enum DeEdmxItem {
    /// edmx:Edmx element MUST contain a single direct child
    /// edmx:DataServices element.
    DataServices(DeDataServices),
    /// edmx:Edmx element contains zero or more edmx:Reference
    /// elements.
    Reference(DeReference),
}

/// 3.2 Element edmx:DataServices
#[derive(Debug, Deserialize)]
pub struct DeDataServices {
    /// edm:Schema elements which define the schemas of the document.
    #[serde(rename = "Schema", default)]
    pub schemas: Vec<DeSchema>,
}

/// 3.3 Element edmx:Reference
#[derive(Debug, Deserialize)]
pub struct DeReference {
    /// 3.3.1 Attribute Uri
    #[serde(rename = "@Uri")]
    pub uri: String,
    /// Child elements of Reference.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeReferenceItem>,
}

/// Child item of edmx:Reference
#[derive(Debug, Deserialize)]
pub enum DeReferenceItem {
    Include(DeInclude),
    IncludeAnnotations(DeIncludeAnnotations),
}

/// 3.4 Element edmx:Include
#[derive(Debug, Deserialize)]
pub struct DeInclude {
    /// 3.4.1 Attribute Namespace
    #[serde(rename = "@Namespace")]
    pub namespace: NamespaceName,
    /// 3.4.2 Attribute Alias
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
}

/// 3.5 Element edmx:IncludeAnnotations
#[derive(Debug, Deserialize)]
pub struct DeIncludeAnnotations {
    /// 3.5.1 Attribute `TermNamespace`
    #[serde(rename = "@TermNamespace")]
    pub term_namespace: NamespaceName,
    /// 3.5.2 Attribute Qualifier
    #[serde(rename = "@Qualifier")]
    pub qualifier: Option<SimpleIdentifier>,
    /// 3.5.3 Attribute `TargetNamespace`
    #[serde(rename = "@TargetNamespace")]
    pub target_namespace: Option<NamespaceName>,
}

/// 5.1 Element edm:Schema
#[derive(Debug, Deserialize)]
pub struct DeSchema {
    /// 5.1.1 Attribute Namespace
    #[serde(rename = "@Namespace")]
    pub namespace: NamespaceName,
    /// 5.1.2 Attribute Alias
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
    /// Child elements of Schema.
    #[serde(rename = "$value", default)]
    pub items: Vec<DeSchemaItem>,
}

/// Child item of edm:Schema
#[derive(Debug, Deserialize)]
pub enum DeSchemaItem {
    EntityType(DeEntityType),
    ComplexType(DeComplexType),
    EnumType(DeEnumType),
    TypeDefinition(DeTypeDefinition),
}

/// 8.1 Element edm:EntityType
#[derive(Debug, Deserialize)]
pub struct DeEntityType {
    /// 8.1.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 8.1.2 Attribute `BaseType`
    #[serde(rename = "@BaseType")]
    pub base_type: Option<QualifiedName>,
    /// Items of edm:EntityType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeStructuredItem>,
}

/// 9.1 Element edm:ComplexType
#[derive(Debug, Deserialize)]
pub struct DeComplexType {
    /// 9.1.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 9.1.2 Attribute `BaseType`
    #[serde(rename = "@BaseType")]
    pub base_type: Option<QualifiedName>,
    /// Items of edm:ComplexType
    #[serde(rename = "$value", default)]
    pub items: Vec<DeStructuredItem>,
}

/// Child item of edm:EntityType or edm:ComplexType
#[derive(Debug, Deserialize)]
pub enum DeStructuredItem {
    Key(DeKey),
    Property(DeProperty),
    NavigationProperty(DeNavigationProperty),
}

/// 8.2 Element edm:Key
#[derive(Debug, Deserialize)]
pub struct DeKey {
    /// 8.3 Element edm:PropertyRef
    #[serde(rename = "PropertyRef", default)]
    pub refs: Vec<DePropertyRef>,
}

/// 8.3 Element edm:PropertyRef
#[derive(Debug, Deserialize)]
pub struct DePropertyRef {
    /// 8.3.1 Attribute Name
    /// A path, so not constrained to a simple identifier.
    #[serde(rename = "@Name")]
    pub name: String,
    /// 8.3.2 Attribute Alias
    #[serde(rename = "@Alias")]
    pub alias: Option<SimpleIdentifier>,
}

/// 6.1 Element edm:Property
#[derive(Debug, Deserialize)]
pub struct DeProperty {
    /// 6.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 6.1.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub type_name: TypeName,
    /// 6.2.1 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
    /// 6.2.2 Attribute `MaxLength`
    #[serde(rename = "@MaxLength")]
    pub max_length: Option<u32>,
    /// 6.2.3 Attribute `Precision`
    #[serde(rename = "@Precision")]
    pub precision: Option<u32>,
    /// 6.2.4 Attribute `Scale`
    #[serde(rename = "@Scale")]
    pub scale: Option<Scale>,
    /// 6.2.5 Attribute `Unicode`
    #[serde(rename = "@Unicode")]
    pub unicode: Option<bool>,
    /// 6.2.6 Attribute `SRID`
    #[serde(rename = "@SRID")]
    pub srid: Option<Srid>,
    /// 6.2.7 Attribute `DefaultValue`
    #[serde(rename = "@DefaultValue")]
    pub default_value: Option<String>,
}

/// 7.1 Element edm:NavigationProperty
#[derive(Debug, Deserialize)]
pub struct DeNavigationProperty {
    /// 7.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 7.1.2 Attribute `Type`
    #[serde(rename = "@Type")]
    pub type_name: TypeName,
    /// 7.1.3 Attribute `Nullable`
    #[serde(rename = "@Nullable")]
    pub nullable: Option<bool>,
}

/// 10.1 Element edm:EnumType
#[derive(Debug, Deserialize)]
pub struct DeEnumType {
    /// 10.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 10.1.2 Attribute `UnderlyingType`
    #[serde(rename = "@UnderlyingType")]
    pub underlying_type: Option<QualifiedName>,
    /// 10.1.3 Attribute `IsFlags`
    #[serde(rename = "@IsFlags")]
    pub is_flags: Option<bool>,
    /// 10.2 Element edm:Member
    #[serde(rename = "Member", default)]
    pub members: Vec<DeEnumMember>,
}

/// 10.2 Element edm:Member
#[derive(Debug, Deserialize)]
pub struct DeEnumMember {
    /// 10.2.1 Attribute Name
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 10.2.2 Attribute Value
    #[serde(rename = "@Value")]
    pub value: Option<i64>,
}

/// 11.1 Element edm:TypeDefinition
#[derive(Debug, Deserialize)]
pub struct DeTypeDefinition {
    /// 11.1.1 Attribute `Name`
    #[serde(rename = "@Name")]
    pub name: SimpleIdentifier,
    /// 11.1.2 Attribute `UnderlyingType`
    #[serde(rename = "@UnderlyingType")]
    pub underlying_type: QualifiedName,
    /// 6.2.2 Attribute `MaxLength`
    #[serde(rename = "@MaxLength")]
    pub max_length: Option<u32>,
    /// 6.2.3 Attribute `Precision`
    #[serde(rename = "@Precision")]
    pub precision: Option<u32>,
    /// 6.2.4 Attribute `Scale`
    #[serde(rename = "@Scale")]
    pub scale: Option<Scale>,
    /// 6.2.5 Attribute `Unicode`
    #[serde(rename = "@Unicode")]
    pub unicode: Option<bool>,
    /// 6.2.6 Attribute `SRID`
    #[serde(rename = "@SRID")]
    pub srid: Option<Srid>,
}

/// A structurally checked CSDL document, ready for the reader.
#[derive(Debug)]
pub struct CsdlDocument {
    pub references: Vec<DeReference>,
    pub schemas: Vec<DeSchema>,
}

impl CsdlDocument {
    /// # Errors
    ///
    /// XML deserialization, version and document-structure errors.
    pub fn parse(data: &str) -> Result<Self, CsdlError> {
        use quick_xml::de as quick_xml_de;
        quick_xml_de::from_str::<DeEdmx>(data)
            .map_err(CsdlError::XmlDeserialize)?
            .validate()
    }
}

impl DeEdmx {
    fn validate(self) -> Result<CsdlDocument, CsdlError> {
        if self.version != "4.0" && self.version != "4.01" {
            return Err(CsdlError::UnsupportedVersion(self.version));
        }
        let (services, references) =
            self.items
                .into_iter()
                .fold((Vec::new(), Vec::new()), |(mut dss, mut refs), v| {
                    match v {
                        DeEdmxItem::DataServices(v) => dss.push(v),
                        DeEdmxItem::Reference(v) => refs.push(v),
                    }
                    (dss, refs)
                });

        // This element MUST contain a single direct child
        // edmx:DataServices element.
        if services.len() > 1 {
            return Err(CsdlError::WrongDataServicesNumber);
        }
        let services = services
            .into_iter()
            .next()
            .ok_or(CsdlError::WrongDataServicesNumber)?;
        if services.schemas.is_empty() {
            return Err(CsdlError::NoSchemas);
        }

        Ok(CsdlDocument {
            references,
            schemas: services.schemas,
        })
    }
}
