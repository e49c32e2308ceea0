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
//! Integration test of reference and default diagnostics: one read
//! pass reports every problem the documents have, in discovery order.

use nv_odata_core::ValueError;
use nv_odata_model::CsdlError;
use nv_odata_model::CsdlReader;
use nv_odata_tests::edmx;
use nv_odata_tests::read_issues;
use nv_odata_tests::schema;

const BROKEN: &str = r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.0">
  <edmx:Reference Uri="http://vendor.example/base.xml">
    <edmx:Include Namespace="Vendor"/>
  </edmx:Reference>
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Acme.Lab">
      <EntityType Name="Device" BaseType="Vendor.Base">
        <Property Name="Count" Type="Edm.Int128"/>
        <Property Name="Retries" Type="Edm.Int32" DefaultValue="many"/>
        <Property Name="Limit" Type="Acme.Lab.Quota" DefaultValue="fast"/>
      </EntityType>
      <TypeDefinition Name="Quota" UnderlyingType="Edm.Int32"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

// Check that every problem surfaces in one pass: built-in and default
// problems as the documents are read, duplicate declarations as they
// collide, and unresolved includes and references once the model
// closes.
#[test]
fn every_problem_is_reported_in_discovery_order() {
    let duplicate = edmx(&schema("Acme.Lab", r#"<EntityType Name="Probe"/>"#));
    let issues = read_issues(&[BROKEN, &duplicate]);
    assert_eq!(issues.len(), 6);

    assert!(matches!(
        &issues[0],
        CsdlError::UnknownEdmType { schema, name }
            if schema.as_str() == "Acme.Lab" && name == "Edm.Int128"
    ));
    assert_eq!(
        issues[0].to_string(),
        "schema Acme.Lab: unknown built-in type Edm.Int128"
    );
    // the Edm-typed default fails while its property is read
    assert!(matches!(
        &issues[1],
        CsdlError::InvalidDefault { property, value, source: ValueError::Syntax(_), .. }
            if property == "Retries" && value == "many"
    ));
    // the Quota-typed default fails when the definition arrives
    assert!(matches!(
        &issues[2],
        CsdlError::InvalidDefault { property, value, .. }
            if property == "Limit" && value == "fast"
    ));
    assert!(matches!(
        &issues[3],
        CsdlError::Model { schema, .. } if schema.as_str() == "Acme.Lab"
    ));
    assert!(matches!(
        &issues[4],
        CsdlError::UnresolvedInclude { namespace } if namespace.as_str() == "Vendor"
    ));
    assert!(matches!(
        &issues[5],
        CsdlError::UnresolvedReference { schema, name }
            if schema.as_str() == "Acme.Lab" && name == "Vendor.Base"
    ));
}

// Check that a default on a type without a literal form is left to the
// reference check instead of being guessed at.
#[test]
fn defaults_on_non_literal_types_are_left_alone() {
    let document = edmx(&schema(
        "Acme.Lab",
        r#"<EnumType Name="Mode">
  <Member Name="Fast" Value="1"/>
</EnumType>
<ComplexType Name="Settings">
  <Property Name="Startup" Type="Acme.Lab.Mode" DefaultValue="Fast"/>
</ComplexType>"#,
    ));
    let mut reader = CsdlReader::new();
    reader.add_document(&document).unwrap();
    assert!(reader.finish().is_ok());
}

// Check that document-fatal problems abort the document instead of
// accumulating: a foreign version and malformed XML.
#[test]
fn fatal_document_problems_fail_fast() {
    let mut reader = CsdlReader::new();
    let old = r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="3.0">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Legacy"/>
  </edmx:DataServices>
</edmx:Edmx>"#;
    assert!(matches!(
        reader.add_document(old),
        Err(CsdlError::UnsupportedVersion(v)) if v == "3.0"
    ));
    assert!(matches!(
        reader.add_document("<not-csdl/>"),
        Err(CsdlError::XmlDeserialize(_))
    ));
    // the reader survives rejected documents
    let good = edmx(&schema("Fresh", r#"<ComplexType Name="Empty"/>"#));
    reader.add_document(&good).unwrap();
    let model = reader.finish().unwrap();
    assert!(model.contains("Fresh"));
}
