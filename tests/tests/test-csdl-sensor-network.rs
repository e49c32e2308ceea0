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
//! Integration test of a sensor network vocabulary split over two
//! documents.

use nv_odata_core::PrimitiveKind;
use nv_odata_core::Value;
use nv_odata_model::Scale;
use nv_odata_tests::read;
use std::rc::Rc;

// The consuming document arrives first, so every Acme.Units reference
// is a forward reference.
const SENSORS: &str = r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.01">
  <edmx:Reference Uri="http://acme.example/units.xml">
    <edmx:Include Namespace="Acme.Units" Alias="U"/>
  </edmx:Reference>
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Acme.Sensors" Alias="Sensors">
      <EntityType Name="Sensor">
        <Key>
          <PropertyRef Name="Id"/>
        </Key>
        <Property Name="Id" Type="Edm.Guid" Nullable="false"/>
        <Property Name="Serial" Type="Acme.Units.SerialNumber"/>
        <Property Name="LastCalibrated" Type="Edm.DateTimeOffset" DefaultValue="2024-01-01T00:00:00Z"/>
        <NavigationProperty Name="Readings" Type="Collection(Acme.Sensors.Reading)"/>
      </EntityType>
      <EntityType Name="Reading">
        <Property Name="Taken" Type="Edm.DateTimeOffset" Nullable="false"/>
        <Property Name="Temp" Type="Acme.Units.Celsius" DefaultValue="20.5"/>
      </EntityType>
      <ComplexType Name="GeoPosition">
        <Property Name="Latitude" Type="Edm.Double" DefaultValue="0.0"/>
        <Property Name="Longitude" Type="Edm.Double" DefaultValue="0.0"/>
      </ComplexType>
      <EnumType Name="Status">
        <Member Name="Active" Value="1"/>
        <Member Name="Retired"/>
      </EnumType>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

const UNITS: &str = r#"<edmx:Edmx xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx" Version="4.01">
  <edmx:DataServices>
    <Schema xmlns="http://docs.oasis-open.org/odata/ns/edm" Namespace="Acme.Units" Alias="Units">
      <TypeDefinition Name="Celsius" UnderlyingType="Edm.Double" Precision="7" Scale="variable"/>
      <TypeDefinition Name="SerialNumber" UnderlyingType="Edm.String" MaxLength="32" Unicode="false"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

// Check document and namespace bookkeeping: both schemas land, every
// alias and include binds to the schema's handle, everything closes.
#[test]
fn namespaces_aliases_and_includes_all_bind() {
    let model = read(&[SENSORS, UNITS]);
    assert!(model.is_closed());
    assert_eq!(
        model.names().collect::<Vec<_>>(),
        vec!["Edm", "Acme.Sensors", "Sensors", "Acme.Units", "Units", "U"]
    );
    let sensors = model.get("Acme.Sensors").unwrap();
    assert!(Rc::ptr_eq(&sensors, &model.get("Sensors").unwrap()));
    let units = model.get("Acme.Units").unwrap();
    assert!(Rc::ptr_eq(&units, &model.get("Units").unwrap()));
    assert!(Rc::ptr_eq(&units, &model.get("U").unwrap()));
    assert!(sensors.borrow().is_closed());
    assert!(units.borrow().is_closed());
}

// Check the declared structure: structured types carry their implicit
// bases, the enum its underlying type, and nothing here is primitive.
#[test]
fn structured_types_carry_their_bases() {
    let model = read(&[SENSORS, UNITS]);
    let sensors = model.get("Acme.Sensors").unwrap();
    let sensors = sensors.borrow();
    assert_eq!(
        sensors.names().collect::<Vec<_>>(),
        vec!["Sensor", "Reading", "GeoPosition", "Status"]
    );
    let parent_of = |name: &str| {
        sensors
            .get(name)
            .and_then(|t| t.parent.as_ref())
            .map(ToString::to_string)
    };
    assert_eq!(parent_of("Sensor"), Some("Edm.EntityType".into()));
    assert_eq!(parent_of("Reading"), Some("Edm.EntityType".into()));
    assert_eq!(parent_of("GeoPosition"), Some("Edm.ComplexType".into()));
    assert_eq!(parent_of("Status"), Some("Edm.Int32".into()));
    for name in ["Sensor", "Reading", "GeoPosition", "Status"] {
        assert!(!sensors.get(name).unwrap().is_primitive(), "{name}");
    }
}

// Check the type definitions: underlying kind, facets, and a working
// value constructor at the end of the resolution chain.
#[test]
fn type_definitions_mint_usable_values() {
    let model = read(&[SENSORS, UNITS]);
    let units = model.get("Acme.Units").unwrap();
    let units = units.borrow();

    let celsius = units.get("Celsius").unwrap();
    assert!(celsius.is_primitive());
    assert_eq!(celsius.value_kind, Some(PrimitiveKind::Double));
    assert_eq!(
        celsius.qualified_name().map(|q| q.to_string()),
        Some("Acme.Units.Celsius".into())
    );
    let facets = celsius.facets.as_ref().unwrap();
    assert_eq!(facets.precision, Some(7));
    assert_eq!(facets.scale, Some(Scale::Variable));

    let serial = units.get("SerialNumber").unwrap();
    assert_eq!(serial.value_kind, Some(PrimitiveKind::String));
    let facets = serial.facets.as_ref().unwrap();
    assert_eq!(facets.max_length, Some(32));
    assert_eq!(facets.unicode, Some(false));

    let mut reading = celsius.new_value();
    assert_eq!(reading.kind(), Some(PrimitiveKind::Double));
    assert!(reading.is_null());
    reading.set(21.5).unwrap();
    assert_eq!(reading.to_text().unwrap(), "21.5");
}

// Check that feeding the documents in the opposite order resolves the
// same way; nothing depends on file order.
#[test]
fn document_order_does_not_matter() {
    let model = read(&[UNITS, SENSORS]);
    assert_eq!(model.len(), 6);
    let sensors = model.get("Acme.Sensors").unwrap();
    assert_eq!(sensors.borrow().len(), 4);
    let units = model.get("U").unwrap();
    assert_eq!(units.borrow().len(), 2);
}
