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

//! The built-in `Edm` namespace
//!
//! Built once per thread, closed before it is shared, and referenced
//! read only from every [`EntityModel`](crate::EntityModel). It holds:
//! - the abstract bases `PrimitiveType`, `ComplexType`, `EntityType`
//! - the sixteen literal-bearing primitive types, parented on
//!   `Edm.PrimitiveType`
//! - the null-only primitives: `Stream` and the `Geography`/`Geometry`
//!   family, each family root parenting its seven shapes

use crate::names::NamespaceName;
use crate::names::QualifiedName;
use crate::names::SimpleIdentifier;
use crate::namespace::Namespace;
use crate::types::NominalType;
use nv_odata_core::PrimitiveKind;
use std::cell::RefCell;
use std::rc::Rc;

const GEO_SHAPES: [&str; 7] = [
    "Point",
    "LineString",
    "Polygon",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
    "Collection",
];

thread_local! {
    static EDM: Rc<RefCell<Namespace>> = Rc::new(RefCell::new(build_edm()));
}

/// The shared handle to this thread's `Edm` namespace.
#[must_use]
pub fn edm() -> Rc<RefCell<Namespace>> {
    EDM.with(Rc::clone)
}

// Names below are program constants, so construction cannot fail and
// the expects are unreachable.

fn ident(name: &str) -> SimpleIdentifier {
    name.parse().expect("built-in identifier")
}

pub(crate) fn edm_qualified(name: &str) -> QualifiedName {
    QualifiedName::new(edm_namespace_name(), ident(name))
}

pub(crate) fn edm_namespace_name() -> NamespaceName {
    "Edm".parse().expect("built-in namespace name")
}

fn declare(ns: &mut Namespace, nominal: NominalType) {
    ns.declare_type(nominal).expect("built-in declaration");
}

fn build_edm() -> Namespace {
    let mut ns = Namespace::new(edm_namespace_name());

    declare(&mut ns, NominalType::primitive(ident("PrimitiveType"), None));
    declare(&mut ns, NominalType::new(ident("ComplexType")));
    declare(&mut ns, NominalType::new(ident("EntityType")));

    for kind in PrimitiveKind::ALL {
        let mut nominal = NominalType::primitive(ident(kind.name()), Some(kind));
        nominal.parent = Some(edm_qualified("PrimitiveType"));
        declare(&mut ns, nominal);
    }

    let mut stream = NominalType::primitive(ident("Stream"), None);
    stream.parent = Some(edm_qualified("PrimitiveType"));
    declare(&mut ns, stream);

    for family in ["Geography", "Geometry"] {
        let mut root = NominalType::primitive(ident(family), None);
        root.parent = Some(edm_qualified("PrimitiveType"));
        declare(&mut ns, root);
        for shape in GEO_SHAPES {
            let mut nominal = NominalType::primitive(ident(&format!("{family}{shape}")), None);
            nominal.parent = Some(edm_qualified(family));
            declare(&mut ns, nominal);
        }
    }

    ns.close();
    ns
}
