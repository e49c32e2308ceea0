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
//! Integration tests of model assembly and deferred lookup.

use nv_odata_core::PrimitiveKind;
use nv_odata_core::Value;
use nv_odata_model::EntityModel;
use nv_odata_model::ModelError;
use nv_odata_model::Namespace;
use nv_odata_model::NamespaceName;
use nv_odata_model::NominalType;
use nv_odata_model::SimpleIdentifier;
use std::cell::RefCell;
use std::rc::Rc;

fn namespace(name: &str) -> Namespace {
    Namespace::new(name.parse().unwrap())
}

fn shared(name: &str) -> Rc<RefCell<Namespace>> {
    Rc::new(RefCell::new(namespace(name)))
}

fn nominal(name: &str) -> NominalType {
    NominalType::new(name.parse().unwrap())
}

// Check that lookups registered before a declaration fire at the
// declaration, in registration order, and later lookups answer at
// once.
#[test]
fn waiting_lookups_fire_on_declaration() {
    let mut ns = namespace("Sensors");
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second"] {
        let log = Rc::clone(&log);
        ns.tell("Voltage", move |found| {
            log.borrow_mut()
                .push(format!("{tag}:{}", found.is_some()));
        });
    }
    assert!(log.borrow().is_empty());
    ns.declare_type(nominal("Voltage")).unwrap();
    let late = Rc::clone(&log);
    ns.tell("Voltage", move |found| {
        late.borrow_mut().push(format!("late:{}", found.is_some()));
    });
    assert_eq!(
        *log.borrow(),
        vec!["first:true", "second:true", "late:true"]
    );
}

// Check the closing protocol: lookups that never resolved report None
// in registration order, and only then the close hooks run.
#[test]
fn closing_settles_lookups_before_hooks() {
    let mut ns = namespace("Sensors");
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    for name in ["Gone", "AlsoGone"] {
        let log = Rc::clone(&log);
        ns.tell(name, move |found| {
            log.borrow_mut().push(format!("{name}:{}", found.is_some()));
        });
    }
    let hook = Rc::clone(&log);
    ns.tell_close(move || hook.borrow_mut().push("closed".into()));
    ns.close();
    assert_eq!(
        *log.borrow(),
        vec!["Gone:false", "AlsoGone:false", "closed"]
    );
    // a closed table answers immediately
    let late = Rc::clone(&log);
    ns.tell("Anything", move |found| {
        late.borrow_mut().push(format!("after:{}", found.is_some()));
    });
    assert_eq!(log.borrow().last().map(String::as_str), Some("after:false"));
}

// Check that a name is declared exactly once and the refusals name
// their table.
#[test]
fn names_are_declared_exactly_once() {
    let mut ns = namespace("Sensors");
    ns.declare_type(nominal("Temp")).unwrap();
    let duplicate = ns.declare_type(nominal("Temp")).unwrap_err();
    assert!(matches!(duplicate, ModelError::Duplicate { .. }));
    assert_eq!(
        duplicate.to_string(),
        "Temp already declared in namespace Sensors"
    );
    ns.close();
    assert!(matches!(
        ns.declare_type(nominal("Late")),
        Err(ModelError::Closed { .. })
    ));
}

// Check that the name grammar is enforced at the type boundary: a
// string that is no simple identifier never becomes one.
#[test]
fn name_grammar_is_enforced_at_construction() {
    for bad in ["", "1Bad", "has-hyphen", "has.dot", "has space"] {
        assert!(
            bad.parse::<SimpleIdentifier>().is_err(),
            "{bad:?} must not parse"
        );
    }
    for good in ["Plain", "_lead", "Näme", "digit9"] {
        assert!(
            good.parse::<SimpleIdentifier>().is_ok(),
            "{good:?} must parse"
        );
    }
    for bad in ["", "Tail.", ".Lead", "Two..Dots"] {
        assert!(
            bad.parse::<NamespaceName>().is_err(),
            "{bad:?} must not parse"
        );
    }
}

// Check the built-in namespace from the consumer side: pre-declared in
// every model, closed, and resolving qualified lookups at once.
#[test]
fn the_built_in_namespace_answers_immediately() {
    let mut model = EntityModel::new();
    assert_eq!(model.len(), 1);
    let edm = model.get("Edm").unwrap();
    assert!(edm.borrow().is_closed());
    assert_eq!(edm.borrow().len(), 36);

    let seen = Rc::new(RefCell::new(Vec::new()));
    for kind in PrimitiveKind::ALL {
        let log = Rc::clone(&seen);
        let reference = format!("Edm.{}", kind.name());
        model.qualified_tell(reference.parse().unwrap(), move |found| {
            let wired = found.and_then(|t| t.value_kind);
            log.borrow_mut().push(wired == Some(kind));
        });
    }
    assert_eq!(seen.borrow().len(), 16);
    assert!(seen.borrow().iter().all(|ok| *ok));

    // a resolved built-in mints working values
    let value = edm.borrow().get("Decimal").unwrap().new_value();
    assert_eq!(value.kind(), Some(PrimitiveKind::Decimal));
    assert!(value.is_null());
}

// Check a hand-assembled model: a reference registered before its
// namespace exists resolves once namespace and type both arrive.
#[test]
fn forward_references_resolve_in_a_hand_assembled_model() {
    let mut model = EntityModel::new();
    let resolved = Rc::new(RefCell::new(None));
    let log = Rc::clone(&resolved);
    model.qualified_tell("Measurement.Celsius".parse().unwrap(), move |found| {
        *log.borrow_mut() = found.map(|t| (t.value_kind, t.is_primitive()));
    });

    let measurement = shared("Measurement");
    model.declare_namespace(Rc::clone(&measurement)).unwrap();
    assert!(resolved.borrow().is_none());

    let celsius = NominalType::primitive(
        "Celsius".parse().unwrap(),
        Some(PrimitiveKind::Double),
    );
    measurement.borrow_mut().declare_type(celsius).unwrap();
    assert_eq!(*resolved.borrow(), Some((Some(PrimitiveKind::Double), true)));
}

// Check aliasing and the closing cascade over a whole model.
#[test]
fn closing_a_model_settles_every_namespace() {
    let mut model = EntityModel::new();
    let sensors = shared("Acme.Sensors");
    model.declare_namespace(Rc::clone(&sensors)).unwrap();
    model
        .declare_alias("Sens".parse().unwrap(), Rc::clone(&sensors))
        .unwrap();
    assert!(Rc::ptr_eq(
        &model.get("Sens").unwrap(),
        &model.get("Acme.Sensors").unwrap()
    ));

    let unresolved = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&unresolved);
    model.qualified_tell("Acme.Sensors.Gone".parse().unwrap(), move |found| {
        log.borrow_mut().push(("type", found.is_some()));
    });
    let log = Rc::clone(&unresolved);
    model.qualified_tell("Never.Declared".parse().unwrap(), move |found| {
        log.borrow_mut().push(("namespace", found.is_some()));
    });

    model.close();
    assert!(model.is_closed());
    assert!(sensors.borrow().is_closed());
    assert_eq!(
        *unresolved.borrow(),
        vec![("type", false), ("namespace", false)]
    );
    assert!(matches!(
        model.declare_namespace(shared("Late")),
        Err(ModelError::Closed { .. })
    ));
}
