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

//! Builds an [`EntityModel`] from CSDL documents.
//!
//! Documents arrive in any order, so every qualified reference other
//! than `Edm.*` goes through the model's deferred lookup and is only
//! reported missing when [`CsdlReader::finish`] closes the model.
//! Issues accumulate instead of aborting: one read pass reports every
//! problem the documents have.

use crate::csdl::elements::CsdlDocument;
use crate::csdl::elements::DeEnumType;
use crate::csdl::elements::DeProperty;
use crate::csdl::elements::DeReferenceItem;
use crate::csdl::elements::DeSchema;
use crate::csdl::elements::DeSchemaItem;
use crate::csdl::elements::DeStructuredItem;
use crate::csdl::elements::DeTypeDefinition;
use crate::csdl::CsdlError;
use crate::edm::edm;
use crate::edm::edm_qualified;
use crate::entity_model::EntityModel;
use crate::names::NamespaceName;
use crate::names::QualifiedName;
use crate::names::SimpleIdentifier;
use crate::namespace::Namespace;
use crate::types::Facets;
use crate::types::NominalType;
use nv_odata_core::PrimitiveKind;
use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

struct PendingInclude {
    namespace: NamespaceName,
    alias: Option<SimpleIdentifier>,
}

pub struct CsdlReader {
    model: EntityModel,
    issues: Rc<RefCell<Vec<CsdlError>>>,
    pending_includes: Vec<PendingInclude>,
}

impl CsdlReader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: EntityModel::new(),
            issues: Rc::new(RefCell::new(Vec::new())),
            pending_includes: Vec::new(),
        }
    }

    /// Reads one document into the model.
    ///
    /// # Errors
    ///
    /// Only document-fatal problems: XML deserialization, version and
    /// document structure. Declaration and resolution issues
    /// accumulate for [`finish`](Self::finish).
    pub fn add_document(&mut self, data: &str) -> Result<(), CsdlError> {
        let document = CsdlDocument::parse(data)?;
        for reference in document.references {
            for item in reference.items {
                if let DeReferenceItem::Include(include) = item {
                    self.pending_includes.push(PendingInclude {
                        namespace: include.namespace,
                        alias: include.alias,
                    });
                }
            }
        }
        for schema in document.schemas {
            self.read_schema(schema);
        }
        self.bind_resolved_includes();
        Ok(())
    }

    /// Closes the model and hands it over, or the accumulated issues:
    /// unresolved references and includes surface here.
    ///
    /// # Errors
    ///
    /// Every issue the documents produced, in discovery order.
    pub fn finish(mut self) -> Result<EntityModel, Vec<CsdlError>> {
        self.bind_resolved_includes();
        for include in mem::take(&mut self.pending_includes) {
            self.issues.borrow_mut().push(CsdlError::UnresolvedInclude {
                namespace: include.namespace,
            });
        }
        self.model.close();
        let issues = mem::take(&mut *self.issues.borrow_mut());
        if issues.is_empty() {
            Ok(self.model)
        } else {
            Err(issues)
        }
    }

    fn read_schema(&mut self, schema: DeSchema) {
        let DeSchema {
            namespace,
            alias,
            items,
        } = schema;
        let handle = Rc::new(RefCell::new(Namespace::new(namespace.clone())));
        if let Err(source) = self.model.declare_namespace(Rc::clone(&handle)) {
            self.issues.borrow_mut().push(CsdlError::Model {
                schema: namespace,
                source,
            });
            return;
        }
        if let Some(alias) = alias {
            self.bind_alias(&namespace, alias, Rc::clone(&handle));
        }
        for item in items {
            match item {
                DeSchemaItem::EntityType(t) => {
                    self.read_structured(&handle, &namespace, t.name, t.base_type, "EntityType", t.items);
                }
                DeSchemaItem::ComplexType(t) => {
                    self.read_structured(&handle, &namespace, t.name, t.base_type, "ComplexType", t.items);
                }
                DeSchemaItem::EnumType(t) => self.read_enum(&handle, &namespace, t),
                DeSchemaItem::TypeDefinition(t) => {
                    self.read_type_definition(&handle, &namespace, t);
                }
            }
        }
    }

    /// EntityType and ComplexType differ only in their implicit base.
    fn read_structured(
        &mut self,
        handle: &Rc<RefCell<Namespace>>,
        schema: &NamespaceName,
        name: SimpleIdentifier,
        base: Option<QualifiedName>,
        implicit_base: &str,
        items: Vec<DeStructuredItem>,
    ) {
        let parent = base.unwrap_or_else(|| edm_qualified(implicit_base));
        self.check_reference(schema, &parent);
        let mut nominal = NominalType::new(name);
        nominal.parent = Some(parent);
        self.declare(handle, schema, nominal);
        for item in items {
            match item {
                // keys carry no type references
                DeStructuredItem::Key(_) => {}
                DeStructuredItem::Property(p) => self.read_property(schema, p),
                DeStructuredItem::NavigationProperty(p) => {
                    self.check_reference(schema, p.type_name.qualified_name());
                }
            }
        }
    }

    /// Members are structural only; the declared type records the
    /// underlying type as its parent.
    fn read_enum(
        &mut self,
        handle: &Rc<RefCell<Namespace>>,
        schema: &NamespaceName,
        de: DeEnumType,
    ) {
        let underlying = de.underlying_type.unwrap_or_else(|| edm_qualified("Int32"));
        self.check_reference(schema, &underlying);
        let mut nominal = NominalType::new(de.name);
        nominal.parent = Some(underlying);
        self.declare(handle, schema, nominal);
    }

    fn read_type_definition(
        &mut self,
        handle: &Rc<RefCell<Namespace>>,
        schema: &NamespaceName,
        de: DeTypeDefinition,
    ) {
        let DeTypeDefinition {
            name,
            underlying_type,
            max_length,
            precision,
            scale,
            unicode,
            srid,
        } = de;
        self.check_reference(schema, &underlying_type);
        let kind = if underlying_type.namespace().is_edm() {
            PrimitiveKind::from_name(underlying_type.name().as_str())
        } else {
            None
        };
        let mut nominal = NominalType::primitive(name, kind);
        nominal.parent = Some(underlying_type);
        nominal.facets = Some(Facets {
            max_length,
            unicode,
            precision,
            scale,
            srid,
        });
        self.declare(handle, schema, nominal);
    }

    fn read_property(&mut self, schema: &NamespaceName, property: DeProperty) {
        self.check_reference(schema, property.type_name.qualified_name());
        if let Some(default) = property.default_value {
            // collections have no literal default form
            if !property.type_name.is_collection() {
                let reference = property.type_name.qualified_name().clone();
                self.check_default(schema, property.name, reference, default);
            }
        }
    }

    fn declare(
        &mut self,
        handle: &Rc<RefCell<Namespace>>,
        schema: &NamespaceName,
        nominal: NominalType,
    ) {
        if let Err(source) = handle.borrow_mut().declare_type(nominal) {
            self.issues.borrow_mut().push(CsdlError::Model {
                schema: schema.clone(),
                source,
            });
        }
    }

    /// `Edm` is closed, so built-in references check immediately;
    /// everything else waits on the deferred lookup.
    fn check_reference(&mut self, schema: &NamespaceName, reference: &QualifiedName) {
        if reference.namespace().is_edm() {
            if !edm().borrow().contains(reference.name().as_str()) {
                self.issues.borrow_mut().push(CsdlError::UnknownEdmType {
                    schema: schema.clone(),
                    name: reference.to_string(),
                });
            }
        } else {
            let issues = Rc::clone(&self.issues);
            let schema = schema.clone();
            let name = reference.to_string();
            self.model.qualified_tell(reference.clone(), move |found| {
                if found.is_none() {
                    issues
                        .borrow_mut()
                        .push(CsdlError::UnresolvedReference { schema, name });
                }
            });
        }
    }

    /// An `Edm`-typed default converts at read time; a default on a
    /// schema-defined type waits for the definition and converts
    /// through its value kind. Types without a value kind admit no
    /// literal default and are left to the reference check.
    fn check_default(
        &mut self,
        schema: &NamespaceName,
        property: SimpleIdentifier,
        reference: QualifiedName,
        default: String,
    ) {
        if reference.namespace().is_edm() {
            if let Some(kind) = PrimitiveKind::from_name(reference.name().as_str()) {
                if let Err(source) = kind.parse(&default) {
                    self.issues.borrow_mut().push(CsdlError::InvalidDefault {
                        schema: schema.clone(),
                        property: property.as_str().to_owned(),
                        value: default,
                        source,
                    });
                }
            }
        } else {
            let issues = Rc::clone(&self.issues);
            let schema = schema.clone();
            self.model.qualified_tell(reference, move |found| {
                if let Some(kind) = found.and_then(|t| t.value_kind) {
                    if let Err(source) = kind.parse(&default) {
                        issues.borrow_mut().push(CsdlError::InvalidDefault {
                            schema,
                            property: property.as_str().to_owned(),
                            value: default,
                            source,
                        });
                    }
                }
            });
        }
    }

    /// The same alias may arrive again for the same namespace when
    /// several documents include one schema; only a conflicting
    /// binding is an issue.
    fn bind_alias(
        &mut self,
        schema: &NamespaceName,
        alias: SimpleIdentifier,
        handle: Rc<RefCell<Namespace>>,
    ) {
        if let Some(existing) = self.model.get(alias.as_str()) {
            if Rc::ptr_eq(&existing, &handle) {
                return;
            }
        }
        if let Err(source) = self.model.declare_alias(alias, handle) {
            self.issues.borrow_mut().push(CsdlError::Model {
                schema: schema.clone(),
                source,
            });
        }
    }

    fn bind_resolved_includes(&mut self) {
        for include in mem::take(&mut self.pending_includes) {
            match self.model.get(include.namespace.as_str()) {
                Some(handle) => {
                    if let Some(alias) = include.alias {
                        self.bind_alias(&include.namespace, alias, handle);
                    }
                }
                None => self.pending_includes.push(include),
            }
        }
    }
}

impl Default for CsdlReader {
    fn default() -> Self {
        Self::new()
    }
}
