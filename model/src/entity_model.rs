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

//! The entity model
//!
//! An [`EntityModel`] is a name table of shared [`Namespace`] handles
//! keyed by dotted namespace name. Aliases are second keys bound to
//! the same handle. Every model starts with [`Edm`](crate::edm::edm)
//! pre-declared, so `Edm`-qualified lookups resolve immediately and
//! `Edm` can never be redefined or aliased over.

use crate::edm::edm;
use crate::names::NamespaceName;
use crate::names::QualifiedName;
use crate::names::SimpleIdentifier;
use crate::namespace::Namespace;
use crate::table::ModelError;
use crate::table::NameTable;
use crate::types::NominalType;
use std::cell::RefCell;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::rc::Rc;

pub struct EntityModel {
    table: NameTable<Rc<RefCell<Namespace>>>,
}

impl EntityModel {
    /// An open model holding only the built-in `Edm` namespace.
    #[must_use]
    pub fn new() -> Self {
        let mut table = NameTable::new("entity model".into(), NamespaceName::check);
        // a fresh open table cannot refuse its first declaration
        table.declare("Edm", edm()).expect("Edm pre-declaration");
        Self { table }
    }

    /// Declares a namespace under its dotted name.
    ///
    /// # Errors
    ///
    /// The table's [`ModelError`] cases.
    pub fn declare_namespace(&mut self, handle: Rc<RefCell<Namespace>>) -> Result<(), ModelError> {
        let key = handle.borrow().name().as_str().to_owned();
        self.table.declare(&key, handle)
    }

    /// Declares a second key for an already shared namespace handle.
    ///
    /// # Errors
    ///
    /// The table's [`ModelError`] cases; aliasing `Edm` collides with
    /// the pre-declared entry.
    pub fn declare_alias(
        &mut self,
        alias: SimpleIdentifier,
        handle: Rc<RefCell<Namespace>>,
    ) -> Result<(), ModelError> {
        self.table.declare(alias.as_str(), handle)
    }

    /// A cloned handle to the namespace (or alias) `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<RefCell<Namespace>>> {
        self.table.get(name).map(Rc::clone)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// See [`NameTable::tell`].
    pub fn tell(
        &mut self,
        name: &str,
        callback: impl FnOnce(Option<&Rc<RefCell<Namespace>>>) + 'static,
    ) {
        self.table.tell(name, callback);
    }

    /// See [`NameTable::tell_close`].
    pub fn tell_close(&mut self, callback: impl FnOnce() + 'static) {
        self.table.tell_close(callback);
    }

    /// Two-stage deferred lookup: waits for the namespace, then for
    /// the type inside it. An unresolvable namespace or type reports
    /// `None`, at the latest when the relevant table closes.
    pub fn qualified_tell(
        &mut self,
        qname: QualifiedName,
        callback: impl FnOnce(Option<&NominalType>) + 'static,
    ) {
        let name = qname.name().as_str().to_owned();
        self.table
            .tell(qname.namespace().as_str(), move |found| match found {
                Some(handle) => handle.borrow_mut().tell(&name, callback),
                None => callback(None),
            });
    }

    /// Closes every declared namespace in declaration order, then the
    /// model's own table.
    pub fn close(&mut self) {
        let handles: Vec<Rc<RefCell<Namespace>>> = self.table.values().map(Rc::clone).collect();
        for handle in handles {
            handle.borrow_mut().close();
        }
        self.table.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.table.is_closed()
    }
}

impl Debug for EntityModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EntityModel")
            .field("names", &self.table.names().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for EntityModel {
    fn default() -> Self {
        Self::new()
    }
}
