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

//! 5.1 Element edm:Schema
//!
//! A [`Namespace`] is a name table of [`NominalType`]s keyed by
//! simple identifier. Declaring a type binds its namespace
//! back-reference, so a type belongs to exactly one namespace for its
//! whole life.

use crate::names::NamespaceName;
use crate::names::SimpleIdentifier;
use crate::table::ModelError;
use crate::table::NameTable;
use crate::types::NominalType;

pub struct Namespace {
    name: NamespaceName,
    table: NameTable<NominalType>,
}

impl Namespace {
    #[must_use]
    pub fn new(name: NamespaceName) -> Self {
        let table = NameTable::new(format!("namespace {name}"), SimpleIdentifier::check);
        Self { name, table }
    }

    #[must_use]
    pub fn name(&self) -> &NamespaceName {
        &self.name
    }

    /// Declares a type under its own name and binds its namespace
    /// back-reference. Taking the type by value makes redeclaring the
    /// same instance elsewhere impossible.
    ///
    /// # Errors
    ///
    /// The table's [`ModelError`] cases.
    pub fn declare_type(&mut self, mut nominal: NominalType) -> Result<(), ModelError> {
        nominal.bind(self.name.clone());
        let key = nominal.name().as_str().to_owned();
        self.table.declare(&key, nominal)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NominalType> {
        self.table.get(name)
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
    pub fn tell(&mut self, name: &str, callback: impl FnOnce(Option<&NominalType>) + 'static) {
        self.table.tell(name, callback);
    }

    /// See [`NameTable::tell_close`].
    pub fn tell_close(&mut self, callback: impl FnOnce() + 'static) {
        self.table.tell_close(callback);
    }

    pub fn close(&mut self) {
        self.table.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.table.is_closed()
    }
}
