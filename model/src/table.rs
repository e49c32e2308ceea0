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

//! Name tables with deferred lookup
//!
//! A [`NameTable`] maps validated names to declared items and lets
//! callers subscribe to names that have not been declared yet. CSDL
//! documents reference types before (or in another document than)
//! their declaration, so resolution is callback based:
//! - [`NameTable::declare`] binds a name once; redeclaration is an
//!   error
//! - [`NameTable::tell`] runs a callback when a name becomes known,
//!   immediately if it already is
//! - [`NameTable::close`] ends the declaration phase; waiting
//!   callbacks are told `None` and the table becomes read only
//!
//! Notes:
//! - Names are checked by the `check_name` function given at
//!   construction, so a table only ever holds grammatical names.
//! - Iteration follows declaration order.

use crate::names::NameError;
use indexmap::IndexMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::mem;

type Callback<V> = Box<dyn FnOnce(Option<&V>)>;

/// A declaration that a model or namespace table refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// The declaration phase has ended.
    Closed { table: String },
    /// The name is already bound in this table.
    Duplicate { table: String, name: String },
    /// Declarations cannot be removed.
    Undeclared { name: String },
    /// The name does not satisfy the table's grammar.
    InvalidName(NameError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Closed { table } => write!(f, "{table} is closed"),
            Self::Duplicate { table, name } => {
                write!(f, "{name} already declared in {table}")
            }
            Self::Undeclared { name } => write!(f, "can't undeclare {name}"),
            Self::InvalidName(err) => err.fmt(f),
        }
    }
}

impl From<NameError> for ModelError {
    fn from(err: NameError) -> Self {
        Self::InvalidName(err)
    }
}

/// An insertion-ordered map from checked names to declared items,
/// with subscription on names not yet declared.
pub struct NameTable<V> {
    name: String,
    check_name: fn(&str) -> Result<(), NameError>,
    closed: bool,
    entries: IndexMap<String, V>,
    pending: IndexMap<String, Vec<Callback<V>>>,
    close_hooks: Vec<Box<dyn FnOnce()>>,
}

impl<V> NameTable<V> {
    /// A new open table. `name` labels the table in error messages
    /// and `check_name` is the grammar its keys must satisfy.
    pub fn new(name: String, check_name: fn(&str) -> Result<(), NameError>) -> Self {
        Self {
            name,
            check_name,
            closed: false,
            entries: IndexMap::new(),
            pending: IndexMap::new(),
            close_hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds `name` to `value` and wakes any callbacks waiting on the
    /// name.
    ///
    /// # Errors
    ///
    /// [`ModelError::Closed`] after [`close`](Self::close),
    /// [`ModelError::Duplicate`] on rebinding and
    /// [`ModelError::InvalidName`] when the name fails the table's
    /// grammar.
    pub fn declare(&mut self, name: &str, value: V) -> Result<(), ModelError> {
        if self.closed {
            return Err(ModelError::Closed {
                table: self.name.clone(),
            });
        }
        if self.entries.contains_key(name) {
            return Err(ModelError::Duplicate {
                table: self.name.clone(),
                name: name.to_owned(),
            });
        }
        (self.check_name)(name)?;
        self.entries.insert(name.to_owned(), value);
        if let Some(callbacks) = self.pending.shift_remove(name) {
            let value = self.entries.get(name);
            for callback in callbacks {
                callback(value);
            }
        }
        Ok(())
    }

    /// Declarations are permanent; this always fails.
    ///
    /// # Errors
    ///
    /// [`ModelError::Undeclared`].
    pub fn undeclare(&mut self, name: &str) -> Result<(), ModelError> {
        Err(ModelError::Undeclared {
            name: name.to_owned(),
        })
    }

    /// Runs `callback` with the item bound to `name`: immediately if
    /// the name is declared, immediately with `None` if the table is
    /// already closed, otherwise when the name is declared or the
    /// table closes without it.
    pub fn tell(&mut self, name: &str, callback: impl FnOnce(Option<&V>) + 'static) {
        if let Some(value) = self.entries.get(name) {
            callback(Some(value));
        } else if self.closed {
            callback(None);
        } else {
            self.pending
                .entry(name.to_owned())
                .or_default()
                .push(Box::new(callback));
        }
    }

    /// Runs `callback` once the table closes, immediately if it
    /// already has.
    pub fn tell_close(&mut self, callback: impl FnOnce() + 'static) {
        if self.closed {
            callback();
        } else {
            self.close_hooks.push(Box::new(callback));
        }
    }

    /// Ends the declaration phase. Callbacks still waiting on
    /// undeclared names run with `None` first and close hooks run
    /// after, both in registration order. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        for (_, callbacks) in mem::take(&mut self.pending) {
            for callback in callbacks {
                callback(None);
            }
        }
        for hook in mem::take(&mut self.close_hooks) {
            hook();
        }
    }
}
