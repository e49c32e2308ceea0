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

//! Errors raised by primitive value operations

use crate::parser::SyntaxError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// Failure of a `set`, `from_str` or rendering operation on a
/// primitive value.
///
/// The distinctions matter to callers: a [`ValueError::Type`] means the
/// input was of a fundamentally wrong kind and the call site is buggy or
/// the document is structurally invalid; a [`ValueError::Range`] means
/// the kind was right but the value falls outside the target's domain
/// (integer widths reject it, `cast` swallows it into a null result);
/// a [`ValueError::Syntax`] carries the literal parser's diagnosis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A native input of the wrong kind for the target type.
    Type {
        /// Edm name of the target type.
        target: &'static str,
        /// Kind of the rejected native input.
        given: &'static str,
    },
    /// A native input of the right kind but outside the legal domain.
    Range {
        /// Edm name of the target type.
        target: &'static str,
        /// Rendering of the rejected input.
        given: String,
    },
    /// Literal text did not match the expected production.
    Syntax(SyntaxError),
    /// A null value has no text representation.
    Null,
}

impl Display for ValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Type { target, given } => write!(f, "can't set {target} from {given}"),
            Self::Range { target, given } => write!(f, "{given} out of range for {target}"),
            Self::Syntax(e) => e.fmt(f),
            Self::Null => write!(f, "null value has no text representation"),
        }
    }
}

impl From<SyntaxError> for ValueError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}
