// Copyright 2025 The sqltrace Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-memory implementation of the [`sqltrace_storage`] capability traits.
//!
//! This backend exists so that code layered on top of the storage traits can
//! be exercised without a running database. It keeps a table registry and row
//! counts, recognizes just enough DDL to maintain that registry, and treats
//! every other statement as opaque text.

mod database;
mod dataset;

pub use self::{
    database::{MemConnection, MemDatabase},
    dataset::MemDataset,
};

/// The database type identifier this backend reports
pub(crate) const DATABASE_TYPE: &str = "memory";
