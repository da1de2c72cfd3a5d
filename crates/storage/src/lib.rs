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

//! The capability surface of a SQL storage layer.
//!
//! This crate defines what a database access layer looks like from the
//! outside: a [`Connection`] that runs raw SQL, a [`Dataset`] that runs
//! builder-level queries, and the value and error types both speak. Drivers
//! implement these traits; instrumentation wraps them without knowing which
//! driver sits underneath.

pub mod connection;
pub mod dataset;
pub mod errors;
pub mod value;

pub use self::{
    connection::Connection,
    dataset::Dataset,
    errors::StorageError,
    value::{Row, Value},
};
