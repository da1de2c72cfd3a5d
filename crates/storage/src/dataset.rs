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

use crate::{errors::StorageError, value::Row};

/// A builder-level query against the storage layer
///
/// A dataset carries the query state assembled so far (in particular the
/// source tables it reads from) and exposes the three execution primitives
/// every higher-level operation eventually funnels into.
pub trait Dataset {
    /// A stable identifier for the database engine owning this dataset
    fn database_type(&self) -> &str;

    /// The tables named by the current query state, in the order they were
    /// added; empty for raw statements with no source
    fn source_tables(&self) -> &[String];

    /// Run a generic, SELECT-shaped statement and return the matching rows
    ///
    /// # Errors
    ///
    /// Returns the driver's error when the statement could not be executed.
    fn execute(&mut self, sql: &str) -> Result<Vec<Row>, StorageError>;

    /// Run an UPDATE/DELETE-shaped statement and return the number of
    /// affected rows
    ///
    /// # Errors
    ///
    /// Returns the driver's error when the statement could not be executed.
    fn execute_update(&mut self, sql: &str) -> Result<u64, StorageError>;

    /// Run an INSERT-shaped statement and return the new row id
    ///
    /// # Errors
    ///
    /// Returns the driver's error when the statement could not be executed.
    fn execute_insert(&mut self, sql: &str) -> Result<u64, StorageError>;
}

impl<D: Dataset + ?Sized> Dataset for Box<D> {
    fn database_type(&self) -> &str {
        (**self).database_type()
    }

    fn source_tables(&self) -> &[String] {
        (**self).source_tables()
    }

    fn execute(&mut self, sql: &str) -> Result<Vec<Row>, StorageError> {
        (**self).execute(sql)
    }

    fn execute_update(&mut self, sql: &str) -> Result<u64, StorageError> {
        (**self).execute_update(sql)
    }

    fn execute_insert(&mut self, sql: &str) -> Result<u64, StorageError> {
        (**self).execute_insert(sql)
    }
}
