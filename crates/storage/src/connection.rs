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

use crate::errors::StorageError;

/// A connection to a database, able to run raw SQL
///
/// This is the lowest execution primitive of the storage layer: DDL and
/// arbitrary statements go through [`Connection::execute_raw`], bypassing any
/// query builder.
pub trait Connection {
    /// A stable identifier for the underlying database engine, e.g. the SQL
    /// dialect name
    fn database_type(&self) -> &str;

    /// Run a raw SQL statement against the connection
    ///
    /// # Errors
    ///
    /// Returns the driver's error when the statement could not be executed.
    fn execute_raw(&mut self, sql: &str) -> Result<(), StorageError>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn database_type(&self) -> &str {
        (**self).database_type()
    }

    fn execute_raw(&mut self, sql: &str) -> Result<(), StorageError> {
        (**self).execute_raw(sql)
    }
}
