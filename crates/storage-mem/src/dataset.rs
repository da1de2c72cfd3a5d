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

use std::sync::Arc;

use parking_lot::Mutex;
use sqltrace_storage::{Dataset, Row, StorageError};

use crate::{database::TableMap, DATABASE_TYPE};

/// A dataset over a [`MemDatabase`][crate::MemDatabase] table
///
/// The engine does not parse statement text: reads return the stored rows,
/// updates report every stored row as touched, and inserts store placeholder
/// rows.
#[derive(Debug)]
pub struct MemDataset {
    tables: Arc<Mutex<TableMap>>,
    from: Vec<String>,
}

impl MemDataset {
    pub(crate) fn new(tables: Arc<Mutex<TableMap>>, from: Vec<String>) -> Self {
        Self { tables, from }
    }
}

impl Dataset for MemDataset {
    fn database_type(&self) -> &str {
        DATABASE_TYPE
    }

    fn source_tables(&self) -> &[String] {
        &self.from
    }

    fn execute(&mut self, _sql: &str) -> Result<Vec<Row>, StorageError> {
        let Some(table) = self.from.first() else {
            // A dataset with no source yields nothing
            return Ok(Vec::new());
        };

        let tables = self.tables.lock();
        tables
            .get(table)
            .map(|stored| stored.rows.clone())
            .ok_or_else(|| StorageError::UnknownTable {
                table: table.clone(),
            })
    }

    fn execute_update(&mut self, _sql: &str) -> Result<u64, StorageError> {
        let Some(table) = self.from.first() else {
            return Ok(0);
        };

        let tables = self.tables.lock();
        let stored = tables.get(table).ok_or_else(|| StorageError::UnknownTable {
            table: table.clone(),
        })?;
        Ok(stored.rows.len() as u64)
    }

    fn execute_insert(&mut self, sql: &str) -> Result<u64, StorageError> {
        let Some(table) = self.from.first() else {
            return Err(StorageError::Malformed {
                statement: sql.to_owned(),
            });
        };

        let mut tables = self.tables.lock();
        let stored = tables
            .get_mut(table)
            .ok_or_else(|| StorageError::UnknownTable {
                table: table.clone(),
            })?;
        stored.rows.push(Row::new());
        Ok(stored.rows.len() as u64)
    }
}
