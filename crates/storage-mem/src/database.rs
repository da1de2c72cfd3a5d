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

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use sqltrace_storage::{Connection, Row, StorageError};

use crate::{dataset::MemDataset, DATABASE_TYPE};

#[derive(Debug, Default)]
pub(crate) struct Table {
    pub(crate) rows: Vec<Row>,
}

pub(crate) type TableMap = HashMap<String, Table>;

/// An in-memory database
///
/// Cloning is cheap and clones share the same table registry, so one handle
/// can hand out connections and datasets to multiple threads.
#[derive(Debug, Clone, Default)]
pub struct MemDatabase {
    tables: Arc<Mutex<TableMap>>,
}

impl MemDatabase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a connection for raw SQL execution
    #[must_use]
    pub fn connection(&self) -> MemConnection {
        MemConnection {
            tables: Arc::clone(&self.tables),
        }
    }

    /// Build a dataset reading from the given table
    #[must_use]
    pub fn dataset(&self, table: &str) -> MemDataset {
        MemDataset::new(Arc::clone(&self.tables), vec![table.to_owned()])
    }

    /// Build a dataset with no source table, for raw statements
    #[must_use]
    pub fn raw_dataset(&self) -> MemDataset {
        MemDataset::new(Arc::clone(&self.tables), Vec::new())
    }

    /// Number of rows currently stored in a table, if the table exists
    #[must_use]
    pub fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.lock().get(table).map(|stored| stored.rows.len())
    }
}

/// A connection to a [`MemDatabase`]
#[derive(Debug)]
pub struct MemConnection {
    pub(crate) tables: Arc<Mutex<TableMap>>,
}

impl Connection for MemConnection {
    fn database_type(&self) -> &str {
        DATABASE_TYPE
    }

    fn execute_raw(&mut self, sql: &str) -> Result<(), StorageError> {
        let statement = sql.trim_start();

        if let Some(rest) = strip_keyword(statement, "CREATE TABLE") {
            let table = table_ident(rest).ok_or_else(|| malformed(sql))?;
            let mut tables = self.tables.lock();
            if tables.contains_key(&table) {
                return Err(StorageError::TableExists { table });
            }
            tables.insert(table, Table::default());
            Ok(())
        } else if let Some(rest) = strip_keyword(statement, "DROP TABLE IF EXISTS") {
            let table = table_ident(rest).ok_or_else(|| malformed(sql))?;
            self.tables.lock().remove(&table);
            Ok(())
        } else if let Some(rest) = strip_keyword(statement, "DROP TABLE") {
            let table = table_ident(rest).ok_or_else(|| malformed(sql))?;
            if self.tables.lock().remove(&table).is_none() {
                return Err(StorageError::UnknownTable { table });
            }
            Ok(())
        } else {
            // Anything else is accepted verbatim; this engine does not
            // interpret statement text.
            Ok(())
        }
    }
}

fn malformed(sql: &str) -> StorageError {
    StorageError::Malformed {
        statement: sql.to_owned(),
    }
}

/// Strip a leading SQL keyword, case-insensitively
///
/// The keyword must be followed by at least one whitespace character.
fn strip_keyword<'a>(statement: &'a str, keyword: &str) -> Option<&'a str> {
    let prefix = statement.get(..keyword.len())?;
    let rest = &statement[keyword.len()..];
    (prefix.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace)).then_some(rest)
}

/// Extract the table identifier at the start of `rest`, with or without
/// backtick quoting
fn table_ident(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    let name = if let Some(quoted) = rest.strip_prefix('`') {
        quoted.split('`').next()
    } else {
        rest.split(|c: char| c.is_whitespace() || c == '(' || c == ';')
            .next()
    }?;
    (!name.is_empty()).then(|| name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_drop_table() {
        let db = MemDatabase::new();
        let mut connection = db.connection();

        connection
            .execute_raw("CREATE TABLE `items` (`id` integer NOT NULL PRIMARY KEY)")
            .unwrap();
        assert_eq!(db.row_count("items"), Some(0));

        connection.execute_raw("DROP TABLE `items`").unwrap();
        assert_eq!(db.row_count("items"), None);
    }

    #[test]
    fn test_create_existing_table_fails() {
        let db = MemDatabase::new();
        let mut connection = db.connection();

        connection.execute_raw("CREATE TABLE items (id integer)").unwrap();
        let error = connection
            .execute_raw("CREATE TABLE items (id integer)")
            .unwrap_err();
        assert_eq!(
            error,
            StorageError::TableExists {
                table: "items".to_owned()
            }
        );
    }

    #[test]
    fn test_drop_missing_table() {
        let db = MemDatabase::new();
        let mut connection = db.connection();

        // The bare form fails, the IF EXISTS form does not
        let error = connection.execute_raw("DROP TABLE `people`").unwrap_err();
        assert_eq!(error.to_string(), "no such table: people");

        connection
            .execute_raw("DROP TABLE IF EXISTS `people`")
            .unwrap();
    }

    #[test]
    fn test_other_statements_are_opaque() {
        let db = MemDatabase::new();
        let mut connection = db.connection();

        connection
            .execute_raw("INSERT INTO items (name, price) VALUES ('abc', 100)")
            .unwrap();
    }

    #[test]
    fn test_keyword_matching() {
        assert!(strip_keyword("create table `x` ()", "CREATE TABLE").is_some());
        assert!(strip_keyword("CREATE TABLEX", "CREATE TABLE").is_none());
        assert_eq!(table_ident(" `items` (...)"), Some("items".to_owned()));
        assert_eq!(table_ident(" items(id integer)"), Some("items".to_owned()));
        assert_eq!(table_ident(" ``"), None);
    }
}
