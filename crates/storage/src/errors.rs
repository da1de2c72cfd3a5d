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

use thiserror::Error;

/// Generic error when interacting with the database
///
/// Instrumentation layers forward these values untouched; only the
/// [`Display`][std::fmt::Display] output is ever read, to annotate spans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The statement referenced a table the database does not know about
    #[error("no such table: {table}")]
    UnknownTable {
        /// The missing table
        table: String,
    },

    /// A table with this name already exists
    #[error("table `{table}` already exists")]
    TableExists {
        /// The conflicting table
        table: String,
    },

    /// The driver could not make sense of the statement
    #[error("malformed statement: {statement}")]
    Malformed {
        /// The offending statement text
        statement: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = StorageError::UnknownTable {
            table: "people".to_owned(),
        };
        assert_eq!(error.to_string(), "no such table: people");

        let error = StorageError::TableExists {
            table: "items".to_owned(),
        };
        assert_eq!(error.to_string(), "table `items` already exists");
    }
}
