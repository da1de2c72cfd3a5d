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

use opentelemetry::{global::BoxedTracer, KeyValue};
use sqltrace_storage::{Dataset, Row, StorageError};

use crate::{
    tags::{DB_INSTANCE, DB_STATEMENT, DB_TYPE},
    trace::trace_query,
};

/// Span name shared by the generic and data-update executes
const EXECUTE_SPAN_NAME: &str = "database-builder.execute";

/// Span name for inserts
const EXECUTE_INSERT_SPAN_NAME: &str = "database-builder.execute_insert";

/// A [`Dataset`] decorator tracing the three execute primitives
///
/// Generic and data-update executes share a span name; only inserts get a
/// distinct one. Like [`TracedConnection`][crate::TracedConnection], the
/// wrapper is transparent to results and errors.
pub struct TracedDataset<D> {
    inner: D,
    tracer: Arc<BoxedTracer>,
}

impl<D: Dataset> TracedDataset<D> {
    /// Wrap a dataset using the configured tracer handle
    #[must_use]
    pub fn new(inner: D) -> Self {
        Self::with_tracer(inner, crate::tracer())
    }

    /// Wrap a dataset with an explicit tracer handle
    #[must_use]
    pub fn with_tracer(inner: D, tracer: Arc<BoxedTracer>) -> Self {
        Self { inner, tracer }
    }

    /// Tags shared by the three execute variants
    ///
    /// `db.instance` reports the first source table only; a query naming no
    /// table gets no `db.instance` at all.
    fn derive_tags(&self, sql: &str) -> Vec<KeyValue> {
        let mut tags = vec![
            DB_TYPE.string(self.inner.database_type().to_owned()),
            DB_STATEMENT.string(sql.to_owned()),
        ];

        if let Some(table) = self.inner.source_tables().first() {
            tags.push(DB_INSTANCE.string(table.clone()));
        }

        tags
    }
}

impl<D> TracedDataset<D> {
    /// Already instrumented: returns `self` unchanged, so enabling twice
    /// does not nest spans
    #[must_use]
    pub fn traced(self) -> Self {
        self
    }

    /// Already instrumented: only the tracer handle is replaced
    #[must_use]
    pub fn traced_with(mut self, tracer: Arc<BoxedTracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Unwrap the inner dataset
    #[must_use]
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Dataset> Dataset for TracedDataset<D> {
    fn database_type(&self) -> &str {
        self.inner.database_type()
    }

    fn source_tables(&self) -> &[String] {
        self.inner.source_tables()
    }

    fn execute(&mut self, sql: &str) -> Result<Vec<Row>, StorageError> {
        let tags = self.derive_tags(sql);

        trace_query(&self.tracer, EXECUTE_SPAN_NAME, tags, || {
            self.inner.execute(sql)
        })
    }

    fn execute_update(&mut self, sql: &str) -> Result<u64, StorageError> {
        let tags = self.derive_tags(sql);

        trace_query(&self.tracer, EXECUTE_SPAN_NAME, tags, || {
            self.inner.execute_update(sql)
        })
    }

    fn execute_insert(&mut self, sql: &str) -> Result<u64, StorageError> {
        let tags = self.derive_tags(sql);

        trace_query(&self.tracer, EXECUTE_INSERT_SPAN_NAME, tags, || {
            self.inner.execute_insert(sql)
        })
    }
}

/// Extension trait wrapping any [`Dataset`] in a [`TracedDataset`]
pub trait DatasetExt: Dataset + Sized {
    /// Instrument this dataset with the configured tracer handle
    #[must_use]
    fn traced(self) -> TracedDataset<Self> {
        TracedDataset::new(self)
    }

    /// Instrument this dataset with an explicit tracer handle
    #[must_use]
    fn traced_with(self, tracer: Arc<BoxedTracer>) -> TracedDataset<Self> {
        TracedDataset::with_tracer(self, tracer)
    }
}

impl<D: Dataset> DatasetExt for D {}
