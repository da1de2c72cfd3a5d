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

use opentelemetry::global::BoxedTracer;
use sqltrace_storage::{Connection, StorageError};

use crate::{
    tags::{DB_STATEMENT, DB_TYPE},
    trace::trace_query,
};

/// Span name for raw statements run against a connection
const SPAN_NAME: &str = "database.execute";

/// A [`Connection`] decorator tracing every raw statement
///
/// The wrapper is transparent: the return value and error of the inner
/// connection pass through unchanged, with the span as the only side effect.
pub struct TracedConnection<C> {
    inner: C,
    tracer: Arc<BoxedTracer>,
}

impl<C: Connection> TracedConnection<C> {
    /// Wrap a connection using the configured tracer handle
    #[must_use]
    pub fn new(inner: C) -> Self {
        Self::with_tracer(inner, crate::tracer())
    }

    /// Wrap a connection with an explicit tracer handle
    #[must_use]
    pub fn with_tracer(inner: C, tracer: Arc<BoxedTracer>) -> Self {
        Self { inner, tracer }
    }
}

impl<C> TracedConnection<C> {
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

    /// Unwrap the inner connection
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Connection> Connection for TracedConnection<C> {
    fn database_type(&self) -> &str {
        self.inner.database_type()
    }

    fn execute_raw(&mut self, sql: &str) -> Result<(), StorageError> {
        let tags = vec![
            DB_TYPE.string(self.inner.database_type().to_owned()),
            DB_STATEMENT.string(sql.to_owned()),
        ];

        trace_query(&self.tracer, SPAN_NAME, tags, || {
            self.inner.execute_raw(sql)
        })
    }
}

/// Extension trait wrapping any [`Connection`] in a [`TracedConnection`]
pub trait ConnectionExt: Connection + Sized {
    /// Instrument this connection with the configured tracer handle
    #[must_use]
    fn traced(self) -> TracedConnection<Self> {
        TracedConnection::new(self)
    }

    /// Instrument this connection with an explicit tracer handle
    #[must_use]
    fn traced_with(self, tracer: Arc<BoxedTracer>) -> TracedConnection<Self> {
        TracedConnection::with_tracer(self, tracer)
    }
}

impl<C: Connection> ConnectionExt for C {}
