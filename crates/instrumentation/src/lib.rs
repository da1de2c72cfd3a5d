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

//! Tracing instrumentation for a SQL storage layer.
//!
//! Wraps [`Connection`][sqltrace_storage::Connection] and
//! [`Dataset`][sqltrace_storage::Dataset] implementations in decorators that
//! emit one OpenTelemetry client span per executed statement, tagged with the
//! database type, the verbatim statement text and, for builder-level queries,
//! the first source table. Failures are tagged on the span and forwarded
//! unchanged.
//!
//! ```rust
//! use sqltrace_instrumentation::ConnectionExt;
//! use sqltrace_storage::Connection;
//! use sqltrace_storage_mem::MemDatabase;
//!
//! # fn main() -> Result<(), sqltrace_storage::StorageError> {
//! // Pick up the process-wide OpenTelemetry tracer
//! sqltrace_instrumentation::instrument(None);
//!
//! let db = MemDatabase::new();
//! let mut connection = db.connection().traced();
//! connection.execute_raw("CREATE TABLE `items` (`id` integer)")?;
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, OnceLock};

use opentelemetry::global::{self, BoxedTracer};

pub mod connection;
pub mod dataset;
pub mod tags;
mod trace;

pub use self::{
    connection::{ConnectionExt, TracedConnection},
    dataset::{DatasetExt, TracedDataset},
    trace::trace_query,
};

static TRACER: OnceLock<Arc<BoxedTracer>> = OnceLock::new();

/// Enable instrumentation for the process
///
/// Installs the tracer handle used by decorators built without an explicit
/// one. Passing `None` selects the process-wide OpenTelemetry tracer, so this
/// should be called after the tracer provider is set up. Enabling twice is a
/// no-op that keeps the first handle; this call never fails.
pub fn instrument(tracer: Option<BoxedTracer>) {
    let tracer = tracer.unwrap_or_else(|| global::tracer(tags::COMPONENT_NAME));
    if TRACER.set(Arc::new(tracer)).is_ok() {
        tracing::debug!("database instrumentation enabled");
    } else {
        tracing::debug!("database instrumentation already enabled, keeping the existing tracer");
    }
}

/// The tracer handle decorators use when none is supplied at construction
///
/// Falls back to the process-wide OpenTelemetry tracer when [`instrument`]
/// was never called.
#[must_use]
pub fn tracer() -> Arc<BoxedTracer> {
    Arc::clone(TRACER.get_or_init(|| Arc::new(global::tracer(tags::COMPONENT_NAME))))
}
