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

use std::fmt;

use opentelemetry::{
    global::BoxedTracer,
    trace::{SpanKind, TraceContextExt, Tracer as _},
    Context, KeyValue,
};

use crate::tags::{merge_common_tags, ERROR, MESSAGE};

/// Run `body` under a client span
///
/// This is the single choke point for span lifecycle and error capture: it
/// merges the common tags into `tags`, starts a span carrying the merged set,
/// marks it active so nested instrumented calls parent under it, and ends it
/// on every exit path. A failing body gets an `error` tag and an `exception`
/// event carrying its message; the error value itself is returned unchanged.
///
/// # Errors
///
/// Returns the body's error, untouched, after tagging the span.
pub fn trace_query<T, E, F>(
    tracer: &BoxedTracer,
    span_name: &'static str,
    mut tags: Vec<KeyValue>,
    body: F,
) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: fmt::Display,
{
    merge_common_tags(&mut tags);

    let span = tracer
        .span_builder(span_name)
        .with_kind(SpanKind::Client)
        .with_attributes(tags)
        .start(tracer);
    let cx = Context::current_with_span(span);

    // The attachment must live across the body so nested spans parent
    // correctly; its drop detaches the span even if the body unwinds.
    let _attachment = cx.clone().attach();

    let result = body();

    let span = cx.span();
    if let Err(error) = &result {
        span.set_attribute(ERROR.bool(true));
        span.add_event("exception", vec![MESSAGE.string(error.to_string())]);
    }
    span.end();

    result
}
