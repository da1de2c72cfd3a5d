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

//! The span tag vocabulary.
//!
//! The key names follow the OpenTracing conventions (`db.type`,
//! `db.statement`, `db.instance`) rather than the renamed OpenTelemetry
//! `db.*` attributes: they are the compatibility contract with existing
//! dashboards built on those keys.

use opentelemetry::{Key, KeyValue};

/// The identity every span reports in its `component` tag
pub const COMPONENT_NAME: &str = "rust-sqltrace";

/// Identity of the instrumentation layer emitting the span
pub const COMPONENT: Key = Key::from_static_str("component");

/// The kind of the span, always `client` for database calls
pub const SPAN_KIND: Key = Key::from_static_str("span.kind");

/// The database dialect identifier
pub const DB_TYPE: Key = Key::from_static_str("db.type");

/// The verbatim statement text handed to the driver
pub const DB_STATEMENT: Key = Key::from_static_str("db.statement");

/// The first source table of a builder-level query
pub const DB_INSTANCE: Key = Key::from_static_str("db.instance");

/// Set to `true` when the wrapped operation failed
pub const ERROR: Key = Key::from_static_str("error");

/// Attribute of the `exception` span event carrying the failure message
pub const MESSAGE: Key = Key::from_static_str("message");

const COMMON_KEYS: [Key; 2] = [COMPONENT, SPAN_KIND];

/// The tags merged into every span
///
/// `span.kind` is also set natively on the span; the literal tag is kept for
/// OpenTracing-style backends that read it as an attribute.
fn common_tags() -> [KeyValue; 2] {
    [
        COMPONENT.string(COMPONENT_NAME),
        SPAN_KIND.string("client"),
    ]
}

/// Merge the common tags into a call-site tag set
///
/// Call-site tags never shadow the identity tags: an entry colliding with a
/// common key is dropped in favor of the common one.
pub(crate) fn merge_common_tags(tags: &mut Vec<KeyValue>) {
    tags.retain(|tag| !COMMON_KEYS.contains(&tag.key));
    tags.extend(common_tags());
}
