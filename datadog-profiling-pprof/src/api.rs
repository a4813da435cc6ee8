// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Borrowed input types handed to the builder by the sampler. They carry no
//! interned ids; the builder interns everything on ingestion.

/// One captured backtrace frame. The leaf frame comes first in a captured
/// stack.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Frame<'a> {
    /// Path of the source file the frame executes in.
    pub filename: &'a str,
    /// Line number within the file; 0 when unknown.
    pub lineno: i64,
    /// Human-readable label for the frame, e.g. the method's base name.
    pub name: &'a str,
}

impl<'a> Frame<'a> {
    pub const fn new(filename: &'a str, lineno: i64, name: &'a str) -> Self {
        Self {
            filename,
            lineno,
            name,
        }
    }
}

/// Describes one sample metric dimension, e.g. ("cpu", "nanoseconds").
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ValueType<'a> {
    pub r#type: &'a str,
    pub unit: &'a str,
}

impl<'a> ValueType<'a> {
    pub const fn new(r#type: &'a str, unit: &'a str) -> Self {
        Self { r#type, unit }
    }
}
