// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::io;

/// Represents errors that occur while producing a profile.
///
/// Profiling is best-effort telemetry, not a guaranteed-delivery data path:
/// on any error the caller drops the window's artifact rather than retrying,
/// since stale or inconsistent profiling data must never be shipped.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The assembled profile could not be serialized to the wire format.
    #[error("failed to encode profile: {0}")]
    Encoding(#[from] io::Error),
    /// Some other error. Try to categorize all the errors, but since some
    /// things use [`io::Error`], there may be uncategorized errors.
    #[error("{0}")]
    Other(Cow<'static, str>),
}

impl ProfileError {
    pub fn other(error: impl Into<Cow<'static, str>>) -> Self {
        Self::Other(error.into())
    }
}
