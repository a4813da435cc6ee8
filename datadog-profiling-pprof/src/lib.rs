// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Accumulates sampled call stacks for one measurement window and
//! serializes them into a pprof profile.
//!
//! A [Builder] corresponds to exactly one window: it is created empty when
//! the window opens, fed backtraces by the sampler while the window is open,
//! asked once for the encoded artifact, and then discarded. It performs no
//! synchronization; if samples are captured concurrently, the embedding
//! layer must serialize calls into the builder.

pub mod api;
pub mod collections;

mod builder;
mod error;

pub use builder::*;
pub use error::*;
