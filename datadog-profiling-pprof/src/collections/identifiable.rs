// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use datadog_profiling_protobuf as pprof;
use std::hash::BuildHasherDefault;

pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type FxIndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<rustc_hash::FxHasher>>;

/// Offsets into the string table. Offset 0 is always the empty string.
pub type StringId = pprof::StringOffset;

/// Implemented by records that carry their own pprof id, so the message set
/// can verify that a build callback honored the id it was assigned.
pub trait Identifiable {
    fn id(&self) -> u64;
}

impl Identifiable for pprof::Function {
    fn id(&self) -> u64 {
        self.id.value
    }
}

impl Identifiable for pprof::Location {
    fn id(&self) -> u64 {
        self.id.value
    }
}

impl Identifiable for pprof::Mapping {
    fn id(&self) -> u64 {
        self.id.value
    }
}
