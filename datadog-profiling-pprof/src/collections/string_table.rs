// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::identifiable::{FxIndexSet, StringId};

/// Holds unique strings and provides [StringId]s that correspond to the
/// order that the strings were inserted.
pub struct StringTable {
    /// The ordered hash set of unique strings. The order becomes the
    /// StringId.
    strings: FxIndexSet<Box<str>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    /// Creates a new string table, which initially holds the empty string
    /// and no others.
    pub fn new() -> Self {
        let mut strings = FxIndexSet::<Box<str>>::default();
        // It varies by implementation, but frequently the capacity after the
        // first insertion is quite small, as in 3. For one sample we'd have
        // at least the empty string, a sample type, a sample unit, and a
        // file and function name per frame, so with a capacity like 3 we end
        // up reallocating a bunch on or before the very first sample. The
        // number here is not fine-tuned, just skipping some obviously bad,
        // tiny sizes.
        strings.reserve(32);

        // Always hold the empty string as item 0.
        strings.insert("".into());
        Self { strings }
    }

    /// Returns the number of strings currently held in the string table.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Adds the string to the string table if it isn't present already, and
    /// returns a [StringId] that corresponds to the order that this string
    /// was originally inserted.
    ///
    /// # Panics
    /// Panics if the number of strings exceeds the offset space, which is
    /// limited to 32 bits. An entire protobuf message must be smaller than
    /// 2 GiB, so this many unique strings cannot be encoded anyway.
    pub fn intern(&mut self, item: &str) -> StringId {
        // For performance, delay converting the [&str] to a [Box<str>] until
        // after it has been determined to not exist in the set. This avoids
        // temporary allocations.
        let index = match self.strings.get_index_of(item) {
            Some(index) => index,
            None => {
                let (index, _inserted) = self.strings.insert_full(item.into());
                debug_assert!(_inserted);
                index
            }
        };
        #[allow(clippy::expect_used)]
        StringId::try_from(index).expect("StringId to fit into a u32")
    }

    /// The strings in insertion order, where position == [StringId], for
    /// embedding into the artifact.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(Box::as_ref)
    }
}
