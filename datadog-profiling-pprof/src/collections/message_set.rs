// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::identifiable::{FxIndexMap, Identifiable};
use std::hash::Hash;

/// A deduplicating registry of pprof messages. Equal keys always resolve to
/// the same record; first-seen keys get the next id, assigned in strictly
/// increasing order from the configured offset with no gaps and no reuse.
///
/// The offset is 1 for messages that are referenced by id elsewhere in the
/// profile (functions, locations, mappings), because id 0 conventionally
/// means "unset" in pprof.
///
/// The id is not stored beside the record; it is derived from the record's
/// position in the insertion-ordered map, which makes the id invariant
/// structural rather than something to maintain.
pub struct MessageSet<K, T> {
    messages: FxIndexMap<K, T>,
    offset: u64,
}

impl<K: Hash + Eq, T: Identifiable> MessageSet<K, T> {
    pub fn new(offset: u64) -> Self {
        Self {
            messages: FxIndexMap::default(),
            offset,
        }
    }

    /// Returns the record stored under `key`, building it first if the key
    /// has not been seen. The build callback receives the assigned id and
    /// the key, and must return a record carrying exactly that id.
    ///
    /// # Panics
    /// Panics if the build callback returns a record whose id differs from
    /// the assigned one. That is a defect, and failing loudly beats silently
    /// mis-linking records in the artifact.
    pub fn fetch<F>(&mut self, key: K, build: F) -> &T
    where
        F: FnOnce(u64, &K) -> T,
    {
        let index = match self.messages.get_index_of(&key) {
            Some(index) => index,
            None => {
                let id = self.offset + self.messages.len() as u64;
                let message = build(id, &key);
                assert_eq!(
                    id,
                    message.id(),
                    "message built with an id that differs from the assigned one"
                );
                let (index, _previous) = self.messages.insert_full(key, message);
                debug_assert!(_previous.is_none());
                index
            }
        };
        &self.messages[index]
    }

    /// The constructed records in id order.
    pub fn messages(&self) -> impl Iterator<Item = &T> {
        self.messages.values()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        id: u64,
        payload: &'static str,
    }

    impl Identifiable for Record {
        fn id(&self) -> u64 {
            self.id
        }
    }

    #[test]
    fn ids_are_sequential_from_the_offset() {
        let mut set = MessageSet::new(1);
        for (expected_id, key) in [(1, "a"), (2, "b"), (3, "c")] {
            let record = set.fetch(key, |id, _| Record { id, payload: key });
            assert_eq!(expected_id, record.id);
        }
        assert_eq!(3, set.len());

        let ids: Vec<u64> = set.messages().map(|r| r.id).collect();
        assert_eq!(vec![1, 2, 3], ids);
    }

    #[test]
    fn equal_keys_resolve_to_the_same_record() {
        let mut set = MessageSet::new(1);
        let first = set.fetch(("file", 10), |id, _| Record { id, payload: "x" }).id;
        assert_eq!(1, set.len());

        // A repeated key must not invoke the build callback again.
        let second = set
            .fetch(("file", 10), |_, _| panic!("must not rebuild"))
            .id;
        assert_eq!(first, second);
        assert_eq!(1, set.len());

        let third = set.fetch(("file", 20), |id, _| Record { id, payload: "y" }).id;
        assert_ne!(first, third);
        assert_eq!(2, set.len());
    }

    #[test]
    fn zero_offset_is_supported() {
        let mut set = MessageSet::new(0);
        let record = set.fetch("a", |id, _| Record { id, payload: "a" });
        assert_eq!(0, record.id);
    }

    #[test]
    fn build_callback_sees_the_key() {
        let mut set = MessageSet::new(1);
        let record = set.fetch("payload", |id, key| Record { id, payload: *key });
        assert_eq!("payload", record.payload);
    }

    #[test]
    #[should_panic(expected = "differs from the assigned one")]
    fn mismatched_id_fails_loudly() {
        let mut set = MessageSet::new(1);
        set.fetch("a", |_, _| Record {
            id: 42,
            payload: "a",
        });
    }
}
