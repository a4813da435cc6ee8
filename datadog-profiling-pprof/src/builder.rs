// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::api;
use crate::collections::identifiable::StringId;
use crate::collections::message_set::MessageSet;
use crate::collections::string_table::StringTable;
use crate::ProfileError;
use datadog_profiling_protobuf as pprof;

const DESC_FRAME_OMITTED: &str = "frame omitted";
const DESC_FRAMES_OMITTED: &str = "frames omitted";

/// An owned sample accumulated during the window. Samples are not
/// deduplicated; every captured stack produces one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Sample {
    /// Ids returned by [Builder::add_locations], leaf frame first.
    pub location_ids: Vec<u64>,
    /// One value per declared sample type, in declaration order.
    pub values: Vec<i64>,
}

/// Accumulates profile data and produces an encoded pprof profile.
///
/// Functions, locations, and mappings are deduplicated on the minimal key
/// that determines their identity in the artifact, so memory grows with the
/// number of distinct frames observed across the window, not with the total
/// sample count.
pub struct Builder {
    functions: MessageSet<(StringId, StringId), pprof::Function>,
    locations: MessageSet<(StringId, i64, StringId), pprof::Location>,
    mappings: MessageSet<StringId, pprof::Mapping>,
    sample_types: Vec<pprof::ValueType>,
    samples: Vec<Sample>,
    strings: StringTable,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            functions: MessageSet::new(1),
            locations: MessageSet::new(1),
            mappings: MessageSet::new(1),
            sample_types: Vec::new(),
            samples: Vec::new(),
            strings: StringTable::new(),
        }
    }

    /// Declares one sample metric dimension. Sample types are positional,
    /// not deduplicated: each sample's values line up with the declaration
    /// order.
    pub fn add_value_type(&mut self, value_type: api::ValueType) -> pprof::ValueType {
        let value_type = pprof::ValueType::new(
            self.strings.intern(value_type.r#type),
            self.strings.intern(value_type.unit),
        );
        self.sample_types.push(value_type);
        value_type
    }

    /// Resolves one captured stack into location ids, leaf frame first.
    ///
    /// Stack capture may be depth-limited: `depth` is the true depth of the
    /// original stack while `frames` may hold fewer entries. When frames
    /// were lost, one synthetic placeholder location is appended describing
    /// how many, keyed like any other location so repeated omission counts
    /// deduplicate.
    pub fn add_locations(&mut self, frames: &[api::Frame<'_>], depth: usize) -> Vec<u64> {
        let mut location_ids = Vec::with_capacity(frames.len() + 1);
        for frame in frames {
            location_ids.push(self.add_location(frame.filename, frame.lineno, frame.name));
        }

        let omitted = depth.saturating_sub(frames.len());
        if omitted > 0 {
            let desc = if omitted == 1 {
                format!("{omitted} {DESC_FRAME_OMITTED}")
            } else {
                format!("{omitted} {DESC_FRAMES_OMITTED}")
            };
            location_ids.push(self.add_location("", 0, &desc));
        }

        location_ids
    }

    /// Registers the binary/module the given file belongs to, returning its
    /// mapping id. Mappings carry only a filename here.
    pub fn add_mapping(&mut self, filename: &str) -> u64 {
        let filename = self.strings.intern(filename);
        let mapping = self.mappings.fetch(filename, |id, _| pprof::Mapping {
            id: id.into(),
            filename: filename.into(),
        });
        mapping.id.value
    }

    /// Appends one sample. The location ids must come from
    /// [Builder::add_locations] on this builder, which is what keeps every
    /// reference in the artifact resolvable.
    pub fn add_sample(&mut self, location_ids: Vec<u64>, values: Vec<i64>) {
        debug_assert_eq!(self.sample_types.len(), values.len());
        self.samples.push(Sample {
            location_ids,
            values,
        });
    }

    pub fn sample_types(&self) -> &[pprof::ValueType] {
        &self.sample_types
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Assembles the current contents into a profile message. Calling this
    /// mid-window yields a partial but internally consistent snapshot.
    pub fn build_profile(&self) -> pprof::Profile<'_> {
        pprof::Profile {
            sample_types: self.sample_types.clone(),
            samples: self
                .samples
                .iter()
                .map(|sample| pprof::Sample {
                    location_ids: sample.location_ids.as_slice().into(),
                    values: sample.values.as_slice().into(),
                })
                .collect(),
            mappings: self.mappings.messages().copied().collect(),
            locations: self.locations.messages().copied().collect(),
            functions: self.functions.messages().copied().collect(),
            string_table: self.strings.strings().collect(),
        }
    }

    /// Serializes an assembled profile into the wire format.
    pub fn encode_profile(profile: &pprof::Profile<'_>) -> Result<Vec<u8>, ProfileError> {
        let mut buffer = Vec::with_capacity(profile.proto_len() as usize);
        profile.encode(&mut buffer)?;
        Ok(buffer)
    }

    /// Assembles and serializes in one step. The builder is considered spent
    /// once its artifact has been handed off for transport.
    pub fn encode(&self) -> Result<Vec<u8>, ProfileError> {
        Self::encode_profile(&self.build_profile())
    }

    fn add_location(&mut self, filename: &str, lineno: i64, name: &str) -> u64 {
        let filename = self.strings.intern(filename);
        let name = self.strings.intern(name);
        let function_id = self.add_function(filename, name);
        let location = self
            .locations
            .fetch((filename, lineno, name), |id, _| pprof::Location {
                id: id.into(),
                line: pprof::Line {
                    function_id: function_id.into(),
                    lineno: lineno.into(),
                }
                .into(),
            });
        location.id.value
    }

    fn add_function(&mut self, filename: StringId, name: StringId) -> u64 {
        let function = self.functions.fetch((filename, name), |id, _| pprof::Function {
            id: id.into(),
            name: name.into(),
            filename: filename.into(),
        });
        function.id.value
    }
}
