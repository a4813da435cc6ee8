// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{Field, Function, Location, Mapping, Sample, ValueType, NO_OPT_ZERO};
use std::io::{self, Write};

/// The top-level profile message. It borrows the string table and the
/// samples' id/value slices from whoever accumulated them, so it can be
/// assembled and encoded without copying the window's data.
///
/// Every element of a repeated field is emitted, including default ones,
/// because positions are meaningful: string_table\[0\] must be the empty
/// string, and sample_type order defines the order of each sample's values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile<'a> {
    pub sample_types: Vec<ValueType>,     // 1
    pub samples: Vec<Sample<'a>>,         // 2
    pub mappings: Vec<Mapping>,           // 3
    pub locations: Vec<Location>,         // 4
    pub functions: Vec<Function>,         // 5
    pub string_table: Vec<&'a str>,       // 6
}

impl Profile<'_> {
    /// The number of bytes the encoded profile takes.
    pub fn proto_len(&self) -> u64 {
        let mut len = 0;
        for value_type in &self.sample_types {
            len += Field::<ValueType, 1, NO_OPT_ZERO>::from(*value_type).proto_len();
        }
        for sample in &self.samples {
            len += Field::<Sample, 2, NO_OPT_ZERO>::from(*sample).proto_len();
        }
        for mapping in &self.mappings {
            len += Field::<Mapping, 3, NO_OPT_ZERO>::from(*mapping).proto_len();
        }
        for location in &self.locations {
            len += Field::<Location, 4, NO_OPT_ZERO>::from(*location).proto_len();
        }
        for function in &self.functions {
            len += Field::<Function, 5, NO_OPT_ZERO>::from(*function).proto_len();
        }
        for string in &self.string_table {
            len += Field::<&str, 6, NO_OPT_ZERO>::from(*string).proto_len();
        }
        len
    }

    /// Encode the profile to the in-wire protobuf format.
    ///
    /// Serialization often happens one byte at a time, so a buffered writer
    /// should probably be used.
    pub fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for value_type in &self.sample_types {
            Field::<ValueType, 1, NO_OPT_ZERO>::from(*value_type).encode(writer)?;
        }
        for sample in &self.samples {
            Field::<Sample, 2, NO_OPT_ZERO>::from(*sample).encode(writer)?;
        }
        for mapping in &self.mappings {
            Field::<Mapping, 3, NO_OPT_ZERO>::from(*mapping).encode(writer)?;
        }
        for location in &self.locations {
            Field::<Location, 4, NO_OPT_ZERO>::from(*location).encode(writer)?;
        }
        for function in &self.functions {
            Field::<Function, 5, NO_OPT_ZERO>::from(*function).encode(writer)?;
        }
        for string in &self.string_table {
            Field::<&str, 6, NO_OPT_ZERO>::from(*string).encode(writer)?;
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "prost_impls"))]
impl From<&Profile<'_>> for crate::prost_impls::Profile {
    fn from(profile: &Profile) -> Self {
        // If the prost file is regenerated, this may pick up new members.
        #[allow(clippy::needless_update)]
        Self {
            sample_types: profile.sample_types.iter().map(Into::into).collect(),
            samples: profile.samples.iter().map(|s| (*s).into()).collect(),
            mappings: profile.mappings.iter().map(Into::into).collect(),
            locations: profile.locations.iter().map(Into::into).collect(),
            functions: profile.functions.iter().map(Into::into).collect(),
            string_table: profile
                .string_table
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prost_impls, Line, StringOffset};
    use prost::Message;

    fn offset(index: u32) -> StringOffset {
        StringOffset::new(index)
    }

    #[test]
    fn empty_profile_is_well_formed() {
        let profile = Profile {
            string_table: vec![""],
            ..Profile::default()
        };

        let mut buffer = Vec::with_capacity(profile.proto_len() as usize);
        profile.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len() as u64, profile.proto_len());

        let roundtrip = prost_impls::Profile::decode(buffer.as_slice()).unwrap();
        assert_eq!(roundtrip.string_table, vec![String::new()]);
        assert!(roundtrip.samples.is_empty());
        assert!(roundtrip.locations.is_empty());
    }

    #[test]
    fn basic() {
        // Index layout:
        // 0: "", 1: "samples", 2: "count", 3: "index.php", 4: "{main}",
        // 5: "test"
        let strings = vec!["", "samples", "count", "index.php", "{main}", "test"];

        let main_function = Function {
            id: Field::from(1),
            name: Field::from(offset(4)),
            filename: Field::from(offset(3)),
        };
        let test_function = Function {
            id: Field::from(2),
            name: Field::from(offset(5)),
            filename: Field::from(offset(3)),
        };

        let main_location = Location {
            id: Field::from(1),
            line: Field::from(Line {
                function_id: Field::from(1),
                lineno: Field::from(0),
            }),
        };
        let test_location = Location {
            id: Field::from(2),
            line: Field::from(Line {
                function_id: Field::from(2),
                lineno: Field::from(4),
            }),
        };

        let sample_locations = [vec![1u64], vec![2, 1]];
        let sample_values = [vec![1i64], vec![1]];
        let profile = Profile {
            sample_types: vec![ValueType::new(offset(1), offset(2))],
            samples: vec![
                Sample {
                    location_ids: Field::from(sample_locations[0].as_slice()),
                    values: Field::from(sample_values[0].as_slice()),
                },
                Sample {
                    location_ids: Field::from(sample_locations[1].as_slice()),
                    values: Field::from(sample_values[1].as_slice()),
                },
            ],
            mappings: vec![],
            locations: vec![main_location, test_location],
            functions: vec![main_function, test_function],
            string_table: strings,
        };

        let prost_profile = prost_impls::Profile::from(&profile);

        let mut buffer = Vec::with_capacity(profile.proto_len() as usize);
        profile.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len() as u64, profile.proto_len());

        let roundtrip = prost_impls::Profile::decode(buffer.as_slice()).unwrap();
        assert_eq!(prost_profile, roundtrip);
    }
}
