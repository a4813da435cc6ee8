// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{Field, StringOffset, Value, WireType, NO_OPT_ZERO, OPT_ZERO};
use std::io::{self, Write};

/// Describes the mapping of a binary in memory. Datadog profilers only
/// populate the filename; the memory range and build id fields of the schema
/// are not represented.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Mapping {
    /// Unique nonzero id for the mapping.
    pub id: Field<u64, 1, NO_OPT_ZERO>,
    /// The object this entry is loaded from.
    pub filename: Field<StringOffset, 5, OPT_ZERO>,
}

impl Value for Mapping {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        self.id.proto_len() + self.filename.proto_len()
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.id.encode(writer)?;
        self.filename.encode(writer)
    }
}

#[cfg(any(test, feature = "prost_impls"))]
impl From<Mapping> for crate::prost_impls::Mapping {
    fn from(mapping: Mapping) -> Self {
        Self::from(&mapping)
    }
}

#[cfg(any(test, feature = "prost_impls"))]
impl From<&Mapping> for crate::prost_impls::Mapping {
    fn from(mapping: &Mapping) -> Self {
        // If the prost file is regenerated, this may pick up new members.
        #[allow(clippy::needless_update)]
        Self {
            id: mapping.id.value,
            filename: mapping.filename.value.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prost_impls;
    use prost::Message;

    fn test(mapping: &Mapping) {
        let prost_mapping = prost_impls::Mapping::from(mapping);
        assert_eq!(mapping.id.value, prost_mapping.id);
        assert_eq!(i64::from(mapping.filename.value), prost_mapping.filename);

        let mut buffer = Vec::with_capacity(mapping.proto_len() as usize);
        mapping.encode(&mut buffer).unwrap();
        let roundtrip = prost_impls::Mapping::decode(buffer.as_slice()).unwrap();
        assert_eq!(prost_mapping, roundtrip);

        let mut buffer2 = Vec::with_capacity(prost_mapping.encoded_len());
        prost_mapping.encode(&mut buffer2).unwrap();
        let roundtrip2 = prost_impls::Mapping::decode(buffer2.as_slice()).unwrap();
        assert_eq!(roundtrip, roundtrip2);
    }

    #[test]
    fn roundtrip() {
        bolero::check!().with_type::<Mapping>().for_each(test);
    }
}
