// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{Field, StringOffset, Value, WireType, NO_OPT_ZERO, OPT_ZERO};
use std::io::{self, Write};

/// Describes a function in the profiled program. The schema also has
/// system_name (field 3) and start_line (field 5), which Datadog profilers
/// never populate, so they are not represented here.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Function {
    /// Unique nonzero id for the function.
    pub id: Field<u64, 1, NO_OPT_ZERO>,
    /// Name of the function, in human-readable form if available.
    pub name: Field<StringOffset, 2, OPT_ZERO>,
    /// Source file containing the function.
    pub filename: Field<StringOffset, 4, OPT_ZERO>,
}

impl Value for Function {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        self.id.proto_len() + self.name.proto_len() + self.filename.proto_len()
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.id.encode(writer)?;
        self.name.encode(writer)?;
        self.filename.encode(writer)
    }
}

#[cfg(any(test, feature = "prost_impls"))]
impl From<Function> for crate::prost_impls::Function {
    fn from(function: Function) -> Self {
        Self::from(&function)
    }
}

#[cfg(any(test, feature = "prost_impls"))]
impl From<&Function> for crate::prost_impls::Function {
    fn from(function: &Function) -> Self {
        // If the prost file is regenerated, this may pick up new members.
        #[allow(clippy::needless_update)]
        Self {
            id: function.id.value,
            name: function.name.value.into(),
            filename: function.filename.value.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prost_impls;
    use prost::Message;

    fn test(function: &Function) {
        let prost_function = prost_impls::Function::from(function);
        assert_eq!(function.id.value, prost_function.id);
        assert_eq!(i64::from(function.name.value), prost_function.name);
        assert_eq!(i64::from(function.filename.value), prost_function.filename);

        let mut buffer = Vec::with_capacity(function.proto_len() as usize);
        function.encode(&mut buffer).unwrap();
        let roundtrip = prost_impls::Function::decode(buffer.as_slice()).unwrap();
        assert_eq!(prost_function, roundtrip);

        let mut buffer2 = Vec::with_capacity(prost_function.encoded_len());
        prost_function.encode(&mut buffer2).unwrap();
        let roundtrip2 = prost_impls::Function::decode(buffer2.as_slice()).unwrap();
        assert_eq!(roundtrip, roundtrip2);
    }

    #[test]
    fn roundtrip() {
        bolero::check!().with_type::<Function>().for_each(test);
    }
}
