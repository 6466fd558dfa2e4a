// ABOUTME: This module provides macros to reduce boilerplate in SMPP PDU implementations
// ABOUTME: Includes the PDU schema macro, octet field codecs, the frame union and builder patterns

/// Macro for declaring a PDU from its field list
///
/// Generates the struct with a leading `header: PduHeader`, a `Default` whose
/// header carries the PDU's command_id, and a `Pdu` implementation that
/// encodes and decodes the fields in declaration order through `Field`.
/// The struct serializes with its field names as keys; fields may carry
/// `#[serde(rename)]` to use the SMPP parameter name.
///
/// # Arguments
/// * `$name` - The PDU struct name (e.g., SubmitSm)
/// * `$command_id` - The CommandId variant (e.g., SubmitSm)
/// * fields - `pub name: Type` pairs in wire order
macro_rules! pdu {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($command_id:ident) {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Serialize)]
        pub struct $name {
            pub header: $crate::codec::PduHeader,
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    header: $crate::codec::PduHeader::new(
                        $crate::datatypes::CommandId::$command_id,
                    ),
                    $($field: Default::default(),)*
                }
            }
        }

        impl $crate::codec::Pdu for $name {
            const COMMAND_ID: $crate::datatypes::CommandId =
                $crate::datatypes::CommandId::$command_id;

            fn header(&self) -> &$crate::codec::PduHeader {
                &self.header
            }

            fn header_mut(&mut self) -> &mut $crate::codec::PduHeader {
                &mut self.header
            }

            #[allow(unused_variables)]
            fn encode_body(
                &self,
                buf: &mut bytes::BytesMut,
                ctx: &mut $crate::codec::FieldContext,
            ) -> Result<(), $crate::codec::CodecError> {
                $($crate::codec::Field::encode_field(&self.$field, buf, ctx)?;)*
                Ok(())
            }

            #[allow(unused_variables)]
            fn decode_body(
                &mut self,
                buf: &mut std::io::Cursor<&[u8]>,
                ctx: &mut $crate::codec::FieldContext,
            ) -> Result<(), $crate::codec::CodecError> {
                $($crate::codec::Field::decode_field(&mut self.$field, buf, ctx)?;)*
                Ok(())
            }
        }
    };
}

/// Macro for implementing `Field` on single-octet value types
///
/// The type must be `Copy` and convert from and into `u8` without loss.
macro_rules! octet_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::codec::Field for $ty {
                fn encode_field(
                    &self,
                    buf: &mut bytes::BytesMut,
                    _ctx: &mut $crate::codec::FieldContext,
                ) -> Result<(), $crate::codec::CodecError> {
                    $crate::codec::encode_u8(buf, u8::from(*self));
                    Ok(())
                }

                fn decode_field(
                    &mut self,
                    buf: &mut std::io::Cursor<&[u8]>,
                    _ctx: &mut $crate::codec::FieldContext,
                ) -> Result<(), $crate::codec::CodecError> {
                    *self = <$ty>::from($crate::codec::decode_u8(buf)?);
                    Ok(())
                }
            }
        )*
    };
}

/// Macro for generating the closed `Frame` union over every PDU type
///
/// Each variant is named after the PDU type it holds. Large PDUs are listed
/// under `boxed` so the enum stays small. Generates the
/// accessors that dispatch to each variant's header, encoding through
/// `marshal`, and the registration of one decoder per variant.
macro_rules! frames {
    (
        plain { $($plain:ident),* $(,)? }
        boxed { $($boxed:ident),* $(,)? }
    ) => {
        /// Any decoded PDU. Serializes as an object keyed by the PDU type.
        #[derive(Clone, Debug, PartialEq, serde::Serialize)]
        pub enum Frame {
            $($plain($crate::datatypes::$plain),)*
            $($boxed(Box<$crate::datatypes::$boxed>),)*
        }

        impl Frame {
            /// Header of the contained PDU
            pub fn header(&self) -> &$crate::codec::PduHeader {
                use $crate::codec::Pdu;
                match self {
                    $(Frame::$plain(pdu) => pdu.header(),)*
                    $(Frame::$boxed(pdu) => pdu.header(),)*
                }
            }

            /// Mutable header of the contained PDU
            pub fn header_mut(&mut self) -> &mut $crate::codec::PduHeader {
                use $crate::codec::Pdu;
                match self {
                    $(Frame::$plain(pdu) => pdu.header_mut(),)*
                    $(Frame::$boxed(pdu) => pdu.header_mut(),)*
                }
            }

            /// Get the command_id for this frame
            pub fn command_id(&self) -> $crate::datatypes::CommandId {
                use $crate::codec::Pdu;
                match self {
                    $(Frame::$plain(_) => $crate::datatypes::$plain::COMMAND_ID,)*
                    $(Frame::$boxed(_) => $crate::datatypes::$boxed::COMMAND_ID,)*
                }
            }
        }

        impl $crate::codec::Encodable for Frame {
            fn encode(&self, buf: &mut bytes::BytesMut) -> Result<String, $crate::codec::CodecError> {
                match self {
                    $(Frame::$plain(pdu) => $crate::codec::marshal(pdu, buf),)*
                    $(Frame::$boxed(pdu) => $crate::codec::marshal(pdu.as_ref(), buf),)*
                }
            }
        }

        $(
            impl From<$crate::datatypes::$plain> for Frame {
                fn from(pdu: $crate::datatypes::$plain) -> Self {
                    Frame::$plain(pdu)
                }
            }
        )*

        $(
            impl From<$crate::datatypes::$boxed> for Frame {
                fn from(pdu: $crate::datatypes::$boxed) -> Self {
                    Frame::$boxed(Box::new(pdu))
                }
            }
        )*

        impl PduRegistry {
            /// Create a new registry with every standard PDU registered
            pub fn new() -> Self {
                let mut registry = Self {
                    decoders: std::collections::HashMap::new(),
                };
                $(registry.register_pdu::<$crate::datatypes::$plain>();)*
                $(registry.register_pdu::<$crate::datatypes::$boxed>();)*
                registry
            }
        }
    };
}

/// Macro for generating builder setter methods
///
/// This macro generates fluent setter methods for builder patterns,
/// where each method takes a value, sets the corresponding field,
/// and returns self for method chaining.
macro_rules! builder_setters {
    ($($field:ident: $type:ty),* $(,)?) => {
        $(
            pub fn $field(mut self, $field: $type) -> Self {
                self.$field = $field;
                self
            }
        )*
    };
}

// Make macros available to the rest of the crate
pub(crate) use {builder_setters, frames, octet_field, pdu};
