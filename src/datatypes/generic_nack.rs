use crate::datatypes::Tags;

crate::macros::pdu! {
    /// Negative acknowledgement for a PDU that could not be decoded. The
    /// command_status carries the reason.
    pub struct GenericNack(GenericNack) {
        pub tags: Tags,
    }
}
