use crate::codec::Request;
use crate::datatypes::{
    DestinationAddresses, EsmClass, PriorityFlag, RegisteredDelivery, ShortMessage,
    SourceAddress, Tags, UnsuccessfulRecords,
};

crate::macros::pdu! {
    /// Submits one short message to up to 255 SME addresses and distribution
    /// lists.
    pub struct SubmitMulti(SubmitMulti) {
        pub service_type: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,

        /// number_of_dests followed by one flagged entry per destination
        #[serde(rename = "dest_address")]
        pub destinations: DestinationAddresses,

        pub esm_class: EsmClass,
        pub protocol_id: u8,
        pub priority_flag: PriorityFlag,
        pub schedule_delivery_time: String,
        pub validity_period: String,
        pub registered_delivery: RegisteredDelivery,
        #[serde(rename = "replace_if_present_flag")]
        pub replace_if_present: bool,
        pub message: ShortMessage,
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct SubmitMultiResponse(SubmitMultiResp) {
        pub message_id: String,

        /// no_unsuccess followed by the destinations the MC rejected
        #[serde(rename = "unsuccess_sme")]
        pub unsuccessful: UnsuccessfulRecords,

        pub tags: Tags,
    }
}

impl SubmitMulti {
    /// Sets the short message and turns the UDHI bit on when the message
    /// carries a user data header
    pub fn with_message(mut self, message: ShortMessage) -> Self {
        self.esm_class.udh_indicator = message.udh.is_some();
        self.message = message;
        self
    }
}

impl Request for SubmitMulti {
    type Response = SubmitMultiResponse;
}
