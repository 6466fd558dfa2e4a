use crate::codec::{Pdu, Request};
use crate::datatypes::{DataCoding, PriorityFlag, SourceAddress, Tags};

crate::macros::pdu! {
    /// Broadcasts a message to the mobile stations of one or more areas. The
    /// content and area list travel as optional parameters.
    pub struct BroadcastSm(BroadcastSm) {
        pub service_type: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,

        /// Identifier of a previous broadcast to replace, NULL otherwise
        pub message_id: String,

        pub priority_flag: PriorityFlag,
        pub schedule_delivery_time: String,
        pub validity_period: String,
        #[serde(rename = "replace_if_present_flag")]
        pub replace_if_present: bool,
        pub data_coding: DataCoding,
        #[serde(rename = "sm_default_msg_id")]
        pub default_msg_id: u8,

        /// broadcast_area_identifier, broadcast_content_type,
        /// broadcast_rep_num, broadcast_frequency_interval and the rest
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct BroadcastSmResponse(BroadcastSmResp) {
        pub message_id: String,
        pub tags: Tags,
    }
}

impl Request for BroadcastSm {
    type Response = BroadcastSmResponse;

    fn response(&self) -> Self::Response {
        BroadcastSmResponse {
            message_id: self.message_id.clone(),
            ..BroadcastSmResponse::default()
        }
        .with_sequence_number(self.sequence_number())
    }
}
