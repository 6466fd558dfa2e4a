use crate::codec::Request;
use crate::datatypes::{RegisteredDelivery, ShortMessage, SourceAddress, Tags};

crate::macros::pdu! {
    /// Replaces a previously submitted short message that is still pending
    /// delivery. The replacement carries no data_coding octet; the original
    /// message's coding is kept.
    pub struct ReplaceSm(ReplaceSm) {
        pub message_id: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        pub schedule_delivery_time: String,
        pub validity_period: String,
        pub registered_delivery: RegisteredDelivery,

        /// sm_default_msg_id, sm_length and short_message
        pub message: ShortMessage,

        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct ReplaceSmResponse(ReplaceSmResp) {}
}

impl Request for ReplaceSm {
    type Response = ReplaceSmResponse;
}
