use crate::codec::Request;
use crate::datatypes::{SourceAddress, Tags};

crate::macros::pdu! {
    /// Cancels one or more outstanding broadcast messages
    pub struct CancelBroadcastSm(CancelBroadcastSm) {
        pub service_type: String,
        pub message_id: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct CancelBroadcastSmResponse(CancelBroadcastSmResp) {}
}

impl Request for CancelBroadcastSm {
    type Response = CancelBroadcastSmResponse;
}
