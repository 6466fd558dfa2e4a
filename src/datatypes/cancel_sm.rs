use crate::codec::Request;
use crate::datatypes::{DestinationAddress, SourceAddress};

crate::macros::pdu! {
    /// Cancels one or more outstanding short messages. With an empty
    /// message_id every message matching the addresses and service_type is
    /// cancelled.
    pub struct CancelSm(CancelSm) {
        pub service_type: String,
        pub message_id: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        #[serde(rename = "destination_addr")]
        pub destination: DestinationAddress,
    }
}

crate::macros::pdu! {
    pub struct CancelSmResponse(CancelSmResp) {}
}

impl Request for CancelSm {
    type Response = CancelSmResponse;
}
