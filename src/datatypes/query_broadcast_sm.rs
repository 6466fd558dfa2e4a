use crate::codec::{Pdu, Request};
use crate::datatypes::{SourceAddress, Tags};

crate::macros::pdu! {
    /// Queries the state of a previously submitted broadcast message
    pub struct QueryBroadcastSm(QueryBroadcastSm) {
        pub message_id: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    /// message_state, broadcast_area_identifier and broadcast_area_success
    /// travel as optional parameters
    pub struct QueryBroadcastSmResponse(QueryBroadcastSmResp) {
        pub message_id: String,
        pub tags: Tags,
    }
}

impl Request for QueryBroadcastSm {
    type Response = QueryBroadcastSmResponse;

    fn response(&self) -> Self::Response {
        QueryBroadcastSmResponse {
            message_id: self.message_id.clone(),
            ..QueryBroadcastSmResponse::default()
        }
        .with_sequence_number(self.sequence_number())
    }
}
