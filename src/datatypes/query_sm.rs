use crate::codec::Request;
use crate::datatypes::{MessageState, SourceAddress};

crate::macros::pdu! {
    /// Queries the state of a previously submitted message
    pub struct QuerySm(QuerySm) {
        /// MC assigned identifier of the message being queried
        pub message_id: String,

        /// Must match the source address of the original message
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
    }
}

crate::macros::pdu! {
    pub struct QuerySmResponse(QuerySmResp) {
        pub message_id: String,

        /// Date and time the message reached its final state, NULL otherwise
        pub final_date: String,

        pub message_state: MessageState,

        /// Network specific error code of a failed delivery
        pub error_code: u8,
    }
}

impl QuerySm {
    pub fn new(message_id: impl Into<String>, source: SourceAddress) -> Self {
        Self {
            message_id: message_id.into(),
            source,
            ..Self::default()
        }
    }
}

impl Request for QuerySm {
    type Response = QuerySmResponse;
}
