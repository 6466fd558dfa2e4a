use crate::codec::Request;
use crate::datatypes::{
    DestinationAddress, EsmClass, PriorityFlag, RegisteredDelivery, ShortMessage, SourceAddress,
    Tags,
};

crate::macros::pdu! {
    /// This operation is used by the SMSC to deliver a short message to an ESME.
    /// The deliver_sm PDU is used to deliver both mobile originated messages and
    /// delivery receipts from the SMSC to the ESME.
    pub struct DeliverSm(DeliverSm) {
        pub service_type: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        #[serde(rename = "destination_addr")]
        pub destination: DestinationAddress,

        /// Message type 0001 marks a delivery receipt
        pub esm_class: EsmClass,

        pub protocol_id: u8,
        pub priority_flag: PriorityFlag,

        /// Unused by deliver_sm, always NULL
        pub schedule_delivery_time: String,

        /// Unused by deliver_sm, always NULL
        pub validity_period: String,

        pub registered_delivery: RegisteredDelivery,

        /// Unused by deliver_sm, always 0
        #[serde(rename = "replace_if_present_flag")]
        pub replace_if_present: bool,

        pub message: ShortMessage,
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct DeliverSmResponse(DeliverSmResp) {
        /// Unused by deliver_sm_resp, always NULL
        pub message_id: String,
        pub tags: Tags,
    }
}

impl DeliverSm {
    /// Returns true when the message is a MC delivery receipt
    pub fn is_delivery_receipt(&self) -> bool {
        self.esm_class.is_delivery_receipt()
    }
}

impl Request for DeliverSm {
    type Response = DeliverSmResponse;
}
