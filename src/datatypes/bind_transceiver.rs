use crate::codec::{Pdu, Request};
use crate::datatypes::{InterfaceVersion, NumericPlanIndicator, Tags, TypeOfNumber};

crate::macros::pdu! {
    /// BindTransceiver is used to bind a transceiver ESME to the SMSC.
    pub struct BindTransceiver(BindTransceiver) {
        pub system_id: String,
        pub password: String,
        pub system_type: String,
        pub interface_version: InterfaceVersion,
        pub addr_ton: TypeOfNumber,
        pub addr_npi: NumericPlanIndicator,
        pub address_range: String,
    }
}

crate::macros::pdu! {
    pub struct BindTransceiverResponse(BindTransceiverResp) {
        pub system_id: String,
        pub tags: Tags,
    }
}

impl BindTransceiver {
    pub fn new(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Request for BindTransceiver {
    type Response = BindTransceiverResponse;

    fn response(&self) -> Self::Response {
        BindTransceiverResponse {
            system_id: self.system_id.clone(),
            ..BindTransceiverResponse::default()
        }
        .with_sequence_number(self.sequence_number())
    }
}
