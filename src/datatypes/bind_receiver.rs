use crate::codec::{Pdu, Request};
use crate::datatypes::{InterfaceVersion, NumericPlanIndicator, Tags, TypeOfNumber};

crate::macros::pdu! {
    /// BindReceiver is used to bind a receiver ESME to the SMSC.
    pub struct BindReceiver(BindReceiver) {
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
    pub struct BindReceiverResponse(BindReceiverResp) {
        pub system_id: String,
        pub tags: Tags,
    }
}

impl BindReceiver {
    pub fn new(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Request for BindReceiver {
    type Response = BindReceiverResponse;

    fn response(&self) -> Self::Response {
        BindReceiverResponse {
            system_id: self.system_id.clone(),
            ..BindReceiverResponse::default()
        }
        .with_sequence_number(self.sequence_number())
    }
}
