use crate::codec::Request;
use crate::datatypes::{
    DataCoding, DestinationAddress, EsmClass, RegisteredDelivery, SourceAddress, Tags,
};

crate::macros::pdu! {
    /// Transfers data between the MC and the ESME. The payload travels in the
    /// message_payload optional parameter, so data_sm has no short_message.
    pub struct DataSm(DataSm) {
        pub service_type: String,
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,
        #[serde(rename = "destination_addr")]
        pub destination: DestinationAddress,
        pub esm_class: EsmClass,
        pub registered_delivery: RegisteredDelivery,

        /// Coding of the message_payload value
        pub data_coding: DataCoding,

        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct DataSmResponse(DataSmResp) {
        pub message_id: String,
        pub tags: Tags,
    }
}

impl Request for DataSm {
    type Response = DataSmResponse;
}
