use crate::datatypes::{Address, SourceAddress, Tags};

crate::macros::pdu! {
    /// Sent by the MC when an SME it holds messages for becomes available.
    /// alert_notification has no response.
    pub struct AlertNotification(AlertNotification) {
        /// Address of the SME that became available
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,

        /// Address of the ESME that asked to be alerted
        #[serde(rename = "esme_addr")]
        pub esme: Address,

        /// ms_availability_status
        pub tags: Tags,
    }
}
