use crate::codec::Request;
use crate::datatypes::{
    DestinationAddress, EsmClass, PriorityFlag, RegisteredDelivery, ShortMessage, SourceAddress,
    Tags,
};

crate::macros::pdu! {
    /// This operation is used by an ESME to submit a short message to the SMSC for onward transmission
    /// to a specified short message entity (SME). The submit_sm PDU does not support the transaction
    /// message mode.
    pub struct SubmitSm(SubmitSm) {
        /// 4.7.26 service_type: The service_type parameter can be used to indicate the SMS
        ///        Application service associated with the message. Set to NULL for the
        ///        default MC settings.
        pub service_type: String,

        /// 4.7.29 source_addr_ton, source_addr_npi, source_addr: Address of the SME which
        ///        originated this message.
        #[serde(rename = "source_addr")]
        pub source: SourceAddress,

        /// 4.7.8 dest_addr_ton, dest_addr_npi, destination_addr: Destination address of
        ///       this short message. For mobile terminated messages, this is the directory
        ///       number of the recipient MS.
        #[serde(rename = "destination_addr")]
        pub destination: DestinationAddress,

        /// 4.7.12 esm_class: Indicates Message Mode and Message Type. Its UDHI bit tells
        ///        the receiver that the short message starts with a user data header.
        pub esm_class: EsmClass,

        /// 4.7.19 protocol_id: Protocol Identifier. Network specific field.
        pub protocol_id: u8,

        /// 4.7.19 priority_flag: Designates the priority level of the message.
        pub priority_flag: PriorityFlag,

        /// 4.7.23.1 schedule_delivery_time: Set to NULL for immediate delivery.
        ///          Format: YYMMDDhhmmsstnnp
        pub schedule_delivery_time: String,

        /// 4.7.23.2 validity_period: Set to NULL to request the MC default validity
        ///          period. Format same as schedule_delivery_time.
        pub validity_period: String,

        /// 4.7.21 registered_delivery: Indicator to signify if a MC delivery receipt,
        ///        manual ACK, delivery ACK or an intermediate notification is required.
        pub registered_delivery: RegisteredDelivery,

        /// 4.7.22 replace_if_present_flag: Replace a previously submitted message with the
        ///        same source address, destination address and service_type.
        #[serde(rename = "replace_if_present_flag")]
        pub replace_if_present: bool,

        /// 4.7.27 data_coding, sm_default_msg_id, sm_length and short_message
        pub message: ShortMessage,

        /// Optional parameters
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct SubmitSmResponse(SubmitSmResp) {
        /// 4.7.14 message_id: MC assigned identifier of the submitted message.
        pub message_id: String,
    }
}

impl SubmitSm {
    pub fn new(source: SourceAddress, destination: DestinationAddress) -> Self {
        Self {
            source,
            destination,
            ..Self::default()
        }
    }

    /// Sets the short message and turns the UDHI bit on when the message
    /// carries a user data header
    pub fn with_message(mut self, message: ShortMessage) -> Self {
        self.esm_class.udh_indicator = message.udh.is_some();
        self.message = message;
        self
    }
}

impl Request for SubmitSm {
    type Response = SubmitSmResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decodable, Encodable, Pdu, roundtrip};
    use crate::datatypes::{
        Address, CommandId, CommandStatus, ConcatenatedHeader, DataCoding, NumericPlanIndicator,
        Tlv, TypeOfNumber, UserDataHeader, tags,
    };

    #[test]
    fn submit_sm_to_bytes_basic() {
        let submit_sm = SubmitSm::new(
            Address::alphanumeric("ACME"),
            Address::international("447700900123"),
        )
        .with_message(ShortMessage::from_text("Hello", DataCoding::Gsm7))
        .with_sequence_number(1);

        let bytes = submit_sm.to_bytes().unwrap();

        let mut expected = vec![
            0x00, 0x00, 0x00, 0x36, // command_length (54)
            0x00, 0x00, 0x00, 0x04, // submit_sm
            0x00, 0x00, 0x00, 0x00, // command_status
            0x00, 0x00, 0x00, 0x01, // sequence_number
            0x00, // service_type
            0x05, 0x00, b'A', b'C', b'M', b'E', 0x00, // source
            0x01, 0x01, // dest_addr_ton, dest_addr_npi
        ];
        expected.extend_from_slice(b"447700900123\0");
        expected.extend_from_slice(&[
            0x00, // esm_class
            0x00, // protocol_id
            0x00, // priority_flag
            0x00, // schedule_delivery_time
            0x00, // validity_period
            0x00, // registered_delivery
            0x00, // replace_if_present_flag
            0x00, // data_coding
            0x00, // sm_default_msg_id
            0x05, // sm_length
        ]);
        expected.extend_from_slice(b"Hello");
        assert_eq!(bytes.as_ref(), expected.as_slice());

        assert_eq!(roundtrip(&submit_sm), submit_sm);
    }

    #[test]
    fn submit_sm_with_concatenation_header() {
        let mut udh = UserDataHeader::new();
        udh.set_concatenated_header(ConcatenatedHeader::new(0x42, 2, 1));
        let submit_sm = SubmitSm::new(
            Address::international("111"),
            Address::new(TypeOfNumber::National, NumericPlanIndicator::Isdn, "222"),
        )
        .with_message(ShortMessage::from_text("Привет", DataCoding::Ucs2).with_udh(udh))
        .with_sequence_number(10);

        assert!(submit_sm.esm_class.udh_indicator);

        let decoded = roundtrip(&submit_sm);
        assert_eq!(decoded, submit_sm);
        assert_eq!(
            decoded.message.concatenated_header(),
            Some(ConcatenatedHeader::new(0x42, 2, 1))
        );
        let mut message = decoded.message.clone();
        assert_eq!(message.decode_text(), "Привет");
    }

    #[test]
    fn submit_sm_with_optional_parameters() {
        let mut submit_sm = SubmitSm::new(Address::default(), Address::international("1"))
            .with_sequence_number(4);
        submit_sm.priority_flag = PriorityFlag::Level3;
        submit_sm.registered_delivery = RegisteredDelivery::receipt();
        submit_sm.validity_period = "000001000000000R".to_string();
        submit_sm
            .tags
            .push(Tlv::new(tags::MESSAGE_PAYLOAD, b"long text".to_vec()));

        let bytes = submit_sm.to_bytes().unwrap();
        assert_eq!(&bytes[bytes.len() - 13..bytes.len() - 9], &[0x04, 0x24, 0x00, 0x09]);

        let decoded = roundtrip(&submit_sm);
        assert_eq!(decoded, submit_sm);
        assert_eq!(decoded.message.body_len(), 0);
    }

    #[test]
    fn submit_sm_udhi_with_payload_in_tlv() {
        let mut submit_sm = SubmitSm::new(
            Address::alphanumeric("ACME"),
            Address::international("447700900123"),
        )
        .with_sequence_number(6);
        let payload = [0x05, 0x00, 0x03, 0x01, 0x02, 0x01, b'h', b'i'];
        submit_sm
            .tags
            .push(Tlv::new(tags::MESSAGE_PAYLOAD, payload.to_vec()));

        // esm_class with UDHI set, sm_length 0, header and text in message_payload
        let mut wire = submit_sm.to_bytes().unwrap().to_vec();
        assert_eq!(wire[39], 0x00);
        wire[39] = 0x40;
        assert_eq!(&wire[wire.len() - 15..wire.len() - 12], &[0x00, 0x00, 0x00]);

        let decoded = SubmitSm::from_bytes(&wire).unwrap();
        assert!(decoded.esm_class.udh_indicator);
        assert_eq!(decoded.message.udh, None);
        assert!(decoded.message.message.is_empty());
        assert_eq!(
            decoded.tags.get(tags::MESSAGE_PAYLOAD).unwrap().value.as_ref(),
            &payload
        );
    }

    #[test]
    fn submit_sm_missing_message_is_malformed() {
        let submit_sm = SubmitSm::default().with_sequence_number(1);
        let bytes = submit_sm.to_bytes().unwrap();

        // drop the sm_length octet, keeping command_length consistent
        let mut truncated = bytes[..bytes.len() - 1].to_vec();
        truncated[3] -= 1;
        let err = SubmitSm::from_bytes(&truncated).unwrap_err();
        assert_eq!(err.to_command_status(), CommandStatus::InvalidCommandLength);
    }

    #[test]
    fn submit_sm_response_to_bytes() {
        let mut response = SubmitSm::default().with_sequence_number(42).response();
        response.message_id = "msg-1".to_string();

        let bytes = response.to_bytes().unwrap();
        assert_eq!(
            bytes.as_ref(),
            &[
                0x00, 0x00, 0x00, 0x16, // command_length (22)
                0x80, 0x00, 0x00, 0x04, // submit_sm_resp
                0x00, 0x00, 0x00, 0x00, // command_status
                0x00, 0x00, 0x00, 0x2A, // sequence_number
                b'm', b's', b'g', b'-', b'1', 0x00,
            ]
        );
        assert_eq!(response.header.command_id, CommandId::SubmitSmResp);
    }

    #[test]
    fn submit_sm_response_with_error_status() {
        let response = SubmitSmResponse::default()
            .with_sequence_number(8)
            .with_status(CommandStatus::MessageQueueFull);
        let bytes = response.to_bytes().unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[8..12], &0x14u32.to_be_bytes());
    }
}
