//! Integration tests for SMPP PDU encoding and decoding

use crate::codec::{CodecError, Encodable, MAX_SEQUENCE_NUMBER, Pdu, PduHeader, Request};
use crate::compose::{MessageComposer, reassemble};
use crate::config::CodecConfig;
use crate::datatypes::esm_class::{MODE_DEFAULT, TYPE_DELIVERY_RECEIPT};
use crate::datatypes::*;
use crate::frame::{Frame, decode_frame, read_pdu, write_pdu};
use bytes::BytesMut;
use std::io::Cursor;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_frame_check_insufficient_data() {
        let data = vec![0x00, 0x00]; // Only 2 bytes
        let mut cursor = Cursor::new(data.as_slice());

        let result = Frame::check(&mut cursor);
        assert!(matches!(result, Err(CodecError::Incomplete)));
    }

    #[test]
    fn test_frame_check_invalid_length() {
        let data = vec![
            0x00, 0x00, 0x00, 0x05, // command_length = 5 (too small)
            0x00, 0x00, 0x00, 0x15, // command_id
            0x00, 0x00, 0x00, 0x00, // command_status
            0x00, 0x00, 0x00, 0x01, // sequence_number
        ];
        let mut cursor = Cursor::new(data.as_slice());

        let result = Frame::check(&mut cursor);
        assert!(matches!(
            result,
            Err(CodecError::InvalidPduLength { length: 5, .. })
        ));
    }

    #[test]
    fn test_frame_check_length_too_large() {
        let data = vec![
            0xFF, 0xFF, 0xFF, 0xFF, // command_length = max u32
            0x00, 0x00, 0x00, 0x15, // command_id
            0x00, 0x00, 0x00, 0x00, // command_status
            0x00, 0x00, 0x00, 0x01, // sequence_number
        ];
        let mut cursor = Cursor::new(data.as_slice());

        let result = Frame::check(&mut cursor);
        assert!(matches!(result, Err(CodecError::InvalidPduLength { .. })));
    }

    #[test]
    fn test_bind_transmitter_max_field_lengths() {
        let mut bind_transmitter = BindTransmitter::new("A".repeat(15), "B".repeat(8))
            .with_sequence_number(1);
        bind_transmitter.system_type = "C".repeat(12);
        bind_transmitter.addr_ton = TypeOfNumber::International;
        bind_transmitter.addr_npi = NumericPlanIndicator::Isdn;
        bind_transmitter.address_range = "D".repeat(40);

        let bytes = bind_transmitter.to_bytes().unwrap();
        // 16 + 16 + 9 + 13 + 1 + 1 + 1 + 41
        assert_eq!(bytes.len(), 98);

        let mut cursor = Cursor::new(bytes.as_ref());
        match Frame::parse(&mut cursor).unwrap() {
            Frame::BindTransmitter(pdu) => {
                assert_eq!(pdu.system_id, bind_transmitter.system_id);
                assert_eq!(pdu.address_range, bind_transmitter.address_range);
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_every_pdu_type_survives_the_registry() {
        let frames: Vec<Frame> = vec![
            GenericNack::default().into(),
            BindReceiver::default().into(),
            BindReceiverResponse::default().into(),
            BindTransmitter::default().into(),
            BindTransmitterResponse::default().into(),
            BindTransceiver::default().into(),
            BindTransceiverResponse::default().into(),
            Outbind::default().into(),
            Unbind::default().into(),
            UnbindResponse::default().into(),
            EnquireLink::default().into(),
            EnquireLinkResponse::default().into(),
            SubmitSm::default().into(),
            SubmitSmResponse::default().into(),
            DeliverSm::default().into(),
            DeliverSmResponse::default().into(),
            DataSm::default().into(),
            DataSmResponse::default().into(),
            QuerySm::default().into(),
            QuerySmResponse::default().into(),
            CancelSm::default().into(),
            CancelSmResponse::default().into(),
            ReplaceSm::default().into(),
            ReplaceSmResponse::default().into(),
            SubmitMulti::default().into(),
            SubmitMultiResponse::default().into(),
            AlertNotification::default().into(),
            BroadcastSm::default().into(),
            BroadcastSmResponse::default().into(),
            CancelBroadcastSm::default().into(),
            CancelBroadcastSmResponse::default().into(),
            QueryBroadcastSm::default().into(),
            QueryBroadcastSmResponse::default().into(),
        ];

        let mut buffer = BytesMut::new();
        for (sequence, frame) in (1..).zip(&frames) {
            let mut frame = frame.clone();
            frame.set_sequence_number(sequence);
            frame.encode(&mut buffer).unwrap();
        }

        for (sequence, expected) in (1..).zip(&frames) {
            let frame = decode_frame(&mut buffer).unwrap().unwrap();
            assert_eq!(frame.command_id(), expected.command_id());
            assert_eq!(frame.sequence_number(), sequence);
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_composed_parts_survive_the_wire() {
        let text = "Съешь же ещё этих мягких французских булок, да выпей чаю. ".repeat(4);
        let parts = MessageComposer::new(CodecConfig::default())
            .compose(&text, 0x0301)
            .unwrap();
        assert!(parts.len() > 1);

        let mut buffer = BytesMut::new();
        for (sequence, part) in (1..).zip(parts) {
            SubmitSm::new(
                Address::alphanumeric("BAKERY"),
                Address::international("79001234567"),
            )
            .with_message(part)
            .with_sequence_number(sequence)
            .encode(&mut buffer)
            .unwrap();
        }

        let mut received = Vec::new();
        while let Some(frame) = decode_frame(&mut buffer).unwrap() {
            match frame {
                Frame::SubmitSm(pdu) => {
                    assert!(pdu.esm_class.udh_indicator);
                    assert_eq!(pdu.message.data_coding, DataCoding::Cyrillic);
                    received.push(pdu.message);
                }
                other => panic!("unexpected frame {other:?}"),
            }
        }
        received.reverse();
        assert_eq!(reassemble(&received).unwrap(), text);
    }

    #[test]
    fn test_delivery_receipt() {
        let mut deliver_sm = DeliverSm {
            source: Address::international("447700900123"),
            destination: Address::alphanumeric("ACME"),
            esm_class: EsmClass::new(MODE_DEFAULT, TYPE_DELIVERY_RECEIPT),
            message: ShortMessage::from_text(
                "id:abc123 sub:001 dlvrd:001 stat:DELIVRD err:000",
                DataCoding::Gsm7,
            ),
            ..Default::default()
        }
        .with_sequence_number(77);
        deliver_sm
            .tags
            .push(Tlv::new(tags::RECEIPTED_MESSAGE_ID, b"abc123\0".to_vec()));

        let bytes = deliver_sm.to_bytes().unwrap();
        let mut cursor = Cursor::new(bytes.as_ref());
        let frame = Frame::parse(&mut cursor).unwrap();

        let response = frame.response().unwrap();
        assert_eq!(response.command_id(), CommandId::DeliverSmResp);
        assert_eq!(response.sequence_number(), 77);

        match frame {
            Frame::DeliverSm(mut pdu) => {
                assert!(pdu.is_delivery_receipt());
                assert_eq!(
                    pdu.tags.get(tags::RECEIPTED_MESSAGE_ID).unwrap().value.as_ref(),
                    b"abc123\0"
                );
                assert!(pdu.message.decode_text().contains("stat:DELIVRD"));
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_unicode_string_handling() {
        let text = "日本語のメッセージ";
        let composer = MessageComposer::new(CodecConfig::default());
        let coding = composer.coding_for(text);
        assert_ne!(coding, DataCoding::Gsm7);

        let parts = composer.compose(text, 1).unwrap();
        assert_eq!(parts.len(), 1);

        let submit_sm = SubmitSm::default()
            .with_message(parts[0].clone())
            .with_sequence_number(3);
        let bytes = submit_sm.to_bytes().unwrap();
        let mut cursor = Cursor::new(bytes.as_ref());
        match Frame::parse(&mut cursor).unwrap() {
            Frame::SubmitSm(mut pdu) => assert_eq!(pdu.message.decode_text(), text),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn test_boundary_sequence_numbers() {
        for sequence_number in [1, MAX_SEQUENCE_NUMBER] {
            let bytes = EnquireLink::default()
                .with_sequence_number(sequence_number)
                .to_bytes()
                .unwrap();
            assert_eq!(&bytes[12..16], &sequence_number.to_be_bytes());
        }

        let err = EnquireLink::default()
            .with_sequence_number(MAX_SEQUENCE_NUMBER + 1)
            .to_bytes()
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidSequenceNumber(_)));
    }

    #[test]
    fn test_error_responses_are_header_only() {
        let frames: Vec<Frame> = vec![
            BindTransmitterResponse::default().into(),
            SubmitSmResponse::default().into(),
            SubmitMultiResponse::default().into(),
            QueryBroadcastSmResponse::default().into(),
        ];
        for frame in frames {
            let mut frame = frame;
            frame.set_sequence_number(5);
            frame.header_mut().command_status = CommandStatus::SystemError;

            let bytes = frame.to_bytes().unwrap();
            assert_eq!(bytes.len(), PduHeader::SIZE);

            let parsed = Frame::parse(&mut Cursor::new(bytes.as_ref())).unwrap();
            assert_eq!(parsed.command_status(), CommandStatus::SystemError);
            assert_eq!(parsed.command_id(), frame.command_id());
        }
    }

    #[test]
    fn test_pdu_json_uses_smpp_names() {
        let mut submit_sm = SubmitSm::new(
            Address::alphanumeric("ACME"),
            Address::international("447700900123"),
        )
        .with_message(ShortMessage::from_text("Hello", DataCoding::Gsm7))
        .with_sequence_number(7);
        submit_sm.registered_delivery = RegisteredDelivery::receipt();
        submit_sm
            .tags
            .push(Tlv::new(tags::SAR_MSG_REF_NUM, vec![0x00, 0x2A]));

        let json = serde_json::to_value(&submit_sm).unwrap();
        assert_eq!(json["header"]["command_id"], 4);
        assert_eq!(json["header"]["command_status"], 0);
        assert_eq!(json["header"]["sequence_number"], 7);
        assert_eq!(json["source_addr"]["ton"], 5);
        assert_eq!(json["source_addr"]["address"], "ACME");
        assert_eq!(json["destination_addr"]["address"], "447700900123");
        assert_eq!(json["esm_class"], 0);
        assert_eq!(json["registered_delivery"], 1);
        assert_eq!(json["replace_if_present_flag"], false);
        assert_eq!(json["message"]["data_coding"], 0);
        assert_eq!(json["message"]["short_message"], "Hello");
        assert_eq!(
            json["tags"],
            serde_json::json!([{ "tag": 0x020C, "value": [0, 42] }])
        );

        let frame = Frame::from(submit_sm);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["SubmitSm"]["message"]["short_message"], "Hello");
    }

    #[tokio::test]
    async fn test_bind_exchange_over_a_stream() {
        let mut wire = Vec::new();
        let bind = BindTransceiver::new("esme01", "secret").with_sequence_number(1);
        write_pdu(&mut wire, &bind).await.unwrap();

        let mut reader = &wire[..];
        let received = read_pdu(&mut reader).await.unwrap();
        assert_eq!(received.header.command_id, CommandId::BindTransceiver);

        let Frame::BindTransceiver(request) = received.frame else {
            panic!("expected bind_transceiver");
        };
        assert_eq!(request.password, "secret");

        let response = request.response();
        assert_eq!(response.system_id, "esme01");
        assert_eq!(response.sequence_number(), 1);

        let mut reply = Vec::new();
        write_pdu(&mut reply, &response).await.unwrap();
        let received = read_pdu(&mut &reply[..]).await.unwrap();
        assert!(matches!(received.frame, Frame::BindTransceiverResponse(_)));
    }
}
