use crate::codec::{Pdu, Request};
use crate::datatypes::{InterfaceVersion, NumericPlanIndicator, Tags, TypeOfNumber};

crate::macros::pdu! {
    /// BindTransmitter is used to bind a transmitter ESME to the SMSC.
    pub struct BindTransmitter(BindTransmitter) {
        /// 4.1.1.1 system_id: Identifies the ESME requesting to bind as a
        ///         transmitter with the MC.
        pub system_id: String,

        /// 4.1.1.1 password: Used by the MC to authenticate the ESME
        ///         requesting to bind.
        pub password: String,

        /// 4.1.1.1 system_type: Identifies the type of ESME system requesting
        ///         to bind, for example "VMS" or "OTA".
        pub system_type: String,

        /// 4.1.1.1 interface_version: Version of the SMPP protocol supported
        ///         by the ESME.
        pub interface_version: InterfaceVersion,

        /// 4.1.1.1 addr_ton: Type of Number of the ESME address(es) served
        ///         via this session.
        pub addr_ton: TypeOfNumber,

        /// 4.1.1.1 addr_npi: Numbering Plan Indicator of the ESME address(es)
        ///         served via this session.
        pub addr_npi: NumericPlanIndicator,

        /// 4.1.1.1 address_range: Range of SME addresses served by the ESME.
        pub address_range: String,
    }
}

crate::macros::pdu! {
    pub struct BindTransmitterResponse(BindTransmitterResp) {
        /// 4.1.1.2 system_id: MC identifier.
        pub system_id: String,

        /// sc_interface_version and any other optional parameters
        pub tags: Tags,
    }
}

impl BindTransmitter {
    pub fn new(system_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

impl Request for BindTransmitter {
    type Response = BindTransmitterResponse;

    fn response(&self) -> Self::Response {
        BindTransmitterResponse {
            system_id: self.system_id.clone(),
            ..BindTransmitterResponse::default()
        }
        .with_sequence_number(self.sequence_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decodable, Encodable};
    use crate::datatypes::{CommandId, CommandStatus, Tlv, tags};

    #[test]
    fn bind_transmitter_to_bytes() {
        let bind = BindTransmitter {
            system_type: "VMS".to_string(),
            addr_ton: TypeOfNumber::International,
            addr_npi: NumericPlanIndicator::Isdn,
            address_range: "44*".to_string(),
            ..BindTransmitter::new("ESME", "secret")
        }
        .with_sequence_number(1);

        let bytes = bind.to_bytes().unwrap();

        let expected: &[u8] = &[
            0x00, 0x00, 0x00, 0x27, // command_length (39)
            0x00, 0x00, 0x00, 0x02, // bind_transmitter
            0x00, 0x00, 0x00, 0x00, // command_status
            0x00, 0x00, 0x00, 0x01, // sequence_number
            b'E', b'S', b'M', b'E', 0x00, // system_id
            b's', b'e', b'c', b'r', b'e', b't', 0x00, // password
            b'V', b'M', b'S', 0x00, // system_type
            0x34, // interface_version
            0x01, // addr_ton
            0x01, // addr_npi
            b'4', b'4', b'*', 0x00, // address_range
        ];
        assert_eq!(bytes.as_ref(), expected);

        let decoded = BindTransmitter::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.header.command_length, 39);
        assert_eq!(
            decoded,
            BindTransmitter {
                header: decoded.header,
                ..bind
            }
        );
    }

    #[test]
    fn bind_transmitter_response_copies_system_id() {
        let bind = BindTransmitter::new("ESME", "").with_sequence_number(42);
        let response = bind.response();

        assert_eq!(response.header.command_id, CommandId::BindTransmitterResp);
        assert_eq!(response.sequence_number(), 42);
        assert_eq!(response.system_id, "ESME");
        assert_eq!(response.command_status(), CommandStatus::Ok);
    }

    #[test]
    fn bind_transmitter_response_roundtrip_with_tags() {
        let mut response = BindTransmitterResponse::default().with_sequence_number(42);
        response.system_id = "SMSC_SYS".to_string();
        response
            .tags
            .push(Tlv::new(tags::SC_INTERFACE_VERSION, vec![0x34]));

        let bytes = response.to_bytes().unwrap();
        let parsed = BindTransmitterResponse::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.system_id, response.system_id);
        assert_eq!(parsed.tags, response.tags);
        assert_eq!(
            parsed
                .tags
                .get(tags::SC_INTERFACE_VERSION)
                .map(|tlv| tlv.value.as_ref()),
            Some(&[0x34][..])
        );
    }

    #[test]
    fn rejected_bind_has_no_body() {
        let mut response = BindTransmitterResponse::default()
            .with_sequence_number(3)
            .with_status(CommandStatus::BindFailed);
        response.system_id = "SMSC".to_string();

        let bytes = response.to_bytes().unwrap();
        assert_eq!(bytes.len(), 16);
        let parsed = BindTransmitterResponse::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.command_status(), CommandStatus::BindFailed);
        assert!(parsed.system_id.is_empty());
    }
}
