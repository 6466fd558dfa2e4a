use crate::codec::Request;

crate::macros::pdu! {
    /// Ends the session
    pub struct Unbind(Unbind) {}
}

crate::macros::pdu! {
    pub struct UnbindResponse(UnbindResp) {}
}

impl Request for Unbind {
    type Response = UnbindResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Encodable, Pdu};
    use crate::datatypes::CommandId;

    #[test]
    fn unbind_is_a_bare_header() {
        let unbind = Unbind::default().with_sequence_number(9);
        let bytes = unbind.to_bytes().unwrap();
        assert_eq!(
            bytes.as_ref(),
            &[
                0x00, 0x00, 0x00, 0x10, //
                0x00, 0x00, 0x00, 0x06, //
                0x00, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x09,
            ]
        );

        let response = unbind.response();
        assert_eq!(response.header.command_id, CommandId::UnbindResp);
        assert_eq!(response.sequence_number(), 9);
    }
}
