use crate::codec::Request;
use crate::datatypes::Tags;

crate::macros::pdu! {
    /// Link confidence check between the ESME and the MC
    pub struct EnquireLink(EnquireLink) {
        pub tags: Tags,
    }
}

crate::macros::pdu! {
    pub struct EnquireLinkResponse(EnquireLinkResp) {}
}

impl Request for EnquireLink {
    type Response = EnquireLinkResponse;
}
