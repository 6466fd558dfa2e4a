crate::macros::pdu! {
    /// Sent by the MC to ask an ESME to initiate a bind_receiver. Outbind has
    /// no response.
    pub struct Outbind(Outbind) {
        /// MC identifier
        pub system_id: String,
        /// Used by the ESME to authenticate the MC
        pub password: String,
    }
}
