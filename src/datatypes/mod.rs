pub mod address;
mod alert_notification;
mod bind_receiver;
mod bind_transceiver;
mod bind_transmitter;
mod broadcast_sm;
mod cancel_broadcast_sm;
mod cancel_sm;
mod command_id;
mod command_status;
mod data_coding;
mod data_sm;
mod deliver_sm;
mod enquire_link;
pub mod esm_class;
mod generic_nack;
mod interface_version;
mod message_state;
mod numeric_plan_indicator;
mod outbind;
mod priority_flag;
mod query_broadcast_sm;
mod query_sm;
pub mod registered_delivery;
mod replace_sm;
pub mod short_message;
mod submit_multi;
mod submit_sm;
pub mod tlv;
mod type_of_number;
pub mod udh;
mod unbind;

pub use address::{
    Address, DestinationAddress, DestinationAddresses, SourceAddress, UnsuccessfulRecord,
    UnsuccessfulRecords,
};
pub use alert_notification::AlertNotification;
pub use bind_receiver::{BindReceiver, BindReceiverResponse};
pub use bind_transceiver::{BindTransceiver, BindTransceiverResponse};
pub use bind_transmitter::{BindTransmitter, BindTransmitterResponse};
pub use broadcast_sm::{BroadcastSm, BroadcastSmResponse};
pub use cancel_broadcast_sm::{CancelBroadcastSm, CancelBroadcastSmResponse};
pub use cancel_sm::{CancelSm, CancelSmResponse};
pub use command_id::CommandId;
pub use command_status::CommandStatus;
pub use data_coding::{DataCoding, IndicationType, MessageClass, MessageWaitingInfo};
pub use data_sm::{DataSm, DataSmResponse};
pub use deliver_sm::{DeliverSm, DeliverSmResponse};
pub use enquire_link::{EnquireLink, EnquireLinkResponse};
pub use esm_class::EsmClass;
pub use generic_nack::GenericNack;
pub use interface_version::InterfaceVersion;
pub use message_state::MessageState;
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use outbind::Outbind;
pub use priority_flag::PriorityFlag;
pub use query_broadcast_sm::{QueryBroadcastSm, QueryBroadcastSmResponse};
pub use query_sm::{QuerySm, QuerySmResponse};
pub use registered_delivery::RegisteredDelivery;
pub use replace_sm::{ReplaceSm, ReplaceSmResponse};
pub use short_message::ShortMessage;
pub use submit_multi::{SubmitMulti, SubmitMultiResponse};
pub use submit_sm::{SubmitSm, SubmitSmResponse};
pub use tlv::{Tags, Tlv, tags};
pub use type_of_number::TypeOfNumber;
pub use udh::{ConcatenatedHeader, UdhError, UserDataHeader};
pub use unbind::{Unbind, UnbindResponse};
