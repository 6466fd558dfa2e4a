// ABOUTME: Demo that composes a message into submit_sm PDUs and prints their wire bytes
// ABOUTME: Shows coding selection, concatenation and reading the PDUs back through the frame reader

use argh::FromArgs;
use smpp_pdu::coding::CodingPolicy;
use smpp_pdu::datatypes::{Address, SubmitSm};
use smpp_pdu::{CodecConfig, Frame, MessageComposer, Pdu, read_pdu, reassemble, write_pdu};
use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Compose a text message into submit_sm PDUs
#[derive(FromArgs)]
struct CliArgs {
    /// whether or not to enable debugging
    #[argh(switch, short = 'd')]
    debugging: bool,

    /// coding policy, "all" or "safe" (default: all)
    #[argh(option, default = "CodingPolicy::All")]
    policy: CodingPolicy,

    /// the peer does not accept the GSM 7-bit alphabet
    #[argh(switch)]
    no_gsm7: bool,

    /// octets per segment (default: 140)
    #[argh(option, default = "140")]
    segment_budget: usize,

    /// concatenation reference shared by the parts (default: 1)
    #[argh(option, short = 'r', default = "1")]
    reference: u16,

    /// the message to send
    #[argh(option, short = 'm')]
    message: String,

    /// the recipient telephone number
    #[argh(option, short = 't')]
    to: String,

    /// the sender, alphanumeric or a telephone number
    #[argh(option, short = 'f')]
    from: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let level = if cli_args.debugging {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = CodecConfig::new()
        .policy(cli_args.policy)
        .gsm7_capable(!cli_args.no_gsm7)
        .segment_budget(cli_args.segment_budget);
    let composer = MessageComposer::new(config);

    let coding = composer.coding_for(&cli_args.message);
    println!("coding: {coding} ({})", coding.charset_name());

    let source = if cli_args.from.chars().all(|c| c.is_ascii_digit()) {
        Address::international(cli_args.from)
    } else {
        Address::alphanumeric(cli_args.from)
    };
    let destination = Address::international(cli_args.to);

    let mut wire = Vec::new();
    let parts = composer.compose(&cli_args.message, cli_args.reference)?;
    for (sequence, part) in (1..).zip(parts) {
        let submit_sm = SubmitSm::new(source.clone(), destination.clone())
            .with_message(part)
            .with_sequence_number(sequence);
        let dump = write_pdu(&mut wire, &submit_sm).await?;
        println!("-> {dump}");
    }

    let mut reader = wire.as_slice();
    let mut received = Vec::new();
    while !reader.is_empty() {
        let pdu = read_pdu(&mut reader).await?;
        if let Frame::SubmitSm(submit_sm) = pdu.frame {
            received.push(submit_sm.message);
        }
    }

    match reassemble(&received) {
        Some(text) => println!("<- {text}"),
        None => {
            if let Some(mut message) = received.pop() {
                println!("<- {}", message.decode_text());
            }
        }
    }

    Ok(())
}
