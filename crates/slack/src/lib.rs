//! The command gateway surface.
//!
//! Models the inbound slash-command payload, verifies the gateway's request
//! signatures, and provides the outbound reply port ([`Replier`]) with its
//! Web API implementation.

pub mod command;
pub mod reply;
pub mod signature;

pub use command::SlashCommand;
pub use reply::{Replier, ReplyError, SlackClient};
pub use signature::{SignatureError, sign, verify_signature};
