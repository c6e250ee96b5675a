//! Resource models
//!
//! Typed views of the JSON objects the REST API exchanges, per the
//! platform's documented schemas. Only fields the wrapped endpoints
//! actually send or accept are modeled; unknown fields are ignored on
//! decode.

mod channel;
mod member;
mod message;
mod user;

pub use channel::{Channel, ChannelType, Overwrite, OverwriteType};
pub use member::{Ban, Member};
pub use message::Message;
pub use user::User;

#[cfg(test)]
mod tests;
