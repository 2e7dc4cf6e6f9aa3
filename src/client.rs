//! Client interface for the Mad Mimi API.
//!
//! The public surface is deliberately small: a [`Client`] built through
//! [`ClientBuilder`], plus the [`MailRequest`] type describing one outgoing
//! promotion. Implementation details are split into submodules under
//! `src/client/`.

pub mod builder;
pub mod core;
pub mod mail;

pub use builder::ClientBuilder;
pub use core::Client;
pub use mail::{MailBody, MailRequest, PEEK_IMAGE, TRACKING_BEACON, UNSUBSCRIBE};
