//! # madmimi-client
//!
//! Thin synchronous client for the [Mad Mimi](https://madmimi.com) email
//! marketing HTTP API.
//!
//! ## Overview
//!
//! The crate wraps the four Mad Mimi endpoints behind a single [`Client`]:
//! sending promotion mail (single recipient or a named audience list),
//! creating audience lists, adding one member to a list, and bulk-importing
//! members as CSV. All real work happens on the remote API; this crate only
//! formats parameters, issues one HTTP request per operation, and hands back
//! the raw response body.
//!
//! ## Design notes
//!
//! - **Synchronous**: every operation performs at most one blocking HTTP
//!   round trip. There is no retry, no connection state beyond reqwest's
//!   pool, and no shared mutable state, so a [`Client`] can be used from
//!   independent call sites without coordination.
//! - **Opaque responses**: the remote API reports errors in response bodies
//!   that this crate does not interpret. Only transport-level failures become
//!   [`Error::Transport`]; everything else is returned verbatim.
//! - **Explicit configuration**: account credentials live in a
//!   [`ConfigRegistry`] of named groups passed at construction. There is no
//!   process-global configuration lookup.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use madmimi_client::{Client, MailRequest};
//!
//! fn main() -> madmimi_client::Result<()> {
//!     let client = Client::builder()
//!         .config_value("username", "info@example.com")
//!         .config_value("api_key", "secret")
//!         .build()?;
//!
//!     let response = client.send_mail(
//!         MailRequest::new()
//!             .promotion_name("signup")
//!             .recipients("Andrew Edwards <andrew@example.com>")
//!             .subject("Welcome")
//!             .from("Example team <info@example.com>")
//!             .structured_body([("username", "Andrew")]),
//!     )?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The [`Client`], its builder, and mail request types |
//! | [`config`] | Configuration groups and merge semantics |
//! | [`format`] | CSV and YAML payload formatting |
//! | [`transport`] | The shared HTTP request sender |

pub mod client;
pub mod config;
pub mod format;
pub mod transport;

pub mod error;
pub use error::Error;

pub use client::{Client, ClientBuilder, MailBody, MailRequest};
pub use config::{ConfigMap, ConfigRegistry};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
