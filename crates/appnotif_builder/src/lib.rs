#![cfg_attr(docsrs, feature(doc_cfg))]

//! App Notification Builder
//!
//! Fluent builders for the XML fragments of a Windows app notification.
//! Each builder accumulates optional fields and renders a single element;
//! [`ToastContent`] stitches them into a full `<toast>` payload.
//!
//! # Example
//! ```rust
//! use appnotif_builder::{Button, ToastContent, Text};
//!
//! let button = Button::new("Accept")
//!   .add_argument("action", "accept")
//!   .set_input_id("reply");
//!
//! assert_eq!(
//!   button.get_xml(),
//!   "<action content=Accept arguments=action&accept; hint-inputId=reply />"
//! );
//!
//! let payload = ToastContent::new()
//!   .add_text(Text::new("Incoming call"))
//!   .add_button(button)
//!   .to_xml();
//!
//! assert!(payload.starts_with("<toast>"));
//! ```

mod structs;

pub use structs::*;

use thiserror::Error;

/// Errors raised by the fallible conveniences and by payload validation.
///
/// Builder setters themselves never fail.
#[derive(Debug, Error)]
pub enum BuilderError {
  #[error("invalid uri: {0}")]
  InvalidUri(#[from] url::ParseError),
  #[error("a toast holds at most {max} buttons, got {count}")]
  TooManyButtons { count: usize, max: usize },
  #[error("malformed xml: {0}")]
  MalformedXml(String),
}
