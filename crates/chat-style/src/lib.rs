//! Style values for chat text.
//!
//! This crate holds the leaf types shared by the chat markup engine:
//!
//! - [`StyleState`]: color, formatting flags, click and hover of a span
//! - [`FormatCode`] and the static [`FORMAT_CODES`] table for `§x` codes
//! - [`ClickAction`] and [`HoverEvent`]
//!
//! # Usage
//!
//! ```
//! use chat_style::{ChatColor, FormatCode, StyleState};
//!
//! let code = FormatCode::from_char('6').unwrap();
//! let style = StyleState::new().apply_code(code);
//! assert_eq!(style.color(), Some(ChatColor::Gold));
//! ```

pub mod code;
pub mod error;
pub mod event;
pub mod style;

// Re-export main types at crate root
pub use code::{COLOR_CHAR, ChatColor, FORMAT_CODES, FormatCode, Formatting, strip_codes};
pub use error::StyleError;
pub use event::{ClickAction, HoverEvent};
pub use style::StyleState;
