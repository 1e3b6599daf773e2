//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_split::prelude::*;
//!
//! let c = UriComponents::parse("//example.com/p?q").unwrap();
//! assert!(is_valid("//example.com/p?q"));
//! assert_eq!(c.host.as_deref(), Some("example.com"));
//! ```

pub use crate::{MAX_PORT, MIN_PORT, ParseError, ParseErrorKind, UriComponents, is_valid};
