//! Structured names: sequences of masked text components joined by a single
//! delimiter character.
//!
//! ```
//! use segname_core::{Delimiter, Name};
//!
//! let name = Name::parse("oss\\.cs.fau.de", Delimiter::DEFAULT).unwrap();
//! assert_eq!(name.no_components(), 3);
//! assert_eq!(name.as_string(), "oss.cs.fau.de");
//!
//! let longer = name.append("www").unwrap();
//! assert_eq!(longer.no_components(), 4);
//! assert_eq!(name.no_components(), 3);
//! ```

pub mod codec;
pub mod contract;
pub mod delimiter;
pub mod error;
pub mod name;
pub mod store;

pub use codec::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use delimiter::Delimiter;
pub use error::{ArgumentError, Error, ErrorKind, Result};
pub use name::{Name, NameBuilder};
pub use store::{Backing, ComponentStore};
