//! RFC 2141 URN - parsing, validation and normalization
//!
//! This library parses `urn:<nid>:<nss>` strings into a validated [`Urn`]
//! value, serializes them back into canonical form, and binds them to JSON
//! and relational storage columns.
//!
//! ```
//! use rfc2141_urn::{InvalidUrn, Urn};
//!
//! let urn = Urn::parse("URN:Example:A123%2C456").unwrap();
//! assert_eq!(urn.nid(), "example");
//! assert_eq!(urn.nss(), "A123%2C456");
//! assert_eq!(urn.to_string(), "urn:example:A123%2C456");
//!
//! assert_eq!(Urn::parse("urn:urn:reserved"), Err(InvalidUrn));
//! ```

pub mod error;
pub mod json;
#[cfg(feature = "sqlx")]
pub mod sql;
pub mod storage;
pub mod urn;

pub use error::{InvalidUrn, JsonError, ScanError};
pub use storage::{ColumnValue, FromColumn, NullUrn, ToColumn};
pub use urn::Urn;
