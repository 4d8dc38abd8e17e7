//! Column binding for relational storage
//!
//! A URN is stored as a single text column. [`ColumnValue`] models what a
//! generic SQL driver hands back, and [`FromColumn`]/[`ToColumn`] are the
//! read and write halves of the binding. [`NullUrn`] (or `Option<Urn>`) is
//! the nullable variant.

use crate::error::ScanError;
use crate::urn::Urn;
use tracing::debug;

/// A single value as read from, or written to, a storage column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
    Text(String),
}

impl ColumnValue {
    /// Short name of the value's representation, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Real(_) => "real",
            ColumnValue::Boolean(_) => "boolean",
            ColumnValue::Bytes(_) => "bytes",
            ColumnValue::Text(_) => "text",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }
}

/// Read a typed value out of a storage column
pub trait FromColumn: Sized {
    fn from_column(value: &ColumnValue) -> Result<Self, ScanError>;
}

/// Write a typed value into a storage column
pub trait ToColumn {
    fn to_column(&self) -> ColumnValue;
}

/// Only text is accepted. NULL is an error here; use [`NullUrn`] or
/// `Option<Urn>` for nullable columns.
impl FromColumn for Urn {
    fn from_column(value: &ColumnValue) -> Result<Self, ScanError> {
        match value {
            ColumnValue::Text(text) => Ok(Urn::parse(text)?),
            other => {
                debug!(kind = other.kind(), "unexpected column value for URN");
                Err(ScanError::UnexpectedKind(other.kind()))
            }
        }
    }
}

impl ToColumn for Urn {
    fn to_column(&self) -> ColumnValue {
        ColumnValue::Text(self.to_string())
    }
}

impl FromColumn for Option<Urn> {
    fn from_column(value: &ColumnValue) -> Result<Self, ScanError> {
        if value.is_null() {
            return Ok(None);
        }
        Urn::from_column(value).map(Some)
    }
}

impl ToColumn for Option<Urn> {
    fn to_column(&self) -> ColumnValue {
        self.as_ref().map_or(ColumnValue::Null, Urn::to_column)
    }
}

/// A URN that may be NULL
///
/// ```
/// use rfc2141_urn::{ColumnValue, FromColumn, NullUrn};
///
/// let absent = NullUrn::from_column(&ColumnValue::Null).unwrap();
/// assert!(!absent.is_valid());
///
/// let present = NullUrn::from_column(&ColumnValue::Text("urn:ns:x".into())).unwrap();
/// assert_eq!(present.urn().map(|u| u.nss()), Some("x"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NullUrn {
    urn: Option<Urn>,
}

impl NullUrn {
    pub fn new(urn: Option<Urn>) -> Self {
        Self { urn }
    }

    /// Whether the column held a value (is not NULL)
    pub fn is_valid(&self) -> bool {
        self.urn.is_some()
    }

    pub fn urn(&self) -> Option<&Urn> {
        self.urn.as_ref()
    }

    pub fn into_inner(self) -> Option<Urn> {
        self.urn
    }
}

impl From<Urn> for NullUrn {
    fn from(urn: Urn) -> Self {
        Self { urn: Some(urn) }
    }
}

impl From<Option<Urn>> for NullUrn {
    fn from(urn: Option<Urn>) -> Self {
        Self { urn }
    }
}

impl FromColumn for NullUrn {
    fn from_column(value: &ColumnValue) -> Result<Self, ScanError> {
        Option::<Urn>::from_column(value).map(NullUrn::new)
    }
}

impl ToColumn for NullUrn {
    fn to_column(&self) -> ColumnValue {
        self.urn.to_column()
    }
}
