#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::ModelError;

/// Identifier of the single user whose data is being imported.
///
/// Every row of a run carries the same value. It is configuration, not
/// something read from the source export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: Uuid) -> Result<Self, ModelError> {
        if value.is_nil() {
            return Err(ModelError::NilUserId);
        }
        Ok(Self(value))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let uuid = Uuid::parse_str(trimmed).map_err(|error| ModelError::InvalidUserId {
            value: trimmed.to_string(),
            reason: error.to_string(),
        })?;
        Self::new(uuid)
    }
}

impl TryFrom<String> for UserId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Where a source record came from, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "number", rename_all = "lowercase")]
pub enum RecordRef {
    /// 1-based data row of a CSV file (header excluded).
    Row(usize),
    /// 1-based line of a text export.
    Line(usize),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Row(number) => write!(f, "row {number}"),
            RecordRef::Line(number) => write!(f, "line {number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_hyphenated_lowercase() {
        let id: UserId = "8E3DDF21-4153-4838-ABC6-47D553A5D905".parse().unwrap();
        assert_eq!(id.to_string(), "8e3ddf21-4153-4838-abc6-47d553a5d905");
    }

    #[test]
    fn rejects_nil_and_garbage() {
        assert!(matches!(
            "00000000-0000-0000-0000-000000000000".parse::<UserId>(),
            Err(ModelError::NilUserId)
        ));
        assert!(matches!(
            "not-a-uuid".parse::<UserId>(),
            Err(ModelError::InvalidUserId { .. })
        ));
    }

    #[test]
    fn record_ref_display() {
        assert_eq!(RecordRef::Row(3).to_string(), "row 3");
        assert_eq!(RecordRef::Line(12).to_string(), "line 12");
    }
}
