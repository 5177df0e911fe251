//! Integer record identity shared by store-assigned entities.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier assigned by the backing store on insertion.
///
/// `0` means "not yet persisted". Valid stored identities are strictly positive.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Identity of a record that has not been persisted yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Wrap a raw value without range checks (store reconstruction).
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Wrap a caller-supplied value, rejecting anything that cannot name a stored record.
    pub fn parse_positive(value: i64, name: &str) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::invalid_id(format!(
                "{name} must be greater than 0 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
