//! Validation rules applied while normalizing a SenML pack

use crate::{Result, SenMLError, SenMLRecord};

/// Characters that may appear in a name but not at its start
const NON_LEADING: [char; 5] = ['-', ':', '.', '/', '_'];

/// Check whether `c` is allowed anywhere in a resolved name
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || NON_LEADING.contains(&c)
}

/// Check a resolved name: non-empty, restricted charset, no punctuation first.
pub fn check_name(index: usize, name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(SenMLError::EmptyName { index });
    };

    if NON_LEADING.contains(&first) || !name.chars().all(is_name_char) {
        return Err(SenMLError::bad_char(index, name));
    }

    Ok(())
}

/// Check that a record carries exactly one value, counting a sum (or an
/// active non-zero base sum) as a value only when no other value is present.
pub fn check_values(index: usize, record: &SenMLRecord, base_sum: Option<f64>) -> Result<()> {
    let count = record.value_count();
    if count > 1 {
        return Err(SenMLError::TooManyValues { index });
    }

    let has_sum = record.s.is_some() || base_sum.is_some_and(|bs| bs != 0.0);
    if count == 0 && !has_sum {
        return Err(SenMLError::NoValues { index });
    }

    Ok(())
}

/// Tracks the base version of a pack. The first record that declares one
/// fixes it; every later declaration must match. A version of zero counts as
/// not declared.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct VersionTracker {
    version: Option<u64>,
}

impl VersionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, index: usize, record: &SenMLRecord) -> Result<()> {
        match (self.version, record.bver.filter(|bver| *bver != 0)) {
            (Some(expected), Some(found)) if expected != found => Err(SenMLError::VersionChange {
                index,
                expected,
                found,
            }),
            (None, Some(found)) => {
                self.version = Some(found);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }
}
