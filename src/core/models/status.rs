//! Class status levels
//!
//! Describes how far a class label can currently be trusted. Variants are
//! declared in precedence order, highest first, so the derived `Ord` doubles
//! as the aggregation order.

use serde::{Deserialize, Serialize};

/// Trust level of a class label
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The label no longer names a known class
    Invalid,
    /// The sibling set under the label's parent is still being enumerated
    CoverageStaged,
    /// The class gained a finer-grained child but is still usable
    GranularityStaged,
    /// Trusted
    #[default]
    Valid,
}

impl Status {
    /// All statuses, highest precedence first
    pub const ALL: [Self; 4] = [
        Self::Invalid,
        Self::CoverageStaged,
        Self::GranularityStaged,
        Self::Valid,
    ];

    /// Collapse several statuses into the one that takes precedence.
    ///
    /// Only set membership matters, never the order of `statuses`.
    /// Returns `None` for an empty input.
    ///
    /// ```
    /// use taxostage::core::models::Status;
    ///
    /// let winner = Status::aggregate([Status::Valid, Status::GranularityStaged]);
    /// assert_eq!(winner, Some(Status::GranularityStaged));
    /// assert_eq!(Status::aggregate(std::iter::empty()), None);
    /// ```
    #[must_use]
    pub fn aggregate<I>(statuses: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        statuses.into_iter().min()
    }

    /// Textual value used in reports and fixtures
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::CoverageStaged => "coverage_staged",
            Self::GranularityStaged => "granularity_staged",
            Self::Valid => "valid",
        }
    }

    /// Whether the status is anything other than `Valid`
    #[must_use]
    pub const fn is_staged(self) -> bool {
        !matches!(self, Self::Valid)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "invalid" => Ok(Self::Invalid),
            "coverage_staged" => Ok(Self::CoverageStaged),
            "granularity_staged" => Ok(Self::GranularityStaged),
            "valid" => Ok(Self::Valid),
            _ => Err(format!(
                "Invalid status: {s}. Use: invalid, coverage_staged, granularity_staged, valid"
            )),
        }
    }
}
