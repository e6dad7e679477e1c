//! Work type profiles and their daily targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Extra break time tolerated above the target before a day counts as over limit.
///
/// The same 15 minutes apply to every work type.
pub const OVER_LIMIT_MARGIN_SECS: i64 = 15 * 60;

/// Daily target profile selecting the break and productive time to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    /// Standard workday.
    #[default]
    #[serde(alias = "fullday", alias = "fd")]
    FullDay,
    /// Half lunch, optional pause.
    Hlop,
    /// Quarter lunch, optional pause.
    Qlop,
}

impl WorkType {
    pub const ALL: [Self; 3] = [Self::FullDay, Self::Hlop, Self::Qlop];

    /// Break time the day should include.
    pub const fn target_break_secs(self) -> i64 {
        match self {
            Self::FullDay => 2_700,
            Self::Hlop => 900,
            Self::Qlop => 1_800,
        }
    }

    /// Productive time required to complete the day.
    pub const fn target_productive_secs(self) -> i64 {
        match self {
            Self::FullDay => 28_800,
            Self::Hlop => 14_400,
            Self::Qlop => 21_600,
        }
    }

    /// Total break time above which the day is over limit.
    pub const fn over_limit_threshold_secs(self) -> i64 {
        self.target_break_secs() + OVER_LIMIT_MARGIN_SECS
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullDay => "full-day",
            Self::Hlop => "hlop",
            Self::Qlop => "qlop",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullDay => "Full day",
            Self::Hlop => "Half lunch, optional pause",
            Self::Qlop => "Quarter lunch, optional pause",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = UnknownWorkType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full-day" | "fullday" | "fd" => Ok(Self::FullDay),
            "hlop" => Ok(Self::Hlop),
            "qlop" => Ok(Self::Qlop),
            _ => Err(UnknownWorkType(s.to_string())),
        }
    }
}

/// Error type for unknown work type strings.
#[derive(Debug, Clone)]
pub struct UnknownWorkType(String);

impl fmt::Display for UnknownWorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown work type: {} (expected full-day, hlop or qlop)",
            self.0
        )
    }
}

impl std::error::Error for UnknownWorkType {}
