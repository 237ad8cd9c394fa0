//! Overtime incentive rates.
//!
//! Category and level tier arrive as free text from the overtime sheet. They
//! are classified here once and the rate table works on the classification.

use lembur_utils::parse_hours;

/// Lower-cased marker which turns a category into holiday overtime.
pub const HOLIDAY_MARKER: &str = "libur";
pub const SUPERVISOR_LEVEL: &str = "supervisor";
pub const DEFAULT_LEVEL_TIER: &str = "staff";
pub const DEFAULT_CATEGORY: &str = "Hari Kerja";

const WORKDAY_MINIMUM_HOURS: i64 = 2;
const WORKDAY_STAFF_BASE: i64 = 40_000;
const WORKDAY_STAFF_PER_HOUR: i64 = 20_000;
const WORKDAY_SUPERVISOR_BASE: i64 = 30_000;
const WORKDAY_SUPERVISOR_PER_HOUR: i64 = 15_000;

/// Holiday rates as `(minimum hours, amount)`, highest tier first.
const HOLIDAY_TIERS: [(i64, i64); 3] = [(10, 120_000), (5, 100_000), (1, 50_000)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OvertimeCategory {
    Workday,
    Holiday,
}

impl OvertimeCategory {
    /// Any category containing "libur" in any casing is holiday overtime.
    pub fn classify(category: &str) -> Self {
        if category.to_lowercase().contains(HOLIDAY_MARKER) {
            Self::Holiday
        } else {
            Self::Workday
        }
    }
}

impl From<&str> for OvertimeCategory {
    fn from(category: &str) -> Self {
        Self::classify(category)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelTier {
    Staff,
    Supervisor,
}

impl LevelTier {
    /// Only the exact string "supervisor" is a supervisor, everything else is staff.
    pub fn classify(level_tier: &str) -> Self {
        if level_tier == SUPERVISOR_LEVEL {
            Self::Supervisor
        } else {
            Self::Staff
        }
    }
}

impl From<&str> for LevelTier {
    fn from(level_tier: &str) -> Self {
        Self::classify(level_tier)
    }
}

/// Incentive for an already parsed hour count.
pub fn incentive_for_hours(hours: i64, category: OvertimeCategory, level_tier: LevelTier) -> i64 {
    match category {
        OvertimeCategory::Holiday => HOLIDAY_TIERS
            .iter()
            .find(|(minimum, _)| hours >= *minimum)
            .map(|(_, amount)| *amount)
            .unwrap_or(0),
        OvertimeCategory::Workday if hours < WORKDAY_MINIMUM_HOURS => 0,
        OvertimeCategory::Workday => {
            let (base, per_hour) = match level_tier {
                LevelTier::Supervisor => (WORKDAY_SUPERVISOR_BASE, WORKDAY_SUPERVISOR_PER_HOUR),
                LevelTier::Staff => (WORKDAY_STAFF_BASE, WORKDAY_STAFF_PER_HOUR),
            };
            base.saturating_add((hours - WORKDAY_MINIMUM_HOURS).saturating_mul(per_hour))
        }
    }
}

/// Incentive in rupiah for one overtime entry.
///
/// Never fails: unreadable hours count as zero, unknown categories as workday
/// overtime and unknown level tiers as staff.
pub fn calculate_incentive(hours_field: &str, category: &str, level_tier: &str) -> i64 {
    incentive_for_hours(
        parse_hours(hours_field),
        OvertimeCategory::classify(category),
        LevelTier::classify(level_tier),
    )
}
