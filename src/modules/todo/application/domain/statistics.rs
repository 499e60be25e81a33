use serde::Serialize;
use tracing::warn;

/// Aggregate counts for one owner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TodoStatistics {
    pub total: u64,
    pub completed: u64,
    pub incomplete: u64,
    pub overdue: u64,
    pub completion_rate: f64,
}

impl TodoStatistics {
    pub fn from_counts(total: u64, completed: u64, incomplete: u64, overdue: u64) -> Self {
        Self {
            total,
            completed,
            incomplete,
            overdue,
            completion_rate: completion_rate(total, completed),
        }
    }
}

/// Percentage of completed todos; 0.0 when there are none.
pub fn completion_rate(total: u64, completed: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsOutcome {
    Computed(TodoStatistics),
    Unavailable(String),
}

impl StatisticsOutcome {
    /// Zeroed statistics when the counts could not be read.
    pub fn into_statistics_or_empty(self) -> TodoStatistics {
        match self {
            StatisticsOutcome::Computed(stats) => stats,
            StatisticsOutcome::Unavailable(reason) => {
                warn!(reason = %reason, "Statistics unavailable, showing zeroes");
                TodoStatistics::default()
            }
        }
    }
}
