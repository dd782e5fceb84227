//! Match statistics
//!
//! Pure aggregation over match collections. Nothing here performs I/O or holds
//! state between calls; every function takes the records it works on.

pub mod breakdown;
pub mod filter;
pub mod head_to_head;
pub mod team;

pub use breakdown::{distinct_teams, result_breakdown, season_range, toss_correlation};
pub use breakdown::{ResultBreakdown, SeasonRange, TossCorrelation};
pub use filter::{filter_by_team_and_season, matches_involving};
pub use head_to_head::{compute_head_to_head, HeadToHeadTally};
pub use team::{compute_team_stats, TeamStats};

use crate::{Result, StatsError};

/// `part / whole` as a percentage rounded half-to-even to 2 decimals, 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}

fn require_team<'a>(team: &'a str, what: &str) -> Result<&'a str> {
    if team.trim().is_empty() {
        return Err(StatsError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(1, 2), 50.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(3, 3), 100.0);
    }

    #[test]
    fn test_percentage_ties_round_to_even() {
        assert_eq!(percentage(1, 32), 3.12);
        assert_eq!(percentage(1, 160), 0.62);
        assert_eq!(percentage(3, 32), 9.38);
    }

    #[test]
    fn test_require_team() {
        assert!(require_team("Mumbai Indians", "team").is_ok());
        assert!(matches!(
            require_team("", "team"),
            Err(StatsError::InvalidInput(_))
        ));
        assert!(require_team("   ", "team").is_err());
    }
}
