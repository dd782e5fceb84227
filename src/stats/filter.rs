//! Row selection

use super::require_team;
use crate::{MatchRecord, Result};

/// Matches where `team` batted as team1 in `season`, in input order
pub fn filter_by_team_and_season(
    matches: &[MatchRecord],
    team: &str,
    season: i32,
) -> Result<Vec<MatchRecord>> {
    let team = require_team(team, "team")?;
    let selected: Vec<MatchRecord> = matches
        .iter()
        .filter(|m| m.team1 == team && m.season == season)
        .cloned()
        .collect();
    log::debug!(
        "{} of {} matches for {} in {}",
        selected.len(),
        matches.len(),
        team,
        season
    );
    Ok(selected)
}

/// Matches where `team` appears on either side, in input order
pub fn matches_involving(matches: &[MatchRecord], team: &str) -> Result<Vec<MatchRecord>> {
    let team = require_team(team, "team")?;
    Ok(matches.iter().filter(|m| m.involves(team)).cloned().collect())
}
