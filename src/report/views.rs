//! Dashboard views built from match collections

use super::Report;
use crate::stats::{
    compute_head_to_head, compute_team_stats, distinct_teams, filter_by_team_and_season,
    matches_involving, result_breakdown, season_range, toss_correlation, HeadToHeadTally,
    ResultBreakdown, SeasonRange, TeamStats, TossCorrelation,
};
use crate::{MatchRecord, Result};
use serde::Serialize;
use std::fmt::Write;

const RULE: &str = "───────────────────────────────";
const BAR_WIDTH: usize = 30;

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH + max - 1) / max;
    "█".repeat(len)
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// One team's season, limited to matches where it was listed as team1
#[derive(Debug, Clone, Serialize)]
pub struct TeamOverview {
    pub team: String,
    pub season: i32,
    pub stats: TeamStats,
    pub results: ResultBreakdown,
}

impl TeamOverview {
    pub fn build(matches: &[MatchRecord], team: &str, season: i32) -> Result<Self> {
        let selected = filter_by_team_and_season(matches, team, season)?;
        Ok(TeamOverview {
            team: team.to_string(),
            season,
            stats: compute_team_stats(&selected, team)?,
            results: result_breakdown(&selected),
        })
    }
}

impl Report for TeamOverview {
    fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Overview for {} in {}", self.team, self.season);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "  Matches Played:  {}", self.stats.played);
        let _ = writeln!(out, "  Wins:            {}", self.stats.won);
        let _ = writeln!(out, "  Win %:           {:.2}", self.stats.win_pct);

        let _ = writeln!(out, "\nMatch Result Breakdown");
        let _ = writeln!(out, "{}", RULE);
        if self.results.is_empty() {
            let _ = writeln!(out, "  No matches");
        }
        let max = self.results.counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let width = self
            .results
            .counts
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, count) in &self.results.counts {
            let _ = writeln!(
                out,
                "  {:<width$}  {} {}",
                label,
                bar(*count, max),
                count,
                width = width
            );
        }
        out
    }

    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = vec!["team".into(), "season".into(), "result".into(), "count".into()];
        let rows = self
            .results
            .counts
            .iter()
            .map(|(label, count)| {
                vec![
                    self.team.clone(),
                    self.season.to_string(),
                    label.clone(),
                    count.to_string(),
                ]
            })
            .collect();
        (header, rows)
    }
}

/// Two teams' overall records and their direct meetings
#[derive(Debug, Clone, Serialize)]
pub struct TeamComparison {
    pub team_a: String,
    pub team_b: String,
    pub stats_a: TeamStats,
    pub stats_b: TeamStats,
    pub head_to_head: HeadToHeadTally,
}

impl TeamComparison {
    pub fn build(matches: &[MatchRecord], team_a: &str, team_b: &str) -> Result<Self> {
        let head_to_head = compute_head_to_head(matches, team_a, team_b)?;
        let stats_a = compute_team_stats(&matches_involving(matches, team_a)?, team_a)?;
        let stats_b = compute_team_stats(&matches_involving(matches, team_b)?, team_b)?;
        Ok(TeamComparison {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
            stats_a,
            stats_b,
            head_to_head,
        })
    }

    fn metrics(&self) -> Vec<(&'static str, String, String)> {
        let (a, b) = (&self.stats_a, &self.stats_b);
        vec![
            ("Matches Played", a.played.to_string(), b.played.to_string()),
            ("Matches Won", a.won.to_string(), b.won.to_string()),
            ("Win %", format!("{:.2}", a.win_pct), format!("{:.2}", b.win_pct)),
            ("Toss Won", a.toss_won.to_string(), b.toss_won.to_string()),
            (
                "Toss-Win Conversion %",
                format!("{:.2}", a.toss_conversion_pct),
                format!("{:.2}", b.toss_conversion_pct),
            ),
        ]
    }
}

impl Report for TeamComparison {
    fn table(&self) -> String {
        let mut out = String::new();
        let col = self.team_a.len().max(self.team_b.len()).max(8);
        let _ = writeln!(out, "Team vs Team Comparison");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(
            out,
            "  {:<22} {:>col$}  {:>col$}",
            "",
            self.team_a,
            self.team_b,
            col = col
        );
        for (name, a, b) in self.metrics() {
            let _ = writeln!(out, "  {:<22} {:>col$}  {:>col$}", name, a, b, col = col);
        }

        let _ = writeln!(out, "\nHead-to-Head: {} vs {}", self.team_a, self.team_b);
        let _ = writeln!(out, "{}", RULE);
        let wins_a = self.head_to_head.wins_for(&self.team_a);
        let wins_b = self.head_to_head.wins_for(&self.team_b);
        let max = wins_a.max(wins_b);
        for (team, wins) in [(&self.team_a, wins_a), (&self.team_b, wins_b)] {
            let _ = writeln!(out, "  {:<col$}  {} {}", team, bar(wins, max), wins, col = col);
        }
        let _ = writeln!(
            out,
            "  {} meetings, {} without a result",
            self.head_to_head.meetings(),
            self.head_to_head.undecided()
        );
        out
    }

    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = vec!["metric".into(), self.team_a.clone(), self.team_b.clone()];
        let mut rows: Vec<Vec<String>> = self
            .metrics()
            .into_iter()
            .map(|(name, a, b)| vec![name.to_string(), a, b])
            .collect();
        rows.push(vec![
            "Head-to-Head Wins".to_string(),
            self.head_to_head.wins_for(&self.team_a).to_string(),
            self.head_to_head.wins_for(&self.team_b).to_string(),
        ]);
        (header, rows)
    }
}

/// Toss winner vs match winner over the whole collection
#[derive(Debug, Clone, Serialize)]
pub struct TossSummary {
    pub correlation: TossCorrelation,
    pub won_both_pct: f64,
    pub did_not_pct: f64,
}

impl TossSummary {
    pub fn build(matches: &[MatchRecord]) -> Self {
        let correlation = toss_correlation(matches);
        TossSummary {
            correlation,
            won_both_pct: correlation.won_both_pct(),
            did_not_pct: correlation.did_not_pct(),
        }
    }
}

impl Report for TossSummary {
    fn table(&self) -> String {
        let c = &self.correlation;
        let max = c.won_both.max(c.did_not);
        let mut out = String::new();
        let _ = writeln!(out, "Toss vs Match Win Correlation (Overall)");
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(
            out,
            "  Won Both Toss & Match  {} {} ({:.1}%)",
            bar(c.won_both, max),
            c.won_both,
            self.won_both_pct
        );
        let _ = writeln!(
            out,
            "  Did Not Win Both       {} {} ({:.1}%)",
            bar(c.did_not, max),
            c.did_not,
            self.did_not_pct
        );
        out
    }

    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let c = &self.correlation;
        (
            vec!["outcome".into(), "matches".into(), "pct".into()],
            vec![
                vec![
                    "won_both".into(),
                    c.won_both.to_string(),
                    format!("{:.2}", self.won_both_pct),
                ],
                vec![
                    "did_not".into(),
                    c.did_not.to_string(),
                    format!("{:.2}", self.did_not_pct),
                ],
            ],
        )
    }
}

/// Teams and seasons available for selection
#[derive(Debug, Clone, Serialize)]
pub struct TeamList {
    pub teams: Vec<String>,
    pub seasons: Option<SeasonRange>,
}

impl TeamList {
    pub fn build(matches: &[MatchRecord]) -> Self {
        TeamList {
            teams: distinct_teams(matches),
            seasons: season_range(matches),
        }
    }
}

impl Report for TeamList {
    fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Teams");
        let _ = writeln!(out, "{}", RULE);
        for team in &self.teams {
            let _ = writeln!(out, "  {}", team);
        }
        match self.seasons {
            Some(range) => {
                let _ = writeln!(out, "\nSeasons: {} to {}", range.first, range.last);
            }
            None => {
                let _ = writeln!(out, "\nNo matches loaded");
            }
        }
        out
    }

    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let rows = self.teams.iter().map(|t| vec![t.clone()]).collect();
        (vec!["team".into()], rows)
    }
}

/// The first rows of the dataset
#[derive(Debug, Clone, Serialize)]
pub struct RawMatches {
    pub total: usize,
    pub matches: Vec<MatchRecord>,
}

impl RawMatches {
    pub fn build(matches: &[MatchRecord], limit: usize) -> Self {
        RawMatches {
            total: matches.len(),
            matches: matches.iter().take(limit).cloned().collect(),
        }
    }
}

impl Report for RawMatches {
    fn table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Showing {} of {} matches",
            self.matches.len(),
            self.total
        );
        let _ = writeln!(out, "{}", RULE);
        for m in &self.matches {
            let date = m.date.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
            let _ = writeln!(
                out,
                "  {} {:<10} {} vs {} | toss: {} | winner: {} ({})",
                m.season,
                date,
                m.team1,
                m.team2,
                or_dash(&m.toss_winner),
                or_dash(&m.winner),
                m.result
            );
        }
        out
    }

    fn rows(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let header = [
            "id",
            "season",
            "city",
            "date",
            "team1",
            "team2",
            "toss_winner",
            "toss_decision",
            "result",
            "winner",
            "win_by_runs",
            "win_by_wickets",
            "player_of_match",
            "venue",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();

        let rows = self
            .matches
            .iter()
            .map(|m| {
                vec![
                    m.id.map(|id| id.to_string()).unwrap_or_default(),
                    m.season.to_string(),
                    m.city.clone().unwrap_or_default(),
                    m.date.map(|d| d.to_string()).unwrap_or_default(),
                    m.team1.clone(),
                    m.team2.clone(),
                    m.toss_winner.clone().unwrap_or_default(),
                    m.toss_decision.clone().unwrap_or_default(),
                    m.result.clone(),
                    m.winner.clone().unwrap_or_default(),
                    m.win_by_runs.to_string(),
                    m.win_by_wickets.to_string(),
                    m.player_of_match.clone().unwrap_or_default(),
                    m.venue.clone().unwrap_or_default(),
                ]
            })
            .collect();
        (header, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{render, OutputFormat};
    use crate::StatsError;

    fn scenario() -> Vec<MatchRecord> {
        vec![
            MatchRecord::new("A", "B", 2020, Some("A"), Some("A"), "normal"),
            MatchRecord::new("A", "B", 2020, Some("B"), Some("A"), "normal"),
            MatchRecord::new("B", "A", 2021, Some("A"), Some("B"), "normal"),
            MatchRecord::new("C", "A", 2021, None, Some("C"), "no result"),
        ]
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 0), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 10), "");
    }

    #[test]
    fn test_overview() {
        let overview = TeamOverview::build(&scenario(), "A", 2020).unwrap();
        assert_eq!(overview.stats.played, 2);
        assert_eq!(overview.stats.won, 1);
        assert_eq!(overview.results.count("normal"), 2);

        let table = render(&overview, OutputFormat::Table).unwrap();
        assert!(table.contains("Overview for A in 2020"));
        assert!(table.contains("Matches Played:  2"));
        assert!(table.contains("Win %:           50.00"));
    }

    #[test]
    fn test_overview_empty_season() {
        let overview = TeamOverview::build(&scenario(), "A", 1999).unwrap();
        assert_eq!(overview.stats.played, 0);
        assert!(overview.table().contains("No matches"));
    }

    #[test]
    fn test_comparison() {
        let comparison = TeamComparison::build(&scenario(), "A", "B").unwrap();
        assert_eq!(comparison.stats_a.played, 4);
        assert_eq!(comparison.stats_a.won, 2);
        assert_eq!(comparison.stats_b.played, 3);
        assert_eq!(comparison.head_to_head.wins_for("A"), 2);
        assert_eq!(comparison.head_to_head.wins_for("B"), 1);

        let csv = render(&comparison, OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("metric,A,B"));
        assert_eq!(lines.next(), Some("Matches Played,4,3"));
        assert!(csv.contains("Head-to-Head Wins,2,1"));
    }

    #[test]
    fn test_comparison_same_team() {
        assert!(matches!(
            TeamComparison::build(&scenario(), "A", "A"),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_comparison_json() {
        let comparison = TeamComparison::build(&scenario(), "A", "C").unwrap();
        let json = render(&comparison, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["head_to_head"]["wins"]["A"], 0);
        assert_eq!(value["head_to_head"]["wins"]["C"], 0);
        assert_eq!(value["head_to_head"]["meetings"], 1);
    }

    #[test]
    fn test_toss_summary() {
        let summary = TossSummary::build(&scenario());
        assert_eq!(summary.correlation.won_both, 1);
        assert_eq!(summary.correlation.did_not, 3);
        assert_eq!(summary.won_both_pct, 25.0);
        let table = summary.table();
        assert!(table.contains("(25.0%)"));
        assert!(table.contains("(75.0%)"));
    }

    #[test]
    fn test_team_list() {
        let list = TeamList::build(&scenario());
        assert_eq!(list.teams, vec!["A", "B", "C"]);
        assert_eq!(list.seasons, Some(SeasonRange { first: 2020, last: 2021 }));
        assert!(list.table().contains("Seasons: 2020 to 2021"));
        assert!(TeamList::build(&[]).table().contains("No matches loaded"));
    }

    #[test]
    fn test_raw_matches() {
        let raw = RawMatches::build(&scenario(), 2);
        assert_eq!(raw.total, 4);
        assert_eq!(raw.matches.len(), 2);
        let csv = render(&raw, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(raw.table().contains("Showing 2 of 4 matches"));
    }
}
