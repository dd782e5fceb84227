//! CSV loader for IPL match files
//!
//! Columns are located by header name. `team1`, `team2`, `season`, `winner`,
//! `toss_winner` and `result` are required; the other IPL columns are read
//! when present.

use crate::{MatchRecord, Result, StatsError};
use chrono::NaiveDate;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = ["team1", "team2", "season", "winner", "toss_winner", "result"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Load all match records from a CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<MatchRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let matches = load_from_reader(file)?;
    log::info!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

/// Load match records from any CSV source with a header row
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<MatchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(reader.headers()?)?;

    let mut matches = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        matches.push(columns.parse_row(&row, i + 1)?);
    }

    log::debug!("Parsed {} match rows", matches.len());
    Ok(matches)
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct Columns {
    team1: usize,
    team2: usize,
    season: usize,
    winner: usize,
    toss_winner: usize,
    result: usize,
    id: Option<usize>,
    city: Option<usize>,
    date: Option<usize>,
    toss_decision: Option<usize>,
    win_by_runs: Option<usize>,
    win_by_wickets: Option<usize>,
    player_of_match: Option<usize>,
    venue: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
        };

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| find(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(StatsError::InvalidInput(format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let required = |name: &str| {
            find(name).ok_or_else(|| StatsError::InvalidInput(format!("missing column {}", name)))
        };

        Ok(Columns {
            team1: required("team1")?,
            team2: required("team2")?,
            season: required("season")?,
            winner: required("winner")?,
            toss_winner: required("toss_winner")?,
            result: required("result")?,
            id: find("id"),
            city: find("city"),
            date: find("date"),
            toss_decision: find("toss_decision"),
            win_by_runs: find("win_by_runs"),
            win_by_wickets: find("win_by_wickets"),
            player_of_match: find("player_of_match"),
            venue: find("venue"),
        })
    }

    fn parse_row(&self, row: &StringRecord, line: usize) -> Result<MatchRecord> {
        let cell = |idx: usize| non_missing(row.get(idx).unwrap_or(""));
        let optional = |idx: Option<usize>| idx.and_then(cell).map(str::to_string);

        let team1 = cell(self.team1).ok_or_else(|| row_error(line, "team1 is empty"))?;
        let team2 = cell(self.team2).ok_or_else(|| row_error(line, "team2 is empty"))?;
        let season_raw = row.get(self.season).unwrap_or("");
        let season = parse_season(season_raw)
            .ok_or_else(|| row_error(line, &format!("invalid season '{}'", season_raw)))?;

        let date = self.date.and_then(cell).and_then(|raw| {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                log::debug!("Row {}: unrecognised date '{}'", line, raw);
            }
            parsed
        });

        Ok(MatchRecord {
            id: self.id.and_then(cell).and_then(|v| v.parse().ok()),
            season,
            city: optional(self.city),
            date,
            team1: team1.to_string(),
            team2: team2.to_string(),
            toss_winner: optional(Some(self.toss_winner)),
            toss_decision: optional(self.toss_decision),
            result: cell(self.result).unwrap_or("").to_string(),
            winner: optional(Some(self.winner)),
            win_by_runs: self.win_by_runs.and_then(cell).map(parse_count).unwrap_or(0),
            win_by_wickets: self.win_by_wickets.and_then(cell).map(parse_count).unwrap_or(0),
            player_of_match: optional(self.player_of_match),
            venue: optional(self.venue),
        })
    }
}

fn row_error(line: usize, message: &str) -> StatsError {
    StatsError::InvalidInput(format!("row {}: {}", line, message))
}

/// Empty cells and NA markers are absent values
fn non_missing(value: &str) -> Option<&str> {
    let value = value.trim();
    let missing = value.is_empty()
        || ["na", "nan", "null", "none"]
            .iter()
            .any(|m| value.eq_ignore_ascii_case(m));
    if missing {
        None
    } else {
        Some(value)
    }
}

/// Season as a year: an integer, an integral float such as "2020.0", or a
/// split season "2007/08" which takes the first year
fn parse_season(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    if let Some((first, second)) = raw.split_once('/') {
        let is_year_suffix = second.len() == 2 && second.bytes().all(|b| b.is_ascii_digit());
        return if is_year_suffix {
            first.parse().ok()
        } else {
            None
        };
    }
    let year = raw.parse::<f64>().ok()?;
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year);
    if year.fract() == 0.0 && in_range {
        Some(year as i32)
    } else {
        None
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_count(raw: &str) -> u32 {
    raw.parse::<u32>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v as u32)
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const IPL_SAMPLE: &str = "\
id,season,city,date,team1,team2,toss_winner,toss_decision,result,dl_applied,winner,win_by_runs,win_by_wickets,player_of_match,venue
1,2017,Hyderabad,2017-04-05,Sunrisers Hyderabad,Royal Challengers Bangalore,Royal Challengers Bangalore,field,normal,0,Sunrisers Hyderabad,35,0,Yuvraj Singh,Rajiv Gandhi International Stadium
2,2017,Pune,2017-04-06,Mumbai Indians,Rising Pune Supergiant,Rising Pune Supergiant,field,normal,0,Rising Pune Supergiant,0,7,SPD Smith,Maharashtra Cricket Association Stadium
300,2011,Delhi,21-05-2011,Delhi Daredevils,Pune Warriors,Delhi Daredevils,bat,no result,0,,0,0,,Feroz Shah Kotla
";

    #[test]
    fn test_load_ipl_layout() {
        let matches = load_from_reader(IPL_SAMPLE.as_bytes()).unwrap();
        assert_eq!(matches.len(), 3);

        let first = &matches[0];
        assert_eq!(first.id, Some(1));
        assert_eq!(first.season, 2017);
        assert_eq!(first.city.as_deref(), Some("Hyderabad"));
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2017, 4, 5));
        assert_eq!(first.team1, "Sunrisers Hyderabad");
        assert_eq!(first.winner.as_deref(), Some("Sunrisers Hyderabad"));
        assert_eq!(first.toss_winner.as_deref(), Some("Royal Challengers Bangalore"));
        assert_eq!(first.toss_decision.as_deref(), Some("field"));
        assert_eq!(first.win_by_runs, 35);
        assert_eq!(matches[1].win_by_wickets, 7);
    }

    #[test]
    fn test_absent_winner() {
        let matches = load_from_reader(IPL_SAMPLE.as_bytes()).unwrap();
        let washed_out = &matches[2];
        assert_eq!(washed_out.result, "no result");
        assert_eq!(washed_out.winner, None);
        assert_eq!(washed_out.player_of_match, None);
        assert_eq!(washed_out.date, NaiveDate::from_ymd_opt(2011, 5, 21));
    }

    #[test]
    fn test_minimal_columns_any_order() {
        let data = "result,winner,toss_winner,season,team2,team1\nnormal,B,NA,2020,B,A\n";
        let matches = load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(
            matches,
            vec![MatchRecord::new("A", "B", 2020, Some("B"), None, "normal")]
        );
    }

    #[test]
    fn test_missing_required_column() {
        let data = "team1,team2,season,winner,result\nA,B,2020,A,normal\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();
        match err {
            StatsError::InvalidInput(msg) => assert!(msg.contains("toss_winner")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_team_rejected() {
        let data = "team1,team2,season,winner,toss_winner,result\nA,,2020,A,A,normal\n";
        let err = load_from_reader(data.as_bytes()).unwrap_err();
        match err {
            StatsError::InvalidInput(msg) => assert!(msg.contains("row 1")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_season_rejected() {
        let data = "team1,team2,season,winner,toss_winner,result\nA,B,unknown,A,A,normal\n";
        assert!(matches!(
            load_from_reader(data.as_bytes()),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_season() {
        assert_eq!(parse_season("2020"), Some(2020));
        assert_eq!(parse_season("2020.0"), Some(2020));
        assert_eq!(parse_season("2007/08"), Some(2007));
        assert_eq!(parse_season(""), None);
    }

    #[test]
    fn test_parse_season_rejects_non_years() {
        assert_eq!(parse_season("2020.5"), None);
        assert_eq!(parse_season("1e10"), None);
        assert_eq!(parse_season("99999999999"), None);
        assert_eq!(parse_season("IPL-2017"), None);
        assert_eq!(parse_season("2007/2008"), None);
        assert_eq!(parse_season("NaN"), None);
        assert_eq!(parse_season("inf"), None);
    }

    #[test]
    fn test_fractional_season_row_rejected() {
        let data = "team1,team2,season,winner,toss_winner,result\nA,B,2020.5,A,A,normal\n";
        assert!(matches!(
            load_from_reader(data.as_bytes()),
            Err(StatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("12.0"), 12);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("abc"), 0);
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(IPL_SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let matches = load_csv(file.path()).unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_load_csv_missing_file() {
        assert!(matches!(
            load_csv("/nonexistent/matches.csv"),
            Err(StatsError::Io(_))
        ));
    }
}
