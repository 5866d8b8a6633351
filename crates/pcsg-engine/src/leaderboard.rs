//! Top-three batting and bowling per innings.
//!
//! Batters rank by runs (high first) then balls faced (low first); bowlers
//! by wickets (high first) then run rate (low first). Missing numbers sort
//! after present ones. Sorting is stable, so ties keep scorecard order.

use std::cmp::Ordering;

use pcsg_core::{BattingEntry, BowlingEntry, PlayerLine, LEADERBOARD_SIZE};

use crate::players::{format_batting_score, format_bowling_figures, format_player_name};

/// Batting entries in leaderboard order
pub fn rank_batters(entries: &[BattingEntry]) -> Vec<&BattingEntry> {
    let mut ranked: Vec<&BattingEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| {
        compare_missing_last(a.runs, b.runs, Direction::Descending)
            .then_with(|| compare_missing_last(a.balls, b.balls, Direction::Ascending))
    });
    ranked
}

/// Bowling entries in leaderboard order
pub fn rank_bowlers(entries: &[BowlingEntry]) -> Vec<&BowlingEntry> {
    let mut ranked: Vec<&BowlingEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| {
        compare_missing_last(a.wickets, b.wickets, Direction::Descending)
            .then_with(|| compare_missing_last(a.run_rate(), b.run_rate(), Direction::Ascending))
    });
    ranked
}

/// Display lines for the top batters; empty lines fill missing ranks
pub fn batting_lines(entries: &[BattingEntry]) -> [PlayerLine; LEADERBOARD_SIZE] {
    let ranked = rank_batters(entries);
    std::array::from_fn(|rank| {
        ranked
            .get(rank)
            .map(|entry| PlayerLine {
                name: format_player_name(&entry.batsman_name),
                detail: format_batting_score(entry.runs, entry.balls, &entry.how_out),
            })
            .unwrap_or_default()
    })
}

/// Display lines for the top bowlers; empty lines fill missing ranks
pub fn bowling_lines(entries: &[BowlingEntry]) -> [PlayerLine; LEADERBOARD_SIZE] {
    let ranked = rank_bowlers(entries);
    std::array::from_fn(|rank| {
        ranked
            .get(rank)
            .map(|entry| PlayerLine {
                name: format_player_name(&entry.bowler_name),
                detail: format_bowling_figures(entry.wickets, entry.runs, &entry.overs),
            })
            .unwrap_or_default()
    })
}

#[derive(Clone, Copy)]
enum Direction {
    Ascending,
    Descending,
}

fn compare_missing_last<T: PartialOrd>(a: Option<T>, b: Option<T>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcsg_core::Overs;

    fn batter(name: &str, runs: Option<u32>, balls: Option<u32>) -> BattingEntry {
        BattingEntry {
            batsman_name: name.to_string(),
            runs,
            balls,
            how_out: "b Bowler".to_string(),
        }
    }

    fn bowler(name: &str, wickets: u32, runs: u32, overs: &str) -> BowlingEntry {
        BowlingEntry {
            bowler_name: name.to_string(),
            wickets: Some(wickets),
            runs: Some(runs),
            overs: Overs::new(overs),
        }
    }

    #[test]
    fn test_batters_runs_then_balls() {
        let entries = vec![
            batter("A", Some(30), Some(20)),
            batter("B", Some(30), Some(15)),
            batter("C", Some(45), Some(30)),
        ];
        let names: Vec<&str> = rank_batters(&entries).iter().map(|e| e.batsman_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_batters_ties_keep_order() {
        let entries = vec![
            batter("A", Some(10), None),
            batter("B", Some(10), None),
            batter("C", Some(10), None),
        ];
        let names: Vec<&str> = rank_batters(&entries).iter().map(|e| e.batsman_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_runs_sort_last() {
        let entries = vec![batter("DNB", None, None), batter("A", Some(0), Some(1))];
        assert_eq!(rank_batters(&entries)[0].batsman_name, "A");
    }

    #[test]
    fn test_missing_balls_after_known_balls() {
        let entries = vec![batter("A", Some(20), None), batter("B", Some(20), Some(40))];
        assert_eq!(rank_batters(&entries)[0].batsman_name, "B");
    }

    #[test]
    fn test_bowlers_wickets_then_economy() {
        let entries = vec![
            bowler("Expensive", 2, 40, "5"),
            bowler("Tidy", 2, 20, "10"),
            bowler("Star", 4, 50, "10"),
            bowler("Wicketless", 0, 5, "4"),
        ];
        let names: Vec<&str> = rank_bowlers(&entries).iter().map(|e| e.bowler_name.as_str()).collect();
        assert_eq!(names, vec!["Star", "Tidy", "Expensive", "Wicketless"]);
    }

    #[test]
    fn test_lines_fill_missing_ranks() {
        let lines = batting_lines(&[batter("Alastair Cook", Some(88), Some(120))]);
        assert_eq!(lines[0].name, "ALASTAIR COOK");
        assert_eq!(lines[0].detail, "88 (120)");
        assert_eq!(lines[1], PlayerLine::default());
        assert_eq!(lines[2], PlayerLine::default());
    }

    #[test]
    fn test_bowling_lines() {
        let lines = bowling_lines(&[bowler("J Anderson", 3, 41, "9.3"), bowler("S Broad", 1, 30, "10.0")]);
        assert_eq!(lines[0].detail, "3-41 (9.3)");
        assert_eq!(lines[1].detail, "1-30 (10)");
        assert_eq!(lines[2].name, "");
    }
}
