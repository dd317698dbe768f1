use super::formatter::MatchRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won,
    Lost,
    Drawn,
}

impl MatchOutcome {
    pub const ALL: [MatchOutcome; 3] = [MatchOutcome::Won, MatchOutcome::Lost, MatchOutcome::Drawn];

    /// Anything other than exactly "Won" or "Lost", absent included, counts as drawn.
    pub fn classify(status: Option<&str>) -> Self {
        match status {
            Some("Won") => MatchOutcome::Won,
            Some("Lost") => MatchOutcome::Lost,
            _ => MatchOutcome::Drawn,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchOutcome::Won => "Won",
            MatchOutcome::Lost => "Lost",
            MatchOutcome::Drawn => "Drawn",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MatchOutcome::Won => "#4caf50",
            MatchOutcome::Lost => "#f44336",
            MatchOutcome::Drawn => "#ff9800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchStat {
    pub name: &'static str,
    pub value: usize,
    /// Display hint only
    pub color: &'static str,
}

/// Always Won, Lost, Drawn in that order; values sum to `matches.len()`.
pub fn calculate_match_stats(matches: &[MatchRecord]) -> [MatchStat; 3] {
    let mut counts = [0usize; 3];

    for record in matches {
        counts[MatchOutcome::classify(record.match_status.as_deref()) as usize] += 1;
    }

    MatchOutcome::ALL.map(|outcome| MatchStat {
        name: outcome.name(),
        value: counts[outcome as usize],
        color: outcome.color(),
    })
}
