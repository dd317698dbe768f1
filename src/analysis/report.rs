use super::formatter::TeamMatchesData;
use super::match_stats::{calculate_match_stats, MatchStat};
use serde::Serialize;

/// Everything a loaded team-matches view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchesReport {
    pub data: TeamMatchesData,
    pub stats: [MatchStat; 3],
    pub total_matches: usize,
}

impl TeamMatchesReport {
    pub fn new(data: TeamMatchesData) -> Self {
        let stats = calculate_match_stats(&data.recent_matches);
        let total_matches = data.recent_matches.len();
        TeamMatchesReport {
            data,
            stats,
            total_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::formatter::format_team_matches;
    use crate::api::models::{MatchDetailsDto, TeamMatchesDto};

    #[test]
    fn totals_agree_with_stats() {
        let recent = ["Won", "Won", "Lost", "Abandoned"]
            .iter()
            .map(|s| MatchDetailsDto {
                match_status: Some(s.to_string()),
                ..Default::default()
            })
            .collect();
        let report = TeamMatchesReport::new(format_team_matches(&TeamMatchesDto {
            team_banner_url: None,
            latest_match_details: MatchDetailsDto::default(),
            recent_matches: recent,
        }));

        assert_eq!(report.total_matches, 4);
        assert_eq!(report.stats.iter().map(|s| s.value).sum::<usize>(), 4);
        assert_eq!(report.stats[0].value, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalMatches"], 4);
        assert_eq!(json["stats"][2]["name"], "Drawn");
        assert_eq!(json["stats"][2]["value"], 1);
    }
}
