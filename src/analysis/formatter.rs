use crate::api::models::{MatchDetailsDto, TeamMatchesDto};
use serde::Serialize;

/// One normalized match, either the latest match or a recent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub umpires: Option<Vec<String>>,
    pub result: Option<String>,
    pub man_of_the_match: Option<String>,
    pub id: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub competing_team: Option<String>,
    pub competing_team_logo: Option<String>,
    pub first_innings: Option<String>,
    pub second_innings: Option<String>,
    pub match_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMatchesData {
    #[serde(rename = "teamBannerURL")]
    pub team_banner_url: Option<String>,
    #[serde(rename = "latestMatch")]
    pub latest_match: MatchRecord,
    /// API response order
    #[serde(rename = "recentMatches")]
    pub recent_matches: Vec<MatchRecord>,
}

impl From<&MatchDetailsDto> for MatchRecord {
    fn from(raw: &MatchDetailsDto) -> Self {
        MatchRecord {
            umpires: raw.umpires.clone(),
            result: raw.result.clone(),
            man_of_the_match: raw.man_of_the_match.clone(),
            id: raw.id.clone(),
            date: raw.date.clone(),
            venue: raw.venue.clone(),
            competing_team: raw.competing_team.clone(),
            competing_team_logo: raw.competing_team_logo.clone(),
            first_innings: raw.first_innings.clone(),
            second_innings: raw.second_innings.clone(),
            match_status: raw.match_status.clone(),
        }
    }
}

pub fn format_match(raw: &MatchDetailsDto) -> MatchRecord {
    MatchRecord::from(raw)
}

pub fn format_team_matches(raw: &TeamMatchesDto) -> TeamMatchesData {
    TeamMatchesData {
        team_banner_url: raw.team_banner_url.clone(),
        latest_match: format_match(&raw.latest_match_details),
        recent_matches: raw.recent_matches.iter().map(format_match).collect(),
    }
}
