use serde::{Deserialize, Deserializer};
use serde_json::Value;

// GET /ipl/{id} response
#[derive(Debug, Deserialize)]
pub struct TeamMatchesDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub team_banner_url: Option<String>,
    pub latest_match_details: MatchDetailsDto,
    pub recent_matches: Vec<MatchDetailsDto>,
}

// Shared by latest_match_details and every recent_matches entry
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MatchDetailsDto {
    #[serde(default, deserialize_with = "umpire_list")]
    pub umpires: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub man_of_the_match: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub competing_team: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub competing_team_logo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_innings: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub second_innings: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub match_status: Option<String>,
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Strings pass through; any other JSON value keeps its JSON text so one odd field
/// never rejects the whole team.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.map(value_text))
}

/// The live API sends umpires as one comma-separated string; older payloads use an array.
fn umpire_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        Value::String(joined) => joined
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        other => vec![other.to_string()],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umpires_accepts_joined_string() {
        let dto: MatchDetailsDto =
            serde_json::from_str(r#"{"umpires": "CB Gaffaney, VK Sharma"}"#).unwrap();
        assert_eq!(
            dto.umpires,
            Some(vec!["CB Gaffaney".to_string(), "VK Sharma".to_string()])
        );
    }

    #[test]
    fn umpires_accepts_array() {
        let dto: MatchDetailsDto =
            serde_json::from_str(r#"{"umpires": ["A", "B"]}"#).unwrap();
        assert_eq!(dto.umpires, Some(vec!["A".to_string(), "B".to_string()]));
    }

    #[test]
    fn numeric_id_becomes_string() {
        let dto: MatchDetailsDto = serde_json::from_str(r#"{"id": 1216545}"#).unwrap();
        assert_eq!(dto.id.as_deref(), Some("1216545"));
    }

    #[test]
    fn non_string_status_keeps_json_text() {
        let dto: MatchDetailsDto = serde_json::from_str(r#"{"match_status": 0}"#).unwrap();
        assert_eq!(dto.match_status.as_deref(), Some("0"));

        let dto: MatchDetailsDto =
            serde_json::from_str(r#"{"match_status": {"x": 1}}"#).unwrap();
        assert_eq!(dto.match_status.as_deref(), Some(r#"{"x":1}"#));
    }

    #[test]
    fn innings_summary_object_is_kept() {
        let dto: MatchDetailsDto =
            serde_json::from_str(r#"{"first_innings": {"runs": 160}, "result": true}"#).unwrap();
        assert_eq!(dto.first_innings.as_deref(), Some(r#"{"runs":160}"#));
        assert_eq!(dto.result.as_deref(), Some("true"));
    }

    #[test]
    fn null_and_missing_fields_stay_absent() {
        let dto: MatchDetailsDto = serde_json::from_str(r#"{"venue": null}"#).unwrap();
        assert!(dto.venue.is_none());
        assert!(dto.umpires.is_none());
        assert!(dto.match_status.is_none());
        assert!(dto.id.is_none());
    }
}
