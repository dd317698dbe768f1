use crate::config::Config;
use crate::error::AppError;

use super::endpoints::team_matches_url;
use super::models::TeamMatchesDto;

const USER_AGENT: &str = "ipl_matches/0.1.0";

/// Anything that can answer a team-matches request.
pub trait TeamMatchesApi: Send + 'static {
    fn get_team_matches(&self, team_id: &str) -> Result<TeamMatchesDto, AppError>;
}

#[derive(Clone)]
pub struct IplApiClient {
    config: Config,
    agent: ureq::Agent,
}

impl IplApiClient {
    pub fn new(config: Config) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        IplApiClient {
            config,
            agent: builder.build(),
        }
    }

    fn execute_request(&self, url: &str, team_id: &str) -> Result<String, AppError> {
        log::debug!("GET {}", url);

        match self.agent.get(url).call() {
            Ok(resp) => {
                log::debug!("{} -> {}", url, resp.status());
                resp.into_string()
                    .map_err(|e| AppError::Network(format!("reading body from {}: {}", url, e)))
            }
            Err(ureq::Error::Status(404, _)) => {
                log::debug!("{} -> 404", url);
                Err(AppError::NotFound(team_id.to_string()))
            }
            Err(ureq::Error::Status(code, resp)) => {
                log::debug!("{} -> {}", url, code);
                Err(AppError::Network(format!(
                    "{} returned HTTP {} {}",
                    url,
                    code,
                    resp.status_text()
                )))
            }
            Err(e) => Err(AppError::Network(e.to_string())),
        }
    }
}

impl TeamMatchesApi for IplApiClient {
    fn get_team_matches(&self, team_id: &str) -> Result<TeamMatchesDto, AppError> {
        let url = team_matches_url(&self.config.api_base, team_id);
        let body = self.execute_request(&url, team_id)?;
        parse_team_matches(&body, team_id)
    }
}

/// Decodes a team-matches body. `null` and `{}` are how the API answers unknown teams.
pub fn parse_team_matches(body: &str, team_id: &str) -> Result<TeamMatchesDto, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(body.trim()).map_err(|e| AppError::Decode(e.to_string()))?;

    let unknown_team = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if unknown_team {
        return Err(AppError::NotFound(team_id.to_string()));
    }

    serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_body_is_not_found() {
        let err = parse_team_matches("null", "XYZ").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref id) if id == "XYZ"));
    }

    #[test]
    fn empty_object_is_not_found() {
        let err = parse_team_matches(" {} ", "XYZ").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = parse_team_matches("<html>oops</html>", "RCB").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn missing_recent_matches_is_decode_error() {
        let err = parse_team_matches(
            r#"{"team_banner_url": "u", "latest_match_details": {}}"#,
            "RCB",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn minimal_body_parses() {
        let dto = parse_team_matches(
            r#"{"team_banner_url": "u", "latest_match_details": {}, "recent_matches": [{}]}"#,
            "RCB",
        )
        .unwrap();
        assert_eq!(dto.team_banner_url.as_deref(), Some("u"));
        assert_eq!(dto.recent_matches.len(), 1);
    }
}
