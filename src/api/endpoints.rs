// API endpoint definitions and URL builders

pub const TEAM_MATCHES_PATH: &str = "{base}/{id}";

/// No validation on `id`: whatever the route supplied is sent as-is.
pub fn team_matches_url(base: &str, id: &str) -> String {
    TEAM_MATCHES_PATH.replace("{base}", base).replace("{id}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_team_url() {
        assert_eq!(
            team_matches_url("https://apis.ccbp.in/ipl", "RCB"),
            "https://apis.ccbp.in/ipl/RCB"
        );
    }

    #[test]
    fn unknown_ids_pass_through() {
        assert_eq!(team_matches_url("http://x", "xyz"), "http://x/xyz");
    }
}
