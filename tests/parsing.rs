use std::fs;
use std::path::PathBuf;

use ipl_matches::analysis::formatter::format_team_matches;
use ipl_matches::analysis::report::TeamMatchesReport;
use ipl_matches::api::client::parse_team_matches;
use ipl_matches::display::output::total_matches_label;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_team_fixture() {
    let raw = read_fixture("rcb.json");
    let dto = parse_team_matches(&raw, "RCB").expect("fixture should parse");

    assert_eq!(dto.recent_matches.len(), 3);
    assert_eq!(
        dto.latest_match_details.umpires.as_deref(),
        Some(&["CB Gaffaney".to_string(), "VK Sharma".to_string()][..])
    );
    assert_eq!(dto.latest_match_details.match_status.as_deref(), Some("Lost"));
}

#[test]
fn formats_fixture_into_normalized_shape() {
    let raw = read_fixture("rcb.json");
    let data = format_team_matches(&parse_team_matches(&raw, "RCB").unwrap());

    assert_eq!(
        data.team_banner_url.as_deref(),
        Some("https://assets.ccbp.in/frontend/react-js/rcb-team-img.png")
    );
    assert_eq!(data.latest_match.man_of_the_match.as_deref(), Some("KS Williamson"));
    assert_eq!(data.latest_match.competing_team.as_deref(), Some("Sunrisers Hyderabad"));

    let ids: Vec<_> = data
        .recent_matches
        .iter()
        .map(|m| m.id.clone().unwrap())
        .collect();
    assert_eq!(ids, vec!["1216538", "1216512", "1216517"]);
}

#[test]
fn won_lost_drawn_fixture_end_to_end() {
    let raw = read_fixture("rcb.json");
    let report = TeamMatchesReport::new(format_team_matches(&parse_team_matches(&raw, "RCB").unwrap()));

    assert_eq!(total_matches_label(report.total_matches), "Total Matches Played: 3");

    let chart: Vec<_> = report.stats.iter().map(|s| (s.name, s.value)).collect();
    assert_eq!(chart, vec![("Won", 1), ("Lost", 1), ("Drawn", 1)]);
}

#[test]
fn report_json_uses_camel_case() {
    let raw = read_fixture("rcb.json");
    let report = TeamMatchesReport::new(format_team_matches(&parse_team_matches(&raw, "RCB").unwrap()));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["totalMatches"], 3);
    assert_eq!(json["data"]["recentMatches"][1]["matchStatus"], "Won");
    assert_eq!(json["data"]["latestMatch"]["secondInnings"], "Sunrisers Hyderabad");
    assert_eq!(json["stats"][0]["name"], "Won");
    assert_eq!(json["stats"][0]["value"], 1);
}
