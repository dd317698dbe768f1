use crate::analysis::formatter::MatchRecord;
use crate::analysis::match_stats::MatchStat;
use crate::analysis::report::TeamMatchesReport;
use crate::error::ErrorKind;
use crate::route::Route;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

const CHART_WIDTH: usize = 30;
const MISSING: &str = "-";

#[derive(Tabled)]
struct MatchCardRow {
    #[tabled(rename = "#")]
    number: String,
    opponent: String,
    date: String,
    venue: String,
    result: String,
    status: String,
    #[tabled(rename = "man of the match")]
    man_of_the_match: String,
}

#[derive(Serialize)]
struct TeamLink<'a> {
    id: &'a str,
    class: &'a str,
    route: String,
}

#[derive(Tabled)]
struct TeamRow {
    team: String,
    route: String,
    class: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn loading_spinner(team_id: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.white} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading matches for {}", team_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Display class to banner color. The empty class stays unstyled.
pub fn team_color(class: &str) -> Option<Color> {
    match class {
        "rcb" => Some(Color::TrueColor { r: 218, g: 24, b: 32 }),
        "kkr" => Some(Color::TrueColor { r: 90, g: 57, b: 138 }),
        "kxp" => Some(Color::TrueColor { r: 237, g: 27, b: 36 }),
        "csk" => Some(Color::TrueColor { r: 249, g: 205, b: 5 }),
        "rr" => Some(Color::TrueColor { r: 234, g: 26, b: 133 }),
        "mi" => Some(Color::TrueColor { r: 0, g: 75, b: 160 }),
        "srh" => Some(Color::TrueColor { r: 242, g: 108, b: 34 }),
        "dc" => Some(Color::TrueColor { r: 40, g: 106, b: 203 }),
        _ => None,
    }
}

/// Parses `#rrggbb` display hints.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::TrueColor {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub fn total_matches_label(count: usize) -> String {
    format!("Total Matches Played: {}", count)
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| MISSING.to_string())
}

fn styled(text: &str, class: &str) -> ColoredString {
    match team_color(class) {
        Some(color) => text.color(color).bold(),
        None => text.normal(),
    }
}

pub fn display_home<'a>(teams: impl Iterator<Item = (&'a str, &'a str)>) {
    println!("\n{}", "🏏 IPL Dashboard".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<TeamRow> = teams
        .map(|(id, class)| TeamRow {
            team: styled(id, class).to_string(),
            route: team_route(id),
            class: class.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn team_route(id: &str) -> String {
    Route::TeamMatches { id: id.to_string() }.path()
}

/// The root route as JSON: one entry per known team.
pub fn home_json<'a>(
    teams: impl Iterator<Item = (&'a str, &'a str)>,
) -> serde_json::Result<String> {
    let links: Vec<TeamLink> = teams
        .map(|(id, class)| TeamLink {
            id,
            class,
            route: team_route(id),
        })
        .collect();
    serde_json::to_string_pretty(&links)
}

fn display_latest_match(latest: &MatchRecord) {
    println!("{}", "Latest Match".bold().yellow());
    println!(
        "  {} vs {}",
        "▶".yellow(),
        field(&latest.competing_team).bold()
    );
    println!("  Date:            {}", field(&latest.date));
    println!("  Venue:           {}", field(&latest.venue));
    println!("  Result:          {}", field(&latest.result));
    println!("  First Innings:   {}", field(&latest.first_innings));
    println!("  Second Innings:  {}", field(&latest.second_innings));
    println!("  Man Of The Match: {}", field(&latest.man_of_the_match));
    println!(
        "  Umpires:         {}",
        latest
            .umpires
            .as_ref()
            .map(|u| u.join(", "))
            .unwrap_or_else(|| MISSING.to_string())
    );
    if let Some(logo) = &latest.competing_team_logo {
        println!("  Logo:            {}", logo.dimmed());
    }
    println!();
}

fn status_cell(status: &Option<String>) -> String {
    match status.as_deref() {
        Some("Won") => "Won".green().to_string(),
        Some("Lost") => "Lost".red().to_string(),
        Some(other) => other.yellow().to_string(),
        None => MISSING.to_string(),
    }
}

fn display_match_cards(matches: &[MatchRecord]) {
    println!("{}", "Recent Matches".bold().yellow());

    let rows: Vec<MatchCardRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchCardRow {
            number: format!("{}", idx + 1),
            opponent: field(&m.competing_team),
            date: field(&m.date),
            venue: field(&m.venue),
            result: field(&m.result),
            status: status_cell(&m.match_status),
            man_of_the_match: field(&m.man_of_the_match),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// One bar per stat, scaled against the total.
pub fn chart_bar(value: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let filled = (value * width + total / 2) / total;
    "█".repeat(filled)
}

fn percent(value: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

fn display_match_stats(stats: &[MatchStat]) {
    let total: usize = stats.iter().map(|s| s.value).sum();

    println!("{}", "Match Statistics".bold().cyan());
    for stat in stats {
        let bar = chart_bar(stat.value, total, CHART_WIDTH);
        let pad = " ".repeat(CHART_WIDTH.saturating_sub(bar.chars().count()));
        let bar = match hex_color(stat.color) {
            Some(color) => bar.color(color),
            None => bar.normal(),
        };
        println!(
            "  {:<6} {}{} {:>3} ({:.1}%)",
            stat.name,
            bar,
            pad,
            stat.value,
            percent(stat.value, total)
        );
    }

    let legend: Vec<String> = stats
        .iter()
        .map(|s| match hex_color(s.color) {
            Some(color) => format!("{} {}", "■".color(color), s.name),
            None => format!("■ {}", s.name),
        })
        .collect();
    println!("  {}\n", legend.join("   "));
}

pub fn display_team_matches(team_id: &str, class: &str, report: &TeamMatchesReport) {
    let data = &report.data;
    let title = format!("🏏 {} Matches", team_id);
    println!("\n{}", styled(&title, class));
    println!("{}\n", "=".repeat(80).cyan());

    if let Some(banner) = &data.team_banner_url {
        println!("{} {}\n", "Banner:".bold(), styled(banner, class));
    }

    display_latest_match(&data.latest_match);
    display_match_cards(&data.recent_matches);

    println!("{}\n", total_matches_label(report.total_matches).bold());
    display_match_stats(&report.stats);

    println!("{}", "[b] Back".dimmed());
}

pub fn failure_message(kind: ErrorKind, team_id: &str) -> String {
    match kind {
        ErrorKind::Network => format!("Could not reach the IPL API while loading {}", team_id),
        ErrorKind::Decode => format!("The IPL API sent data for {} that could not be read", team_id),
        ErrorKind::NotFound => format!("No team found for identifier {}", team_id),
    }
}

pub fn display_failure(team_id: &str, kind: ErrorKind, detail: &str) {
    display_error(&failure_message(kind, team_id));
    eprintln!("   {}", detail.dimmed());
}

pub fn display_cancelled(team_id: &str) {
    println!("{} Gave up waiting for {}", "⏹".yellow(), team_id);
}
