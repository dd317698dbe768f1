use anyhow::Context;
use clap::Parser;
use colored::*;
use ipl_matches::analysis::report::TeamMatchesReport;
use ipl_matches::analysis::team_class::{known_teams, team_class};
use ipl_matches::api::client::IplApiClient;
use ipl_matches::config::Config;
use ipl_matches::display::output::{
    display_cancelled, display_error, display_failure, display_home, display_info,
    display_success, display_team_matches, home_json, loading_spinner,
};
use ipl_matches::route::{Navigation, Route};
use ipl_matches::view::{TeamMatchesView, ViewState};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "IPL Matches")]
#[command(about = "Show an IPL team's recent matches with win/loss/draw stats", long_about = None)]
struct Args {
    /// Route path or team identifier (e.g. /team-matches/RCB, RCB, or / for the team list)
    #[arg(default_value = "/")]
    route: String,

    /// Print normalized data and stats as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Keep prompting for routes after each view (b = back, q = quit)
    #[arg(short, long)]
    interactive: bool,

    /// Give up on a fetch after this many seconds
    #[arg(long)]
    wait_secs: Option<u64>,

    /// Override IPL_API_BASE
    #[arg(long)]
    api_base: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<bool> {
    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(base) = &args.api_base {
        config = config.with_api_base(base);
    }
    log::debug!("using API base {}", config.api_base);

    let client = IplApiClient::new(config);
    let mut route = Route::parse(&args.route);

    if !args.interactive {
        return show_route(&client, &route, &args);
    }

    let mut render = true;
    loop {
        if render {
            show_route(&client, &route, &args)?;
        }

        let nav = prompt()?;
        render = nav != Navigation::Stay;
        match nav.apply(&route) {
            Some(next) => route = next,
            None => break,
        }
    }

    Ok(true)
}

fn prompt() -> anyhow::Result<Navigation> {
    print!("{} ", "route or team (b = back, q = quit) >".dimmed());
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).context("reading prompt")?;
    if read == 0 {
        return Ok(Navigation::Quit);
    }
    Ok(Navigation::parse(&line))
}

fn show_route(client: &IplApiClient, route: &Route, args: &Args) -> anyhow::Result<bool> {
    match route.team_id() {
        Some(id) => show_team(client, id, args),
        None if args.json => {
            println!("{}", home_json(known_teams()).context("serializing team list")?);
            Ok(true)
        }
        None => {
            display_home(known_teams());
            Ok(true)
        }
    }
}

fn show_team(client: &IplApiClient, team_id: &str, args: &Args) -> anyhow::Result<bool> {
    if !args.json {
        display_info(&format!("Opening {}", Route::TeamMatches { id: team_id.to_string() }.path()));
    }

    let mut view = TeamMatchesView::mount(client.clone(), team_id);
    let spinner = (!args.json).then(|| loading_spinner(team_id));

    match args.wait_secs {
        Some(secs) => view.wait_timeout(Duration::from_secs(secs)),
        None => view.wait(),
    };
    let state = view.state().clone();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match state {
        ViewState::Loaded(data) => {
            let report = TeamMatchesReport::new(data);
            if args.json {
                let json = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{}", json);
            } else {
                display_success(&format!("Loaded {} recent matches", report.total_matches));
                display_team_matches(team_id, team_class(team_id), &report);
            }
            Ok(true)
        }
        ViewState::Failed { kind, detail } => {
            display_failure(view.team_id(), kind, &detail);
            Ok(false)
        }
        ViewState::Loading => {
            display_cancelled(view.team_id());
            Ok(false)
        }
    }
}
