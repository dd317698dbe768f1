/// Where the application is pointed. The root lists teams, a team route shows matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TeamMatches { id: String },
}

pub const TEAM_MATCHES_PREFIX: &str = "team-matches";

impl Route {
    /// Accepts `/`, `/team-matches/RCB`, `team-matches/RCB` or a bare `RCB`.
    pub fn parse(input: &str) -> Route {
        let segments: Vec<&str> = input
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            [prefix] if *prefix == TEAM_MATCHES_PREFIX => Route::Home,
            [.., id] => Route::TeamMatches { id: id.to_string() },
        }
    }

    pub fn team_id(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::TeamMatches { id } => Some(id),
        }
    }

    pub fn back(&self) -> Route {
        Route::Home
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TeamMatches { id } => format!("/{}/{}", TEAM_MATCHES_PREFIX, id),
        }
    }
}

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Back,
    Quit,
    Go(Route),
    Stay,
}

impl Navigation {
    pub fn parse(input: &str) -> Navigation {
        match input.trim() {
            "" => Navigation::Stay,
            "b" | "back" | "Back" => Navigation::Back,
            "q" | "quit" | "exit" => Navigation::Quit,
            other => Navigation::Go(Route::parse(other)),
        }
    }

    pub fn apply(&self, current: &Route) -> Option<Route> {
        match self {
            Navigation::Back => Some(current.back()),
            Navigation::Quit => None,
            Navigation::Go(route) => Some(route.clone()),
            Navigation::Stay => Some(current.clone()),
        }
    }
}
