/// Team identifier to display class. Unknown identifiers get no class.
static TEAM_CLASSES: [(&str, &str); 8] = [
    ("RCB", "rcb"),
    ("KKR", "kkr"),
    ("KXP", "kxp"),
    ("CSK", "csk"),
    ("RR", "rr"),
    ("MI", "mi"),
    ("SH", "srh"),
    ("DC", "dc"),
];

pub fn team_class(team_id: &str) -> &'static str {
    TEAM_CLASSES
        .iter()
        .find(|(id, _)| *id == team_id)
        .map(|(_, class)| *class)
        .unwrap_or("")
}

pub fn known_teams() -> impl Iterator<Item = (&'static str, &'static str)> {
    TEAM_CLASSES.iter().copied()
}
