pub mod formatter;
pub mod match_stats;
pub mod report;
pub mod team_class;
