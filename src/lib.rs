pub mod analysis;
pub mod api;
pub mod cancel;
pub mod config;
pub mod display;
pub mod error;
pub mod route;
pub mod view;
