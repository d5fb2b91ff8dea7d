pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod generation;
pub mod handlers;
pub mod models;
pub mod navigator;
pub mod session;
pub mod state;
pub mod ui;
pub mod view;

#[cfg(test)]
mod testing;

pub use app::router;
pub use config::PortalConfig;
pub use state::AppState;
