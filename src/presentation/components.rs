//! Stateless components
//!
//! Each component receives what it needs from [`crate::core::state::AppState`]
//! and renders it into a [`ratatui::Frame`].

pub mod chat_launcher;
pub mod dashboard;
pub mod header;
pub mod region_bar;

pub use chat_launcher::ChatLauncherComponent;
pub use dashboard::DashboardComponent;
pub use header::HeaderComponent;
pub use region_bar::RegionBarComponent;
