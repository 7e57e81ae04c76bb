//! # MrPresident - Global Presidential News & Information Hub
//!
//! A terminal dashboard of world-leader news, built with Rust and Ratatui.
//! State changes follow an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** ([`core::state`]): application state
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): pure functions that transform state
//! - **Command** ([`core::cmd`]): side effects the runner performs
//! - **View** ([`presentation::components`]): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use mrpresident::core::{
//!     msg::{dashboard::DashboardMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use mrpresident::domain::RegionId;
//!
//! let state = AppState::default();
//! let (state, _commands) = update(
//!     Msg::Dashboard(DashboardMsg::SelectRegion(RegionId::Europe)),
//!     state,
//! );
//! assert_eq!(state.dashboard.active_region, RegionId::Europe);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
