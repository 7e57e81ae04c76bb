//! Wiring between the terminal and the Elm core
//!
//! - Runtime owning state and message queues
//! - Render and resize coalescing
//! - The main application loop

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
