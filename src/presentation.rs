//! Presentation layer
//!
//! - Layout shared by rendering and mouse hit testing
//! - Stateless components and reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
