//! Domain types
//!
//! This module contains the data shown by the dashboard:
//! - Region filter options
//! - News updates, presidents and static feed entries
//! - The bundled sample content
//! - Text helpers for fitting content into terminal cells

pub mod content;
pub mod feed;
pub mod news;
pub mod president;
pub mod region;
pub mod text;

pub use content::DashboardContent;
pub use region::RegionId;
