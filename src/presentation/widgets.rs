//! Reusable widgets
//!
//! Widgets are stateless and draw straight into a buffer. Components in
//! [`crate::presentation::components`] place them on screen.

pub mod avatar;
pub mod feed_list;
pub mod icon;
pub mod news_update;
pub mod panel;
pub mod president_item;

pub use avatar::AvatarWidget;
pub use feed_list::FeedListWidget;
pub use icon::Icon;
pub use news_update::NewsUpdateWidget;
pub use panel::PanelWidget;
pub use president_item::PresidentItemWidget;
