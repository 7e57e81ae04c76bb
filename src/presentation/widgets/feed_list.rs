//! Two-line entries for the timeline, press release and event panels

use ratatui::{prelude::*, widgets::Widget};

use crate::{
    domain::{
        feed::{PressRelease, TimelineEntry, UpcomingEvent},
        text::ellipsize,
    },
    presentation::{config::Styles, widgets::panel::stack_areas},
};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem<'a> {
    pub heading: &'a str,
    pub body: &'a str,
}

/// Vertical list of heading/body pairs with a blank row between entries
#[derive(Debug, Clone, PartialEq)]
pub struct FeedListWidget<'a> {
    items: Vec<FeedItem<'a>>,
    heading_style: Style,
    body_style: Style,
}

impl<'a> FeedListWidget<'a> {
    pub const ITEM_HEIGHT: u16 = 2;
    pub const GAP: u16 = 1;

    pub fn new(items: Vec<FeedItem<'a>>, heading_style: Style, body_style: Style) -> Self {
        Self {
            items,
            heading_style,
            body_style,
        }
    }

    /// Relative time first, then what happened
    pub fn timeline(entries: &'a [TimelineEntry], styles: &Styles) -> Self {
        let items = entries
            .iter()
            .map(|e| FeedItem {
                heading: &e.label,
                body: &e.description,
            })
            .collect();
        Self::new(items, styles.get_or_default("faint"), Style::default())
    }

    pub fn press_releases(releases: &'a [PressRelease], styles: &Styles) -> Self {
        let items = releases
            .iter()
            .map(|r| FeedItem {
                heading: &r.office,
                body: &r.description,
            })
            .collect();
        Self::new(
            items,
            styles.get_or_default("entry_heading"),
            styles.get_or_default("muted"),
        )
    }

    pub fn upcoming_events(events: &'a [UpcomingEvent], styles: &Styles) -> Self {
        let items = events
            .iter()
            .map(|e| FeedItem {
                heading: &e.date,
                body: &e.description,
            })
            .collect();
        Self::new(
            items,
            styles.get_or_default("entry_heading"),
            styles.get_or_default("muted"),
        )
    }

    pub fn items(&self) -> &[FeedItem<'a>] {
        &self.items
    }
}

impl Widget for FeedListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = stack_areas(area, Self::ITEM_HEIGHT, self.items.len(), Self::GAP);
        for (item, row) in self.items.iter().zip(rows) {
            let width = row.width as usize;
            buf.set_stringn(
                row.x,
                row.y,
                ellipsize(item.heading, width),
                width,
                self.heading_style,
            );
            buf.set_stringn(
                row.x,
                row.y + 1,
                ellipsize(item.body, width),
                width,
                self.body_style,
            );
        }
    }
}
