//! Header band: title, tagline, live indicator and search box

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::presentation::{config::Styles, widgets::Icon};

pub const TITLE: &str = "MrPresident";
pub const TAGLINE: &str = "Global Presidential News & Information Hub";
pub const LIVE_LABEL: &str = "Live Updates";
pub const SEARCH_PLACEHOLDER: &str = "Search any president or country...";

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, styles: &Styles, frame: &mut Frame, area: Rect) {
        let header_style = styles.get_or_default("header");
        frame.render_widget(Block::default().style(header_style), area);

        let [_, title_row, tagline_row, _, search] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area.inner(Margin::new(2, 0)));

        let live = Icon::Clock.labelled(
            LIVE_LABEL,
            styles.get_or_default("live"),
            styles.get_or_default("live"),
        );
        let live_width = live.width() as u16;
        let [title_area, live_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(live_width)])
                .areas(title_row);

        frame.render_widget(
            Paragraph::new(Span::styled(TITLE, styles.get_or_default("title"))),
            title_area,
        );
        frame.render_widget(Paragraph::new(live), live_area);
        frame.render_widget(
            Paragraph::new(Span::styled(TAGLINE, styles.get_or_default("tagline"))),
            tagline_row,
        );

        // No input is wired to the search box; it only shows its placeholder
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(styles.get_or_default("search"));
        let placeholder = Icon::Search.labelled(
            SEARCH_PLACEHOLDER,
            styles.get_or_default("search_placeholder"),
            styles.get_or_default("search_placeholder"),
        );
        frame.render_widget(Paragraph::new(placeholder).block(search_block), search);
    }
}
