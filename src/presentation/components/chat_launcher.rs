//! Floating assistant launcher in the bottom-right corner

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::presentation::{config::Styles, widgets::Icon};

#[derive(Debug, Clone, Default)]
pub struct ChatLauncherComponent;

impl ChatLauncherComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, styles: &Styles, chat_open: bool, frame: &mut Frame, area: Rect) {
        let style = if chat_open {
            styles.get_or_default("launcher_open")
        } else {
            styles.get_or_default("launcher")
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(style);
        let glyph = Icon::Bot.glyph().unwrap_or_default();

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(glyph).alignment(Alignment::Center).block(block),
            area,
        );
    }
}
