use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{news::NewsUpdate, text::ellipsize},
    presentation::config::Styles,
};

pub const BREAKING_LABEL: &str = " BREAKING ";
const ACCENT: &str = "▌";

/// One feed entry: country and optional badge, title, then time
pub struct NewsUpdateWidget<'a> {
    update: &'a NewsUpdate,
    styles: &'a Styles,
}

impl<'a> NewsUpdateWidget<'a> {
    pub const HEIGHT: u16 = 3;

    pub fn new(update: &'a NewsUpdate, styles: &'a Styles) -> Self {
        Self { update, styles }
    }

    fn heading(&self, width: usize) -> Line<'a> {
        let badge_width = if self.update.is_breaking() {
            BREAKING_LABEL.width() + 1
        } else {
            0
        };
        let country = ellipsize(&self.update.country, width.saturating_sub(badge_width));

        let mut spans = vec![Span::styled(
            country,
            self.styles.get_or_default("news_country"),
        )];
        if self.update.is_breaking() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                BREAKING_LABEL,
                self.styles.get_or_default("badge_breaking"),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for NewsUpdateWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let accent = self.styles.get_or_default("news_accent");
        for y in area.top()..area.bottom().min(area.top() + Self::HEIGHT) {
            buf.set_string(area.x, y, ACCENT, accent);
        }

        let body = Rect::new(area.x + 2, area.y, area.width - 2, area.height.min(Self::HEIGHT));
        let width = body.width as usize;
        let lines = [
            self.heading(width),
            Line::styled(
                ellipsize(&self.update.title, width),
                self.styles.get_or_default("news_title"),
            ),
            Line::styled(
                ellipsize(&self.update.time, width),
                self.styles.get_or_default("faint"),
            ),
        ];
        for (line, y) in lines.into_iter().zip(body.top()..body.bottom()) {
            buf.set_line(body.x, y, &line, body.width);
        }
    }
}
