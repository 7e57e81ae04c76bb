use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Pictograms used by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Search,
    Clock,
    Map,
    Bot,
    /// No common glyph exists; renders as nothing
    News,
}

impl Icon {
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Icon::Search => Some("⌕"),
            Icon::Clock => Some("◷"),
            Icon::Map => Some("▦"),
            Icon::Bot => Some("◉"),
            Icon::News => None,
        }
    }

    /// Icon followed by a label; a missing glyph leaves just the label
    pub fn labelled<'a>(self, label: &'a str, icon_style: Style, label_style: Style) -> Line<'a> {
        let mut spans = Vec::with_capacity(3);
        if let Some(glyph) = self.glyph() {
            spans.push(Span::styled(glyph, icon_style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(label, label_style));
        Line::from(spans)
    }
}
