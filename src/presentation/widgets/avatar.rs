use ratatui::{prelude::*, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::domain::text::initials;

/// Portrait placeholder. Terminals cannot show the image at `src`, so the
/// alt text collapses to initials.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarWidget {
    pub src: String,
    pub alt: String,
    style: Style,
}

impl AvatarWidget {
    pub const WIDTH: u16 = 4;
    pub const HEIGHT: u16 = 2;

    pub fn new(src: impl Into<String>, alt: impl Into<String>, style: Style) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            style,
        }
    }

    pub fn label(&self) -> String {
        initials(&self.alt)
    }
}

impl Widget for AvatarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(Rect::new(area.x, area.y, Self::WIDTH, Self::HEIGHT));
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style);

        let label = self.label();
        let width = label.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_stringn(x, area.y, &label, area.width as usize, self.style);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_label_uses_initials() {
        let avatar = AvatarWidget::new("/api/placeholder/40/40", "Yoon Suk-yeol", Style::default());
        assert_eq!(avatar.label(), "YS");
    }

    #[test]
    fn test_render_centers_initials() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buffer = Buffer::empty(area);
        AvatarWidget::new("/api/placeholder/40/40", "Emmanuel Macron", Style::default())
            .render(area, &mut buffer);

        assert_eq!(buffer, Buffer::with_lines([" EM   ", "      "]));
    }

    #[test]
    fn test_render_empty_alt() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buffer = Buffer::empty(area);
        AvatarWidget::new("", "", Style::default()).render(area, &mut buffer);

        assert_eq!(buffer, Buffer::with_lines(["    ", "    "]));
    }
}
