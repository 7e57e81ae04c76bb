use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding, Widget},
};

use crate::presentation::{config::Styles, widgets::icon::Icon};

/// Card container: rounded border with an optional icon in the title
#[derive(Clone)]
pub struct PanelWidget<'a> {
    title: &'a str,
    icon: Option<(Icon, Style)>,
    styles: &'a Styles,
}

impl<'a> PanelWidget<'a> {
    pub fn new(title: &'a str, styles: &'a Styles) -> Self {
        Self {
            title,
            icon: None,
            styles,
        }
    }

    pub fn icon(mut self, icon: Icon, style: Style) -> Self {
        self.icon = Some((icon, style));
        self
    }

    pub fn block(&self) -> Block<'a> {
        let title_style = self.styles.get_or_default("panel_title");
        let mut title = match self.icon {
            Some((icon, icon_style)) => icon.labelled(self.title, icon_style, title_style),
            None => Line::styled(self.title, title_style),
        };
        title.spans.insert(0, Span::raw(" "));
        title.spans.push(Span::raw(" "));

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.styles.get_or_default("panel_border"))
            .title(title)
            .padding(Padding::horizontal(1))
    }

    /// Area left for the panel's content
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}

/// Splits `area` into fixed-height rows separated by `gap`, dropping rows
/// that do not fit entirely
pub fn stack_areas(area: Rect, item_height: u16, count: usize, gap: u16) -> Vec<Rect> {
    let mut areas = Vec::with_capacity(count);
    let mut y = area.y;
    for _ in 0..count {
        if y + item_height > area.bottom() {
            break;
        }
        areas.push(Rect::new(area.x, y, area.width, item_height));
        y += item_height + gap;
    }
    areas
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stack_areas() {
        let areas = stack_areas(Rect::new(1, 1, 10, 8), 3, 5, 1);
        assert_eq!(
            areas,
            vec![Rect::new(1, 1, 10, 3), Rect::new(1, 5, 10, 3)]
        );
    }

    #[test]
    fn test_stack_areas_empty() {
        assert!(stack_areas(Rect::new(0, 0, 10, 2), 3, 2, 1).is_empty());
        assert!(stack_areas(Rect::new(0, 0, 10, 10), 3, 0, 1).is_empty());
    }

    #[test]
    fn test_render_title_with_icon() {
        let styles = Styles::default();
        let panel = PanelWidget::new("Current Presidents", &styles).icon(Icon::Map, Style::default());
        let area = Rect::new(0, 0, 30, 3);
        let mut buffer = Buffer::empty(area);
        panel.render(area, &mut buffer);

        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("▦ Current Presidents"));
        assert!(content.contains('╭'));
    }

    #[test]
    fn test_inner_accounts_for_border_and_padding() {
        let styles = Styles::default();
        let panel = PanelWidget::new("Upcoming Events", &styles);
        assert_eq!(panel.inner(Rect::new(0, 0, 20, 5)), Rect::new(2, 1, 16, 3));
    }
}
