use ratatui::{prelude::*, widgets::Widget};

use crate::{
    domain::{president::President, text::ellipsize},
    presentation::{config::Styles, widgets::avatar::AvatarWidget},
};

pub struct PresidentItemWidget<'a> {
    president: &'a President,
    styles: &'a Styles,
}

impl<'a> PresidentItemWidget<'a> {
    pub const HEIGHT: u16 = AvatarWidget::HEIGHT;

    pub fn new(president: &'a President, styles: &'a Styles) -> Self {
        Self { president, styles }
    }
}

impl Widget for PresidentItemWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [avatar, _, text] = Layout::horizontal([
            Constraint::Length(AvatarWidget::WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        AvatarWidget::new(
            self.president.avatar_src(),
            self.president.name.as_str(),
            self.styles.get_or_default("avatar"),
        )
        .render(avatar, buf);

        let width = text.width as usize;
        let lines = [
            Line::styled(
                ellipsize(&self.president.name, width),
                self.styles.get_or_default("president_name"),
            ),
            Line::styled(
                ellipsize(&self.president.subtitle(), width),
                self.styles.get_or_default("muted"),
            ),
        ];
        for (line, y) in lines.into_iter().zip(text.top()..text.bottom()) {
            buf.set_line(text.x, y, &line, text.width);
        }
    }
}
