//! Row of region filter buttons

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::RegionId,
    presentation::{
        config::Styles,
        layout::{button_label, region_scroll_offset, BUTTON_GAP},
    },
};

#[derive(Debug, Clone, Default)]
pub struct RegionBarComponent;

impl RegionBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn line(&self, styles: &Styles, active: RegionId) -> Line<'static> {
        let gap = " ".repeat(BUTTON_GAP as usize);
        let mut spans = Vec::new();
        for (i, region) in RegionId::all().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(gap.clone()));
            }
            let style = if region == active {
                styles.get_or_default("region_active")
            } else {
                styles.get_or_default("region_inactive")
            };
            spans.push(Span::styled(button_label(region), style));
        }
        Line::from(spans)
    }

    pub fn view(&self, styles: &Styles, active: RegionId, frame: &mut Frame, area: Rect) {
        let offset = region_scroll_offset(area.width, active);
        let bar = Paragraph::new(self.line(styles, active)).scroll((0, offset));
        frame.render_widget(bar, area);
    }
}
