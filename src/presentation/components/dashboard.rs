//! Root view of the dashboard
//!
//! Lays out the header, the region filter bar, the content panels and the
//! floating chat launcher. Rendering is a pure function of [`AppState`].

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::DashboardContent,
    presentation::{
        components::{
            chat_launcher::ChatLauncherComponent, header::HeaderComponent,
            region_bar::RegionBarComponent,
        },
        config::Styles,
        layout::{DashboardLayout, PanelAreas},
        widgets::{
            panel::stack_areas, FeedListWidget, Icon, NewsUpdateWidget, PanelWidget,
            PresidentItemWidget,
        },
    },
};

pub const BREAKING_TITLE: &str = "Breaking Updates";
pub const PRESIDENTS_TITLE: &str = "Current Presidents";
pub const TIMELINE_TITLE: &str = "Latest Activities";
pub const PRESS_RELEASES_TITLE: &str = "Official Statements";
pub const EVENTS_TITLE: &str = "Upcoming Events";

#[derive(Debug, Clone, Default)]
pub struct DashboardComponent {
    header: HeaderComponent,
    region_bar: RegionBarComponent,
    chat_launcher: ChatLauncherComponent,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame) {
        let layout = DashboardLayout::new(frame.area());
        let styles = &state.config.config.styles;

        self.header.view(styles, frame, layout.header);
        self.region_bar.view(
            styles,
            state.dashboard.active_region,
            frame,
            layout.region_bar,
        );
        render_panels(state.content(), styles, frame, layout.panels);
        self.chat_launcher
            .view(styles, state.dashboard.chat_open, frame, layout.launcher);
    }
}

fn render_panels(content: &DashboardContent, styles: &Styles, frame: &mut Frame, areas: PanelAreas) {
    let breaking = PanelWidget::new(BREAKING_TITLE, styles)
        .icon(Icon::News, styles.get_or_default("icon_news"));
    let inner = breaking.inner(areas.breaking);
    frame.render_widget(breaking, areas.breaking);
    for (update, area) in content
        .news
        .iter()
        .zip(stack_areas(inner, NewsUpdateWidget::HEIGHT, content.news.len(), 1))
    {
        frame.render_widget(NewsUpdateWidget::new(update, styles), area);
    }

    let presidents = PanelWidget::new(PRESIDENTS_TITLE, styles).icon(Icon::Map, Style::default());
    let inner = presidents.inner(areas.presidents);
    frame.render_widget(presidents, areas.presidents);
    for (president, area) in content.presidents.iter().zip(stack_areas(
        inner,
        PresidentItemWidget::HEIGHT,
        content.presidents.len(),
        1,
    )) {
        frame.render_widget(PresidentItemWidget::new(president, styles), area);
    }

    render_feed(
        frame,
        PanelWidget::new(TIMELINE_TITLE, styles),
        FeedListWidget::timeline(&content.timeline, styles),
        areas.timeline,
    );
    render_feed(
        frame,
        PanelWidget::new(PRESS_RELEASES_TITLE, styles),
        FeedListWidget::press_releases(&content.press_releases, styles),
        areas.press_releases,
    );
    render_feed(
        frame,
        PanelWidget::new(EVENTS_TITLE, styles),
        FeedListWidget::upcoming_events(&content.events, styles),
        areas.events,
    );
}

fn render_feed(frame: &mut Frame, panel: PanelWidget<'_>, list: FeedListWidget<'_>, area: Rect) {
    let inner = panel.inner(area);
    frame.render_widget(panel, area);
    frame.render_widget(list, inner);
}
