use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use rstest::rstest;

use mrpresident::core::{
    msg::{dashboard::DashboardMsg, Msg},
    state::AppState,
    update::update,
};
use mrpresident::domain::{
    news::{NewsKind, NewsUpdate},
    RegionId,
};
use mrpresident::infrastructure::config::Config;
use mrpresident::presentation::{
    components::DashboardComponent,
    layout::{region_button_areas, DashboardLayout},
};

const WIDTH: u16 = 200;
const HEIGHT: u16 = 40;
const ACTIVE_BG: Color = Color::Rgb(0xdb, 0xea, 0xfe);

fn default_state() -> AppState {
    AppState::new_with_config(Config::defaults().expect("defaults"))
}

fn draw(state: &AppState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal
        .draw(|f| DashboardComponent::new().view(state, f))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn screen(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_header_texts() {
    let screen = screen(&draw(&default_state()));

    assert!(screen.contains("MrPresident"));
    assert!(screen.contains("Global Presidential News & Information Hub"));
    assert!(screen.contains("Live Updates"));
    assert!(screen.contains("Search any president or country..."));
}

#[test]
fn test_region_labels() {
    let screen = screen(&draw(&default_state()));

    for region in RegionId::all() {
        assert!(screen.contains(region.name()), "missing {}", region.name());
    }
}

#[test]
fn test_breaking_badge_only_for_breaking_news() {
    let screen = screen(&draw(&default_state()));

    assert_eq!(screen.matches("BREAKING").count(), 1);
    assert!(screen.contains("President's New Economic Policy Announcement"));
    assert!(screen.contains("Presidential Address on Climate Initiative"));
}

#[test]
fn test_badge_follows_content() {
    let mut config = Config::defaults().expect("defaults");
    config.content.news = vec![
        NewsUpdate::new("Chile", "First", "now", NewsKind::Breaking),
        NewsUpdate::new("Peru", "Second", "now", NewsKind::Breaking),
        NewsUpdate::new("Kenya", "Third", "now", NewsKind::Update),
    ];
    let screen = screen(&draw(&AppState::new_with_config(config)));

    assert_eq!(screen.matches("BREAKING").count(), 2);
}

#[test]
fn test_static_lists_render_exact_entries() {
    let screen = screen(&draw(&default_state()));

    assert!(screen.contains("German President meets with EU delegates"));
    assert!(screen.contains("South Korean President announces tech initiative"));
    assert!(screen.contains("Office of the President - Argentina"));
    assert!(screen.contains("Economic cooperation agreement signed"));
    assert!(screen.contains("Oct 30, 2024"));
    assert!(screen.contains("G20 Summit - Presidential Meeting"));
}

#[test]
fn test_presidents_roster() {
    let screen = screen(&draw(&default_state()));

    assert!(screen.contains("Emmanuel Macron"));
    assert!(screen.contains("France (Since 2017)"));
    assert!(screen.contains("Luiz Inácio Lula da Silva"));
    assert!(screen.contains("Brazil (Since 2023)"));
}

#[rstest]
#[case(RegionId::All)]
#[case(RegionId::Americas)]
#[case(RegionId::Europe)]
#[case(RegionId::Asia)]
#[case(RegionId::Africa)]
#[case(RegionId::Oceania)]
fn test_only_active_button_is_highlighted(#[case] active: RegionId) {
    let (state, _) = update(
        Msg::Dashboard(DashboardMsg::SelectRegion(active)),
        default_state(),
    );
    let buffer = draw(&state);
    let layout = DashboardLayout::new(buffer.area);

    for (region, rect) in region_button_areas(layout.region_bar, active) {
        let highlighted = buffer[(rect.x, rect.y)].bg == ACTIVE_BG;
        assert_eq!(highlighted, region == active, "{region}");
    }
}
