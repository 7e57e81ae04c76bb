//! Screen geometry shared by rendering and mouse hit testing

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::domain::RegionId;

/// Below this width the panel grid collapses into a single column
pub const WIDE_MIN_WIDTH: u16 = 100;
pub const HEADER_HEIGHT: u16 = 7;
pub const LAUNCHER_WIDTH: u16 = 7;
pub const LAUNCHER_HEIGHT: u16 = 3;
const LAUNCHER_MARGIN_X: u16 = 2;
const LAUNCHER_MARGIN_Y: u16 = 1;
/// Horizontal padding inside a region button
pub const BUTTON_PADDING: u16 = 2;
/// Space between region buttons
pub const BUTTON_GAP: u16 = 2;

/// Areas of the five content panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelAreas {
    pub breaking: Rect,
    pub presidents: Rect,
    pub timeline: Rect,
    pub press_releases: Rect,
    pub events: Rect,
}

/// Something clickable on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Region(RegionId),
    ChatLauncher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardLayout {
    pub header: Rect,
    pub region_bar: Rect,
    pub panels: PanelAreas,
    /// Floats above everything else
    pub launcher: Rect,
    pub wide: bool,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let [header, _, region_bar, _, grid] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        // Page margins, like the centered max-width container
        let region_bar = region_bar.inner(Margin::new(2, 0));
        let grid = grid.inner(Margin::new(2, 0));

        let wide = area.width >= WIDE_MIN_WIDTH;
        let panels = if wide {
            wide_grid(grid)
        } else {
            narrow_grid(grid)
        };

        Self {
            header,
            region_bar,
            panels,
            launcher: launcher_area(area),
            wide,
        }
    }

    /// What sits under the given cell, the launcher taking precedence
    pub fn hit_test(&self, active: RegionId, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.launcher.contains(position) {
            return Some(HitTarget::ChatLauncher);
        }

        region_button_areas(self.region_bar, active)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(region, _)| HitTarget::Region(region))
    }
}

fn wide_grid(grid: Rect) -> PanelAreas {
    let [top, bottom] =
        Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(grid);
    let [breaking, presidents] =
        Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
            .spacing(1)
            .areas(top);
    let [timeline, press_releases, events] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .spacing(1)
    .areas(bottom);

    PanelAreas {
        breaking,
        presidents,
        timeline,
        press_releases,
        events,
    }
}

fn narrow_grid(grid: Rect) -> PanelAreas {
    let [breaking, presidents, timeline, press_releases, events] = Layout::vertical([
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .areas(grid);

    PanelAreas {
        breaking,
        presidents,
        timeline,
        press_releases,
        events,
    }
}

/// Bottom-right corner, clipped to the screen
fn launcher_area(area: Rect) -> Rect {
    let x = area
        .right()
        .saturating_sub(LAUNCHER_WIDTH + LAUNCHER_MARGIN_X)
        .max(area.left());
    let y = area
        .bottom()
        .saturating_sub(LAUNCHER_HEIGHT + LAUNCHER_MARGIN_Y)
        .max(area.top());
    Rect::new(x, y, LAUNCHER_WIDTH, LAUNCHER_HEIGHT).intersection(area)
}

/// Label drawn on a region button, padding included
pub fn button_label(region: RegionId) -> String {
    let pad = " ".repeat(BUTTON_PADDING as usize);
    format!("{pad}{}{pad}", region.name())
}

/// Total width of all buttons and gaps, before any scrolling
pub fn region_row_width() -> u16 {
    let buttons: u16 = RegionId::all()
        .into_iter()
        .map(|r| button_label(r).width() as u16)
        .sum();
    buttons + BUTTON_GAP * (RegionId::all().len() as u16 - 1)
}

/// Horizontal scroll that keeps the active button fully visible
pub fn region_scroll_offset(bar_width: u16, active: RegionId) -> u16 {
    let mut x = 0u16;
    for region in RegionId::all() {
        let width = button_label(region).width() as u16;
        if region == active {
            return (x + width).saturating_sub(bar_width);
        }
        x += width + BUTTON_GAP;
    }
    0
}

/// Visible part of every region button within `bar`
pub fn region_button_areas(bar: Rect, active: RegionId) -> Vec<(RegionId, Rect)> {
    let offset = region_scroll_offset(bar.width, active);
    let mut x = 0u16;
    let mut areas = Vec::new();

    for region in RegionId::all() {
        let width = button_label(region).width() as u16;
        let start = x;
        let end = x + width;
        x = end + BUTTON_GAP;

        let visible_start = start.max(offset);
        let visible_end = end.min(offset + bar.width);
        if visible_start >= visible_end || bar.height == 0 {
            continue;
        }

        areas.push((
            region,
            Rect::new(
                bar.x + (visible_start - offset),
                bar.y,
                visible_end - visible_start,
                1,
            ),
        ));
    }

    areas
}
