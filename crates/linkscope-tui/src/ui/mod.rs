//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod downloads;
mod input;
mod log;
mod plots;
mod preview;
mod status;

use linkscope_proto::Role;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{App, InputState};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState) {
    const STATUS_HEIGHT: u16 = 1;
    const MAIN_AREA_MIN_HEIGHT: u16 = 8;
    const INPUT_HEIGHT: u16 = 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(frame.area());

    let [status_area, main_area, input_area] = chunks.as_ref() else {
        return;
    };

    status::render(frame, app, *status_area);
    render_main_area(frame, app, *main_area);
    input::render(frame, input, *input_area);
}

/// Render the main area (frame view + log and downloads).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const SIDE_PANEL_WIDTH: u16 = 48;
    const FRAME_AREA_MIN_WIDTH: u16 = 40;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(FRAME_AREA_MIN_WIDTH), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(area);

    let [frame_area, side_area] = chunks.as_ref() else {
        return;
    };

    render_frame_area(frame, app, *frame_area);
    render_side_panel(frame, app, *side_area);
}

/// Render the preview text and plots for this viewer's role.
fn render_frame_area(frame: &mut Frame, app: &App, area: Rect) {
    const PREVIEW_HEIGHT: u16 = 10;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PREVIEW_HEIGHT), Constraint::Min(0)])
        .split(area);

    let [preview_area, plots_area] = chunks.as_ref() else {
        return;
    };

    match app.role() {
        Role::Sender => {
            preview::render(frame, " Last transmitted frame ", app.tx_preview(), *preview_area);
            plots::render_grid(frame, app.plots(), plots::TX_LAYOUT, *plots_area);
        },
        Role::Receiver => {
            preview::render(frame, " Received frame ", app.rx_preview(), *preview_area);
            plots::render_grid(frame, app.plots(), plots::RX_LAYOUT, *plots_area);
        },
    }
}

/// Render the log above the download list.
fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    const DOWNLOADS_HEIGHT: u16 = 7;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(DOWNLOADS_HEIGHT)])
        .split(area);

    let [log_area, downloads_area] = chunks.as_ref() else {
        return;
    };

    log::render(frame, app, *log_area);
    downloads::render(frame, app, *downloads_area);
}
