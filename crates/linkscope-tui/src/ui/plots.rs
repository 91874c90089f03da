//! Plot panels
//!
//! Paints recorded [`DisplayList`]s onto ratatui canvases. Display lists use
//! a top-left origin with y growing downwards; the canvas grows upwards, so
//! y is flipped.

use linkscope_app::{PlotSlot, Plots};
use linkscope_render::{DisplayList, Shape};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Sender plots, row by row.
pub const TX_LAYOUT: &[&[PlotSlot]] = &[
    &[PlotSlot::TxConstClean, PlotSlot::TxConstNoisy],
    &[PlotSlot::TxWaveClean, PlotSlot::TxWaveNoisy],
    &[PlotSlot::TxBits],
];

/// Receiver plots, row by row.
pub const RX_LAYOUT: &[&[PlotSlot]] = &[&[PlotSlot::RxConstClean, PlotSlot::RxConstNoisy]];

/// Render plots in rows of equal height and columns of equal width.
pub fn render_grid(frame: &mut Frame, plots: &Plots, rows: &[&[PlotSlot]], area: Rect) {
    let row_areas = Layout::vertical(rows.iter().map(|_| Constraint::Ratio(1, rows.len() as u32))).split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::horizontal(row.iter().map(|_| Constraint::Ratio(1, row.len() as u32))).split(*row_area);
        for (slot, cell) in row.iter().zip(cells.iter()) {
            render_plot(frame, slot.title(), plots.get(*slot), *cell);
        }
    }
}

/// Render one display list in a titled canvas.
fn render_plot(frame: &mut Frame, title: &str, list: &DisplayList, area: Rect) {
    let height = list.height();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")))
        .marker(Marker::Braille)
        .x_bounds([0.0, list.width()])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for shape in list.shapes() {
                match shape {
                    Shape::Line { from, to, color } => ctx.draw(&CanvasLine {
                        x1: from.x,
                        y1: height - from.y,
                        x2: to.x,
                        y2: height - to.y,
                        color: to_color(*color),
                    }),
                    Shape::Polyline { points, color } => {
                        for pair in points.windows(2) {
                            ctx.draw(&CanvasLine {
                                x1: pair[0].x,
                                y1: height - pair[0].y,
                                x2: pair[1].x,
                                y2: height - pair[1].y,
                                color: to_color(*color),
                            });
                        }
                    },
                    Shape::Circle { center, radius, color } => ctx.draw(&Circle {
                        x: center.x,
                        y: height - center.y,
                        radius: *radius,
                        color: to_color(*color),
                    }),
                    Shape::Text { at, text, color } => ctx.print(
                        at.x,
                        height - at.y,
                        Span::styled(text.clone(), Style::default().fg(to_color(*color))),
                    ),
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn to_color(color: linkscope_render::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
