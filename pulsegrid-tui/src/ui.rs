// TUI rendering: the neuron grid as RGB-colored cells + status panel.

use std::io::Stdout;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{App, GRID_WIDTH};
use crate::backend::GridBackend;

/// Draws the UI each frame:
/// - Top: the population as a row-major grid, one cell per neuron, colored
///   R = pulse_freshness, G = pulse_timer, B = charge (clipped to the area).
/// - Bottom: status including tick, neuron count, run state, controls.
pub fn draw<B: GridBackend>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &App<B>,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(4), Constraint::Length(3)].as_ref())
            .split(f.size());

        // Inner area of the bordered grid widget
        let visible_rows = chunks[0].height.saturating_sub(2) as usize;
        let visible_cols = (chunks[0].width.saturating_sub(2) as usize).min(GRID_WIDTH);

        let mut lines = Vec::with_capacity(visible_rows);
        for row in 0..app.rows().min(visible_rows) {
            let mut spans = Vec::with_capacity(visible_cols);
            for col in 0..visible_cols {
                let index = row * GRID_WIDTH + col;
                if index >= app.backend.neurons() {
                    break;
                }
                let (freshness, charge, timer) = app.backend.cell(index);
                spans.push(Span::styled(
                    " ",
                    Style::default().bg(Color::Rgb(freshness, timer, charge)),
                ));
            }
            lines.push(Line::from(spans));
        }

        let grid_widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Neurons").borders(Borders::ALL));
        f.render_widget(grid_widget, chunks[0]);

        // Status and controls
        let status = format!(
            "Tick: {} | Neurons: {} | Running: {} | Controls: [s] Step  [r] Run/Pause  [q] Quit",
            app.tick,
            app.backend.neurons(),
            if app.running { "yes" } else { "no" }
        );
        let status_widget = Paragraph::new(status)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(status_widget, chunks[1]);
    })?;
    Ok(())
}
