//! Full-screen chart dashboard for a generated table
//!
//! Eight panels in a 4×2 grid. `q`, `Esc` or Ctrl+C exits.

mod panels;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::Paragraph,
};
use synthfin_core::FinancialTable;

use crate::util::styles::{HEADER_COLOR, HELP_COLOR};

type PanelRenderer = fn(&mut Frame, Rect, &FinancialTable);

/// Panels in reading order: left to right, top to bottom
const PANELS: [PanelRenderer; 8] = [
    panels::revenue_vs_expenses,
    panels::revenue_structure,
    panels::expense_structure,
    panels::strategic_investments,
    panels::users,
    panels::performance,
    panels::profitability,
    panels::sector_totals,
];

pub struct Dashboard {
    table: FinancialTable,
    exit: bool,
}

impl Dashboard {
    pub fn new(table: FinancialTable) -> Self {
        Self { table, exit: false }
    }

    /// runs the dashboard's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::debug!(platform = %self.table.platform().name, "dashboard opened");
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        tracing::debug!("dashboard closed");
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        // Title, 4×2 grid, help line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let range = self.table.range();
        let title = format!(
            " Financial analysis of {} ({}-{}) ",
            self.table.platform().name,
            range.start(),
            range.end()
        );
        frame.render_widget(
            Paragraph::new(Line::from(title).bold().fg(HEADER_COLOR)).centered(),
            chunks[0],
        );

        for (area, render) in grid_cells(chunks[1]).into_iter().zip(PANELS) {
            render(frame, area, &self.table);
        }

        frame.render_widget(
            Paragraph::new(Line::from(" [q] quit ").fg(HELP_COLOR)),
            chunks[2],
        );
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => self.exit = true,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.exit = true
            }
            KeyCode::Esc => self.exit = true,
            _ => {}
        }
    }
}

/// Split `area` into four rows of two equal cells
fn grid_cells(area: Rect) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    rows.iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50); 2])
                .split(*row)
                .to_vec()
        })
        .collect()
}
