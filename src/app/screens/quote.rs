//! Quote screen: latest quote and its author

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{render_help, render_title, ButtonRow};
use crate::api::Quote;
use crate::app::controller::Action;
use crate::app::state::Screen;
use crate::app::view::{Panel, ViewModel};

#[derive(Debug, Clone)]
pub struct QuoteScreen {
    buttons: ButtonRow,
}

impl QuoteScreen {
    pub fn new() -> Self {
        Self {
            buttons: ButtonRow::new(&[Action::AnotherQuote, Action::Back]),
        }
    }

    pub fn buttons(&self) -> &ButtonRow {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut ButtonRow {
        &mut self.buttons
    }

    pub fn render(&self, f: &mut Frame, vm: &ViewModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Quote
                Constraint::Length(3), // Buttons
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        render_title(f, chunks[0], Screen::Quote.title());

        let body = Paragraph::new(quote_lines(&vm.quote))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, chunks[1]);

        self.buttons.render(f, chunks[2], vm);
        render_help(f, chunks[3], "Back");
    }
}

fn quote_lines(panel: &Panel<Quote>) -> Vec<Line<'static>> {
    match panel {
        Panel::Empty => vec![Line::from(""), Line::from("No quote yet.")],
        Panel::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading quote...",
                Style::default().fg(Color::Yellow),
            )),
        ],
        Panel::Ready(quote) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("\"{}\"", quote.quote),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("- {}", quote.author),
                Style::default().fg(Color::Cyan),
            )),
        ],
        Panel::Message(text) => vec![
            Line::from(""),
            Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red))),
        ],
    }
}

impl Default for QuoteScreen {
    fn default() -> Self {
        Self::new()
    }
}
