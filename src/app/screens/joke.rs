//! Joke screen: latest joke, another-joke and funny buttons

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{render_help, render_title, ButtonRow};
use crate::api::Joke;
use crate::app::controller::Action;
use crate::app::state::Screen;
use crate::app::view::{Panel, ViewModel};

#[derive(Debug, Clone)]
pub struct JokeScreen {
    buttons: ButtonRow,
}

impl JokeScreen {
    pub fn new() -> Self {
        Self {
            buttons: ButtonRow::new(&[Action::AnotherJoke, Action::Funny, Action::Back]),
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
                Constraint::Min(6),    // Joke
                Constraint::Length(3), // Buttons
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        render_title(f, chunks[0], Screen::Joke.title());

        let body = Paragraph::new(joke_lines(&vm.joke))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, chunks[1]);

        self.buttons.render(f, chunks[2], vm);
        render_help(f, chunks[3], "Back");
    }
}

fn joke_lines(panel: &Panel<Joke>) -> Vec<Line<'static>> {
    match panel {
        Panel::Empty => vec![Line::from(""), Line::from("No joke yet.")],
        Panel::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading joke...",
                Style::default().fg(Color::Yellow),
            )),
        ],
        Panel::Ready(joke) => vec![
            Line::from(""),
            Line::from(joke.setup.clone()),
            Line::from(""),
            Line::from(Span::styled(
                joke.punchline.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Panel::Message(text) => vec![
            Line::from(""),
            Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red))),
        ],
    }
}

impl Default for JokeScreen {
    fn default() -> Self {
        Self::new()
    }
}
