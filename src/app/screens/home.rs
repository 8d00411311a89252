//! Home screen: pick a joke or a quote

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_help, render_title, ButtonRow};
use crate::app::controller::Action;
use crate::app::state::Screen;
use crate::app::view::ViewModel;

#[derive(Debug, Clone)]
pub struct HomeScreen {
    buttons: ButtonRow,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            buttons: ButtonRow::new(&[Action::GetJoke, Action::GetQuote]),
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
                Constraint::Min(5),    // Greeting
                Constraint::Length(3), // Buttons
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        render_title(f, chunks[0], Screen::Home.title());

        let greeting = Paragraph::new(vec![
            Line::from(""),
            Line::from("Need a laugh or a little inspiration?"),
            Line::from(""),
            Line::from("Pick one below."),
        ])
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(greeting, chunks[1]);

        self.buttons.render(f, chunks[2], vm);
        render_help(f, chunks[3], "Quit");
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_buttons() {
        let mut screen = HomeScreen::new();
        assert_eq!(screen.buttons().actions(), &[Action::GetJoke, Action::GetQuote]);
        screen.buttons_mut().select_next();
        assert_eq!(screen.buttons().selected_action(), Action::GetQuote);
    }
}
