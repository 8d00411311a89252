//! TUI screen components
//!
//! One struct per screen. Each owns a row of buttons and remembers which
//! one has focus; the shared display state comes in at render time.

pub mod home;
pub mod joke;
pub mod quote;

pub use home::HomeScreen;
pub use joke::JokeScreen;
pub use quote::QuoteScreen;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::controller::Action;
use super::view::ViewModel;

/// Horizontal row of buttons with wrapping focus
#[derive(Debug, Clone)]
pub struct ButtonRow {
    actions: &'static [Action],
    selected_index: usize,
}

impl ButtonRow {
    pub fn new(actions: &'static [Action]) -> Self {
        Self {
            actions,
            selected_index: 0,
        }
    }

    pub fn actions(&self) -> &'static [Action] {
        self.actions
    }

    pub fn selected_action(&self) -> Action {
        self.actions[self.selected_index]
    }

    /// Move focus right, wrapping to the first button
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.actions.len();
    }

    /// Move focus left, wrapping to the last button
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.actions.len() - 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected_index = 0;
    }

    pub fn render(&self, f: &mut Frame, area: Rect, vm: &ViewModel) {
        let mut spans = Vec::new();
        for (i, action) in self.actions.iter().enumerate() {
            let (label, enabled) = match action {
                Action::Funny => (vm.feedback.label(), vm.feedback.is_enabled()),
                other => (other.label(), true),
            };

            let style = button_style(i == self.selected_index, enabled);

            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("[ {} ]", label), style));
        }

        let buttons = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(buttons, area);
    }
}

/// Focus stays visible on a disabled button: dimmed, but reversed
fn button_style(focused: bool, enabled: bool) -> Style {
    match (focused, enabled) {
        (true, true) => Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::White),
        (true, false) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM | Modifier::REVERSED),
        (false, false) => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    }
}

/// Title bar shared by all screens
fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(title, area);
}

/// Key hints shared by all screens
fn render_help(f: &mut Frame, area: Rect, back_label: &str) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let help = Paragraph::new(Line::from(vec![
        key("←→"),
        Span::raw(" Focus  "),
        key("Enter"),
        Span::raw(" Press  "),
        key("Esc"),
        Span::raw(format!(" {}  ", back_label)),
        key("Q"),
        Span::raw(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(help, area);
}
