//! Screen management
//!
//! Tracks which of the three screens is visible and maps keyboard events
//! to navigation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Landing screen with the two "get" buttons
    #[default]
    Home,
    /// Latest joke
    Joke,
    /// Latest quote
    Quote,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Joke, Screen::Quote];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "QuipDeck",
            Screen::Joke => "Random Joke",
            Screen::Quote => "Random Quote",
        }
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Focus the previous button (arrow left, h, Shift+Tab)
    Previous,
    /// Focus the next button (arrow right, l, Tab)
    Next,
    /// Activate the focused button (Enter, Space)
    Select,
    /// Go back (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Owns the single visible screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenManager {
    active: Screen,
}

impl ScreenManager {
    /// Start on the home screen
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn is_visible(&self, screen: Screen) -> bool {
        self.active == screen
    }

    /// Make `target` the only visible screen.
    ///
    /// Returns whether anything changed; showing the active screen is a no-op.
    pub fn show_screen(&mut self, target: Screen) -> bool {
        if self.active == target {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?target, "screen switch");
        self.active = target;
        true
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Next,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_count(manager: &ScreenManager) -> usize {
        Screen::ALL.iter().filter(|s| manager.is_visible(**s)).count()
    }

    #[test]
    fn test_starts_on_home() {
        let manager = ScreenManager::new();
        assert_eq!(manager.active(), Screen::Home);
        assert!(manager.is_visible(Screen::Home));
        assert_eq!(visible_count(&manager), 1);
    }

    #[test]
    fn test_exactly_one_visible_after_every_switch() {
        let mut manager = ScreenManager::new();
        let sequence = [
            Screen::Joke,
            Screen::Quote,
            Screen::Quote,
            Screen::Home,
            Screen::Joke,
            Screen::Home,
            Screen::Home,
            Screen::Quote,
        ];

        for target in sequence {
            manager.show_screen(target);
            assert_eq!(visible_count(&manager), 1);
            assert!(manager.is_visible(target));
        }
    }

    #[test]
    fn test_show_screen_is_idempotent() {
        let mut once = ScreenManager::new();
        assert!(once.show_screen(Screen::Joke));

        let mut twice = ScreenManager::new();
        twice.show_screen(Screen::Joke);
        assert!(!twice.show_screen(Screen::Joke));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_key_to_navigation() {
        let key = |code, modifiers| ScreenManager::key_to_navigation(KeyEvent::new(code, modifiers));

        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::NONE), NavigationAction::Quit);
        assert_eq!(key(KeyCode::Char('Q'), KeyModifiers::NONE), NavigationAction::Quit);
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), NavigationAction::Quit);
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::NONE), NavigationAction::None);

        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), NavigationAction::Previous);
        assert_eq!(key(KeyCode::Char('h'), KeyModifiers::NONE), NavigationAction::Previous);
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), NavigationAction::Previous);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::SHIFT), NavigationAction::Previous);
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), NavigationAction::Next);
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), NavigationAction::Next);

        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), NavigationAction::Select);
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), NavigationAction::Select);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), NavigationAction::Back);
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), NavigationAction::Back);
    }
}
