//! Main application controller
//!
//! Owns the terminal, the three screens, and the bootstrapper, and runs the
//! draw / input loop.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{
    api::{HttpTransport, ReqwestTransport},
    app::{
        bootstrap::Bootstrap,
        controller::{Action, InteractionController},
        screens::{ButtonRow, HomeScreen, JokeScreen, QuoteScreen},
        state::{NavigationAction, Screen, ScreenManager},
        tui::Tui,
        view::{View, ViewModel},
    },
    config::ApiConfig,
    Result,
};

/// Whether the loop keeps going after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The three screens plus the focus bookkeeping between them
#[derive(Debug, Clone, Default)]
pub struct Screens {
    home: HomeScreen,
    joke: JokeScreen,
    quote: QuoteScreen,
    last_seen: Screen,
}

impl Screens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(&self, screen: Screen) -> &ButtonRow {
        match screen {
            Screen::Home => self.home.buttons(),
            Screen::Joke => self.joke.buttons(),
            Screen::Quote => self.quote.buttons(),
        }
    }

    fn buttons_mut(&mut self, screen: Screen) -> &mut ButtonRow {
        match screen {
            Screen::Home => self.home.buttons_mut(),
            Screen::Joke => self.joke.buttons_mut(),
            Screen::Quote => self.quote.buttons_mut(),
        }
    }

    /// Focus starts on the first button every time a screen is entered
    fn sync_focus(&mut self, active: Screen) {
        if active != self.last_seen {
            self.buttons_mut(active).reset();
            self.last_seen = active;
        }
    }

    /// Apply one navigation action to the visible screen
    pub fn route(&mut self, action: NavigationAction, controller: &InteractionController) -> Flow {
        let active = controller.view().active_screen();
        self.sync_focus(active);

        match action {
            NavigationAction::Quit => return Flow::Quit,
            NavigationAction::Next => self.buttons_mut(active).select_next(),
            NavigationAction::Previous => self.buttons_mut(active).select_previous(),
            NavigationAction::Select => {
                let pressed = self.buttons(active).selected_action();
                controller.dispatch(pressed);
            }
            NavigationAction::Back => match active {
                Screen::Home => return Flow::Quit,
                Screen::Joke | Screen::Quote => {
                    controller.dispatch(Action::Back);
                }
            },
            NavigationAction::None => {}
        }

        Flow::Continue
    }

    pub fn render(&mut self, f: &mut Frame, vm: &ViewModel) {
        let active = vm.screens.active();
        self.sync_focus(active);
        match active {
            Screen::Home => self.home.render(f, vm),
            Screen::Joke => self.joke.render(f, vm),
            Screen::Quote => self.quote.render(f, vm),
        }
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Shared display state
    view: View,
    /// Binds the controls once the terminal is up
    bootstrap: Bootstrap,
    /// Screen components
    screens: Screens,
}

impl App {
    /// Create a new application talking to the real endpoints
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()?))
    }

    pub fn with_transport(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let view = View::new();
        Ok(Self {
            tui: Tui::new()?,
            bootstrap: Bootstrap::new(view.clone(), config, transport),
            view,
            screens: Screens::new(),
        })
    }

    /// Initialize the terminal, then bind the controls
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        self.bootstrap.on_ready();
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.tui.should_quit() {
            self.draw()?;
            self.handle_events()?;
        }
        tracing::info!("quitting");
        Ok(())
    }

    /// Restore the terminal
    pub fn shutdown(&mut self) -> Result<()> {
        self.tui.restore()
    }

    fn draw(&mut self) -> Result<()> {
        let vm = self.view.snapshot();
        let screens = &mut self.screens;
        self.tui.draw(|f| screens.render(f, &vm))
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            self.handle_key(key);
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = ScreenManager::key_to_navigation(key);
        if action == NavigationAction::Quit {
            self.tui.quit();
            return;
        }

        // input before the terminal is ready goes nowhere
        let Some(controller) = self.bootstrap.controller() else {
            return;
        };

        if self.screens.route(action, controller) == Flow::Quit {
            self.tui.quit();
        }
    }
}
