//! Interaction controller
//!
//! Turns button activations into screen switches, fetches, and the
//! feedback cooldown.

use tokio::task::JoinHandle;

use crate::api::{JokeFetcher, QuoteFetcher};
use crate::FEEDBACK_COOLDOWN;

use super::state::Screen;
use super::view::View;

/// User-triggered actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetJoke,
    GetQuote,
    Back,
    AnotherJoke,
    AnotherQuote,
    Funny,
}

impl Action {
    /// Button caption; the funny button's caption comes from its state
    pub fn label(&self) -> &'static str {
        match self {
            Action::GetJoke => "Get Joke",
            Action::GetQuote => "Get Quote",
            Action::Back => "Back",
            Action::AnotherJoke => "Another Joke",
            Action::AnotherQuote => "Another Quote",
            Action::Funny => super::feedback::FEEDBACK_LABEL,
        }
    }
}

#[derive(Clone)]
pub struct InteractionController {
    view: View,
    jokes: JokeFetcher,
    quotes: QuoteFetcher,
}

impl InteractionController {
    pub fn new(view: View, jokes: JokeFetcher, quotes: QuoteFetcher) -> Self {
        Self {
            view,
            jokes,
            quotes,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Handle one activation.
    ///
    /// Returns the background task it started (a fetch or the cooldown
    /// timer), if any. Nothing waits on it; the handle is only for callers
    /// that want to. Must be called inside a tokio runtime.
    pub fn dispatch(&self, action: Action) -> Option<JoinHandle<()>> {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::GetJoke => {
                let task = self.spawn_joke();
                self.view.show_screen(Screen::Joke);
                Some(task)
            }
            Action::GetQuote => {
                let task = self.spawn_quote();
                self.view.show_screen(Screen::Quote);
                Some(task)
            }
            Action::Back => {
                self.view.show_screen(Screen::Home);
                None
            }
            Action::AnotherJoke => Some(self.spawn_joke()),
            Action::AnotherQuote => Some(self.spawn_quote()),
            Action::Funny => self.start_feedback_cooldown(),
        }
    }

    fn spawn_joke(&self) -> JoinHandle<()> {
        let fetch = self.jokes.fetch();
        tokio::spawn(async move {
            fetch.await;
        })
    }

    fn spawn_quote(&self) -> JoinHandle<()> {
        let fetch = self.quotes.fetch();
        tokio::spawn(async move {
            fetch.await;
        })
    }

    fn start_feedback_cooldown(&self) -> Option<JoinHandle<()>> {
        if !self.view.update(|vm| vm.feedback.activate()) {
            tracing::trace!("feedback button pressed during cooldown");
            return None;
        }

        let view = self.view.clone();
        Some(tokio::spawn(async move {
            tokio::time::sleep(FEEDBACK_COOLDOWN).await;
            view.update(|vm| vm.feedback.finish_cooldown());
        }))
    }
}
