//! Shared display state
//!
//! One [`ViewModel`] per process. Fetch tasks and the cooldown timer write
//! into it through a [`View`] handle; the render loop reads snapshots.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::{Joke, Quote};

use super::feedback::FeedbackControl;
use super::state::{Screen, ScreenManager};

/// Display state of one result panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel<T> {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// Request in flight
    Loading,
    /// Latest successful fetch
    Ready(T),
    /// Error or instruction shown in place of a result
    Message(String),
}

impl<T> Panel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Panel::Message(text) => Some(text),
            _ => None,
        }
    }
}

/// Everything the screens render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub screens: ScreenManager,
    pub joke: Panel<Joke>,
    pub quote: Panel<Quote>,
    pub feedback: FeedbackControl,
}

/// Cloneable handle to the shared [`ViewModel`]
#[derive(Debug, Clone, Default)]
pub struct View {
    inner: Arc<Mutex<ViewModel>>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ViewModel> {
        // updates are plain field writes, a poisoned lock still holds a complete model
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn read<R>(&self, f: impl FnOnce(&ViewModel) -> R) -> R {
        f(&self.lock())
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ViewModel) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> ViewModel {
        self.lock().clone()
    }

    pub fn active_screen(&self) -> Screen {
        self.read(|vm| vm.screens.active())
    }

    pub fn show_screen(&self, target: Screen) -> bool {
        self.update(|vm| vm.screens.show_screen(target))
    }

    pub fn joke(&self) -> Panel<Joke> {
        self.read(|vm| vm.joke.clone())
    }

    pub fn set_joke(&self, panel: Panel<Joke>) {
        self.update(|vm| vm.joke = panel);
    }

    pub fn quote(&self) -> Panel<Quote> {
        self.read(|vm| vm.quote.clone())
    }

    pub fn set_quote(&self, panel: Panel<Quote>) {
        self.update(|vm| vm.quote = panel);
    }

    pub fn feedback(&self) -> FeedbackControl {
        self.read(|vm| vm.feedback.clone())
    }
}
