//! TUI application module
//!
//! Screen management, display state, the interaction controller, and the
//! terminal loop that ties them together.

pub mod app;
pub mod bootstrap;
pub mod controller;
pub mod feedback;
pub mod screens;
pub mod state;
pub mod tui;
pub mod view;

pub use app::{App, Flow, Screens};
pub use bootstrap::Bootstrap;
pub use controller::{Action, InteractionController};
pub use feedback::{FeedbackControl, FeedbackState};
pub use state::{NavigationAction, Screen, ScreenManager};
pub use tui::Tui;
pub use view::{Panel, View, ViewModel};
