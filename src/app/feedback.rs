//! The "that's funny" feedback button
//!
//! Pressing it swaps the label for an acknowledgment and disables the button
//! until the cooldown timer finishes. The timer itself lives in the
//! controller; this type only holds the two-state machine.

pub const FEEDBACK_LABEL: &str = "That's funny!";
pub const FEEDBACK_ACK_LABEL: &str = "Glad you liked it!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Cooldown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackControl {
    state: FeedbackState,
}

impl FeedbackControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FeedbackState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            FeedbackState::Idle => FEEDBACK_LABEL,
            FeedbackState::Cooldown => FEEDBACK_ACK_LABEL,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state == FeedbackState::Idle
    }

    /// Idle -> Cooldown. Returns false (and changes nothing) while cooling down.
    pub fn activate(&mut self) -> bool {
        match self.state {
            FeedbackState::Idle => {
                self.state = FeedbackState::Cooldown;
                true
            }
            FeedbackState::Cooldown => false,
        }
    }

    /// Cooldown -> Idle. Returns false if already idle.
    pub fn finish_cooldown(&mut self) -> bool {
        match self.state {
            FeedbackState::Cooldown => {
                self.state = FeedbackState::Idle;
                true
            }
            FeedbackState::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_projection() {
        let control = FeedbackControl::new();
        assert_eq!(control.label(), FEEDBACK_LABEL);
        assert!(control.is_enabled());
    }

    #[test]
    fn test_activation_cycle() {
        let mut control = FeedbackControl::new();

        assert!(control.activate());
        assert_eq!(control.state(), FeedbackState::Cooldown);
        assert_eq!(control.label(), FEEDBACK_ACK_LABEL);
        assert!(!control.is_enabled());

        // blocked while cooling down
        assert!(!control.activate());
        assert_eq!(control.state(), FeedbackState::Cooldown);

        assert!(control.finish_cooldown());
        assert_eq!(control, FeedbackControl::new());
        assert!(!control.finish_cooldown());
    }
}
