//! Session State Machine
//!
//! Transition table for a match session. Rejected transitions leave the
//! state untouched and are reported through `TransitionResult`.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    /// Player pressed stop: no history record
    Stop,
    /// Win condition reached: recorded
    Finish,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            (SessionState::Idle, SessionAction::Start) => Some(SessionState::Running),
            (SessionState::Ended, SessionAction::Start) => Some(SessionState::Running),

            (SessionState::Running, SessionAction::Stop) => Some(SessionState::Ended),
            (SessionState::Running, SessionAction::Finish) => Some(SessionState::Ended),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
