use crate::navigation::Confirm;

/// Prompt shown before leaving while audio is playing
pub const LEAVE_WHILE_PLAYING_MESSAGE: &str =
    "Audio is currently playing. Are you sure you want to leave?";

/// Decision for an attempt to close the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnloadDecision {
    Proceed,
    /// Ask the user before closing
    Prompt(&'static str),
}

/// Tracks whether the external audio player is playing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackGuard {
    is_playing: bool,
}

impl PlaybackGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn on_playback_started(&mut self) {
        self.is_playing = true;
    }

    pub fn on_playback_stopped(&mut self) {
        self.is_playing = false;
    }

    /// Whether a navigation may proceed; only prompts while playing
    pub fn allow_leave(&self, confirm: &dyn Confirm) -> bool {
        !self.is_playing || confirm.confirm(LEAVE_WHILE_PLAYING_MESSAGE)
    }

    pub fn before_unload(&self) -> UnloadDecision {
        if self.is_playing {
            UnloadDecision::Prompt(LEAVE_WHILE_PLAYING_MESSAGE)
        } else {
            UnloadDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::navigation::testing::FixedConfirm;

    #[test]
    fn toggles_with_notifications() {
        let mut guard = PlaybackGuard::new();
        assert!(!guard.is_playing());

        guard.on_playback_started();
        assert!(guard.is_playing());

        guard.on_playback_stopped();
        assert!(!guard.is_playing());
    }

    #[test]
    fn idle_guard_never_prompts() {
        let guard = PlaybackGuard::new();
        let confirm = FixedConfirm::new(false);

        assert!(guard.allow_leave(&confirm));
        assert_eq!(confirm.asked.get(), 0);
        assert_eq!(guard.before_unload(), UnloadDecision::Proceed);
    }

    #[test]
    fn playing_guard_defers_to_confirmation() {
        let mut guard = PlaybackGuard::new();
        guard.on_playback_started();

        assert!(!guard.allow_leave(&FixedConfirm::new(false)));
        assert!(guard.allow_leave(&FixedConfirm::new(true)));
        assert_eq!(
            guard.before_unload(),
            UnloadDecision::Prompt(LEAVE_WHILE_PLAYING_MESSAGE)
        );
    }
}
