//! Study/break interval timer driven by one-second ticks.

pub const STUDY_SECONDS: u32 = 25 * 60;
pub const BREAK_SECONDS: u32 = 5 * 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PomodoroMode {
    #[default]
    Study,
    Break,
}

impl PomodoroMode {
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::Study => STUDY_SECONDS,
            Self::Break => BREAK_SECONDS,
        }
    }

    fn other(self) -> Self {
        match self {
            Self::Study => Self::Break,
            Self::Break => Self::Study,
        }
    }
}

/// Timer state.
///
/// Reaching zero switches to the other mode at full length and pauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    mode: PomodoroMode,
    remaining_secs: u32,
    active: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new()
    }
}

impl Pomodoro {
    pub fn new() -> Self {
        Self {
            mode: PomodoroMode::Study,
            remaining_secs: STUDY_SECONDS,
            active: false,
        }
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `MM:SS` display.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / 60,
            self.remaining_secs % 60
        )
    }

    /// Starts or pauses the countdown.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }

    /// Jumps to `mode` at full length, paused.
    pub fn switch_to(&mut self, mode: PomodoroMode) {
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
        self.active = false;
    }

    /// Restarts the current mode, paused.
    pub fn reset(&mut self) {
        self.switch_to(self.mode);
    }

    /// Advances one second while active.
    ///
    /// Returns `true` when this tick completed an interval.
    pub fn tick(&mut self) -> bool {
        if !self.active || self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs > 0 {
            return false;
        }
        self.switch_to(self.mode.other());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Pomodoro, PomodoroMode, BREAK_SECONDS, STUDY_SECONDS};

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut timer = Pomodoro::new();
        assert!(!timer.tick());
        assert_eq!(timer.remaining_secs(), STUDY_SECONDS);
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn completing_study_switches_to_paused_break() {
        let mut timer = Pomodoro::new();
        timer.toggle();
        let completed = (0..STUDY_SECONDS).filter(|_| timer.tick()).count();
        assert_eq!(completed, 1);
        assert_eq!(timer.mode(), PomodoroMode::Break);
        assert_eq!(timer.remaining_secs(), BREAK_SECONDS);
        assert!(!timer.is_active());
    }

    #[test]
    fn reset_restores_current_mode_length() {
        let mut timer = Pomodoro::new();
        timer.switch_to(PomodoroMode::Break);
        timer.toggle();
        timer.tick();
        timer.reset();
        assert_eq!(timer.display(), "05:00");
        assert!(!timer.is_active());
    }
}
