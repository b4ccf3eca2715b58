//! Focus timer state machine.
//!
//! Pure countdown logic. The one-second ticker and persistence live in
//! `sab-app`.

use crate::settings::{TimerSettings, TIMER_DURATION_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused or already at zero.
    Idle,
    Running { remaining_seconds: u32 },
    /// This tick reached zero; the timer stopped itself.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    duration_minutes: u32,
    remaining_seconds: u32,
    is_running: bool,
    auto_dnd_enabled: bool,
    play_end_sound: bool,
}

impl FocusTimer {
    pub fn from_settings(settings: &TimerSettings) -> Self {
        let settings = settings.clone().normalized();
        Self {
            duration_minutes: settings.duration_minutes,
            remaining_seconds: settings.remaining_seconds,
            is_running: settings.is_running,
            auto_dnd_enabled: settings.auto_dnd_enabled,
            play_end_sound: settings.play_end_sound,
        }
    }

    pub fn to_settings(&self) -> TimerSettings {
        TimerSettings {
            duration_minutes: self.duration_minutes,
            remaining_seconds: self.remaining_seconds,
            is_running: self.is_running,
            auto_dnd_enabled: self.auto_dnd_enabled,
            play_end_sound: self.play_end_sound,
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn auto_dnd_enabled(&self) -> bool {
        self.auto_dnd_enabled
    }

    pub fn play_end_sound(&self) -> bool {
        self.play_end_sound
    }

    /// Change the session length.
    ///
    /// An idle timer is refilled to the new length; a running one keeps its
    /// remaining time, capped at the new length.
    pub fn set_duration(&mut self, minutes: u32) {
        self.duration_minutes =
            minutes.clamp(*TIMER_DURATION_RANGE.start(), *TIMER_DURATION_RANGE.end());
        let full = self.full_seconds();
        if self.is_running {
            self.remaining_seconds = self.remaining_seconds.min(full);
        } else {
            self.remaining_seconds = full;
        }
    }

    pub fn start(&mut self) {
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.full_seconds();
        }
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.full_seconds();
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.remaining_seconds == 0 {
            return TickOutcome::Idle;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            return TickOutcome::Finished;
        }
        TickOutcome::Running {
            remaining_seconds: self.remaining_seconds,
        }
    }

    fn full_seconds(&self) -> u32 {
        self.duration_minutes * 60
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::from_settings(&TimerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_idle_until_started() {
        let mut timer = FocusTimer::default();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds(), 25 * 60);

        timer.start();
        assert_eq!(
            timer.tick(),
            TickOutcome::Running {
                remaining_seconds: 25 * 60 - 1
            }
        );
    }

    #[test]
    fn reaching_zero_finishes_and_stops() {
        let mut timer = FocusTimer::from_settings(&TimerSettings {
            remaining_seconds: 2,
            is_running: true,
            ..TimerSettings::default()
        });

        assert!(matches!(timer.tick(), TickOutcome::Running { .. }));
        assert_eq!(timer.tick(), TickOutcome::Finished);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(), TickOutcome::Idle);
    }

    #[test]
    fn start_refills_an_exhausted_timer() {
        let mut timer = FocusTimer::from_settings(&TimerSettings {
            duration_minutes: 10,
            remaining_seconds: 0,
            ..TimerSettings::default()
        });
        timer.start();
        assert_eq!(timer.remaining_seconds(), 600);
        assert!(timer.is_running());
    }

    #[test]
    fn set_duration_clamps_and_respects_running_state() {
        let mut timer = FocusTimer::default();
        timer.set_duration(2);
        assert_eq!(timer.duration_minutes(), 5);
        assert_eq!(timer.remaining_seconds(), 300);

        timer.set_duration(30);
        timer.start();
        timer.tick();
        timer.set_duration(90);
        assert_eq!(timer.remaining_seconds(), 30 * 60 - 1);

        timer.set_duration(5);
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn pause_and_reset() {
        let mut timer = FocusTimer::default();
        timer.start();
        timer.tick();
        timer.pause();
        assert_eq!(timer.tick(), TickOutcome::Idle);

        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn round_trips_through_settings() {
        let mut timer = FocusTimer::default();
        timer.set_duration(45);
        timer.start();
        timer.tick();

        let restored = FocusTimer::from_settings(&timer.to_settings());
        assert_eq!(restored, timer);
    }
}
