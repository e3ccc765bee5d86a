//! Elapsed-time accounting across start/pause/lap/reset.
//!
//! Only `(accumulated elapsed while stopped, timestamp when last started)` is
//! stored; the current total is derived fresh on every read, so it never
//! drifts while running. Every operation takes `now` explicitly.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchState {
    /// Set while running, `None` while stopped.
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    /// Time accumulated over previous run intervals.
    pub elapsed: Duration,
    pub laps: Vec<Duration>,
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self {
            started_at: None,
            elapsed: Duration::ZERO,
            laps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum StopwatchAction {
    Start,
    Pause,
    Lap,
    Reset,
}

impl StopwatchState {
    pub fn running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start the clock. No-op if already running.
    pub fn start(&mut self, now: OffsetDateTime) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Fold the current run interval into `elapsed` and stop. No-op if
    /// already stopped.
    pub fn pause(&mut self, now: OffsetDateTime) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed += now - started_at;
        }
    }

    /// Record the current total elapsed as a lap. Run state is unchanged.
    pub fn lap(&mut self, now: OffsetDateTime) {
        let total = self.total_elapsed(now);
        self.laps.push(total);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, action: StopwatchAction, now: OffsetDateTime) {
        match action {
            StopwatchAction::Start => self.start(now),
            StopwatchAction::Pause => self.pause(now),
            StopwatchAction::Lap => self.lap(now),
            StopwatchAction::Reset => self.reset(),
        }
    }

    /// Current total elapsed, derived from the stored accumulator and the
    /// open run interval if any.
    pub fn total_elapsed(&self, now: OffsetDateTime) -> Duration {
        match self.started_at {
            Some(started_at) => self.elapsed + (now - started_at),
            None => self.elapsed,
        }
    }

    /// Total elapsed as (hours, minutes, seconds).
    pub fn elapsed_hms(&self, now: OffsetDateTime) -> (i64, i64, i64) {
        hms(self.total_elapsed(now))
    }
}

pub fn hms(duration: Duration) -> (i64, i64, i64) {
    let total_seconds = duration.whole_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    (hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn at(seconds: i64) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(seconds)
    }

    #[test]
    fn start_then_immediate_pause_leaves_zero_elapsed() {
        let mut state = StopwatchState::default();
        let now = at(100);

        state.start(now);
        state.pause(now);

        assert!(!state.running());
        assert_eq!(state.total_elapsed(now), Duration::ZERO);
    }

    #[test]
    fn start_is_a_noop_while_running() {
        let mut state = StopwatchState::default();
        state.start(at(0));
        state.start(at(50));

        assert_eq!(state.started_at, Some(at(0)));
        assert_eq!(state.total_elapsed(at(60)), Duration::seconds(60));
    }

    #[test]
    fn pause_is_a_noop_while_stopped() {
        let mut state = StopwatchState::default();
        state.pause(at(10));

        assert_eq!(state, StopwatchState::default());
    }

    #[test]
    fn elapsed_accumulates_across_pause_and_resume() {
        let mut state = StopwatchState::default();
        state.start(at(0));
        state.pause(at(5));
        state.start(at(60));
        state.pause(at(62));

        assert_eq!(state.elapsed, Duration::seconds(7));
        // Derived total does not move while stopped.
        assert_eq!(state.total_elapsed(at(1000)), Duration::seconds(7));
    }

    #[test]
    fn lap_records_the_running_total_without_stopping() {
        let mut state = StopwatchState::default();
        state.start(at(0));
        state.lap(at(3));
        state.pause(at(10));

        assert_eq!(state.laps, vec![Duration::seconds(3)]);
        assert!(state.laps[0] <= state.total_elapsed(at(10)));
    }

    #[test]
    fn lap_while_stopped_records_the_accumulator() {
        let mut state = StopwatchState::default();
        state.start(at(0));
        state.pause(at(4));
        state.lap(at(99));

        assert_eq!(state.laps, vec![Duration::seconds(4)]);
        assert!(!state.running());
    }

    #[test]
    fn reset_discards_everything_in_any_state() {
        let mut state = StopwatchState::default();
        state.start(at(0));
        state.lap(at(1));
        state.reset();

        assert_eq!(state, StopwatchState::default());
    }

    #[test]
    fn query_is_derived_while_running() {
        let mut state = StopwatchState::default();
        state.start(at(0));

        assert_eq!(state.total_elapsed(at(30)), Duration::seconds(30));
        assert_eq!(state.total_elapsed(at(45)), Duration::seconds(45));
        assert_eq!(state.elapsed_hms(at(3723)), (1, 2, 3));
    }

    #[test]
    fn action_verbs_parse_case_insensitively() {
        assert_eq!(
            StopwatchAction::from_str("start").unwrap(),
            StopwatchAction::Start
        );
        assert_eq!(
            StopwatchAction::from_str("Pause").unwrap(),
            StopwatchAction::Pause
        );
        assert!(StopwatchAction::from_str("rewind").is_err());
    }
}
