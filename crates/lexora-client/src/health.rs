//! Cached reachability of the Lexora API.
//!
//! The gate starts `Unknown` and only moves on a health check result. A result
//! is trusted for the cooldown window; request failures in between never touch it.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    /// No health check has completed yet.
    Unknown,
    Online,
    Offline,
}

impl Reachability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthGate {
    state: Reachability,
    cooldown: Duration,
    checked_at: Option<Instant>,
    checked_at_utc: Option<DateTime<Utc>>,
}

impl HealthGate {
    /// An `Unknown` gate whose results stay fresh for `cooldown`.
    ///
    /// A zero cooldown makes every lookup miss.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: Reachability::Unknown,
            cooldown,
            checked_at: None,
            checked_at_utc: None,
        }
    }

    /// Cached answer if the last check is still within the cooldown at `now`.
    ///
    /// Returns `None` when a new check is due.
    pub fn fresh(&self, now: Instant) -> Option<bool> {
        let checked_at = self.checked_at?;
        if now.saturating_duration_since(checked_at) < self.cooldown {
            match self.state {
                Reachability::Online => Some(true),
                Reachability::Offline => Some(false),
                Reachability::Unknown => None,
            }
        } else {
            None
        }
    }

    /// Store a check result. `now` and `now_utc` name the same moment: the
    /// monotonic one drives the cooldown, the wall-clock one is for display.
    pub fn record(&mut self, now: Instant, now_utc: DateTime<Utc>, online: bool) {
        self.state = if online {
            Reachability::Online
        } else {
            Reachability::Offline
        };
        self.checked_at = Some(now);
        self.checked_at_utc = Some(now_utc);
    }

    pub fn reachability(&self) -> Reachability {
        self.state
    }

    /// Wall-clock time of the last check.
    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.checked_at_utc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_secs(30);

    #[test]
    fn starts_unknown_and_due() {
        let gate = HealthGate::new(COOLDOWN);
        assert_eq!(gate.reachability(), Reachability::Unknown);
        assert_eq!(gate.fresh(Instant::now()), None);
        assert!(gate.last_checked().is_none());
    }

    #[test]
    fn result_is_cached_within_cooldown() {
        let mut gate = HealthGate::new(COOLDOWN);
        let t0 = Instant::now();
        gate.record(t0, Utc::now(), true);

        assert_eq!(gate.reachability(), Reachability::Online);
        assert_eq!(gate.fresh(t0), Some(true));
        assert_eq!(gate.fresh(t0 + Duration::from_secs(29)), Some(true));
        assert!(gate.last_checked().is_some());
    }

    #[test]
    fn last_checked_is_the_recorded_moment() {
        let mut gate = HealthGate::new(COOLDOWN);
        let started = DateTime::parse_from_rfc3339("2026-10-19T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        gate.record(Instant::now(), started, false);
        assert_eq!(gate.last_checked(), Some(started));
    }

    #[test]
    fn offline_result_is_cached_too() {
        let mut gate = HealthGate::new(COOLDOWN);
        let t0 = Instant::now();
        gate.record(t0, Utc::now(), false);
        assert_eq!(gate.reachability(), Reachability::Offline);
        assert_eq!(gate.fresh(t0 + Duration::from_secs(10)), Some(false));
    }

    #[test]
    fn check_due_once_cooldown_elapses() {
        let mut gate = HealthGate::new(COOLDOWN);
        let t0 = Instant::now();
        gate.record(t0, Utc::now(), true);
        assert_eq!(gate.fresh(t0 + COOLDOWN), None);
        // State survives until the next result lands.
        assert_eq!(gate.reachability(), Reachability::Online);
    }

    #[test]
    fn new_result_replaces_state() {
        let mut gate = HealthGate::new(COOLDOWN);
        let t0 = Instant::now();
        gate.record(t0, Utc::now(), true);
        let t1 = t0 + Duration::from_secs(31);
        gate.record(t1, Utc::now(), false);
        assert_eq!(gate.reachability(), Reachability::Offline);
        assert_eq!(gate.fresh(t1 + Duration::from_secs(1)), Some(false));
    }

    #[test]
    fn zero_cooldown_never_caches() {
        let mut gate = HealthGate::new(Duration::ZERO);
        let t0 = Instant::now();
        gate.record(t0, Utc::now(), true);
        assert_eq!(gate.fresh(t0), None);
    }
}
