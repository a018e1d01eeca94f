use chrono::{DateTime, Duration, Utc};

/// Source of "now" for quiz timing.
///
/// Sessions read the clock on `start` and on every submitted answer. Tests use
/// `Clock::Fixed` and move it forward with [`Clock::advance`] to get exact
/// per-question timings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock backed by the system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock frozen at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock forward. No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    /// Move a fixed clock forward by a (possibly fractional) number of seconds.
    pub fn advance_secs(&mut self, secs: f64) {
        let millis = (secs * 1_000.0).round();
        if millis.is_finite() && millis >= 0.0 {
            // `as` saturates on out-of-range values
            #[allow(clippy::cast_possible_truncation)]
            self.advance(Duration::milliseconds(millis as i64));
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Seconds elapsed between two instants, as a float.
///
/// Clamped at zero so a wall clock stepping backwards never yields a negative
/// solving time.
#[must_use]
pub fn elapsed_secs(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    let secs = match delta.num_microseconds() {
        #[allow(clippy::cast_precision_loss)]
        Some(micros) => micros as f64 / 1_000_000.0,
        #[allow(clippy::cast_precision_loss)]
        None => delta.num_milliseconds() as f64 / 1_000.0,
    };
    secs.max(0.0)
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
