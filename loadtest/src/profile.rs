//! Traffic profile for a constant-arrival-rate run.

use humantime::parse_duration;
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

/// How fast to drive the scenario and how large a worker pool the engine
/// may use while doing so.
///
/// `rate` iterations are issued per `time_unit`, for `duration` total.
/// The engine autoscales its worker pool to hold that rate; the
/// `base_concurrency`/`max_concurrency` pair is the envelope the run is
/// expected to stay within, checked against the engine's reported
/// concurrency once the run finishes.
#[derive(Debug, Clone)]
pub struct LoadProfile {
    pub rate: u32,
    pub time_unit: Duration,
    pub duration: Duration,
    pub base_concurrency: usize,
    pub max_concurrency: usize,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("rate must be greater than zero")]
    ZeroRate,

    #[error("time unit must be a positive duration")]
    ZeroTimeUnit,

    #[error("duration must be a positive duration")]
    ZeroDuration,

    #[error("base concurrency must be greater than zero")]
    ZeroConcurrency,

    #[error("max concurrency ({max}) must be at least base concurrency ({base})")]
    ConcurrencyBounds { base: usize, max: usize },

    #[error("invalid duration string: {0}")]
    Parse(#[from] humantime::DurationError),
}

impl LoadProfile {
    /// The login scenario profile: 100 iterations per second for 5s, with
    /// a worker pool between 50 and 200.
    pub fn constant_rps() -> Self {
        Self {
            rate: 100,
            time_unit: Duration::from_secs(1),
            duration: Duration::from_secs(5),
            base_concurrency: 50,
            max_concurrency: 200,
        }
    }

    /// Build a profile from humantime strings (e.g. `"1s"`, `"5s"`),
    /// validating the invariants.
    pub fn with_durations(
        rate: u32,
        time_unit: &str,
        duration: &str,
        base_concurrency: usize,
        max_concurrency: usize,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            rate,
            time_unit: parse_duration(time_unit)?,
            duration: parse_duration(duration)?,
            base_concurrency,
            max_concurrency,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.rate == 0 {
            return Err(ProfileError::ZeroRate);
        }
        if self.time_unit.is_zero() {
            return Err(ProfileError::ZeroTimeUnit);
        }
        if self.duration.is_zero() {
            return Err(ProfileError::ZeroDuration);
        }
        if self.base_concurrency == 0 {
            return Err(ProfileError::ZeroConcurrency);
        }
        if self.max_concurrency < self.base_concurrency {
            return Err(ProfileError::ConcurrencyBounds {
                base: self.base_concurrency,
                max: self.max_concurrency,
            });
        }
        Ok(())
    }

    /// Iterations per second, as the goal TPS handed to the engine.
    ///
    /// Rounded to the nearest whole TPS; a validated profile never rounds
    /// all the way down to zero, but clamp to 1 rather than panic.
    pub fn goal_tps(&self) -> NonZeroU32 {
        let tps = self.rate as f64 / self.time_unit.as_secs_f64();
        NonZeroU32::new(tps.round() as u32).unwrap_or(NonZeroU32::MIN)
    }
}
