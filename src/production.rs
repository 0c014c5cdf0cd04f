//! Work unit production measurements.
//!
//! Pure functions of a project's numbers and measured times. Frame time is
//! the time per frame, unit time is the overall completion time of a work
//! unit. Results are rounded to five decimals (ties to even).

use crate::protein::Protein;
use std::time::Duration;

const SECONDS_PER_DAY: f64 = 86400.0;

const MAX_DECIMAL_PLACES: i32 = 5;

#[inline]
fn round5(value: f64) -> f64 {
    let scale = 10f64.powi(MAX_DECIMAL_PLACES);
    (value * scale).round_ties_even() / scale
}

/// All production measurements of a work unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProteinProduction {
    pub units_per_day: f64,
    pub bonus_multiplier: f64,
    pub credit: f64,
    pub points_per_day: f64,
}

/// Units per day (UPD) for the given frame time and frame count.
pub fn units_per_day(frame_time: Duration, frames: i32) -> f64 {
    let total = frame_time.as_secs_f64() * frames as f64;
    if total <= 0.0 || frame_time.is_zero() {
        return 0.0;
    }
    SECONDS_PER_DAY / total
}

/// Bonus multiplier for finishing within the preferred deadline.
///
/// 1.0 when there is no bonus factor, no unit time, or the unit took longer
/// than the preferred deadline.
pub fn bonus_multiplier(
    k_factor: f64,
    preferred_days: f64,
    maximum_days: f64,
    unit_time: Duration,
) -> f64 {
    if k_factor > 0.0 && !unit_time.is_zero() {
        let unit_seconds = unit_time.as_secs_f64();
        if unit_seconds <= preferred_days * SECONDS_PER_DAY {
            let unit_days = unit_seconds / SECONDS_PER_DAY;
            return round5((maximum_days * k_factor / unit_days).sqrt());
        }
    }
    1.0
}

/// Credit including the bonus earned for `unit_time`.
pub fn bonus_credit(
    credit: f64,
    k_factor: f64,
    preferred_days: f64,
    maximum_days: f64,
    unit_time: Duration,
) -> f64 {
    let multiplier = bonus_multiplier(k_factor, preferred_days, maximum_days, unit_time);
    round5(credit * multiplier)
}

/// Points per day (PPD) without bonus.
pub fn points_per_day(frame_time: Duration, frames: i32, credit: f64) -> f64 {
    if frame_time.is_zero() {
        return 0.0;
    }
    round5(units_per_day(frame_time, frames) * credit)
}

/// Points per day (PPD) including the bonus earned for `unit_time`.
pub fn bonus_points_per_day(
    frame_time: Duration,
    frames: i32,
    credit: f64,
    k_factor: f64,
    preferred_days: f64,
    maximum_days: f64,
    unit_time: Duration,
) -> f64 {
    if frame_time.is_zero() {
        return 0.0;
    }
    let base = units_per_day(frame_time, frames) * credit;
    let multiplier = bonus_multiplier(k_factor, preferred_days, maximum_days, unit_time);
    round5(base * multiplier)
}

/// Every production measurement at once.
pub fn production(
    frame_time: Duration,
    frames: i32,
    credit: f64,
    k_factor: f64,
    preferred_days: f64,
    maximum_days: f64,
    unit_time: Duration,
) -> ProteinProduction {
    ProteinProduction {
        units_per_day: units_per_day(frame_time, frames),
        bonus_multiplier: bonus_multiplier(k_factor, preferred_days, maximum_days, unit_time),
        credit: bonus_credit(credit, k_factor, preferred_days, maximum_days, unit_time),
        points_per_day: bonus_points_per_day(
            frame_time,
            frames,
            credit,
            k_factor,
            preferred_days,
            maximum_days,
            unit_time,
        ),
    }
}

impl Protein {
    pub fn units_per_day(&self, frame_time: Duration) -> f64 {
        units_per_day(frame_time, self.frames)
    }

    pub fn bonus_multiplier(&self, unit_time: Duration) -> f64 {
        bonus_multiplier(
            self.k_factor,
            self.preferred_days,
            self.maximum_days,
            unit_time,
        )
    }

    pub fn bonus_credit(&self, unit_time: Duration) -> f64 {
        bonus_credit(
            self.credit,
            self.k_factor,
            self.preferred_days,
            self.maximum_days,
            unit_time,
        )
    }

    pub fn points_per_day(&self, frame_time: Duration) -> f64 {
        points_per_day(frame_time, self.frames, self.credit)
    }

    pub fn bonus_points_per_day(&self, frame_time: Duration, unit_time: Duration) -> f64 {
        bonus_points_per_day(
            frame_time,
            self.frames,
            self.credit,
            self.k_factor,
            self.preferred_days,
            self.maximum_days,
            unit_time,
        )
    }

    /// All production measurements for this project.
    pub fn production(&self, frame_time: Duration, unit_time: Duration) -> ProteinProduction {
        production(
            frame_time,
            self.frames,
            self.credit,
            self.k_factor,
            self.preferred_days,
            self.maximum_days,
            unit_time,
        )
    }
}
