//! Hour and percentage allocation with largest-remainder rounding.
//!
//! Rounding each subject independently lets the sums drift away from the
//! weekly budget and from 100%. Instead each quantity is floored to its unit
//! and the leftover units are handed out one at a time, largest fractional
//! remainder first. Ties go to the lower `position`, then to input order.

use std::cmp::Reverse;

use crate::error::InvariantViolation;

/// Fractional remainders are compared at this resolution so float noise
/// cannot reorder values that are equal on paper.
const REMAINDER_RESOLUTION: f64 = 1e6;

/// Absorbs float error when flooring values like `49.999999999`.
const FLOOR_EPSILON: f64 = 1e-9;

pub const MAX_HOUR_DECIMALS: u8 = 3;
const PERCENT_UNITS: u64 = 100;

/// Rounded allocation for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectAllocation {
    pub hours_per_week: f64,
    /// Hours until the exam, `hours_per_week * weeks_until_exam`
    pub total_hours: f64,
    /// Whole percentage points of the weekly budget
    pub percentage: u32,
}

/// Distributes a weekly budget across subjects.
#[derive(Debug, Clone, Copy)]
pub struct HourAllocator {
    hour_decimals: u8,
}

impl Default for HourAllocator {
    fn default() -> Self {
        Self { hour_decimals: 1 }
    }
}

impl HourAllocator {
    /// Allocator rounding hours to `hour_decimals` places (capped at 3).
    pub fn new(hour_decimals: u8) -> Self {
        Self {
            hour_decimals: hour_decimals.min(MAX_HOUR_DECIMALS),
        }
    }

    /// Number of hour units in one hour, e.g. 10 for tenths.
    pub fn units_per_hour(&self) -> u64 {
        10u64.pow(u32::from(self.hour_decimals))
    }

    /// Allocate `weekly_hours` across subjects.
    ///
    /// `shares` must sum to 1 and be parallel to `positions`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if the rounded values do not sum to
    /// their targets. Debug builds panic instead.
    pub fn allocate(
        &self,
        weekly_hours: f64,
        weeks_until_exam: u32,
        shares: &[f64],
        positions: &[u32],
    ) -> Result<Vec<SubjectAllocation>, InvariantViolation> {
        let scale = self.units_per_hour();
        let hour_target = (weekly_hours * scale as f64).round().max(0.0) as u64;

        let raw_hours: Vec<f64> = shares.iter().map(|s| s * hour_target as f64).collect();
        let raw_percent: Vec<f64> = shares.iter().map(|s| s * PERCENT_UNITS as f64).collect();

        let hour_units = largest_remainder(&raw_hours, positions, hour_target);
        let percent_units = largest_remainder(&raw_percent, positions, PERCENT_UNITS);

        ensure_sum("hours_per_week", &hour_units, hour_target)?;
        ensure_sum("percentage", &percent_units, PERCENT_UNITS)?;

        let weeks = u64::from(weeks_until_exam);
        Ok(hour_units
            .iter()
            .zip(&percent_units)
            .map(|(&hours, &percent)| SubjectAllocation {
                hours_per_week: hours as f64 / scale as f64,
                total_hours: (hours * weeks) as f64 / scale as f64,
                percentage: percent as u32,
            })
            .collect())
    }
}

/// Round `raw` to whole units summing to `target`.
///
/// `positions` breaks ties between equal remainders; it must be as long as
/// `raw`.
pub fn largest_remainder(raw: &[f64], positions: &[u32], target: u64) -> Vec<u64> {
    debug_assert_eq!(raw.len(), positions.len());

    let mut units: Vec<u64> = raw
        .iter()
        .map(|&v| (v.max(0.0) + FLOOR_EPSILON).floor() as u64)
        .collect();
    let assigned: u64 = units.iter().sum();
    let mut leftover = target.saturating_sub(assigned);
    if leftover == 0 || units.is_empty() {
        return units;
    }

    let remainder_key = |i: usize| {
        let remainder = (raw[i].max(0.0) - units[i] as f64).max(0.0);
        (remainder * REMAINDER_RESOLUTION).round() as u64
    };
    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by_key(|&i| (Reverse(remainder_key(i)), positions.get(i).copied(), i));

    for &i in order.iter().cycle() {
        if leftover == 0 {
            break;
        }
        units[i] += 1;
        leftover -= 1;
    }
    units
}

fn ensure_sum(
    quantity: &'static str,
    units: &[u64],
    expected: u64,
) -> Result<(), InvariantViolation> {
    let actual: u64 = units.iter().sum();
    if actual == expected {
        return Ok(());
    }
    tracing::warn!(quantity, expected, actual, "rounded allocation does not match its target");
    debug_assert_eq!(actual, expected, "{quantity} allocation drifted");
    Err(InvariantViolation {
        quantity,
        expected,
        actual,
    })
}
