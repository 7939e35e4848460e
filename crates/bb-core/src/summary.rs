//! Daily summary statistics and the rolling 7-day window.
//!
//! Everything here is pure computation over [`DailyLog`] values; the
//! charts and badges the summaries feed live outside the core.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::entry::{BreastSide, SleepEntry};
use crate::log::DailyLog;

/// Per-day rollup of every category.
///
/// `avg_colic_level` is 0.0 when the day has no colic entries; consumers
/// must check `colic_count` to tell "no data" from a true zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub pee_count: usize,
    pub poop_count: usize,
    pub feeding_count: usize,
    pub total_feeding_minutes: u32,
    pub left_feeding_minutes: u32,
    pub right_feeding_minutes: u32,
    pub diaper_change_count: usize,
    pub sleep_count: usize,
    pub total_sleep_minutes: u32,
    pub avg_colic_level: f64,
    pub colic_count: usize,
}

/// Computes one day's summary.
///
/// An open sleep session contributes 0 minutes: in-progress sleep stays
/// out of the totals until it is closed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn daily_summary(log: &DailyLog) -> DailySummary {
    let feeding_minutes = |side: BreastSide| -> u32 {
        log.feedings
            .iter()
            .filter(|f| f.side == side)
            .map(|f| f.duration_minutes)
            .sum()
    };

    let total_feeding_minutes = log.feedings.iter().map(|f| f.duration_minutes).sum();
    let total_sleep_minutes = log
        .sleeps
        .iter()
        .filter_map(SleepEntry::duration_minutes)
        .sum();

    let colic_count = log.colic.len();
    let avg_colic_level = if colic_count == 0 {
        0.0
    } else {
        let sum: u32 = log.colic.iter().map(|c| u32::from(c.level.value())).sum();
        round1(f64::from(sum) / colic_count as f64)
    };

    DailySummary {
        date: log.date,
        pee_count: log.pee.len(),
        poop_count: log.poop.len(),
        feeding_count: log.feedings.len(),
        total_feeding_minutes,
        left_feeding_minutes: feeding_minutes(BreastSide::Left),
        right_feeding_minutes: feeding_minutes(BreastSide::Right),
        diaper_change_count: log.diaper_changes.len(),
        sleep_count: log.sleeps.len(),
        total_sleep_minutes,
        avg_colic_level,
        colic_count,
    }
}

/// Summaries for the window \[`today` − 6, `today`\], oldest first, exactly
/// seven elements, synthesizing empty logs for absent days.
///
/// Callers must anchor on the real current date, never the navigated
/// selection; the trend window does not move with date navigation.
#[must_use]
pub fn last_7_day_summaries(
    logs: &BTreeMap<NaiveDate, DailyLog>,
    today: NaiveDate,
) -> Vec<DailySummary> {
    (0..7)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            logs.get(&date)
                .map_or_else(|| daily_summary(&DailyLog::empty(date)), daily_summary)
        })
        .collect()
}

/// Mean of the values, rounded to one decimal place. 0 for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round1(values.iter().sum::<f64>() / values.len() as f64)
}

/// Largest value, or 0 for an empty slice.
///
/// Returning 0 instead of an error for "no data" is intentional here: a
/// missing metric charts as zero, never as a failure state.
#[must_use]
pub fn high(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Smallest value, or 0 for an empty slice.
#[must_use]
pub fn low(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
