//! Random sampling helpers.
//!
//! Every helper takes the random source explicitly so a seeded `StdRng`
//! reproduces a whole run.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Money;

/// Inclusive range that sampled document dates fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the bounds if they are reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date"),
            end: NaiveDate::from_ymd_opt(2026, 1, 29).expect("valid calendar date"),
        }
    }
}

/// Pick one element uniformly.
///
/// # Panics
///
/// Panics if `items` is empty. Catalog tables never are.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Pick `count` distinct elements (fewer if the slice is shorter).
pub fn pick_distinct<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T], count: usize) -> Vec<&'a T> {
    items.choose_multiple(rng, count).collect()
}

/// Element at `slot`, wrapping around the slice.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn cycle<T>(items: &[T], slot: usize) -> &T {
    &items[slot % items.len()]
}

/// Uniform integer in `min..=max`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform amount in `min..=max`, to the cent.
pub fn random_amount<R: Rng + ?Sized>(rng: &mut R, min: Money, max: Money) -> Money {
    Money::from_cents(random_int(rng, min.cents(), max.cents()))
}

/// Uniform date within `range`.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R, range: &DateRange) -> NaiveDate {
    let offset = rng.gen_range(0..=range.days());
    range
        .start
        .checked_add_days(Days::new(offset))
        .unwrap_or(range.end)
}

/// Date `min..=max` days before `date`.
pub fn days_before<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate, min: u64, max: u64) -> NaiveDate {
    let offset = random_int(rng, min as i64, max as i64) as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Date `min..=max` days after `date`.
pub fn days_after<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate, min: u64, max: u64) -> NaiveDate {
    let offset = random_int(rng, min as i64, max as i64) as u64;
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// Account number showing only the last four digits: `***1234`.
pub fn masked_account<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("***{}", random_int(rng, 1000, 9999))
}
