// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Date normalization depends on "today" (year default and fallback date),
/// so the dependency is injected rather than read from the wall clock at the
/// point of use.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
