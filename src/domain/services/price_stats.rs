// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::listing::PriceStats;

/// Compute summary statistics with 3-sigma outlier trimming.
///
/// Values farther than three population standard deviations from the mean
/// are excluded before the summary is computed. Should trimming ever empty
/// the set, the unfiltered input is used instead; with bounds derived from
/// the same set this is close to unreachable, but it is kept as contract.
pub fn calculate_stats(prices: &[u64]) -> PriceStats {
    if prices.is_empty() {
        return PriceStats::default();
    }

    let mean = mean_of(prices);
    let variance = prices
        .iter()
        .map(|&p| {
            let diff = p as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / prices.len() as f64;
    let std_dev = variance.sqrt();

    let lower = mean - 3.0 * std_dev;
    let upper = mean + 3.0 * std_dev;

    let filtered: Vec<u64> = prices
        .iter()
        .copied()
        .filter(|&p| (p as f64) >= lower && (p as f64) <= upper)
        .collect();

    if filtered.is_empty() {
        summarize(prices)
    } else {
        summarize(&filtered)
    }
}

/// Same summary without the outlier filter, for consumers that want the
/// untrimmed numbers.
pub fn calculate_raw_stats(prices: &[u64]) -> PriceStats {
    if prices.is_empty() {
        return PriceStats::default();
    }
    summarize(prices)
}

fn mean_of(prices: &[u64]) -> f64 {
    prices.iter().map(|&p| p as f64).sum::<f64>() / prices.len() as f64
}

fn summarize(prices: &[u64]) -> PriceStats {
    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let len = sorted.len();
    let mid = len / 2;
    let median = if len % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    };

    PriceStats {
        average: mean_of(&sorted).round() as u64,
        median: median.round() as u64,
        min: sorted[0],
        max: sorted[len - 1],
        count: len,
    }
}
