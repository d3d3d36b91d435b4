// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::listing::QueryResult;
use csv::Writer;

/// Summary projection: one row per query with its price statistics.
pub fn summary_csv(results: &[QueryResult]) -> anyhow::Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["keyword", "average", "median", "min", "max", "count"])?;

    for result in results {
        writer.write_record([
            result.query.clone(),
            result.stats.average.to_string(),
            result.stats.median.to_string(),
            result.stats.min.to_string(),
            result.stats.max.to_string(),
            result.stats.count.to_string(),
        ])?;
    }

    into_string(writer)
}

/// Detail projection: one row per listing, keyed by its query.
pub fn detail_csv(results: &[QueryResult]) -> anyhow::Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["keyword", "title", "price", "date", "url"])?;

    for result in results {
        for item in &result.items {
            writer.write_record([
                result.query.clone(),
                item.title.clone(),
                item.price.to_string(),
                item.date.clone(),
                item.url.clone(),
            ])?;
        }
    }

    into_string(writer)
}

fn into_string(writer: Writer<Vec<u8>>) -> anyhow::Result<String> {
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e))?;
    Ok(String::from_utf8(bytes)?)
}
