// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for the interactive search endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    /// Required; its absence is reported with a fixed message rather than a
    /// deserialization rejection.
    pub query: Option<String>,
    #[validate(range(min = 1, max = 10, message = "max_pages must be between 1 and 10"))]
    pub max_pages: Option<u32>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub view: CsvView,
}

/// Query parameters for the batch endpoint.
#[derive(Debug, Deserialize)]
pub struct BatchParams {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub view: CsvView,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Which CSV projection to emit when `format=csv`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CsvView {
    #[default]
    Summary,
    Detail,
}
