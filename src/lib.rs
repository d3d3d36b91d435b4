// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application layer
///
/// Request/response DTOs and the CSV projections of query results
pub mod application;

/// Configuration
///
/// Settings loaded from files and environment variables
pub mod config;

/// Domain layer
///
/// Core entities, the auction source seam, and the pipeline services
pub mod domain;

/// Infrastructure layer
///
/// The HTTP fetcher, the HTML listing extractor, and spreadsheet input
pub mod infrastructure;

/// Presentation layer
///
/// HTTP routes, handlers, and error responses
pub mod presentation;

/// Utilities
///
/// Telemetry setup and the injectable clock
pub mod utils;
