// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Core business entities: auction listings, per-query results, and the
/// derived price statistics.
pub mod listing;
