// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod batch_handler;
pub mod search_handler;

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// CSV body with the matching content type.
pub(crate) fn csv_response(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    )
        .into_response()
}
