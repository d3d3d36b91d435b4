// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Multipart, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::{
    application::dto::search::{BatchParams, CsvView, OutputFormat},
    application::export,
    domain::auction::source::AuctionSource,
    domain::services::query_service::QueryService,
    infrastructure::spreadsheet,
    presentation::errors::{error_response, AppError},
};

use super::csv_response;

/// Handle a batch search request.
///
/// Expects a multipart form with a `file` field holding an .xlsx
/// spreadsheet; the first column of the first sheet supplies the queries.
/// Each query runs one single-page pipeline; per-query failures degrade to
/// empty results and the batch as a whole still succeeds.
pub async fn batch<S>(
    Extension(service): Extension<Arc<QueryService<S>>>,
    Query(params): Query<BatchParams>,
    mut multipart: Multipart,
) -> Result<Response, AppError>
where
    S: AuctionSource + 'static,
{
    let mut file_bytes = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            file_bytes = Some(field.bytes().await?);
            break;
        }
    }

    let Some(bytes) = file_bytes else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "file field is required",
        ));
    };

    let queries = match spreadsheet::extract_queries(&bytes) {
        Ok(queries) => queries,
        Err(e) => return Ok(error_response(StatusCode::BAD_REQUEST, &e.to_string())),
    };
    if queries.is_empty() {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "no usable queries found in file",
        ));
    }

    let result = service.batch_search(queries).await;

    match params.format {
        OutputFormat::Json => Ok((StatusCode::OK, Json(result)).into_response()),
        OutputFormat::Csv => {
            let body = match params.view {
                CsvView::Summary => export::summary_csv(&result.queries)?,
                CsvView::Detail => export::detail_csv(&result.queries)?,
            };
            Ok(csv_response(body))
        }
    }
}
