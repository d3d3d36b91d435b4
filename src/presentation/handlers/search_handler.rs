// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::search::{CsvView, OutputFormat, SearchParams},
    application::export,
    config::settings::Settings,
    domain::auction::source::AuctionSource,
    domain::models::listing::QueryResult,
    domain::services::query_service::{QueryService, QueryServiceError},
    presentation::errors::{error_response, AppError},
};

use super::csv_response;

/// Handle an interactive search request.
///
/// Runs the multi-page fetch pipeline for one query and serializes the
/// result as JSON, or as a CSV projection when `format=csv`.
pub async fn search<S>(
    Extension(service): Extension<Arc<QueryService<S>>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError>
where
    S: AuctionSource + 'static,
{
    let Some(query) = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "query parameter is required",
        ));
    };

    if let Err(e) = params.validate() {
        return Ok(error_response(StatusCode::BAD_REQUEST, &e.to_string()));
    }

    let max_pages = params.max_pages.unwrap_or(settings.auction.max_pages);
    let result = match service.search(query, max_pages).await {
        Ok(result) => result,
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            return Ok(error_response(status, &msg));
        }
    };

    match params.format {
        OutputFormat::Json => Ok((StatusCode::OK, Json(result)).into_response()),
        OutputFormat::Csv => {
            let results: &[QueryResult] = std::slice::from_ref(&result);
            let body = match params.view {
                CsvView::Summary => export::summary_csv(results)?,
                CsvView::Detail => export::detail_csv(results)?,
            };
            Ok(csv_response(body))
        }
    }
}

impl From<QueryServiceError> for (StatusCode, String) {
    fn from(err: QueryServiceError) -> Self {
        match err {
            QueryServiceError::Validation(details) => (StatusCode::BAD_REQUEST, details),
        }
    }
}
