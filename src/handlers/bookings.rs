use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::booking::{parse_date, BookingResponse, DATE_FORMAT};
use crate::models::BookingRequest;
use crate::services::scheduling;
use crate::state::AppState;

// POST /agendar
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "unreadable booking payload");
        AppError::MalformedInput
    })?;

    let result = {
        let db = state.db();
        scheduling::create_booking(&db, &state.config.shop, &req)
    };

    match result {
        Ok(booking) => {
            tracing::info!(
                id = booking.id,
                barber = %booking.barber,
                date = %booking.date,
                time = %booking.time,
                "booking confirmed"
            );
            Ok((
                StatusCode::CREATED,
                Json(json!({ "msg": "Agendamento confirmado" })),
            ))
        }
        Err(e) => {
            tracing::debug!(reason = %e, "booking rejected");
            Err(e)
        }
    }
}

// GET /agenda
#[derive(Debug, Deserialize)]
pub struct AgendaQuery {
    #[serde(alias = "date")]
    pub data: Option<String>,
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AgendaQuery>, QueryRejection>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e, "unreadable agenda query");
        AppError::MalformedInput
    })?;

    // An empty filter means no filter; a parseable one is matched in its stored form.
    let filter = query
        .data
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| match parse_date(d) {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => d.to_string(),
        });

    let bookings = {
        let db = state.db();
        queries::list_bookings(&db, filter.as_deref())?
    };

    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}
