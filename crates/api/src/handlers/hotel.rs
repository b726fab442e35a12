//! Handlers for hotel record CRUD.
//!
//! Every mutation is a whole-document read-modify-write through the record
//! store. Concurrent requests touching the same hotel id race with
//! last-writer-wins semantics; callers must not rely on concurrent-safe
//! updates to one id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use innkeep_core::hotel::{CreateHotel, HotelRecord, UpdateHotel};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for create and update: the fixed message plus the full record.
#[derive(Debug, Serialize)]
pub struct HotelResponse {
    pub message: &'static str,
    pub hotel: HotelRecord,
}

/// POST /hotel
///
/// Create a hotel record. The title is required; everything else defaults to
/// empty/zero. Rooms supplied at creation start with empty image lists.
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(input): Json<CreateHotel>,
) -> AppResult<impl IntoResponse> {
    let hotel = HotelRecord::create(input)?;
    state.records.put(&hotel).await?;

    tracing::info!(hotel_id = %hotel.hotel_id, slug = %hotel.slug, "Hotel created");

    Ok((
        StatusCode::CREATED,
        Json(HotelResponse {
            message: "Hotel created successfully",
            hotel,
        }),
    ))
}

/// GET /hotel/{hotelId}
///
/// Fetch a hotel record by id. 404 `{"message": "Hotel not found"}` when no
/// document exists for the id.
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let hotel = state.records.get(&hotel_id).await?;
    Ok(Json(hotel))
}

/// PUT /hotel/{hotelId}
///
/// Merge-update a hotel record. Present fields overwrite (including zero
/// values), absent fields are preserved, `hostInfo` merges per sub-field.
/// The slug is not re-derived when the title changes.
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
    Json(patch): Json<UpdateHotel>,
) -> AppResult<impl IntoResponse> {
    let mut hotel = state.records.get(&hotel_id).await?;
    hotel.apply_update(patch);
    state.records.put(&hotel).await?;

    tracing::info!(hotel_id = %hotel.hotel_id, "Hotel updated");

    Ok(Json(HotelResponse {
        message: "Hotel updated successfully",
        hotel,
    }))
}
