//! Handlers for attaching uploaded images to a hotel or one of its rooms.
//!
//! Upload flow: the multipart body is read fully into memory first, so the
//! "no files" check happens before anything touches the disk. Files are then
//! written under the resolved scope directory and their public references
//! appended to the target image list in upload order. If persisting the
//! record fails after the files are written, the files stay on disk
//! unreferenced; there is no compensating delete.

use axum::extract::{Multipart, Path, State};
use axum::response::IntoResponse;
use axum::Json;
use innkeep_core::error::CoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field name carrying image files.
const IMAGE_FIELD: &str = "image";

/// Response for a hotel-level upload: the hotel's full image list after the
/// new references were appended.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelImagesResponse {
    pub message: &'static str,
    pub hotel_images: Vec<String>,
}

/// Response for a room-level upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomImagesResponse {
    pub message: &'static str,
    pub room_images: Vec<String>,
}

/// POST /hotel/{hotelId}/images
///
/// Attach uploaded images to the hotel itself. Multipart field name `image`.
/// 400 when no files are present, 404 when the hotel does not exist.
pub async fn upload_hotel_images(
    State(state): State<AppState>,
    Path(hotel_id): Path<String>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let files = collect_files(multipart).await?;

    let mut hotel = state.records.get(&hotel_id).await?;

    for (name, data) in &files {
        let reference = state.uploads.save(&hotel_id, None, name, data).await?;
        hotel.images.push(reference);
    }

    state.records.put(&hotel).await?;

    tracing::info!(
        hotel_id = %hotel_id,
        count = files.len(),
        "Hotel images attached",
    );

    Ok(Json(HotelImagesResponse {
        message: "Images uploaded successfully",
        hotel_images: hotel.images,
    }))
}

/// POST /room/{hotelId}/{roomSlug}/images
///
/// Attach uploaded images to one room of a hotel. 404 when either the hotel
/// or the room is missing; a failed room lookup leaves the stored record
/// untouched.
pub async fn upload_room_images(
    State(state): State<AppState>,
    Path((hotel_id, room_slug)): Path<(String, String)>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let files = collect_files(multipart).await?;

    let mut hotel = state.records.get(&hotel_id).await?;

    // Room lookup comes before any disk write so a bad slug has no side
    // effects at all.
    hotel
        .find_room_mut(&room_slug)
        .ok_or(CoreError::NotFound {
            entity: "Room",
            id: room_slug.clone(),
        })?;

    let mut references = Vec::with_capacity(files.len());
    for (name, data) in &files {
        references.push(
            state
                .uploads
                .save(&hotel_id, Some(&room_slug), name, data)
                .await?,
        );
    }

    // The lookup above proved the room exists.
    let room = hotel
        .find_room_mut(&room_slug)
        .expect("room vanished between lookups");
    room.images.extend(references);
    let room_images = room.images.clone();

    state.records.put(&hotel).await?;

    tracing::info!(
        hotel_id = %hotel_id,
        room_slug = %room_slug,
        count = files.len(),
        "Room images attached",
    );

    Ok(Json(RoomImagesResponse {
        message: "Images uploaded successfully",
        room_images,
    }))
}

/// Drain the multipart body, keeping the `image` fields.
///
/// Returns the original filenames and contents in upload order. An empty
/// result is a 400 regardless of whether the target hotel exists, and no
/// disk mutation has happened by the time this returns.
async fn collect_files(mut multipart: Multipart) -> AppResult<Vec<(String, Vec<u8>)>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        files.push((filename, data.to_vec()));
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".to_string()));
    }

    Ok(files)
}
