//! Route definitions for image uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image upload routes. Both accept multipart bodies with field name `image`.
///
/// ```text
/// POST /hotel/{hotelId}/images              -> upload_hotel_images
/// POST /room/{hotelId}/{roomSlug}/images    -> upload_room_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotel/{hotelId}/images", post(images::upload_hotel_images))
        .route(
            "/room/{hotelId}/{roomSlug}/images",
            post(images::upload_room_images),
        )
}
