//! Route definitions for hotel record CRUD.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hotel;
use crate::state::AppState;

/// Hotel CRUD routes.
///
/// ```text
/// POST /hotel            -> create_hotel
/// GET  /hotel/{hotelId}  -> get_hotel
/// PUT  /hotel/{hotelId}  -> update_hotel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hotel", post(hotel::create_hotel))
        .route(
            "/hotel/{hotelId}",
            get(hotel::get_hotel).put(hotel::update_hotel),
        )
}
