pub mod health;
pub mod hotel;
pub mod images;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /health                                 service probe
///
/// POST /hotel                                  create hotel
/// GET  /hotel/{hotelId}                        fetch hotel
/// PUT  /hotel/{hotelId}                        merge-update hotel
///
/// POST /hotel/{hotelId}/images                 attach hotel images (multipart)
/// POST /room/{hotelId}/{roomSlug}/images       attach room images (multipart)
/// ```
///
/// The static `/uploads` tree is mounted separately in `main` (and the test
/// harness) because it serves files, not handlers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(hotel::router())
        .merge(images::router())
}
