pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                          list (GET), create (POST)
/// /events/{id}                     get (GET)
/// /events/{id}/close               close to further activity (POST)
/// /events/{id}/entrants            organizer decision listing (GET, ?status=)
/// /events/{id}/waitlist            join (POST), leave (DELETE)
/// /events/{id}/draw                run the lottery (POST)
/// /events/{id}/notifications       broadcast (POST), audit log (GET)
///
/// /decisions/{id}/respond          accept/decline an invitation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(handlers::events::list_events).post(handlers::events::create_event),
        )
        .route("/events/{id}", get(handlers::events::get_event))
        .route("/events/{id}/close", post(handlers::events::close_event))
        .route("/events/{id}/entrants", get(handlers::events::list_entrants))
        .route(
            "/events/{id}/waitlist",
            post(handlers::registration::join).delete(handlers::registration::leave),
        )
        .route("/events/{id}/draw", post(handlers::lottery::draw))
        .route(
            "/events/{id}/notifications",
            get(handlers::notifications::list_log).post(handlers::notifications::broadcast),
        )
        .route(
            "/decisions/{id}/respond",
            post(handlers::responses::respond),
        )
}
