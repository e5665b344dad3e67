use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{auth, bookmark, headcount, marker, place, search_history, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/email-availability", get(auth::check_email))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/account", delete(auth::delete_account))
        .route("/api/users/me", get(user::get_me).patch(user::update_profile))
        .route("/api/users/me/password", patch(user::update_password))
        .route("/api/users/me/point", patch(user::adjust_point))
        .route(
            "/api/users/temporary-password",
            post(user::temporary_password),
        )
        .route(
            "/api/places",
            get(place::list_places).post(place::create_place),
        )
        .route(
            "/api/places/{id}",
            patch(place::update_place).delete(place::delete_place),
        )
        .route("/api/markers", get(marker::list_markers))
        .route("/api/headcounts", get(headcount::list_headcounts))
        .route("/api/headcounts/overview", get(headcount::overview))
        .route(
            "/api/headcounts/places/{id}",
            get(headcount::latest_for_place).post(headcount::report_headcount),
        )
        .route(
            "/api/headcounts/markers/{id}",
            get(headcount::latest_for_marker),
        )
        .route(
            "/api/bookmarks",
            get(bookmark::list_bookmarks)
                .post(bookmark::create_bookmark)
                .delete(bookmark::delete_bookmarks),
        )
        .route("/api/bookmarks/{id}", patch(bookmark::update_bookmark))
        .route("/api/bookmarks/{id}/places", get(bookmark::bookmark_places))
        .route(
            "/api/bookmarks/places/{place_id}",
            get(bookmark::bookmarks_with_place)
                .post(bookmark::add_place_to_bookmarks)
                .delete(bookmark::remove_place_from_bookmarks),
        )
        .route(
            "/api/search-histories",
            get(search_history::list_search_histories).post(search_history::create_search_history),
        )
        .route(
            "/api/search-histories/{id}",
            delete(search_history::delete_search_history),
        )
}
