use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::server::{
    controller::{admin, auth, availability, calendar, page, reservation},
    middleware::{auth::require_staff, csrf::verify_csrf},
    state::AppState,
};

/// Builds every route of the site.
///
/// The session layer must wrap the returned router; the CSRF check and the
/// staff guard read the session.
///
/// # Arguments
/// - `state` - Shared application state
/// - `static_dir` - Directory served under `/static`
pub fn router(state: AppState, static_dir: &str) -> Router {
    let admin = Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route("/reservations-new", get(admin::new_reservations))
        .route("/reservations-all", get(admin::all_reservations))
        .route(
            "/reservations/{src}/{id}/show",
            get(admin::show_reservation).post(admin::post_reservation),
        )
        .route(
            "/process-reservation/{src}/{id}/do",
            get(admin::process_reservation),
        )
        .route(
            "/delete-reservation/{src}/{id}/do",
            get(admin::delete_reservation),
        )
        .route(
            "/reservations-calendar",
            get(calendar::calendar).post(calendar::post_calendar),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_staff));

    Router::new()
        .route("/", get(page::home))
        .route("/about", get(page::about))
        .route("/generals-quarters", get(page::generals_quarters))
        .route("/majors-suite", get(page::majors_suite))
        .route("/contact", get(page::contact))
        .route(
            "/search-availability",
            get(availability::search_availability).post(availability::post_search_availability),
        )
        .route(
            "/search-availability-json",
            post(availability::availability_json),
        )
        .route("/choose-room/{id}", get(availability::choose_room))
        .route("/book-room", get(availability::book_room))
        .route(
            "/make-reservation",
            get(reservation::make_reservation).post(reservation::post_make_reservation),
        )
        .route("/reservation-summary", get(reservation::reservation_summary))
        .route("/user/login", get(auth::login).post(auth::post_login))
        .route("/user/logout", get(auth::logout))
        .nest("/admin", admin)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(verify_csrf))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use test_utils::builder::TestBuilder;

    use crate::{
        model::api::AvailabilityResponseDto,
        server::middleware::csrf::{CSRF_FIELD, CSRF_HEADER},
    };
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    async fn app() -> Router {
        let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.database().await.unwrap().clone();
        let (state, _mail) = AppState::for_test(db);

        router(state, "static").layer(SessionManagerLayer::new(MemoryStore::default()))
    }

    async fn send(method: Method, uri: &str) -> axum::response::Response {
        app()
            .await
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Loads a page and returns the session cookie with the token from its
    /// `csrf-token` meta tag.
    async fn session_with_token(app: &Router) -> (String, String) {
        let response = app
            .clone()
            .oneshot(Request::get("/about").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        let (_, rest) = html.split_once("name=\"csrf-token\"").unwrap();
        let (_, rest) = rest.split_once("content=\"").unwrap();
        let (token, _) = rest.split_once('"').unwrap();

        (cookie, token.to_string())
    }

    async fn availability_json(response: Response) -> AvailabilityResponseDto {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn accepts_csrf_token_from_header() {
        let app = app().await;
        let (cookie, token) = session_with_token(&app).await;

        let response = app
            .oneshot(
                Request::post("/search-availability-json")
                    .header(header::COOKIE, cookie)
                    .header(CSRF_HEADER, token)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("start=2050-01-01&end=2050-01-03&room_id=1"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = availability_json(response).await;
        assert!(body.ok);
        assert_eq!(body.room_id, "1");
        assert_eq!(body.start_date, "2050-01-01");
    }

    #[tokio::test]
    async fn accepts_csrf_token_from_form_and_keeps_body() {
        let app = app().await;
        let (cookie, token) = session_with_token(&app).await;
        let form = format!(
            "start=2050-01-01&{}={}&end=2050-01-03&room_id=2",
            CSRF_FIELD, token
        );

        let response = app
            .oneshot(
                Request::post("/search-availability-json")
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = availability_json(response).await;
        assert!(body.ok);
        assert_eq!(body.room_id, "2");
        assert_eq!(body.end_date, "2050-01-03");
    }

    #[tokio::test]
    async fn rejects_wrong_csrf_token_for_session() {
        let app = app().await;
        let (cookie, token) = session_with_token(&app).await;

        let response = app
            .oneshot(
                Request::post("/search-availability-json")
                    .header(header::COOKIE, cookie)
                    .header(CSRF_HEADER, format!("{}x", token))
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("start=2050-01-01&end=2050-01-03&room_id=1"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serves_public_page() {
        let response = send(Method::GET, "/about").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_post_without_csrf_token() {
        let response = send(Method::POST, "/search-availability").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn admin_requires_login() {
        let response = send(Method::GET, "/admin/dashboard").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/user/login"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = send(Method::GET, "/no-such-page").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
