use axum::{
    body::to_bytes,
    http::{header, StatusCode},
    response::Response,
    Form,
};

mod admin;

/// Builds the urlencoded form a browser would post.
fn form(pairs: &[(&str, &str)]) -> Form<Vec<(String, String)>> {
    Form(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
    )
}

/// Asserts a 303 redirect and returns its target.
fn redirect_target(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
