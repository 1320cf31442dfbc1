use axum::{http::StatusCode, response::Html};

const INDEX_PAGE: &str = r#"
<h1>Exchange Rate API</h1>
<p>Available endpoints:</p>
<ul>
    <li><a href="/api/real-time-rates">Real-time rate</a></li>
    <li><a href="/api/historical-rates">Historical rates (past year)</a></li>
</ul>
<p>Note: historical data only covers business days (no weekends or holidays).</p>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use crate::data::FxClient;
    use crate::routes::{router, AppState};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        let client = FxClient::new("http://127.0.0.1:9", "USD", "CNY", Duration::from_secs(1)).unwrap();
        router(AppState { client })
    }

    #[tokio::test]
    async fn index_lists_api_endpoints() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/api/real-time-rates"));
        assert!(html.contains("/api/historical-rates"));
    }

    #[tokio::test]
    async fn favicon_is_no_content() {
        let req = Request::builder().uri("/favicon.ico").body(Body::empty()).unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let req = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();

        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
