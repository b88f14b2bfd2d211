use axum::Router;

pub mod health;

// ---

/// Build the top-level API router.
///
/// Pure construction: no I/O happens until the router is served. Unmatched
/// paths get axum's 404 and other methods on a known path get 405.
pub fn router() -> Router {
    // ---
    Router::new().merge(health::router())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn status_of(method: Method, uri: &str) -> StatusCode {
        // ---
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_route_registered() {
        // ---
        assert_eq!(status_of(Method::GET, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_methods_do_not_match() {
        // ---
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let status = status_of(method.clone(), "/health").await;
            assert_eq!(
                status,
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} /health should not match"
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_paths_not_found() {
        // ---
        for uri in ["/", "/healthz", "/health/", "/sql/readings", "/HEALTH"] {
            let status = status_of(Method::GET, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri} should be 404");
        }
    }
}
