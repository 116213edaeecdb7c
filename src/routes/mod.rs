//! Router assembly: service routes plus the employee API under `/api`.

mod common;
mod employee;

pub use common::{service_routes, EMPLOYEES_API_PATH};
pub use employee::employee_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Full application: `/health`, `/ready`, `/version`, `/info` and `/api/employees`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(service_routes(state.clone()))
        .nest("/api", employee_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryEmployeeRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn requests_are_logged_at_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let router = app(AppState::new(Arc::new(MemoryEmployeeRepository::new())), 1024);
        let req = Request::builder().uri("/api/employees").body(Body::empty()).unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("finished processing request"), "{}", logs);
        assert!(logs.contains("/api/employees"), "{}", logs);
    }
}
