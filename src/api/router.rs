use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::middleware::{
    logging_middleware, metrics_middleware, security_headers_middleware, MAX_BODY_SIZE,
};
use super::state::AppState;
use super::{ai, auth, health, jobs};

/// Create the full router with application state.
///
/// Routes are registered with their full paths so the matched route template
/// maps directly onto an `Operation`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::current_user))
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/api/jobs/{id}",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
        .route(
            "/api/ai/generate-description",
            post(ai::generate_description),
        )
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(from_fn(logging_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use chrono::{Duration, TimeZone, Utc};

    use crate::domain::{Clock, ManualClock, SystemClock};
    use crate::infrastructure::auth::{AuthService, JwtConfig, JwtService};
    use crate::infrastructure::description::TemplateDescriptionGenerator;
    use crate::infrastructure::job::{InMemoryJobRepository, JobService};
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository};

    fn test_app() -> Router {
        test_app_with_clock(Arc::new(SystemClock))
    }

    fn test_app_with_clock(clock: Arc<dyn Clock>) -> Router {
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(Argon2Hasher::new()),
            Arc::new(JwtService::with_clock(
                JwtConfig::new("router-test-secret", 3600),
                clock,
            )),
        ));

        let state = AppState::new(
            auth_service,
            Arc::new(JobService::new(Arc::new(InMemoryJobRepository::new()))),
            Arc::new(TemplateDescriptionGenerator::new()),
        );

        create_router(state)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    async fn login_token(app: &Router) -> String {
        let (status, _) = send(
            app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"email": "a@x.com", "password": "pw", "name": "Ada"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["user"]["name"], "Ada");

        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = test_app();

        let routes = [
            (Method::GET, "/api/auth/me"),
            (Method::GET, "/api/jobs"),
            (Method::POST, "/api/jobs"),
            (Method::GET, "/api/jobs/1"),
            (Method::PUT, "/api/jobs/1"),
            (Method::DELETE, "/api/jobs/1"),
            (Method::POST, "/api/ai/generate-description"),
        ];

        for (method, uri) in routes {
            let (status, body) = send(&app, method.clone(), uri, None, Some(json!({}))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(body["error"]["code"], "unauthorized");
        }
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/api/jobs", Some("garbage"), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_token");
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_mutate() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some("not-a-token"),
            Some(json!({"title": "Sneaky"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some(&token),
            Some(json!({"company": "Acme"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "missing_field");

        let (_, body) = send(&app, Method::GET, "/api/jobs", Some(&token), None).await;
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_expired_token_does_not_mutate() {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let app = test_app_with_clock(clock.clone());
        let stale = login_token(&app).await;

        clock.advance(Duration::seconds(3600));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some(&stale),
            Some(json!({"title": "Too late"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_token");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let fresh = body["access_token"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::GET, "/api/jobs", Some(&fresh), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn test_head_on_protected_routes() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some(&token),
            Some(json!({"title": "Engineer"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        for uri in ["/api/jobs", "/api/jobs/1", "/api/auth/me"] {
            let (status, _) = send(&app, Method::HEAD, uri, None, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "HEAD {uri} without token");

            let (status, _) = send(&app, Method::HEAD, uri, Some(&token), None).await;
            assert_eq!(status, StatusCode::OK, "HEAD {uri} with token");
        }
    }

    #[tokio::test]
    async fn test_job_lifecycle() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some(&token),
            Some(json!({"title": "Engineer", "company": "Acme", "salary": 120000})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["job"]["id"], 1);
        assert_eq!(body["job"]["created_by"], "a@x.com");
        assert_eq!(body["job"]["salary"], "120000");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/jobs/1",
            Some(&token),
            Some(json!({"location": "Remote"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["title"], "Engineer");
        assert_eq!(body["job"]["location"], "Remote");

        let (status, body) = send(&app, Method::GET, "/api/jobs", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);

        let (status, _) = send(&app, Method::DELETE, "/api/jobs/1", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/api/jobs/1", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/jobs",
            Some(&token),
            Some(json!({"title": "Designer"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["job"]["id"], 2);
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let app = test_app();
        login_token(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({"email": "a@x.com", "password": "other", "name": "Eve"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "duplicate_identity");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = test_app();
        login_token(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "a@x.com", "password": "nope"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_credentials");
    }

    #[tokio::test]
    async fn test_current_user() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_generate_description() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/generate-description",
            Some(&token),
            Some(json!({"job_title": "Engineer", "company_name": "Acme", "key_skills": ["Rust"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["description"]
            .as_str()
            .unwrap()
            .starts_with("We are seeking a talented Engineer with expertise in Rust"));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/generate-description",
            Some(&token),
            Some(json!({"company_name": "Acme"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "missing_field");
    }

    #[tokio::test]
    async fn test_generate_description_null_skills() {
        let app = test_app();
        let token = login_token(&app).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ai/generate-description",
            Some(&token),
            Some(json!({"job_title": "Engineer", "key_skills": null})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["description"]
            .as_str()
            .unwrap()
            .starts_with("We are seeking a talented Engineer to join our team.\n\n"));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let app = test_app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{broken"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
