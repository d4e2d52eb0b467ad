pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/applications",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route("/api/v1/applications/ranked", get(handlers::handle_ranked))
        .route(
            "/api/v1/applications/:id",
            get(handlers::handle_get)
                .patch(handlers::handle_update)
                .delete(handlers::handle_delete),
        )
        .route("/api/v1/score", post(handlers::handle_score))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use chrono::{Duration, Local};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::scoring::{PriorityScorer, ScoringConfig, SkillCorpus};
    use crate::store::InMemoryApplicationStore;

    const JOB: &str = "We need a Python developer with FastAPI and SQL experience.";

    fn app() -> Router {
        let scorer = PriorityScorer::new(
            SkillCorpus::from_lines("python\nsql\nfastapi\n"),
            ScoringConfig::default(),
        );
        build_router(AppState {
            store: Arc::new(InMemoryApplicationStore::new()),
            scorer: Arc::new(scorer),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn days_out(days: i64) -> String {
        (Local::now().date_naive() + Duration::days(days)).to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_and_list_applications() {
        let app = app();
        let payload = json!({
            "company": "TestCo",
            "role": "Data Scientist",
            "status": "Applied",
            "notes": "Python SQL FastAPI",
            "deadline": null
        });
        let (status, created) = send(&app, Method::POST, "/api/v1/applications", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["company"], "TestCo");
        assert!(created["id"].is_i64());
        assert!(created["skill_match_score"].as_f64().unwrap() > 0.0);

        let (status, rows) = send(&app, Method::GET, "/api/v1/applications", None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = rows.as_array().unwrap();
        assert!(rows.iter().any(|r| r["id"] == created["id"]));
    }

    #[tokio::test]
    async fn test_create_defaults_status() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/v1/applications",
            Some(json!({"company": "Acme", "role": "SRE"})),
        )
        .await;
        assert_eq!(created["status"], "Wishlist");
        assert_eq!(created["priority_score"], 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_company() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/applications",
            Some(json!({"company": " ", "role": "SRE"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_update_delete_lifecycle() {
        let app = app();
        let (_, created) = send(
            &app,
            Method::POST,
            "/api/v1/applications",
            Some(json!({"company": "Acme", "role": "SRE", "notes": "kubernetes"})),
        )
        .await;
        let uri = format!("/api/v1/applications/{}", created["id"]);

        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["role"], "SRE");

        let (status, updated) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({"status": "Interview", "notes": null})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "Interview");
        assert_eq!(updated["notes"], "kubernetes");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (status, _) = send(
            &app(),
            Method::PATCH,
            "/api/v1/applications/99",
            Some(json!({"status": "Applied"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ranked_orders_by_priority() {
        let app = app();
        for (company, days) in [("Far", 30), ("Near", 3), ("Overdue", -1)] {
            send(
                &app,
                Method::POST,
                "/api/v1/applications",
                Some(json!({"company": company, "role": "Dev", "notes": JOB, "deadline": days_out(days)})),
            )
            .await;
        }
        send(
            &app,
            Method::POST,
            "/api/v1/applications",
            Some(json!({"company": "Unscored", "role": "Dev"})),
        )
        .await;

        let (status, ranked) = send(&app, Method::GET, "/api/v1/applications/ranked", None).await;
        assert_eq!(status, StatusCode::OK);
        let companies: Vec<&str> = ranked
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["company"].as_str().unwrap())
            .collect();
        assert_eq!(companies, vec!["Overdue", "Near", "Far", "Unscored"]);
    }

    #[tokio::test]
    async fn test_ranked_rejects_negative_weight() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/v1/applications/ranked?w_skill=-1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_endpoint_with_reference_date() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/score",
            Some(json!({"deadline": "2024-03-22", "today": "2024-03-15"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skill_match_score"], 0.0);
        assert!((body["deadline_urgency_score"].as_f64().unwrap() - 0.5).abs() < 1e-9);
        assert_eq!(body["priority_score"], 18);

        let (_, weighted) = send(
            &app,
            Method::POST,
            "/api/v1/score",
            Some(json!({"deadline": "2024-03-15", "today": "2024-03-15", "w_deadline": 0.6})),
        )
        .await;
        assert_eq!(weighted["priority_score"], 60);
    }
}
