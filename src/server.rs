use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::AppError;
use crate::handlers::ConvertHandler;
use crate::models::{ConversionRequest, ConversionResponse};

pub struct AppState {
    pub convert_handler: Arc<ConvertHandler>,
}

pub fn create_router(convert_handler: Arc<ConvertHandler>) -> Router {
    let state = Arc::new(AppState { convert_handler });

    Router::new()
        .route("/", get(root_handler))
        .route("/convert", post(convert_handler_route))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn convert_handler_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ConversionRequest>,
) -> Result<Json<ConversionResponse>, AppError> {
    match state.convert_handler.convert(&request.text).await {
        Ok(record) => Ok(Json(ConversionResponse::completed(record.summary()))),
        Err(e) => {
            log::error!("❌ Error in /convert endpoint [{}]: {}", e.kind(), e);
            Err(e)
        }
    }
}

async fn root_handler() -> &'static str {
    "Diet Convert API - POST /convert with {\"text\", \"password\"}"
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::convert_handler::tests::{FixedReply, MemoryStore};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(completion: FixedReply, store: Arc<MemoryStore>) -> Router {
        create_router(Arc::new(ConvertHandler::new(Arc::new(completion), store)))
    }

    async fn post_convert(router: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::post("/convert")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_convert_success() {
        let store = Arc::new(MemoryStore::default());
        let (status, body) = post_convert(
            router(FixedReply::ok("300, 15, 30, 10"), store.clone()),
            json!({"text": "2 eggs and toast", "password": "anything"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Prediction completed!",
                "response": "Calories 300 kcal, Protein 15 g, Carbs 30 g, Fats 10 g"
            })
        );
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_convert_malformed_reply() {
        let (status, body) = post_convert(
            router(FixedReply::ok("unable to compute"), Arc::new(MemoryStore::default())),
            json!({"text": "mystery stew", "password": ""}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "Prediction failed");
        assert_eq!(body["error"], "parse");
    }

    #[tokio::test]
    async fn test_convert_store_down_differs_from_model_down() {
        let (db_status, db_body) = post_convert(
            router(FixedReply::ok("300, 15, 30, 10"), Arc::new(MemoryStore::unreachable())),
            json!({"text": "toast", "password": ""}),
        )
        .await;
        let (ai_status, ai_body) = post_convert(
            router(FixedReply::failing(), Arc::new(MemoryStore::default())),
            json!({"text": "toast", "password": ""}),
        )
        .await;

        assert_eq!(db_status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(db_body["error"], "persistence");
        assert_eq!(ai_status, StatusCode::BAD_GATEWAY);
        assert_eq!(ai_body["error"], "external_service");
    }

    #[tokio::test]
    async fn test_convert_rejects_missing_password_field() {
        let request = Request::post("/convert")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text": "apple"}"#))
            .unwrap();

        let response = router(FixedReply::ok("0, 0, 0, 0"), Arc::new(MemoryStore::default()))
            .oneshot(request)
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let response = router(FixedReply::ok("0, 0, 0, 0"), Arc::new(MemoryStore::default()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
