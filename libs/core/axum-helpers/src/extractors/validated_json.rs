//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserialization failures and rule violations both come back as 400 with
/// one `errors` entry per failed rule, located in `body`.
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateProduct {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(range(exclusive_min = 0.0))]
///     price: f64,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating product: {}", payload.name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Item {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
        price: f64,
    }

    async fn create(ValidatedJson(item): ValidatedJson<Item>) -> String {
        format!("{}:{}", item.name, item.price)
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = Router::new()
            .route("/items", post(create))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_valid_payload_reaches_handler() {
        let (status, _) = post_json(r#"{"name":"Mouse","price":25}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_lists_field() {
        let (status, json) = post_json(r#"{"name":"Mouse","price":-5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["param"], "price");
        assert_eq!(json["errors"][0]["msg"], "price must be positive");
        assert_eq!(json["errors"][0]["location"], "body");
        assert_eq!(json["errors"][0]["value"], -5.0);
    }

    #[tokio::test]
    async fn test_missing_field_names_the_field() {
        let (status, json) = post_json(r#"{"name":"Mouse"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["param"], "price");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, json) = post_json(r#"{"name":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["errors"].is_array());
    }
}
