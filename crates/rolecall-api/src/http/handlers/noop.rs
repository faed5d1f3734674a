//! The companion API's placeholder route.
//!
//! GET /roles/v1/guilds/{guild_id}/noop - scaffold for the guild-scoped
//! routes to come; verifies the path shape and answers `{"noop": true}`.

use axum::Json;
use axum::extract::Path;

use rolecall_types::prompt::GuildId;

use crate::http::error::AppError;

/// GET /roles/v1/guilds/{guild_id}/noop
pub async fn noop(Path(guild_id): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    guild_id
        .parse::<GuildId>()
        .map_err(|_| AppError::Validation(format!("invalid guild id: '{guild_id}'")))?;

    Ok(Json(serde_json::json!({ "noop": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_noop_returns_json_true() {
        let response = noop(Path("103735912737718272".to_string()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({ "noop": true }));
    }

    #[tokio::test]
    async fn test_noop_rejects_malformed_guild_id() {
        let response = noop(Path("not-a-guild".to_string())).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
