use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Client-facing validation messages. Localized, kept verbatim from the
/// upstream system this API replaces.
pub const INVALID_TITLE_MESSAGE: &str =
    "Başlık gereklidir ve 200 karakterden kısa olmalıdır.";
pub const CATEGORY_NOT_FOUND_MESSAGE: &str = "Kategori bulunamadı.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("{INVALID_TITLE_MESSAGE}")]
    InvalidTitle,

    #[error("{CATEGORY_NOT_FOUND_MESSAGE}")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            // Contract: 404s carry no body.
            ProductError::NotFound(id) => {
                tracing::debug!("Product {} not found", id);
                StatusCode::NOT_FOUND.into_response()
            }
            ProductError::InvalidTitle => {
                AppError::BadRequest(INVALID_TITLE_MESSAGE.to_string()).into_response()
            }
            ProductError::CategoryNotFound => {
                AppError::BadRequest(CATEGORY_NOT_FOUND_MESSAGE.to_string()).into_response()
            }
            ProductError::Database(err) => AppError::Database(err).into_response(),
        }
    }
}
