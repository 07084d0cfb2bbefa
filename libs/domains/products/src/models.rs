use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Hard limit on product titles, matching the varchar(200) column.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Category entity. Read-only through this API; rows are provisioned
/// outside of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Desired minimum stock for products in this category
    pub minimum_stock: i32,
}

/// Product entity with its owning category resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: i32,
    /// Product title, non-blank, at most 200 characters
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Units currently in stock
    pub stock_quantity: i32,
    /// Owning category id
    pub category_id: i32,
    /// Owning category, resolved on every read path
    pub category: Option<Category>,
}

/// DTO for creating or fully replacing a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(custom(function = validate_title))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub stock_quantity: i32,
    pub category_id: i32,
}

/// Query filters for product search
#[derive(Debug, Clone, Deserialize, IntoParams, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against title, description and
    /// category name. Blank values are ignored.
    pub search: Option<String>,
    /// Inclusive lower bound on stock quantity
    pub min_stock: Option<i32>,
    /// Inclusive upper bound on stock quantity
    pub max_stock: Option<i32>,
}

/// Title must be non-blank and fit the column. Counted in characters,
/// not bytes.
fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::new("title"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_title_at_limit() {
        let input = ProductInput {
            title: "a".repeat(200),
            description: None,
            stock_quantity: 0,
            category_id: 1,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_title_over_limit() {
        let input = ProductInput {
            title: "a".repeat(201),
            description: None,
            stock_quantity: 0,
            category_id: 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_whitespace_only_title() {
        let input = ProductInput {
            title: "   ".to_string(),
            description: None,
            stock_quantity: 0,
            category_id: 1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        // 200 multi-byte characters exceed 200 bytes but fit the limit.
        let input = ProductInput {
            title: "ğ".repeat(200),
            description: None,
            stock_quantity: 0,
            category_id: 1,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let input: ProductInput = serde_json::from_str(
            r#"{"title":"Klavye","description":null,"stockQuantity":5,"categoryId":1}"#,
        )
        .unwrap();
        assert_eq!(input.title, "Klavye");
        assert_eq!(input.stock_quantity, 5);
        assert_eq!(input.category_id, 1);
    }
}
