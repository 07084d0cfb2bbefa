use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};
use sea_orm::ActiveValue::Set;

use crate::{
    entity::{category, product},
    error::ProductResult,
    models::{Product, ProductFilter, ProductInput},
    repository::ProductRepository,
};

/// Neutralize LIKE metacharacters so the search term matches as a
/// literal substring.
fn escape_like_term(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// PostgreSQL-backed product repository.
///
/// Reads join the owning category in one query via `find_also_related`.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_with_category(&self, id: i32) -> ProductResult<Option<Product>> {
        let row = product::Entity::find_by_id(id)
            .find_also_related(category::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let rows = product::Entity::find()
            .find_also_related(category::Entity)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        self.find_with_category(id).await
    }

    async fn insert(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: product::ActiveModel = input.into();
        let model = product::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await?;

        tracing::info!(product_id = model.id, "Created product");

        // Re-read to resolve the category for the response.
        let category = model.find_related(category::Entity).one(&self.db).await?;
        Ok((model, category).into())
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let active_model = product::ActiveModel {
            id: Set(id),
            title: Set(input.title),
            description: Set(input.description),
            stock_quantity: Set(input.stock_quantity),
            category_id: Set(input.category_id),
        };

        let model = product::Entity::update(active_model)
            .exec(&self.db)
            .await?;

        tracing::info!(product_id = id, "Updated product");

        let category = model.find_related(category::Entity).one(&self.db).await?;
        Ok((model, category).into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn filter(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = product::Entity::find().find_also_related(category::Entity);

        // Blank search terms apply no predicate. The term matches the
        // title, the description, or the joined category's name.
        if let Some(term) = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let pattern = format!("%{}%", escape_like_term(&term.to_lowercase()));
            let like = || LikeExpr::new(pattern.as_str()).escape('\\');
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product::Entity,
                            product::Column::Title,
                        ))))
                        .like(like()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            product::Entity,
                            product::Column::Description,
                        ))))
                        .like(like()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            category::Entity,
                            category::Column::Name,
                        ))))
                        .like(like()),
                    ),
            );
        }

        if let Some(min) = filter.min_stock {
            query = query.filter(product::Column::StockQuantity.gte(min));
        }

        if let Some(max) = filter.max_stock {
            query = query.filter(product::Column::StockQuantity.lte(max));
        }

        let rows = query.all(&self.db).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn category_exists(&self, category_id: i32) -> ProductResult<bool> {
        let category = category::Entity::find_by_id(category_id)
            .one(&self.db)
            .await?;

        Ok(category.is_some())
    }
}
