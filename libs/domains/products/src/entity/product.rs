use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

/// Sea-ORM entity for the products table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub stock_quantity: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from a joined row to the domain Product
impl From<(Model, Option<super::category::Model>)> for crate::models::Product {
    fn from((model, category): (Model, Option<super::category::Model>)) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            stock_quantity: model.stock_quantity,
            category_id: model.category_id,
            category: category.map(Into::into),
        }
    }
}

// Conversion from the write DTO to an ActiveModel for insert
impl From<crate::models::ProductInput> for ActiveModel {
    fn from(input: crate::models::ProductInput) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            stock_quantity: Set(input.stock_quantity),
            category_id: Set(input.category_id),
        }
    }
}
