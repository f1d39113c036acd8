use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductFields};

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub availability: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            availability: model.availability,
        }
    }
}

// The id is left unset so the serial column assigns it
impl From<ProductFields> for ActiveModel {
    fn from(fields: ProductFields) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            price: Set(fields.price),
            availability: Set(fields.availability),
        }
    }
}

impl ActiveModel {
    /// Full replacement of the mutable columns for row `id`
    pub fn for_update(id: i32, fields: ProductFields) -> Self {
        ActiveModel {
            id: Set(id),
            name: Set(fields.name),
            price: Set(fields.price),
            availability: Set(fields.availability),
        }
    }
}
