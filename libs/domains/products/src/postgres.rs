use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{Product, ProductFields},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, fields: ProductFields) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = fields.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, fields: ProductFields) -> ProductResult<Option<Product>> {
        match self
            .base
            .update(entity::ActiveModel::for_update(id, fields))
            .await
        {
            Ok(model) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        // UPDATE products SET availability = NOT availability WHERE id = $1 RETURNING *
        let models = entity::Entity::update_many()
            .col_expr(entity::Column::Availability, Expr::cust("NOT availability"))
            .filter(entity::Column::Id.eq(id))
            .exec_with_returning(self.base.db())
            .await?;

        let product = models.into_iter().next().map(Product::from);
        if let Some(ref product) = product {
            tracing::info!(
                product_id = id,
                availability = product.availability,
                "Toggled product availability"
            );
        }

        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
