//! Product record kind.

use crate::dto::{NewProduct, ProductDto, ProductProjection, UpdateProduct};
use crate::error::AppError;
use crate::grid::SelectedColumns;
use crate::model::GridEntity;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[async_trait]
impl GridEntity for Product {
    const KIND: &'static str = "Product";
    const TABLE: &'static str = "products";
    const SELECT_LIST: &'static str = "id, name, price";

    type Dto = ProductDto;
    type Create = NewProduct;
    type Update = UpdateProduct;
    type Projected = ProductProjection;

    fn id(&self) -> i32 {
        self.id
    }

    fn update_id(input: &UpdateProduct) -> i32 {
        input.id
    }

    fn sort_column(key: &str) -> Option<&'static str> {
        match key {
            "name" => Some("name"),
            "price" => Some("price"),
            _ => None,
        }
    }

    fn project(&self, selected: &SelectedColumns) -> ProductProjection {
        ProductProjection {
            id: self.id,
            name: selected.contains("name").then(|| self.name.clone()),
            price: if selected.contains("price") {
                self.price
            } else {
                0.0
            },
        }
    }

    async fn insert(pool: &PgPool, input: &NewProduct) -> Result<Self, AppError> {
        let sql = format!(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {}",
            Self::SELECT_LIST
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    async fn update_row(pool: &PgPool, input: &UpdateProduct) -> Result<Option<Self>, AppError> {
        let sql = format!(
            "UPDATE products SET name = $2, price = $3 WHERE id = $1 RETURNING {}",
            Self::SELECT_LIST
        );
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.price)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_are_allow_listed() {
        assert_eq!(Product::sort_column("name"), Some("name"));
        assert_eq!(Product::sort_column("price"), Some("price"));
        assert_eq!(Product::sort_column("id"), None);
    }

    #[test]
    fn projection_defaults_price_to_zero() {
        let sword = Product {
            id: 4,
            name: "Sword".into(),
            price: 10.0,
        };
        let selected = SelectedColumns::new(&["Name".into()]);
        let p = sword.project(&selected);
        assert_eq!(p.id, 4);
        assert_eq!(p.name.as_deref(), Some("Sword"));
        assert_eq!(p.price, 0.0);
    }
}
