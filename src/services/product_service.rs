use crate::data::filters::{Filter, ProductPredicate, parse_order_by};
use crate::data::models::product::{NewProduct, Product, ProductDraft};
use crate::data::models::{MONEY_SCALE, max_money};
use crate::data::repos::traits::repository::{ProductRepository, Window};
use crate::services::errors::ProductServiceError;
use crate::utils::clock::Clock;
use bigdecimal::{BigDecimal, Zero};
use std::sync::Arc;

/// Products with stock strictly below this are restocked.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Units added to each low-stock product per restock run.
pub const RESTOCK_INCREMENT: i32 = 10;

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
        ProductService { repo, clock }
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, ProductServiceError> {
        self.repo
            .get_all()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    pub async fn count_products(
        &self,
        filter: &Filter<ProductPredicate>,
    ) -> Result<i64, ProductServiceError> {
        self.repo
            .count(filter)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    pub async fn search_products(
        &self,
        filter: &Filter<ProductPredicate>,
        order_by: &[String],
        window: Window,
    ) -> Result<Vec<Product>, ProductServiceError> {
        let order = parse_order_by(order_by)?;

        self.repo
            .search(filter, &order, window)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    /// Creates a product. The price is rounded to the stored scale before it
    /// is checked, so a value that would be stored as zero is rejected, and
    /// so is one that overflows the column.
    pub async fn create_product(
        &self,
        draft: ProductDraft,
    ) -> Result<Product, ProductServiceError> {
        if draft.name.trim().is_empty() {
            return Err(ProductServiceError::MissingName);
        }

        let price = draft.price.round(MONEY_SCALE);
        if price <= BigDecimal::zero() {
            return Err(ProductServiceError::InvalidPrice);
        }
        if price > max_money() {
            return Err(ProductServiceError::PriceOutOfRange);
        }

        let stock = draft.stock.unwrap_or(0);
        if stock < 0 {
            return Err(ProductServiceError::NegativeStock);
        }

        let new_product = NewProduct {
            name: draft.name,
            price,
            stock,
            created_at: draft.created_at.unwrap_or_else(|| self.clock.now()),
        };

        let product = self.repo.add(new_product).await.map_err(|e| {
            tracing::error!("Error creating product: {}", e);
            ProductServiceError::DatabaseError
        })?;
        tracing::info!(product_id = product.product_id, "Product created");

        Ok(product)
    }

    /// Adds [`RESTOCK_INCREMENT`] to every product below
    /// [`LOW_STOCK_THRESHOLD`] and returns the updated products.
    pub async fn restock_low_stock(&self) -> Result<Vec<Product>, ProductServiceError> {
        let updated = self
            .repo
            .restock_below(LOW_STOCK_THRESHOLD, RESTOCK_INCREMENT)
            .await
            .map_err(|e| {
                tracing::error!("Error restocking products: {}", e);
                ProductServiceError::DatabaseError
            })?;

        tracing::info!(count = updated.len(), "Low-stock products restocked");

        Ok(updated)
    }
}
