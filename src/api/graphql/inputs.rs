use async_graphql::InputObject;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

#[derive(InputObject, Debug, Clone)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Defaults to the time of creation.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(InputObject, Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    /// Pass as a string (`"9.99"`) to avoid floating-point rounding.
    pub price: BigDecimal,
    /// Defaults to 0.
    pub stock: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(InputObject, Debug, Clone)]
pub struct OrderInput {
    pub customer_id: i32,
    pub product_ids: Vec<i32>,
    /// Defaults to the time of creation.
    pub order_date: Option<DateTime<Utc>>,
}
