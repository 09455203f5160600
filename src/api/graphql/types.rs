use async_graphql::SimpleObject;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Customer")]
pub struct CustomerType {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Product")]
pub struct ProductType {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Order")]
pub struct OrderType {
    pub id: i32,
    pub customer: CustomerType,
    pub products: Vec<ProductType>,
    /// Sum of the product prices when the order was placed.
    pub total_amount: BigDecimal,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(SimpleObject)]
pub struct CreateCustomerPayload {
    pub customer: CustomerType,
    pub message: String,
}

#[derive(SimpleObject)]
pub struct BulkCreateCustomersPayload {
    pub customers: Vec<CustomerType>,
    /// One `"Entry N: ..."` message per rejected input, in input order.
    pub errors: Vec<String>,
}

#[derive(SimpleObject)]
pub struct CreateProductPayload {
    pub product: ProductType,
}

#[derive(SimpleObject)]
pub struct CreateOrderPayload {
    pub order: OrderType,
}

#[derive(SimpleObject)]
pub struct UpdateLowStockProductsPayload {
    pub updated_products: Vec<ProductType>,
    pub message: String,
}
