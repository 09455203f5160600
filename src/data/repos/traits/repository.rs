use crate::data::filters::{
    CustomerField, CustomerPredicate, Filter, OrderBy, OrderField, OrderPredicate, ProductField,
    ProductPredicate,
};
use crate::data::models::customer::{Customer, NewCustomer};
use crate::data::models::order::{NewOrderWithProducts, Order, OrderDetails};
use crate::data::models::product::{NewProduct, Product};
use async_trait::async_trait;
use diesel::result;

/// A slice of a result set: skip `offset` rows, then take at most `limit`
/// (all remaining rows when `limit` is `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub offset: i64,
    pub limit: Option<i64>,
}

impl Window {
    pub fn all() -> Self {
        Window::default()
    }
}

#[async_trait]
pub trait Repository: Send + Sync {
    type Id: Send + 'static;
    type Item: Send;
    type NewItem: Send + 'static;
    type Predicate: Send + Sync;
    type Field: Send + Sync;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error>;
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error>;
    /// Inserts the row and returns it as stored, with its generated id.
    async fn add(&self, item: Self::NewItem) -> Result<Self::Item, result::Error>;
    async fn count(&self, filter: &Filter<Self::Predicate>) -> Result<i64, result::Error>;
    /// Rows matching `filter`, sorted by `order` then by primary key.
    async fn search(
        &self,
        filter: &Filter<Self::Predicate>,
        order: &[OrderBy<Self::Field>],
        window: Window,
    ) -> Result<Vec<Self::Item>, result::Error>;
}

#[async_trait]
pub trait CustomerRepository:
    Repository<
        Id = i32,
        Item = Customer,
        NewItem = NewCustomer,
        Predicate = CustomerPredicate,
        Field = CustomerField,
    >
{
    async fn get_by_email(&self, email: &str) -> Result<Option<Customer>, result::Error>;
}

#[async_trait]
pub trait ProductRepository:
    Repository<
        Id = i32,
        Item = Product,
        NewItem = NewProduct,
        Predicate = ProductPredicate,
        Field = ProductField,
    >
{
    /// Distinct products whose id is in `ids`; unknown ids are skipped.
    async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, result::Error>;

    /// Adds `increment` to the stock of every product below `threshold` and
    /// returns those products after the update.
    async fn restock_below(
        &self,
        threshold: i32,
        increment: i32,
    ) -> Result<Vec<Product>, result::Error>;
}

#[async_trait]
pub trait OrderRepository:
    Repository<
        Id = i32,
        Item = Order,
        NewItem = NewOrderWithProducts,
        Predicate = OrderPredicate,
        Field = OrderField,
    >
{
    /// Resolves customer and products for each order, keeping input order.
    async fn attach_relations(
        &self,
        orders: Vec<Order>,
    ) -> Result<Vec<OrderDetails>, result::Error>;
}
