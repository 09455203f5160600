#![allow(dead_code)]

pub mod eval;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use crm_server_lib::api::graphql::{CrmSchema, build_schema};
use crm_server_lib::data::filters::{
    CustomerField, CustomerPredicate, Filter, OrderBy, OrderField, OrderPredicate, ProductField,
    ProductPredicate,
};
use crm_server_lib::data::models::customer::{Customer, CustomerDraft, NewCustomer};
use crm_server_lib::data::models::order::{
    NewOrderWithProducts, Order, OrderDetails, OrderProduct,
};
use crm_server_lib::data::models::product::{NewProduct, Product, ProductDraft};
use crm_server_lib::data::repos::traits::repository::{
    CustomerRepository, OrderRepository, ProductRepository, Repository, Window,
};
use crm_server_lib::services::CrmServices;
use crm_server_lib::utils::clock::FixedClock;
use diesel::result::{self, DatabaseErrorKind};
use eval::{Matches, compare_by};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct StoreState {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<Order>,
    order_products: Vec<OrderProduct>,
}

impl StoreState {
    fn details(&self, order: &Order) -> Result<OrderDetails, result::Error> {
        let customer = self
            .customers
            .iter()
            .find(|c| c.customer_id == order.customer_id)
            .cloned()
            .ok_or(result::Error::NotFound)?;

        let mut products: Vec<Product> = self
            .order_products
            .iter()
            .filter(|link| link.order_id == order.order_id)
            .filter_map(|link| self.products.iter().find(|p| p.product_id == link.product_id))
            .cloned()
            .collect();
        products.sort_by_key(|p| p.product_id);

        Ok(OrderDetails {
            order: order.clone(),
            customer,
            products,
        })
    }
}

/// Shared in-memory tables standing in for MySQL. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every repository call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, result::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(result::Error::DatabaseError(
                DatabaseErrorKind::UnableToSendCommand,
                Box::new("store unavailable".to_string()),
            ));
        }
        Ok(self.state.lock().expect("store lock poisoned"))
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.state.lock().unwrap().customers.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.state.lock().unwrap().orders.clone()
    }

    pub fn order_links(&self) -> Vec<OrderProduct> {
        self.state.lock().unwrap().order_products.clone()
    }

    /// Inserts a product directly, bypassing validation.
    pub fn seed_product(&self, name: &str, price: &str, stock: i32) -> Product {
        let mut state = self.state.lock().unwrap();
        let product = Product {
            product_id: state.products.len() as i32 + 1,
            name: name.to_string(),
            price: decimal(price),
            stock,
            created_at: fixed_now(),
        };
        state.products.push(product.clone());
        product
    }

    pub fn seed_customer(&self, name: &str, email: &str, created_at: NaiveDateTime) -> Customer {
        let mut state = self.state.lock().unwrap();
        let customer = Customer {
            customer_id: state.customers.len() as i32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            created_at,
        };
        state.customers.push(customer.clone());
        customer
    }
}

fn window_of<T>(items: Vec<T>, window: Window) -> Vec<T> {
    let rest = items.into_iter().skip(window.offset.max(0) as usize);
    match window.limit {
        Some(limit) => rest.take(limit.max(0) as usize).collect(),
        None => rest.collect(),
    }
}

pub struct MemoryCustomerRepo {
    store: MemoryStore,
}

impl MemoryCustomerRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryCustomerRepo { store }
    }
}

#[async_trait]
impl Repository for MemoryCustomerRepo {
    type Id = i32;
    type Item = Customer;
    type NewItem = NewCustomer;
    type Predicate = CustomerPredicate;
    type Field = CustomerField;

    async fn get_all(&self) -> Result<Option<Vec<Customer>>, result::Error> {
        let state = self.store.lock()?;
        Ok(Some(state.customers.clone()).filter(|c| !c.is_empty()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, result::Error> {
        let state = self.store.lock()?;
        Ok(state.customers.iter().find(|c| c.customer_id == id).cloned())
    }

    async fn add(&self, item: NewCustomer) -> Result<Customer, result::Error> {
        let mut state = self.store.lock()?;
        if state.customers.iter().any(|c| c.email == item.email) {
            return Err(result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new(format!("Duplicate entry '{}' for key 'email'", item.email)),
            ));
        }

        let customer = Customer {
            customer_id: state.customers.len() as i32 + 1,
            name: item.name,
            email: item.email,
            phone: item.phone,
            created_at: item.created_at,
        };
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn count(&self, filter: &Filter<CustomerPredicate>) -> Result<i64, result::Error> {
        let state = self.store.lock()?;
        Ok(state.customers.iter().filter(|c| filter.matches(c)).count() as i64)
    }

    async fn search(
        &self,
        filter: &Filter<CustomerPredicate>,
        order: &[OrderBy<CustomerField>],
        window: Window,
    ) -> Result<Vec<Customer>, result::Error> {
        let state = self.store.lock()?;
        let mut rows: Vec<Customer> = state
            .customers
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_by(order, a, b).then(a.customer_id.cmp(&b.customer_id)));
        Ok(window_of(rows, window))
    }
}

#[async_trait]
impl CustomerRepository for MemoryCustomerRepo {
    async fn get_by_email(&self, email: &str) -> Result<Option<Customer>, result::Error> {
        let state = self.store.lock()?;
        Ok(state.customers.iter().find(|c| c.email == email).cloned())
    }
}

pub struct MemoryProductRepo {
    store: MemoryStore,
}

impl MemoryProductRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryProductRepo { store }
    }
}

#[async_trait]
impl Repository for MemoryProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem = NewProduct;
    type Predicate = ProductPredicate;
    type Field = ProductField;

    async fn get_all(&self) -> Result<Option<Vec<Product>>, result::Error> {
        let state = self.store.lock()?;
        Ok(Some(state.products.clone()).filter(|p| !p.is_empty()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, result::Error> {
        let state = self.store.lock()?;
        Ok(state.products.iter().find(|p| p.product_id == id).cloned())
    }

    async fn add(&self, item: NewProduct) -> Result<Product, result::Error> {
        let mut state = self.store.lock()?;
        let product = Product {
            product_id: state.products.len() as i32 + 1,
            name: item.name,
            price: item.price,
            stock: item.stock,
            created_at: item.created_at,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn count(&self, filter: &Filter<ProductPredicate>) -> Result<i64, result::Error> {
        let state = self.store.lock()?;
        Ok(state.products.iter().filter(|p| filter.matches(p)).count() as i64)
    }

    async fn search(
        &self,
        filter: &Filter<ProductPredicate>,
        order: &[OrderBy<ProductField>],
        window: Window,
    ) -> Result<Vec<Product>, result::Error> {
        let state = self.store.lock()?;
        let mut rows: Vec<Product> = state
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_by(order, a, b).then(a.product_id.cmp(&b.product_id)));
        Ok(window_of(rows, window))
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepo {
    async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, result::Error> {
        let state = self.store.lock()?;
        Ok(state
            .products
            .iter()
            .filter(|p| ids.contains(&p.product_id))
            .cloned()
            .collect())
    }

    async fn restock_below(
        &self,
        threshold: i32,
        increment: i32,
    ) -> Result<Vec<Product>, result::Error> {
        let mut state = self.store.lock()?;
        let mut updated = Vec::new();
        for product in state.products.iter_mut().filter(|p| p.stock < threshold) {
            product.stock += increment;
            updated.push(product.clone());
        }
        Ok(updated)
    }
}

pub struct MemoryOrderRepo {
    store: MemoryStore,
}

impl MemoryOrderRepo {
    pub fn new(store: MemoryStore) -> Self {
        MemoryOrderRepo { store }
    }
}

#[async_trait]
impl Repository for MemoryOrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem = NewOrderWithProducts;
    type Predicate = OrderPredicate;
    type Field = OrderField;

    async fn get_all(&self) -> Result<Option<Vec<Order>>, result::Error> {
        let state = self.store.lock()?;
        Ok(Some(state.orders.clone()).filter(|o| !o.is_empty()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, result::Error> {
        let state = self.store.lock()?;
        Ok(state.orders.iter().find(|o| o.order_id == id).cloned())
    }

    async fn add(&self, item: NewOrderWithProducts) -> Result<Order, result::Error> {
        let mut state = self.store.lock()?;
        let order = Order {
            order_id: state.orders.len() as i32 + 1,
            customer_id: item.order.customer_id,
            total_amount: item.order.total_amount,
            order_date: item.order.order_date,
            created_at: item.order.created_at,
        };
        for product_id in item.product_ids {
            state.order_products.push(OrderProduct {
                order_id: order.order_id,
                product_id,
            });
        }
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn count(&self, filter: &Filter<OrderPredicate>) -> Result<i64, result::Error> {
        let state = self.store.lock()?;
        let mut count = 0;
        for order in &state.orders {
            if filter.matches(&state.details(order)?) {
                count += 1;
            }
        }
        Ok(count)
    }

    async fn search(
        &self,
        filter: &Filter<OrderPredicate>,
        order: &[OrderBy<OrderField>],
        window: Window,
    ) -> Result<Vec<Order>, result::Error> {
        let state = self.store.lock()?;
        let mut rows = Vec::new();
        for row in &state.orders {
            if filter.matches(&state.details(row)?) {
                rows.push(row.clone());
            }
        }
        rows.sort_by(|a, b| compare_by(order, a, b).then(a.order_id.cmp(&b.order_id)));
        Ok(window_of(rows, window))
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepo {
    async fn attach_relations(
        &self,
        orders: Vec<Order>,
    ) -> Result<Vec<OrderDetails>, result::Error> {
        let state = self.store.lock()?;
        orders.iter().map(|order| state.details(order)).collect()
    }
}

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}

pub fn services(store: &MemoryStore) -> CrmServices {
    CrmServices::new(
        Arc::new(MemoryCustomerRepo::new(store.clone())),
        Arc::new(MemoryProductRepo::new(store.clone())),
        Arc::new(MemoryOrderRepo::new(store.clone())),
        Arc::new(FixedClock(fixed_now())),
    )
}

pub fn schema(store: &MemoryStore) -> CrmSchema {
    build_schema(services(store))
}

pub fn customer_draft(name: &str, email: &str, phone: Option<&str>) -> CustomerDraft {
    CustomerDraft {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        created_at: None,
    }
}

pub fn product_draft(name: &str, price: &str, stock: Option<i32>) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: decimal(price),
        stock,
        created_at: None,
    }
}
