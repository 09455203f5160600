pub mod customer_service;
pub mod errors;
pub mod order_service;
pub mod product_service;

use crate::data::database::Database;
use crate::data::repos::implementors::customer_repo::CustomerRepo;
use crate::data::repos::implementors::order_repo::OrderRepo;
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::{
    CustomerRepository, OrderRepository, ProductRepository,
};
use crate::utils::clock::{Clock, SystemClock};
use customer_service::CustomerService;
use order_service::OrderService;
use product_service::ProductService;
use std::sync::Arc;

/// The services the API layer resolves against.
pub struct CrmServices {
    pub customers: CustomerService,
    pub products: ProductService,
    pub orders: OrderService,
}

impl CrmServices {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        CrmServices {
            customers: CustomerService::new(customers.clone(), clock.clone()),
            products: ProductService::new(products.clone(), clock.clone()),
            orders: OrderService::new(orders, customers, products, clock),
        }
    }

    /// Services backed by the MySQL repositories and the system clock.
    pub fn from_database(db: Database) -> Self {
        CrmServices::new(
            Arc::new(CustomerRepo::new(db.clone())),
            Arc::new(ProductRepo::new(db.clone())),
            Arc::new(OrderRepo::new(db)),
            Arc::new(SystemClock),
        )
    }
}
