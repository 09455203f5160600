use crate::data::filters::{Filter, OrderPredicate, parse_order_by};
use crate::data::models::max_money;
use crate::data::models::order::{NewOrder, NewOrderWithProducts, OrderDetails, OrderDraft};
use crate::data::repos::traits::repository::{
    CustomerRepository, OrderRepository, ProductRepository, Window,
};
use crate::services::errors::OrderServiceError;
use crate::utils::clock::Clock;
use bigdecimal::{BigDecimal, Zero};
use std::sync::Arc;

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        OrderService {
            orders,
            customers,
            products,
            clock,
        }
    }

    /// Gets all orders with their customer and products
    pub async fn get_all_orders(&self) -> Result<Vec<OrderDetails>, OrderServiceError> {
        let orders = self
            .orders
            .get_all()
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .unwrap_or_default();

        self.orders
            .attach_relations(orders)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    pub async fn count_orders(
        &self,
        filter: &Filter<OrderPredicate>,
    ) -> Result<i64, OrderServiceError> {
        self.orders
            .count(filter)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    pub async fn search_orders(
        &self,
        filter: &Filter<OrderPredicate>,
        order_by: &[String],
        window: Window,
    ) -> Result<Vec<OrderDetails>, OrderServiceError> {
        let order = parse_order_by(order_by)?;

        let orders = self
            .orders
            .search(filter, &order, window)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        self.orders
            .attach_relations(orders)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)
    }

    /// Creates an order for an existing customer.
    ///
    /// Every id in `product_ids` must resolve to a distinct product: a missing
    /// id or a repeated id both leave fewer resolved products than ids and
    /// fail with `UnknownProduct`. The total is the exact sum of the resolved
    /// prices at this moment and is never recomputed; a total too large for
    /// the amount column fails with `TotalOutOfRange`.
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderDetails, OrderServiceError> {
        if draft.product_ids.is_empty() {
            return Err(OrderServiceError::EmptyProductList);
        }

        let customer = self
            .customers
            .get_by_id(draft.customer_id)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?
            .ok_or(OrderServiceError::UnknownCustomer(draft.customer_id))?;

        let products = self
            .products
            .get_by_ids(&draft.product_ids)
            .await
            .map_err(|_| OrderServiceError::DatabaseError)?;

        if products.len() != draft.product_ids.len() {
            return Err(OrderServiceError::UnknownProduct);
        }

        let total_amount = products
            .iter()
            .fold(BigDecimal::zero(), |total, product| total + &product.price);
        if total_amount > max_money() {
            return Err(OrderServiceError::TotalOutOfRange);
        }

        let now = self.clock.now();
        let new_order = NewOrderWithProducts {
            order: NewOrder {
                customer_id: customer.customer_id,
                total_amount,
                order_date: draft.order_date.unwrap_or(now),
                created_at: now,
            },
            product_ids: products.iter().map(|p| p.product_id).collect(),
        };

        let order = self.orders.add(new_order).await.map_err(|e| {
            tracing::error!("Error creating order: {}", e);
            OrderServiceError::DatabaseError
        })?;
        tracing::info!(
            order_id = order.order_id,
            customer_id = customer.customer_id,
            "Order created"
        );

        Ok(OrderDetails {
            order,
            customer,
            products,
        })
    }
}
