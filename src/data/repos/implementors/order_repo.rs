use crate::data::database::Database;
use crate::data::filters::{
    Direction, Filter, OrderBy, OrderField, OrderPredicate, contains_pattern,
};
use crate::data::models::customer::Customer;
use crate::data::models::order::{
    NewOrderProduct, NewOrderWithProducts, Order, OrderDetails, OrderProduct,
};
use crate::data::models::product::Product;
use crate::data::models::schema::{customers, order_products, orders, products};
use crate::data::repos::implementors::lower;
use crate::data::repos::traits::repository::{OrderRepository, Repository, Window};
use async_trait::async_trait;
use diesel::mysql::Mysql;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use std::collections::HashMap;

pub struct OrderRepo {
    db: Database,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        OrderRepo { db }
    }

    /// Relationship predicates are rendered as `order_id IN (subquery)` so an
    /// order matching through several products is still returned once.
    fn filtered<'a>(filter: &Filter<OrderPredicate>) -> orders::BoxedQuery<'a, Mysql> {
        let mut query = orders::table.into_boxed();

        for predicate in filter.predicates() {
            query = match predicate {
                OrderPredicate::TotalAmountGte(amount) => {
                    query.filter(orders::total_amount.ge(amount.clone()))
                }
                OrderPredicate::TotalAmountLte(amount) => {
                    query.filter(orders::total_amount.le(amount.clone()))
                }
                OrderPredicate::OrderDateGte(at) => query.filter(orders::order_date.ge(*at)),
                OrderPredicate::OrderDateLte(at) => query.filter(orders::order_date.le(*at)),
                OrderPredicate::CustomerNameContains(name) => query.filter(
                    orders::customer_id.eq_any(
                        customers::table
                            .filter(lower(customers::name).like(contains_pattern(name)))
                            .select(customers::customer_id),
                    ),
                ),
                OrderPredicate::ProductNameContains(name) => query.filter(
                    orders::order_id.eq_any(
                        order_products::table
                            .inner_join(products::table)
                            .filter(lower(products::name).like(contains_pattern(name)))
                            .select(order_products::order_id),
                    ),
                ),
                OrderPredicate::ContainsProduct(id) => query.filter(
                    orders::order_id.eq_any(
                        order_products::table
                            .filter(order_products::product_id.eq(*id))
                            .select(order_products::order_id),
                    ),
                ),
            };
        }

        query
    }

    fn ordered<'a>(
        mut query: orders::BoxedQuery<'a, Mysql>,
        order: &[OrderBy<OrderField>],
    ) -> orders::BoxedQuery<'a, Mysql> {
        for key in order {
            query = match (key.field, key.direction) {
                (OrderField::Id, Direction::Asc) => query.then_order_by(orders::order_id.asc()),
                (OrderField::Id, Direction::Desc) => query.then_order_by(orders::order_id.desc()),
                (OrderField::CustomerId, Direction::Asc) => {
                    query.then_order_by(orders::customer_id.asc())
                }
                (OrderField::CustomerId, Direction::Desc) => {
                    query.then_order_by(orders::customer_id.desc())
                }
                (OrderField::TotalAmount, Direction::Asc) => {
                    query.then_order_by(orders::total_amount.asc())
                }
                (OrderField::TotalAmount, Direction::Desc) => {
                    query.then_order_by(orders::total_amount.desc())
                }
                (OrderField::OrderDate, Direction::Asc) => {
                    query.then_order_by(orders::order_date.asc())
                }
                (OrderField::OrderDate, Direction::Desc) => {
                    query.then_order_by(orders::order_date.desc())
                }
                (OrderField::CreatedAt, Direction::Asc) => {
                    query.then_order_by(orders::created_at.asc())
                }
                (OrderField::CreatedAt, Direction::Desc) => {
                    query.then_order_by(orders::created_at.desc())
                }
            };
        }

        query.then_order_by(orders::order_id.asc())
    }
}

#[async_trait]
impl Repository for OrderRepo {
    type Id = i32;
    type Item = Order;
    type NewItem = NewOrderWithProducts;
    type Predicate = OrderPredicate;
    type Field = OrderField;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        match orders.order(order_id.asc()).load::<Self::Item>(&mut conn).await {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        match orders
            .filter(order_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add(&self, item: Self::NewItem) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::order_products::dsl::order_products;
        use crate::data::models::schema::orders::dsl::{order_id, orders};

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders)
                    .values(&item.order)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
                    "LAST_INSERT_ID()",
                ))
                .get_result(connection)
                .await?;

                let links: Vec<NewOrderProduct> = item
                    .product_ids
                    .iter()
                    .map(|&pid| NewOrderProduct {
                        order_id: new_id,
                        product_id: pid,
                    })
                    .collect();

                diesel::insert_into(order_products)
                    .values(&links)
                    .execute(connection)
                    .await?;

                orders
                    .filter(order_id.eq(new_id))
                    .first::<Order>(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }

    async fn count(&self, filter: &Filter<Self::Predicate>) -> Result<i64, result::Error> {
        let mut conn = self.db.get_connection().await?;

        Self::filtered(filter)
            .count()
            .get_result::<i64>(&mut conn)
            .await
    }

    async fn search(
        &self,
        filter: &Filter<Self::Predicate>,
        order: &[OrderBy<Self::Field>],
        window: Window,
    ) -> Result<Vec<Self::Item>, result::Error> {
        let mut conn = self.db.get_connection().await?;

        let mut query = Self::ordered(Self::filtered(filter), order).offset(window.offset);
        if let Some(limit) = window.limit {
            query = query.limit(limit);
        }

        query.load::<Self::Item>(&mut conn).await
    }
}

#[async_trait]
impl OrderRepository for OrderRepo {
    async fn attach_relations(
        &self,
        orders_list: Vec<Order>,
    ) -> Result<Vec<OrderDetails>, result::Error> {
        if orders_list.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.get_connection().await?;

        let order_ids: Vec<i32> = orders_list.iter().map(|o| o.order_id).collect();
        let customer_ids: Vec<i32> = orders_list.iter().map(|o| o.customer_id).collect();

        let customer_rows: Vec<Customer> = customers::table
            .filter(customers::customer_id.eq_any(customer_ids))
            .load::<Customer>(&mut conn)
            .await?;

        let items_data: Vec<(OrderProduct, Product)> = order_products::table
            .inner_join(products::table)
            .filter(order_products::order_id.eq_any(order_ids))
            .order(products::product_id.asc())
            .load::<(OrderProduct, Product)>(&mut conn)
            .await?;

        let customer_map: HashMap<i32, Customer> = customer_rows
            .into_iter()
            .map(|c| (c.customer_id, c))
            .collect();

        let mut product_map: HashMap<i32, Vec<Product>> = HashMap::new();
        for (link, product) in items_data {
            product_map.entry(link.order_id).or_default().push(product);
        }

        orders_list
            .into_iter()
            .map(|order| {
                // The foreign key guarantees the customer row exists.
                let customer = customer_map
                    .get(&order.customer_id)
                    .cloned()
                    .ok_or(result::Error::NotFound)?;
                let products = product_map.remove(&order.order_id).unwrap_or_default();
                Ok(OrderDetails {
                    order,
                    customer,
                    products,
                })
            })
            .collect()
    }
}
