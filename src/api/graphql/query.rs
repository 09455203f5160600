use crate::api::graphql::errors::to_graphql_error;
use crate::api::graphql::pagination::paginate;
use crate::api::graphql::types::{CustomerType, OrderType, ProductType};
use crate::data::filters::{CustomerPredicate, Filter, OrderPredicate, ProductPredicate};
use crate::services::CrmServices;
use async_graphql::connection::Connection;
use async_graphql::{Context, Object, Result};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

pub const HELLO_GREETING: &str = "Hello, GraphQL!";

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A simple hello world query.
    async fn hello(&self) -> &'static str {
        HELLO_GREETING
    }

    async fn customers(&self, ctx: &Context<'_>) -> Result<Vec<CustomerType>> {
        let services = ctx.data::<CrmServices>()?;
        let customers = services
            .customers
            .get_all_customers()
            .await
            .map_err(to_graphql_error)?;

        Ok(customers.into_iter().map(CustomerType::from).collect())
    }

    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductType>> {
        let services = ctx.data::<CrmServices>()?;
        let products = services
            .products
            .get_all_products()
            .await
            .map_err(to_graphql_error)?;

        Ok(products.into_iter().map(ProductType::from).collect())
    }

    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<OrderType>> {
        let services = ctx.data::<CrmServices>()?;
        let orders = services
            .orders
            .get_all_orders()
            .await
            .map_err(to_graphql_error)?;

        Ok(orders.into_iter().map(OrderType::from).collect())
    }

    /// Customers filtered, ordered and paginated.
    #[allow(clippy::too_many_arguments)]
    async fn all_customers(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Case-insensitive substring of the name")] name: Option<String>,
        #[graphql(desc = "Case-insensitive substring of the email")] email: Option<String>,
        #[graphql(name = "createdAt_Gte")] created_at_gte: Option<DateTime<Utc>>,
        #[graphql(name = "createdAt_Lte")] created_at_lte: Option<DateTime<Utc>>,
        #[graphql(desc = "Phone prefix, e.g. \"+1\"")] phone_pattern: Option<String>,
        #[graphql(desc = "Order by fields, e.g. [\"name\", \"-created_at\"]")] order_by: Option<
            Vec<String>,
        >,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, CustomerType>> {
        let services = ctx.data::<CrmServices>()?;
        let filter = Filter::new()
            .with_opt(name, CustomerPredicate::NameContains)
            .with_opt(email, CustomerPredicate::EmailContains)
            .with_opt(created_at_gte, |at| CustomerPredicate::CreatedAtGte(at.naive_utc()))
            .with_opt(created_at_lte, |at| CustomerPredicate::CreatedAtLte(at.naive_utc()))
            .with_opt(phone_pattern, CustomerPredicate::PhoneStartsWith);
        let order_by = order_by.unwrap_or_default();

        let total = services
            .customers
            .count_customers(&filter)
            .await
            .map_err(to_graphql_error)?;

        paginate(after, before, first, last, total, |window| async move {
            let customers = services
                .customers
                .search_customers(&filter, &order_by, window)
                .await
                .map_err(to_graphql_error)?;
            let nodes = customers.into_iter().map(CustomerType::from).collect::<Vec<_>>();
            Ok::<_, async_graphql::Error>(nodes)
        })
        .await
    }

    /// Products filtered, ordered and paginated. `stock_Lt` selects low stock.
    #[allow(clippy::too_many_arguments)]
    async fn all_products(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Case-insensitive substring of the name")] name: Option<String>,
        #[graphql(name = "price_Gte")] price_gte: Option<BigDecimal>,
        #[graphql(name = "price_Lte")] price_lte: Option<BigDecimal>,
        stock: Option<i32>,
        #[graphql(name = "stock_Gte")] stock_gte: Option<i32>,
        #[graphql(name = "stock_Lte")] stock_lte: Option<i32>,
        #[graphql(name = "stock_Lt")] stock_lt: Option<i32>,
        #[graphql(desc = "Order by fields, e.g. [\"price\", \"-stock\"]")] order_by: Option<
            Vec<String>,
        >,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, ProductType>> {
        let services = ctx.data::<CrmServices>()?;
        let filter = Filter::new()
            .with_opt(name, ProductPredicate::NameContains)
            .with_opt(price_gte, ProductPredicate::PriceGte)
            .with_opt(price_lte, ProductPredicate::PriceLte)
            .with_opt(stock, ProductPredicate::StockEq)
            .with_opt(stock_gte, ProductPredicate::StockGte)
            .with_opt(stock_lte, ProductPredicate::StockLte)
            .with_opt(stock_lt, ProductPredicate::StockLt);
        let order_by = order_by.unwrap_or_default();

        let total = services
            .products
            .count_products(&filter)
            .await
            .map_err(to_graphql_error)?;

        paginate(after, before, first, last, total, |window| async move {
            let products = services
                .products
                .search_products(&filter, &order_by, window)
                .await
                .map_err(to_graphql_error)?;
            let nodes = products.into_iter().map(ProductType::from).collect::<Vec<_>>();
            Ok::<_, async_graphql::Error>(nodes)
        })
        .await
    }

    /// Orders filtered, ordered and paginated.
    #[allow(clippy::too_many_arguments)]
    async fn all_orders(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "totalAmount_Gte")] total_amount_gte: Option<BigDecimal>,
        #[graphql(name = "totalAmount_Lte")] total_amount_lte: Option<BigDecimal>,
        #[graphql(name = "orderDate_Gte")] order_date_gte: Option<DateTime<Utc>>,
        #[graphql(name = "orderDate_Lte")] order_date_lte: Option<DateTime<Utc>>,
        #[graphql(desc = "Case-insensitive substring of the customer's name")]
        customer_name: Option<String>,
        #[graphql(desc = "Case-insensitive substring of any product's name")]
        product_name: Option<String>,
        #[graphql(desc = "Orders containing this product")] product_id: Option<i32>,
        #[graphql(desc = "Order by fields, e.g. [\"-order_date\"]")] order_by: Option<Vec<String>>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, OrderType>> {
        let services = ctx.data::<CrmServices>()?;
        let filter = Filter::new()
            .with_opt(total_amount_gte, OrderPredicate::TotalAmountGte)
            .with_opt(total_amount_lte, OrderPredicate::TotalAmountLte)
            .with_opt(order_date_gte, |at| OrderPredicate::OrderDateGte(at.naive_utc()))
            .with_opt(order_date_lte, |at| OrderPredicate::OrderDateLte(at.naive_utc()))
            .with_opt(customer_name, OrderPredicate::CustomerNameContains)
            .with_opt(product_name, OrderPredicate::ProductNameContains)
            .with_opt(product_id, OrderPredicate::ContainsProduct);
        let order_by = order_by.unwrap_or_default();

        let total = services
            .orders
            .count_orders(&filter)
            .await
            .map_err(to_graphql_error)?;

        paginate(after, before, first, last, total, |window| async move {
            let orders = services
                .orders
                .search_orders(&filter, &order_by, window)
                .await
                .map_err(to_graphql_error)?;
            let nodes = orders.into_iter().map(OrderType::from).collect::<Vec<_>>();
            Ok::<_, async_graphql::Error>(nodes)
        })
        .await
    }
}
