//! Evaluates filters and orderings against rows held in memory, mirroring
//! what the MySQL repositories render into SQL.

use crm_server_lib::data::filters::{
    CustomerField, CustomerPredicate, Direction, Filter, OrderBy, OrderField, OrderPredicate,
    ProductField, ProductPredicate,
};
use crm_server_lib::data::models::customer::Customer;
use crm_server_lib::data::models::order::{Order, OrderDetails};
use crm_server_lib::data::models::product::Product;
use std::cmp::Ordering;

pub trait Matches {
    type Item;

    fn matches(&self, item: &Self::Item) -> bool;
}

pub trait Compare {
    type Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl<P: Matches> Matches for Filter<P> {
    type Item = P::Item;

    fn matches(&self, item: &P::Item) -> bool {
        self.predicates().iter().all(|p| p.matches(item))
    }
}

/// Compares two rows by each ordering key in turn.
pub fn compare_by<F: Compare>(order: &[OrderBy<F>], a: &F::Item, b: &F::Item) -> Ordering {
    order
        .iter()
        .map(|key| match key.direction {
            Direction::Asc => key.field.compare(a, b),
            Direction::Desc => key.field.compare(b, a),
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Matches for CustomerPredicate {
    type Item = Customer;

    fn matches(&self, customer: &Customer) -> bool {
        match self {
            CustomerPredicate::NameContains(name) => contains_ci(&customer.name, name),
            CustomerPredicate::EmailContains(email) => contains_ci(&customer.email, email),
            CustomerPredicate::CreatedAtGte(at) => customer.created_at >= *at,
            CustomerPredicate::CreatedAtLte(at) => customer.created_at <= *at,
            CustomerPredicate::PhoneStartsWith(prefix) => customer
                .phone
                .as_deref()
                .is_some_and(|phone| phone.starts_with(prefix.as_str())),
        }
    }
}

impl Compare for CustomerField {
    type Item = Customer;

    fn compare(&self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            CustomerField::Id => a.customer_id.cmp(&b.customer_id),
            CustomerField::Name => a.name.cmp(&b.name),
            CustomerField::Email => a.email.cmp(&b.email),
            CustomerField::Phone => a.phone.cmp(&b.phone),
            CustomerField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl Matches for ProductPredicate {
    type Item = Product;

    fn matches(&self, product: &Product) -> bool {
        match self {
            ProductPredicate::NameContains(name) => contains_ci(&product.name, name),
            ProductPredicate::PriceGte(price) => product.price >= *price,
            ProductPredicate::PriceLte(price) => product.price <= *price,
            ProductPredicate::StockEq(stock) => product.stock == *stock,
            ProductPredicate::StockGte(stock) => product.stock >= *stock,
            ProductPredicate::StockLte(stock) => product.stock <= *stock,
            ProductPredicate::StockLt(stock) => product.stock < *stock,
        }
    }
}

impl Compare for ProductField {
    type Item = Product;

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductField::Id => a.product_id.cmp(&b.product_id),
            ProductField::Name => a.name.cmp(&b.name),
            ProductField::Price => a.price.cmp(&b.price),
            ProductField::Stock => a.stock.cmp(&b.stock),
            ProductField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl Matches for OrderPredicate {
    type Item = OrderDetails;

    fn matches(&self, details: &OrderDetails) -> bool {
        let order = &details.order;
        match self {
            OrderPredicate::TotalAmountGte(amount) => order.total_amount >= *amount,
            OrderPredicate::TotalAmountLte(amount) => order.total_amount <= *amount,
            OrderPredicate::OrderDateGte(at) => order.order_date >= *at,
            OrderPredicate::OrderDateLte(at) => order.order_date <= *at,
            OrderPredicate::CustomerNameContains(name) => {
                contains_ci(&details.customer.name, name)
            }
            OrderPredicate::ProductNameContains(name) => details
                .products
                .iter()
                .any(|product| contains_ci(&product.name, name)),
            OrderPredicate::ContainsProduct(id) => details
                .products
                .iter()
                .any(|product| product.product_id == *id),
        }
    }
}

impl Compare for OrderField {
    type Item = Order;

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderField::Id => a.order_id.cmp(&b.order_id),
            OrderField::CustomerId => a.customer_id.cmp(&b.customer_id),
            OrderField::TotalAmount => a.total_amount.cmp(&b.total_amount),
            OrderField::OrderDate => a.order_date.cmp(&b.order_date),
            OrderField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}
