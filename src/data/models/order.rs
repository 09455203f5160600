use crate::data::models::customer::Customer;
use crate::data::models::product::Product;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub total_amount: BigDecimal,
    pub order_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_id: i32,
    pub total_amount: BigDecimal,
    pub order_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// An order row together with the product ids it must be linked to.
/// Both are written in the same transaction.
#[derive(PartialEq, Debug, Clone)]
pub struct NewOrderWithProducts {
    pub order: NewOrder,
    pub product_ids: Vec<i32>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_products)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderProduct {
    pub order_id: i32,
    pub product_id: i32,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = order_products)]
pub struct NewOrderProduct {
    pub order_id: i32,
    pub product_id: i32,
}

/// An order with its customer and products resolved.
#[derive(PartialEq, Debug, Clone)]
pub struct OrderDetails {
    pub order: Order,
    pub customer: Customer,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: i32,
    pub product_ids: Vec<i32>,
    pub order_date: Option<NaiveDateTime>,
}
