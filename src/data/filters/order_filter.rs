use crate::data::filters::SortField;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

/// Order predicates. The relationship variants traverse to the customer or
/// to the order's products; an order matches once no matter how many of its
/// products satisfy the condition.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderPredicate {
    TotalAmountGte(BigDecimal),
    TotalAmountLte(BigDecimal),
    OrderDateGte(NaiveDateTime),
    OrderDateLte(NaiveDateTime),
    CustomerNameContains(String),
    ProductNameContains(String),
    ContainsProduct(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    CustomerId,
    TotalAmount,
    OrderDate,
    CreatedAt,
}

impl SortField for OrderField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" | "order_id" | "orderId" => Some(OrderField::Id),
            "customer" | "customer_id" | "customerId" => Some(OrderField::CustomerId),
            "total_amount" | "totalAmount" => Some(OrderField::TotalAmount),
            "order_date" | "orderDate" => Some(OrderField::OrderDate),
            "created_at" | "createdAt" => Some(OrderField::CreatedAt),
            _ => None,
        }
    }
}
