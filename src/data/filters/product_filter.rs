use crate::data::filters::SortField;
use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductPredicate {
    NameContains(String),
    PriceGte(BigDecimal),
    PriceLte(BigDecimal),
    StockEq(i32),
    StockGte(i32),
    StockLte(i32),
    /// Strict upper bound, used for low-stock queries.
    StockLt(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Price,
    Stock,
    CreatedAt,
}

impl SortField for ProductField {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" | "product_id" | "productId" => Some(ProductField::Id),
            "name" => Some(ProductField::Name),
            "price" => Some(ProductField::Price),
            "stock" => Some(ProductField::Stock),
            "created_at" | "createdAt" => Some(ProductField::CreatedAt),
            _ => None,
        }
    }
}
