pub mod customer;
pub mod order;
pub mod product;
pub mod schema;

use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;

/// Digits after the point in the `DECIMAL(10, 2)` money columns.
pub const MONEY_SCALE: i64 = 2;

/// Largest value the `DECIMAL(10, 2)` money columns hold: 99999999.99.
pub fn max_money() -> BigDecimal {
    BigDecimal::new(BigInt::from(9_999_999_999_i64), MONEY_SCALE)
}
