pub mod customer_repo;
pub mod order_repo;
pub mod product_repo;

diesel::define_sql_function! {
    /// SQL `LOWER()`, used for case-insensitive substring filters.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}
