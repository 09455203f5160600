use crate::data::database::Database;
use crate::data::filters::{
    Direction, Filter, OrderBy, ProductField, ProductPredicate, contains_pattern,
};
use crate::data::models::product::{NewProduct, Product};
use crate::data::models::schema::products;
use crate::data::repos::implementors::lower;
use crate::data::repos::traits::repository::{ProductRepository, Repository, Window};
use async_trait::async_trait;
use diesel::mysql::Mysql;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct ProductRepo {
    db: Database,
}

impl ProductRepo {
    pub fn new(db: Database) -> Self {
        ProductRepo { db }
    }

    fn filtered<'a>(filter: &Filter<ProductPredicate>) -> products::BoxedQuery<'a, Mysql> {
        let mut query = products::table.into_boxed();

        for predicate in filter.predicates() {
            query = match predicate {
                ProductPredicate::NameContains(name) => {
                    query.filter(lower(products::name).like(contains_pattern(name)))
                }
                ProductPredicate::PriceGte(price) => {
                    query.filter(products::price.ge(price.clone()))
                }
                ProductPredicate::PriceLte(price) => {
                    query.filter(products::price.le(price.clone()))
                }
                ProductPredicate::StockEq(stock) => query.filter(products::stock.eq(*stock)),
                ProductPredicate::StockGte(stock) => query.filter(products::stock.ge(*stock)),
                ProductPredicate::StockLte(stock) => query.filter(products::stock.le(*stock)),
                ProductPredicate::StockLt(stock) => query.filter(products::stock.lt(*stock)),
            };
        }

        query
    }

    fn ordered<'a>(
        mut query: products::BoxedQuery<'a, Mysql>,
        order: &[OrderBy<ProductField>],
    ) -> products::BoxedQuery<'a, Mysql> {
        for key in order {
            query = match (key.field, key.direction) {
                (ProductField::Id, Direction::Asc) => {
                    query.then_order_by(products::product_id.asc())
                }
                (ProductField::Id, Direction::Desc) => {
                    query.then_order_by(products::product_id.desc())
                }
                (ProductField::Name, Direction::Asc) => query.then_order_by(products::name.asc()),
                (ProductField::Name, Direction::Desc) => query.then_order_by(products::name.desc()),
                (ProductField::Price, Direction::Asc) => query.then_order_by(products::price.asc()),
                (ProductField::Price, Direction::Desc) => {
                    query.then_order_by(products::price.desc())
                }
                (ProductField::Stock, Direction::Asc) => query.then_order_by(products::stock.asc()),
                (ProductField::Stock, Direction::Desc) => {
                    query.then_order_by(products::stock.desc())
                }
                (ProductField::CreatedAt, Direction::Asc) => {
                    query.then_order_by(products::created_at.asc())
                }
                (ProductField::CreatedAt, Direction::Desc) => {
                    query.then_order_by(products::created_at.desc())
                }
            };
        }

        query.then_order_by(products::product_id.asc())
    }
}

#[async_trait]
impl Repository for ProductRepo {
    type Id = i32;
    type Item = Product;
    type NewItem = NewProduct;
    type Predicate = ProductPredicate;
    type Field = ProductField;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = self.db.get_connection().await?;

        match products
            .order(product_id.asc())
            .load::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Item>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = self.db.get_connection().await?;

        match products
            .filter(product_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add(&self, item: Self::NewItem) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(products)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
                    "LAST_INSERT_ID()",
                ))
                .get_result(connection)
                .await?;

                products
                    .filter(product_id.eq(new_id))
                    .first::<Product>(connection)
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
impl ProductRepository for ProductRepo {
    async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.get_connection().await?;

        products
            .filter(product_id.eq_any(ids.to_vec()))
            .order(product_id.asc())
            .load::<Product>(&mut conn)
            .await
    }

    async fn restock_below(
        &self,
        threshold: i32,
        increment: i32,
    ) -> Result<Vec<Product>, result::Error> {
        use crate::data::models::schema::products::dsl::{product_id, products, stock};

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                let ids: Vec<i32> = products
                    .filter(stock.lt(threshold))
                    .select(product_id)
                    .for_update()
                    .load::<i32>(connection)
                    .await?;

                if ids.is_empty() {
                    return Ok(Vec::new());
                }

                diesel::update(products.filter(product_id.eq_any(ids.clone())))
                    .set(stock.eq(stock + increment))
                    .execute(connection)
                    .await?;

                products
                    .filter(product_id.eq_any(ids))
                    .order(product_id.asc())
                    .load::<Product>(connection)
                    .await
            }
            .scope_boxed()
        })
        .await
    }
}
