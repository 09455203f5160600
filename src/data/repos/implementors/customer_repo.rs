use crate::data::database::Database;
use crate::data::filters::{
    CustomerField, CustomerPredicate, Direction, Filter, OrderBy, contains_pattern, prefix_pattern,
};
use crate::data::models::customer::{Customer, NewCustomer};
use crate::data::models::schema::customers;
use crate::data::repos::implementors::lower;
use crate::data::repos::traits::repository::{CustomerRepository, Repository, Window};
use async_trait::async_trait;
use diesel::mysql::Mysql;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CustomerRepo {
    db: Database,
}

impl CustomerRepo {
    pub fn new(db: Database) -> Self {
        CustomerRepo { db }
    }

    fn filtered<'a>(filter: &Filter<CustomerPredicate>) -> customers::BoxedQuery<'a, Mysql> {
        let mut query = customers::table.into_boxed();

        for predicate in filter.predicates() {
            query = match predicate {
                CustomerPredicate::NameContains(name) => {
                    query.filter(lower(customers::name).like(contains_pattern(name)))
                }
                CustomerPredicate::EmailContains(email) => {
                    query.filter(lower(customers::email).like(contains_pattern(email)))
                }
                CustomerPredicate::CreatedAtGte(at) => query.filter(customers::created_at.ge(*at)),
                CustomerPredicate::CreatedAtLte(at) => query.filter(customers::created_at.le(*at)),
                CustomerPredicate::PhoneStartsWith(prefix) => {
                    query.filter(customers::phone.like(prefix_pattern(prefix)))
                }
            };
        }

        query
    }

    fn ordered<'a>(
        mut query: customers::BoxedQuery<'a, Mysql>,
        order: &[OrderBy<CustomerField>],
    ) -> customers::BoxedQuery<'a, Mysql> {
        for key in order {
            query = match (key.field, key.direction) {
                (CustomerField::Id, Direction::Asc) => {
                    query.then_order_by(customers::customer_id.asc())
                }
                (CustomerField::Id, Direction::Desc) => {
                    query.then_order_by(customers::customer_id.desc())
                }
                (CustomerField::Name, Direction::Asc) => query.then_order_by(customers::name.asc()),
                (CustomerField::Name, Direction::Desc) => {
                    query.then_order_by(customers::name.desc())
                }
                (CustomerField::Email, Direction::Asc) => {
                    query.then_order_by(customers::email.asc())
                }
                (CustomerField::Email, Direction::Desc) => {
                    query.then_order_by(customers::email.desc())
                }
                (CustomerField::Phone, Direction::Asc) => {
                    query.then_order_by(customers::phone.asc())
                }
                (CustomerField::Phone, Direction::Desc) => {
                    query.then_order_by(customers::phone.desc())
                }
                (CustomerField::CreatedAt, Direction::Asc) => {
                    query.then_order_by(customers::created_at.asc())
                }
                (CustomerField::CreatedAt, Direction::Desc) => {
                    query.then_order_by(customers::created_at.desc())
                }
            };
        }

        query.then_order_by(customers::customer_id.asc())
    }
}

#[async_trait]
impl Repository for CustomerRepo {
    type Id = i32;
    type Item = Customer;
    type NewItem = NewCustomer;
    type Predicate = CustomerPredicate;
    type Field = CustomerField;

    async fn get_all(&self) -> Result<Option<Vec<Self::Item>>, result::Error> {
        use crate::data::models::schema::customers::dsl::{customer_id, customers};

        let mut conn = self.db.get_connection().await?;

        match customers
            .order(customer_id.asc())
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
        use crate::data::models::schema::customers::dsl::{customer_id, customers};

        let mut conn = self.db.get_connection().await?;

        match customers
            .filter(customer_id.eq(id))
            .first::<Self::Item>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn add(&self, item: Self::NewItem) -> Result<Self::Item, result::Error> {
        use crate::data::models::schema::customers::dsl::{customer_id, customers};

        let mut conn = self.db.get_connection().await?;

        conn.transaction::<_, result::Error, _>(|connection| {
            async move {
                diesel::insert_into(customers)
                    .values(&item)
                    .execute(connection)
                    .await?;

                let new_id: i32 = diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>(
                    "LAST_INSERT_ID()",
                ))
                .get_result(connection)
                .await?;

                customers
                    .filter(customer_id.eq(new_id))
                    .first::<Customer>(connection)
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
impl CustomerRepository for CustomerRepo {
    async fn get_by_email(&self, email_query: &str) -> Result<Option<Customer>, result::Error> {
        use crate::data::models::schema::customers::dsl::{customers, email};

        let mut conn = self.db.get_connection().await?;

        match customers
            .filter(email.eq(email_query))
            .first::<Customer>(&mut conn)
            .await
        {
            Ok(value) => Ok(Some(value)),
            Err(result::Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
