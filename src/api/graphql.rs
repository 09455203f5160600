//! GraphQL schema for the CRM: list queries, filtered connections and the
//! create mutations.

pub mod errors;
pub mod inputs;
pub mod mutation;
pub mod pagination;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::services::CrmServices;
use async_graphql::{EmptySubscription, Schema};

pub type CrmSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(services: CrmServices) -> CrmSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}
