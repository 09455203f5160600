use crate::services::errors::ServiceError;
use async_graphql::ErrorExtensions;

/// Converts a service error into a GraphQL error carrying its category in
/// the `code` extension.
pub fn to_graphql_error<E: ServiceError>(err: E) -> async_graphql::Error {
    let code = err.kind().code();
    async_graphql::Error::new(err.to_string())
        .extend_with(|_, extensions| extensions.set("code", code.to_string()))
}
