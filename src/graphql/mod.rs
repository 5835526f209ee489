pub mod query;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use sqlx::PgPool;

pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Read-only schema: two query fields, no mutations, no subscriptions.
/// The pool rides along as context data for the resolvers.
pub fn build_schema(pool: PgPool) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(pool)
        .finish()
}
