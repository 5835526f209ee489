use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use crate::models::Event;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get all events
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<Event>> {
        let pool = ctx.data::<PgPool>()?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT id, name, notes, start_date, end_date, previous_event_id, user_id, event_type_id
             FROM events
             ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(events)
    }

    /// Get all events belonging to one user
    async fn userevents(&self, ctx: &Context<'_>, user_id: i32) -> Result<Vec<Event>> {
        let pool = ctx.data::<PgPool>()?;

        let events = sqlx::query_as::<_, Event>(
            "SELECT id, name, notes, start_date, end_date, previous_event_id, user_id, event_type_id
             FROM events
             WHERE user_id = $1
             ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(events)
    }
}
