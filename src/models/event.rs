use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `events` table. Field order matches the column list
/// in every SELECT that scans into it.
#[derive(Debug, Clone, FromRow, SimpleObject, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub previous_event_id: Option<i32>,
    pub user_id: Option<i32>,
    pub event_type_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nullable_columns_as_null() {
        let event = Event {
            id: 1,
            name: "standup".to_string(),
            notes: None,
            start_date: None,
            end_date: None,
            previous_event_id: None,
            user_id: Some(42),
            event_type_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "standup");
        assert_eq!(json["user_id"], 42);
        assert!(json["notes"].is_null());
        assert!(json["start_date"].is_null());
    }
}
