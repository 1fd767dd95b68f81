use async_trait::async_trait;
use models::NewActivity;

use super::domain::Activity;
use crate::errors::ServiceError;

/// Store abstraction for activity persistence.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Activity>, ServiceError>;
    /// Insert with status `NEW`; returns the stored row including its new id.
    async fn create(&self, new: NewActivity) -> Result<Activity, ServiceError>;
    /// Overwrite the client fields of `id`. `NotFound` when no row matches.
    async fn update(&self, id: i32, new: NewActivity) -> Result<i32, ServiceError>;
    /// Number of rows removed; zero is not an error.
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// In-memory repository for tests and running without a database.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::Utc;
    use models::DEFAULT_STATUS;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, Activity>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockActivityRepository {
        table: RwLock<Table>,
    }

    impl MockActivityRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl ActivityRepository for MockActivityRepository {
        async fn list(&self) -> Result<Vec<Activity>, ServiceError> {
            let table = self.table.read().await;
            Ok(table.rows.values().cloned().collect())
        }

        async fn create(&self, new: NewActivity) -> Result<Activity, ServiceError> {
            let mut table = self.table.write().await;
            table.last_id += 1;
            let row = Activity {
                id: table.last_id,
                title: new.title,
                category: new.category,
                description: new.description,
                activity_date: new.activity_date,
                status: DEFAULT_STATUS.to_string(),
                created_at: Utc::now().into(),
            };
            table.rows.insert(row.id, row.clone());
            Ok(row)
        }

        async fn update(&self, id: i32, new: NewActivity) -> Result<i32, ServiceError> {
            let mut table = self.table.write().await;
            let row = table
                .rows
                .get_mut(&id)
                .ok_or_else(|| ServiceError::not_found("activity", id))?;
            row.title = new.title;
            row.category = new.category;
            row.description = new.description;
            row.activity_date = new.activity_date;
            Ok(id)
        }

        async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
            let mut table = self.table.write().await;
            Ok(table.rows.remove(&id).map_or(0, |_| 1))
        }
    }
}
