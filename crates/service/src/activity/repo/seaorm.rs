use async_trait::async_trait;
use models::{activity, NewActivity};
use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::activity::domain::Activity;
use crate::activity::repository::ActivityRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository over the `activities` table.
#[derive(Clone)]
pub struct SeaOrmActivityRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmActivityRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ActivityRepository for SeaOrmActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, ServiceError> {
        let rows = activity::list_all(&self.db).await?;
        debug!(count = rows.len(), "activities scanned");
        Ok(rows)
    }

    async fn create(&self, new: NewActivity) -> Result<Activity, ServiceError> {
        Ok(activity::insert(&self.db, new).await?)
    }

    async fn update(&self, id: i32, new: NewActivity) -> Result<i32, ServiceError> {
        match activity::overwrite(&self.db, id, new).await? {
            0 => Err(ServiceError::not_found("activity", id)),
            _ => Ok(id),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        Ok(activity::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::DateTime;

    fn sample(title: &str) -> NewActivity {
        NewActivity {
            title: title.into(),
            category: "TASK".into(),
            description: "db-backed".into(),
            activity_date: DateTime::parse_from_rfc3339("2024-06-01T08:00:00+02:00").unwrap(),
        }
    }

    #[tokio::test]
    async fn activity_crud_against_postgres() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmActivityRepository::new(db);

        let created = repo.create(sample("seaorm create")).await?;
        assert_eq!(created.status, "NEW");
        assert_eq!(created.title, "seaorm create");

        let id = repo.update(created.id, sample("seaorm update")).await?;
        assert_eq!(id, created.id);

        let listed = repo.list().await?;
        let found = listed.iter().find(|a| a.id == created.id).unwrap();
        assert_eq!(found.title, "seaorm update");
        assert_eq!(found.status, "NEW");
        assert_eq!(found.created_at, created.created_at);

        assert_eq!(repo.delete(created.id).await?, 1);
        assert_eq!(repo.delete(created.id).await?, 0);

        let missing = repo.update(created.id, sample("gone")).await.unwrap_err();
        assert!(matches!(missing, ServiceError::NotFound(_)));
        Ok(())
    }
}
