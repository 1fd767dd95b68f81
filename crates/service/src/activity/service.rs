use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Activity, ActivityInput};
use super::repository::ActivityRepository;
use super::validation::Validator;
use crate::errors::ServiceError;

/// Application service: validates payloads, then delegates to the store.
pub struct ActivityService<R: ActivityRepository + ?Sized> {
    repo: Arc<R>,
    validator: Validator,
}

impl<R: ActivityRepository + ?Sized> ActivityService<R> {
    pub fn new(repo: Arc<R>, validator: Validator) -> Self { Self { repo, validator } }

    pub async fn list(&self) -> Result<Vec<Activity>, ServiceError> {
        self.repo.list().await
    }

    /// Validate and insert. The stored status is always `NEW`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::activity::{ActivityService, Validator, domain::ActivityInput, repository::mock::MockActivityRepository};
    /// let svc = ActivityService::new(Arc::new(MockActivityRepository::new()), Validator::strict());
    /// let input = ActivityInput {
    ///     title: "Plan sprint".into(),
    ///     category: "TASK".into(),
    ///     description: "backlog grooming".into(),
    ///     activity_date: Some(chrono::DateTime::parse_from_rfc3339("2024-01-08T09:00:00Z").unwrap()),
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.status, "NEW");
    /// ```
    #[instrument(skip(self, input), fields(category = %input.category))]
    pub async fn create(&self, input: ActivityInput) -> Result<Activity, ServiceError> {
        let new = self.validator.validate(input)?;
        let created = self.repo.create(new).await?;
        info!(id = created.id, "activity_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ActivityInput) -> Result<i32, ServiceError> {
        let new = self.validator.validate(input)?;
        let id = self.repo.update(id, new).await?;
        info!(id, "activity_updated");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(id, removed, "activity_deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::repository::mock::MockActivityRepository;
    use chrono::DateTime;

    fn svc(validator: Validator) -> ActivityService<MockActivityRepository> {
        ActivityService::new(Arc::new(MockActivityRepository::new()), validator)
    }

    fn payload(title: &str, category: &str) -> ActivityInput {
        ActivityInput {
            title: title.into(),
            category: category.into(),
            description: "details".into(),
            activity_date: Some(DateTime::parse_from_rfc3339("2024-02-02T12:00:00+01:00").unwrap()),
        }
    }

    #[tokio::test]
    async fn create_forces_new_status() {
        let s = svc(Validator::strict());
        let a = s.create(payload("one", "TASK")).await.unwrap();
        assert_eq!(a.status, "NEW");
        assert!(a.id > 0);
    }

    #[tokio::test]
    async fn strict_rejection_happens_before_write() {
        let s = svc(Validator::strict());
        let err = s.create(payload("one", "HOLIDAY")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(s.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_every_created_activity() {
        let s = svc(Validator::strict());
        for i in 0..3 {
            s.create(payload(&format!("item {i}"), "EVENT")).await.unwrap();
        }
        let all = s.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].title, "item 2");
        assert!(all.iter().all(|a| a.category == "EVENT"));
    }

    #[tokio::test]
    async fn update_keeps_status_and_created_at() {
        let s = svc(Validator::strict());
        let a = s.create(payload("before", "TASK")).await.unwrap();
        s.update(a.id, payload("after", "EVENT")).await.unwrap();
        let b = s.list().await.unwrap().remove(0);
        assert_eq!(b.id, a.id);
        assert_eq!(b.title, "after");
        assert_eq!(b.category, "EVENT");
        assert_eq!(b.status, a.status);
        assert_eq!(b.created_at, a.created_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let s = svc(Validator::strict());
        let err = s.update(404, payload("x", "TASK")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let s = svc(Validator::strict());
        let a = s.create(payload("bye", "TASK")).await.unwrap();
        assert_eq!(s.delete(a.id).await.unwrap(), 1);
        assert_eq!(s.delete(a.id).await.unwrap(), 0);
        assert_eq!(s.delete(12345).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn permissive_service_stores_empty_fields() {
        let s = svc(Validator::permissive());
        let a = s.create(payload("", "")).await.unwrap();
        assert_eq!(a.title, "");
        assert_eq!(a.category, "");
    }
}
