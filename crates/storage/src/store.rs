//! Persistence gateway for the three record kinds.
//!
//! Services talk to `dyn EntityStore` so the PostgreSQL-backed [`Database`]
//! and the in-memory store used in tests are interchangeable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::Database;
use crate::error::Result;
use crate::models::{Athlete, Category, TrainingCenter};
use crate::repository::{
    athlete::AthleteRepository, category::CategoryRepository,
    training_center::TrainingCenterRepository,
};

/// Read-only lookups on categories and training centers
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>>;
}

/// Athlete persistence
#[async_trait]
pub trait AthleteStore: Send + Sync {
    async fn list_athletes(&self) -> Result<Vec<Athlete>>;

    async fn find_athlete_by_id(&self, id: Uuid) -> Result<Option<Athlete>>;

    async fn find_athlete_by_name(&self, name: &str) -> Result<Option<Athlete>>;

    async fn find_athlete_by_national_id(&self, national_id: &str) -> Result<Option<Athlete>>;

    /// Persists a new athlete in one commit.
    ///
    /// Fails with `StorageError::Conflict` if the national id is already taken,
    /// even when a concurrent insert slipped past an earlier existence check.
    async fn insert_athlete(&self, athlete: &Athlete) -> Result<Athlete>;

    /// Overwrites every mutable column of the athlete identified by `athlete.athlete_id`.
    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete>;

    async fn delete_athlete(&self, id: Uuid) -> Result<()>;
}

pub trait EntityStore: ReferenceStore + AthleteStore {}

impl<T: ReferenceStore + AthleteStore> EntityStore for T {}

#[async_trait]
impl ReferenceStore for Database {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::new(self.pool()).find_by_name(name).await
    }

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(self.pool())
            .find_by_name(name)
            .await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        CategoryRepository::new(self.pool()).list().await
    }

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>> {
        TrainingCenterRepository::new(self.pool()).list().await
    }
}

#[async_trait]
impl AthleteStore for Database {
    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        AthleteRepository::new(self.pool()).list().await
    }

    async fn find_athlete_by_id(&self, id: Uuid) -> Result<Option<Athlete>> {
        AthleteRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_athlete_by_name(&self, name: &str) -> Result<Option<Athlete>> {
        AthleteRepository::new(self.pool()).find_by_name(name).await
    }

    async fn find_athlete_by_national_id(&self, national_id: &str) -> Result<Option<Athlete>> {
        AthleteRepository::new(self.pool())
            .find_by_national_id(national_id)
            .await
    }

    async fn insert_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).create(athlete).await
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).update(athlete).await
    }

    async fn delete_athlete(&self, id: Uuid) -> Result<()> {
        AthleteRepository::new(self.pool()).delete(id).await
    }
}
