//! In-memory [`EntityStore`](crate::store::EntityStore) for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EntityKind, Result, StorageError};
use crate::models::{Athlete, Category, TrainingCenter};
use crate::store::{AthleteStore, ReferenceStore};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    training_centers: Vec<TrainingCenter>,
    athletes: Vec<Athlete>,
}

/// Vec-backed store whose write lock makes the national id check and the
/// insert a single step, mirroring the unique constraint in PostgreSQL.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a category, assigning the next sequential id.
    pub fn with_category(self, name: &str) -> Self {
        let mut tables = self.tables.into_inner();
        let category_id = tables.categories.len() as i32 + 1;
        tables.categories.push(Category {
            category_id,
            name: name.to_string(),
        });
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Seeds a training center, assigning the next sequential id.
    pub fn with_training_center(self, name: &str) -> Self {
        let mut tables = self.tables.into_inner();
        let training_center_id = tables.training_centers.len() as i32 + 1;
        tables.training_centers.push(TrainingCenter {
            training_center_id,
            name: name.to_string(),
            address: String::new(),
            owner: String::new(),
        });
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub async fn athlete_count(&self) -> usize {
        self.tables.read().await.athletes.len()
    }
}

#[async_trait]
impl ReferenceStore for InMemoryStore {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.name == name).cloned())
    }

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let tables = self.tables.read().await;
        Ok(tables
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_training_centers(&self) -> Result<Vec<TrainingCenter>> {
        let mut centers = self.tables.read().await.training_centers.clone();
        centers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(centers)
    }
}

#[async_trait]
impl AthleteStore for InMemoryStore {
    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        Ok(self.tables.read().await.athletes.clone())
    }

    async fn find_athlete_by_id(&self, id: Uuid) -> Result<Option<Athlete>> {
        let tables = self.tables.read().await;
        Ok(tables.athletes.iter().find(|a| a.athlete_id == id).cloned())
    }

    async fn find_athlete_by_name(&self, name: &str) -> Result<Option<Athlete>> {
        let tables = self.tables.read().await;
        Ok(tables.athletes.iter().find(|a| a.name == name).cloned())
    }

    async fn find_athlete_by_national_id(&self, national_id: &str) -> Result<Option<Athlete>> {
        let tables = self.tables.read().await;
        Ok(tables
            .athletes
            .iter()
            .find(|a| a.national_id == national_id)
            .cloned())
    }

    async fn insert_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        let mut tables = self.tables.write().await;
        if tables
            .athletes
            .iter()
            .any(|a| a.national_id == athlete.national_id)
        {
            return Err(StorageError::conflict(&athlete.national_id));
        }
        tables.athletes.push(athlete.clone());
        Ok(athlete.clone())
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .athletes
            .iter_mut()
            .find(|a| a.athlete_id == athlete.athlete_id)
            .ok_or_else(|| {
                StorageError::not_found(EntityKind::Athlete, athlete.athlete_id.to_string())
            })?;

        stored.name = athlete.name.clone();
        stored.birth_date = athlete.birth_date;
        stored.weight = athlete.weight;
        stored.height = athlete.height;
        stored.sex = athlete.sex.clone();

        Ok(stored.clone())
    }

    async fn delete_athlete(&self, id: Uuid) -> Result<()> {
        let mut tables = self.tables.write().await;
        let before = tables.athletes.len();
        tables.athletes.retain(|a| a.athlete_id != id);

        if tables.athletes.len() == before {
            return Err(StorageError::not_found(EntityKind::Athlete, id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn athlete(national_id: &str) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            name: "Bruno".to_string(),
            national_id: national_id.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            weight: Decimal::new(80, 0),
            height: Decimal::new(180, 2),
            sex: "M".to_string(),
            category_id: 1,
            training_center_id: 1,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_national_id() {
        let store = InMemoryStore::new();
        store.insert_athlete(&athlete("222")).await.unwrap();

        let err = store.insert_athlete(&athlete("222")).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict { ref national_id } if national_id == "222"));
        assert_eq!(store.athlete_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_does_not_touch_immutable_columns() {
        let store = InMemoryStore::new();
        let original = store.insert_athlete(&athlete("333")).await.unwrap();

        let mut changed = original.clone();
        changed.name = "Bruno Souza".to_string();
        changed.national_id = "999".to_string();
        changed.category_id = 42;

        let updated = store.update_athlete(&changed).await.unwrap();
        assert_eq!(updated.name, "Bruno Souza");
        assert_eq!(updated.national_id, "333");
        assert_eq!(updated.category_id, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_athlete_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.delete_athlete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::NotFound {
                kind: EntityKind::Athlete,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_seeded_references_get_sequential_ids() {
        let store = InMemoryStore::new()
            .with_category("Scaled")
            .with_category("Rx")
            .with_training_center("Gym 1");

        let rx = store.find_category_by_name("Rx").await.unwrap().unwrap();
        assert_eq!(rx.category_id, 2);

        let names: Vec<String> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Rx", "Scaled"]);
    }
}
