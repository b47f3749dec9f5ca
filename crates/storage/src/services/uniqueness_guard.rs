use crate::error::{Result, StorageError};
use crate::models::Athlete;
use crate::store::AthleteStore;

/// Returns the athlete already registered under `national_id`, if any.
pub async fn find_conflict<S>(store: &S, national_id: &str) -> Result<Option<Athlete>>
where
    S: AthleteStore + ?Sized,
{
    store.find_athlete_by_national_id(national_id).await
}

/// Fails with `StorageError::Conflict` when the national id is taken.
///
/// This is an early, friendly rejection only. The insert itself is still the
/// authority, since two requests can both pass this check.
pub async fn ensure_national_id_available<S>(store: &S, national_id: &str) -> Result<()>
where
    S: AthleteStore + ?Sized,
{
    match find_conflict(store, national_id).await? {
        Some(existing) => {
            tracing::debug!(
                athlete_id = %existing.athlete_id,
                "National id already registered"
            );
            Err(StorageError::conflict(national_id))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::memory::InMemoryStore;

    async fn store_with(national_id: &str) -> InMemoryStore {
        let store = InMemoryStore::new();
        store
            .insert_athlete(&Athlete {
                athlete_id: Uuid::new_v4(),
                name: "Carla".to_string(),
                national_id: national_id.to_string(),
                birth_date: NaiveDate::from_ymd_opt(2000, 6, 30).unwrap(),
                weight: Decimal::new(58, 0),
                height: Decimal::new(160, 2),
                sex: "F".to_string(),
                category_id: 1,
                training_center_id: 1,
                created_at: chrono::Utc::now().naive_utc(),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_find_conflict_returns_existing_record() {
        let store = store_with("444").await;
        let existing = find_conflict(&store, "444").await.unwrap().unwrap();
        assert_eq!(existing.name, "Carla");
        assert!(find_conflict(&store, "555").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_taken_national_id_is_conflict() {
        let store = store_with("444").await;
        let err = ensure_national_id_available(&store, "444")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_free_national_id_passes() {
        let store = store_with("444").await;
        assert!(ensure_national_id_available(&store, "445").await.is_ok());
    }
}
