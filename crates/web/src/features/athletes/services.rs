use chrono::Utc;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::{EntityKind, Result, StorageError},
    models::Athlete,
    services::{
        reference_resolver::resolve_references,
        uniqueness_guard::ensure_national_id_available,
    },
    store::EntityStore,
};
use uuid::Uuid;

/// Create a new athlete after resolving its references and checking the national id
pub async fn create_athlete(
    store: &dyn EntityStore,
    request: CreateAthleteRequest,
) -> Result<Athlete> {
    let references = resolve_references(
        store,
        &request.category.name,
        &request.training_center.name,
    )
    .await
    .inspect_err(|e| tracing::warn!("Rejected athlete creation: {}", e))?;

    ensure_national_id_available(store, &request.national_id)
        .await
        .inspect_err(|e| tracing::warn!("Rejected athlete creation: {}", e))?;

    let athlete = request.into_athlete(
        Uuid::new_v4(),
        Utc::now().naive_utc(),
        references.category_id,
        references.training_center_id,
    );

    let created = store.insert_athlete(&athlete).await?;
    tracing::info!(athlete_id = %created.athlete_id, "Athlete created");

    Ok(created)
}

/// List all athletes
pub async fn list_athletes(store: &dyn EntityStore) -> Result<Vec<Athlete>> {
    store.list_athletes().await
}

/// Get athlete by external identifier
pub async fn get_athlete_by_id(store: &dyn EntityStore, id: Uuid) -> Result<Athlete> {
    store
        .find_athlete_by_id(id)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::Athlete, id.to_string()))
}

/// Get athlete by exact name
pub async fn get_athlete_by_name(store: &dyn EntityStore, name: &str) -> Result<Athlete> {
    store
        .find_athlete_by_name(name)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::Athlete, name))
}

/// Get athlete by national id
pub async fn get_athlete_by_national_id(
    store: &dyn EntityStore,
    national_id: &str,
) -> Result<Athlete> {
    store
        .find_athlete_by_national_id(national_id)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::Athlete, national_id))
}

/// Update only the fields present in the request
pub async fn update_athlete(
    store: &dyn EntityStore,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let mut athlete = get_athlete_by_id(store, id).await?;
    request.apply_to(&mut athlete);

    let updated = store.update_athlete(&athlete).await?;
    tracing::info!(athlete_id = %updated.athlete_id, "Athlete updated");

    Ok(updated)
}

/// Delete an athlete
pub async fn delete_athlete(store: &dyn EntityStore, id: Uuid) -> Result<()> {
    let athlete = get_athlete_by_id(store, id).await?;
    store.delete_athlete(athlete.athlete_id).await?;
    tracing::info!(athlete_id = %athlete.athlete_id, "Athlete deleted");

    Ok(())
}
