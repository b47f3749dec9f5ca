use crate::error::{EntityKind, Result, StorageError};
use crate::store::ReferenceStore;

/// Internal identifiers of the records an athlete points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedReferences {
    pub category_id: i32,
    pub training_center_id: i32,
}

/// Resolves a category and a training center by exact name.
///
/// The category is looked up first; a missing category is reported even if
/// the training center name is also unknown.
pub async fn resolve_references<S>(
    store: &S,
    category_name: &str,
    training_center_name: &str,
) -> Result<ResolvedReferences>
where
    S: ReferenceStore + ?Sized,
{
    let category = store
        .find_category_by_name(category_name)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::Category, category_name))?;

    let training_center = store
        .find_training_center_by_name(training_center_name)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::TrainingCenter, training_center_name))?;

    Ok(ResolvedReferences {
        category_id: category.category_id,
        training_center_id: training_center.training_center_id,
    })
}
