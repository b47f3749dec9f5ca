use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, TrainingCenter};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub training_center_id: i32,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            name: category.name,
        }
    }
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(center: TrainingCenter) -> Self {
        Self {
            training_center_id: center.training_center_id,
            name: center.name,
            address: center.address,
            owner: center.owner,
        }
    }
}
