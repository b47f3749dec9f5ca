use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub category_id: i32,
    pub training_center_id: i32,
    pub created_at: NaiveDateTime,
}
