use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{EntityKind, Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "athlete_id, name, national_id, birth_date, weight, height, sex, \
     category_id, training_center_id, created_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes, unfiltered
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes =
            sqlx::query_as::<_, Athlete>(&format!("SELECT {ATHLETE_COLUMNS} FROM athletes"))
                .fetch_all(self.pool)
                .await?;

        Ok(athletes)
    }

    /// Find athlete by external identifier
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE athlete_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Find the first athlete whose name matches exactly
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE name = $1 ORDER BY created_at LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Find athlete by national id
    pub async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE national_id = $1"
        ))
        .bind(national_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Insert a new athlete, translating the national id unique violation into a conflict
    pub async fn create(&self, athlete: &Athlete) -> Result<Athlete> {
        let created = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (athlete_id, name, national_id, birth_date, weight, height, sex,
                                  category_id, training_center_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(athlete.athlete_id)
        .bind(&athlete.name)
        .bind(&athlete.national_id)
        .bind(athlete.birth_date)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .bind(athlete.created_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                StorageError::conflict(&athlete.national_id)
            } else {
                err
            }
        })?;

        Ok(created)
    }

    /// Update the mutable profile fields of an existing athlete
    pub async fn update(&self, athlete: &Athlete) -> Result<Athlete> {
        let updated = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET name = $2,
                birth_date = $3,
                weight = $4,
                height = $5,
                sex = $6
            WHERE athlete_id = $1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(athlete.athlete_id)
        .bind(&athlete.name)
        .bind(athlete.birth_date)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StorageError::not_found(EntityKind::Athlete, athlete.athlete_id.to_string()))?;

        Ok(updated)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found(EntityKind::Athlete, id.to_string()));
        }

        Ok(())
    }
}
