use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::Athlete;

/// Response containing the stored athlete record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
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

/// Reference to a pre-existing record, addressed by its exact name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NamedReference {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[serde(alias = "cpf")]
    #[validate(length(
        min = 1,
        max = 11,
        message = "National id must be between 1 and 11 characters"
    ))]
    pub national_id: String,

    pub birth_date: NaiveDate,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(custom(function = "validate_height"))]
    pub height: Decimal,

    #[validate(length(min = 1, max = 1, message = "Sex must be a single character"))]
    pub sex: String,

    #[validate(nested)]
    pub category: NamedReference,

    #[validate(nested)]
    pub training_center: NamedReference,
}

/// Request payload for partially updating an athlete.
///
/// Absent fields keep their stored value. The national id and the
/// category/training center references cannot be changed after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(custom(function = "validate_height"))]
    pub height: Option<Decimal>,

    #[validate(length(min = 1, max = 1, message = "Sex must be a single character"))]
    pub sex: Option<String>,
}

// Bounds follow the NUMERIC(6, 2) and NUMERIC(4, 2) columns
const MAX_WEIGHT: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);
const MAX_HEIGHT: Decimal = Decimal::from_parts(9_999, 0, 0, false, 2);

fn validate_weight(weight: &Decimal) -> Result<(), ValidationError> {
    validate_positive_up_to(
        weight,
        MAX_WEIGHT,
        "weight_out_of_range",
        "Weight must be greater than 0 and at most 9999.99",
    )
}

fn validate_height(height: &Decimal) -> Result<(), ValidationError> {
    validate_positive_up_to(
        height,
        MAX_HEIGHT,
        "height_out_of_range",
        "Height must be greater than 0 and at most 99.99",
    )
}

fn validate_positive_up_to(
    value: &Decimal,
    max: Decimal,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO && *value <= max {
        Ok(())
    } else {
        let mut error = ValidationError::new(code);
        error.message = Some(message.into());
        Err(error)
    }
}

impl CreateAthleteRequest {
    /// Builds the record to persist once both references have been resolved.
    pub fn into_athlete(
        self,
        athlete_id: Uuid,
        created_at: NaiveDateTime,
        category_id: i32,
        training_center_id: i32,
    ) -> Athlete {
        Athlete {
            athlete_id,
            name: self.name,
            national_id: self.national_id,
            birth_date: self.birth_date,
            weight: self.weight,
            height: self.height,
            sex: self.sex,
            category_id,
            training_center_id,
            created_at,
        }
    }
}

impl UpdateAthleteRequest {
    /// Overwrites only the fields present in the request.
    pub fn apply_to(&self, athlete: &mut Athlete) {
        if let Some(name) = &self.name {
            athlete.name = name.clone();
        }
        if let Some(birth_date) = self.birth_date {
            athlete.birth_date = birth_date;
        }
        if let Some(weight) = self.weight {
            athlete.weight = weight;
        }
        if let Some(height) = self.height {
            athlete.height = height;
        }
        if let Some(sex) = &self.sex {
            athlete.sex = sex.clone();
        }
    }
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            name: athlete.name,
            national_id: athlete.national_id,
            birth_date: athlete.birth_date,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category_id: athlete.category_id,
            training_center_id: athlete.training_center_id,
            created_at: athlete.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_athlete() -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            name: "Ana".to_string(),
            national_id: "111".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
            weight: Decimal::new(645, 1),
            height: Decimal::new(168, 2),
            sex: "F".to_string(),
            category_id: 1,
            training_center_id: 2,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    fn sample_request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Ana".to_string(),
            national_id: "111".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
            weight: Decimal::new(645, 1),
            height: Decimal::new(168, 2),
            sex: "F".to_string(),
            category: NamedReference {
                name: "Cat A".to_string(),
            },
            training_center: NamedReference {
                name: "Gym 1".to_string(),
            },
        }
    }

    #[test]
    fn test_apply_only_name_keeps_other_fields() {
        let original = sample_athlete();
        let mut updated = original.clone();

        let req = UpdateAthleteRequest {
            name: Some("Ana Maria".to_string()),
            ..Default::default()
        };
        req.apply_to(&mut updated);

        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.national_id, original.national_id);
        assert_eq!(updated.category_id, original.category_id);
        assert_eq!(updated.training_center_id, original.training_center_id);
        assert_eq!(updated.weight, original.weight);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let original = sample_athlete();
        let mut updated = original.clone();
        UpdateAthleteRequest::default().apply_to(&mut updated);
        assert_eq!(updated, original);
    }

    #[test]
    fn test_create_request_accepts_cpf_alias() {
        let body = r#"{
            "name": "Ana",
            "cpf": "111",
            "birth_date": "1995-04-12",
            "weight": "64.5",
            "height": "1.68",
            "sex": "F",
            "category": { "name": "Cat A" },
            "training_center": { "name": "Gym 1" }
        }"#;

        let req: CreateAthleteRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.national_id, "111");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_reference_name() {
        let mut req = sample_request();
        req.category.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_weight_beyond_column_range() {
        let mut req = sample_request();
        req.weight = Decimal::new(10_000, 0);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weight"));

        req.weight = Decimal::new(999_999, 2);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_height_beyond_column_range() {
        let mut req = sample_request();
        req.height = Decimal::new(100, 0);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("height"));
    }

    #[test]
    fn test_create_request_rejects_non_positive_measurements() {
        let mut req = sample_request();
        req.weight = Decimal::new(-1, 0);
        req.height = Decimal::ZERO;
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn test_update_request_checks_measurements_when_present() {
        let req = UpdateAthleteRequest {
            weight: Some(Decimal::new(12_000, 0)),
            ..Default::default()
        };
        assert!(req.validate().is_err());

        let req = UpdateAthleteRequest {
            height: Some(Decimal::new(181, 2)),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_length_errors_carry_messages() {
        let req = UpdateAthleteRequest {
            name: Some(String::new()),
            sex: Some("FM".to_string()),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        for field in ["name", "sex"] {
            let error = &fields[field][0];
            assert!(error.message.is_some(), "{field} has no message");
        }
    }

    #[test]
    fn test_into_athlete_uses_resolved_references() {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now().naive_utc();
        let athlete = sample_request().into_athlete(id, now, 7, 9);

        assert_eq!(athlete.athlete_id, id);
        assert_eq!(athlete.created_at, now);
        assert_eq!(athlete.category_id, 7);
        assert_eq!(athlete.training_center_id, 9);
    }
}
