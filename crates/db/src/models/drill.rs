//! Drill entity model and DTOs.
//!
//! JSON field names (`length`, `worktime`, `diameter`) are the external
//! contract and differ from the column names.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use toolhub_core::drill::{validate_attributes, validate_id, DrillAttributes};
use toolhub_core::types::DbId;
use toolhub_core::validator::Validator;

/// A row from the `drills` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Drill {
    pub id: DbId,
    pub weight: f32,
    pub name: String,
    #[serde(rename = "length")]
    pub cable_length: f32,
    #[serde(rename = "worktime")]
    pub work_time: i32,
    #[serde(rename = "diameter")]
    pub chuck_diameter: i32,
}

impl Drill {
    pub fn attributes(&self) -> DrillAttributes<'_> {
        DrillAttributes {
            weight: self.weight,
            name: &self.name,
            cable_length: self.cable_length,
            work_time: self.work_time,
            chuck_diameter: self.chuck_diameter,
        }
    }

    /// Overwrite the fields present in `input`, leaving the rest untouched.
    pub fn apply(&mut self, input: UpdateDrill) {
        if let Some(weight) = input.weight {
            self.weight = weight;
        }
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(cable_length) = input.cable_length {
            self.cable_length = cable_length;
        }
        if let Some(work_time) = input.work_time {
            self.work_time = work_time;
        }
        if let Some(chuck_diameter) = input.chuck_diameter {
            self.chuck_diameter = chuck_diameter;
        }
    }
}

/// DTO for creating a drill. Missing fields default to zero and are then
/// rejected by validation rather than by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateDrill {
    pub weight: f32,
    pub name: String,
    #[serde(rename = "length")]
    pub cable_length: f32,
    #[serde(rename = "worktime")]
    pub work_time: i32,
    #[serde(rename = "diameter")]
    pub chuck_diameter: i32,
}

impl From<CreateDrill> for Drill {
    /// The id stays 0 until the store assigns one on insert.
    fn from(input: CreateDrill) -> Self {
        Self {
            id: 0,
            weight: input.weight,
            name: input.name,
            cable_length: input.cable_length,
            work_time: input.work_time,
            chuck_diameter: input.chuck_diameter,
        }
    }
}

/// DTO for a partial update. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDrill {
    pub weight: Option<f32>,
    pub name: Option<String>,
    #[serde(rename = "length")]
    pub cable_length: Option<f32>,
    #[serde(rename = "worktime")]
    pub work_time: Option<i32>,
    #[serde(rename = "diameter")]
    pub chuck_diameter: Option<i32>,
}

/// Validate a stored drill, including its id. Used on the update path.
pub fn validate_drill(v: &mut Validator, drill: &Drill) {
    validate_id(v, drill.id);
    validate_attributes(v, &drill.attributes());
}

/// Validate a drill that has not been inserted yet and so has no id.
pub fn validate_new_drill(v: &mut Validator, drill: &Drill) {
    validate_attributes(v, &drill.attributes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Drill {
        Drill {
            id: 7,
            weight: 1.8,
            name: "Bosch GSB 13".to_string(),
            cable_length: 2.5,
            work_time: 10,
            chuck_diameter: 13,
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut drill = stored();
        drill.apply(UpdateDrill {
            weight: Some(2.2),
            work_time: Some(12),
            ..Default::default()
        });

        assert_eq!(drill.weight, 2.2);
        assert_eq!(drill.work_time, 12);
        assert_eq!(drill.name, "Bosch GSB 13");
        assert_eq!(drill.cable_length, 2.5);
        assert_eq!(drill.chuck_diameter, 13);
        assert_eq!(drill.id, 7);
    }

    #[test]
    fn update_dto_reads_external_field_names() {
        let input: UpdateDrill =
            serde_json::from_str(r#"{"length": 4.0, "diameter": 10}"#).unwrap();
        assert_eq!(input.cable_length, Some(4.0));
        assert_eq!(input.chuck_diameter, Some(10));
        assert!(input.weight.is_none());
        assert!(input.name.is_none());
        assert!(input.work_time.is_none());
    }

    #[test]
    fn create_dto_defaults_missing_fields() {
        let input: CreateDrill = serde_json::from_str(r#"{"name": "Hilti"}"#).unwrap();
        let drill = Drill::from(input);
        assert_eq!(drill.id, 0);
        assert_eq!(drill.name, "Hilti");
        assert_eq!(drill.work_time, 0);
    }

    #[test]
    fn drill_serializes_external_field_names() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Bosch GSB 13");
        assert_eq!(json["length"], 2.5);
        assert_eq!(json["worktime"], 10);
        assert_eq!(json["diameter"], 13);
        assert!(json.get("cable_length").is_none());
    }

    #[test]
    fn stored_drill_requires_positive_id() {
        let mut drill = stored();
        let mut v = Validator::new();
        validate_drill(&mut v, &drill);
        assert!(v.valid());

        drill.id = 0;
        let mut v = Validator::new();
        validate_drill(&mut v, &drill);
        assert_eq!(v.errors().len(), 1);
        assert!(v.errors().contains_key("id"));
    }

    #[test]
    fn overflowing_patch_values_fail_validation() {
        let input: UpdateDrill =
            serde_json::from_str(r#"{"weight": 1e39, "length": -1e39}"#).unwrap();
        let mut drill = stored();
        drill.apply(input);
        assert!(drill.weight.is_infinite());

        let mut v = Validator::new();
        validate_drill(&mut v, &drill);
        assert!(!v.valid());
        assert!(v.errors().contains_key("weight"));
        assert!(v.errors().contains_key("length"));
    }

    #[test]
    fn new_drill_skips_id_check() {
        let drill = Drill { id: 0, ..stored() };
        let mut v = Validator::new();
        validate_new_drill(&mut v, &drill);
        assert!(v.valid());
    }
}
