//! Drill field constraints.
//!
//! The row model lives in the db crate; the rules live here so they can be
//! tested without a database.

use crate::types::DbId;
use crate::validator::Validator;

pub const ENTITY: &str = "Drill";

pub const MAX_NAME_BYTES: usize = 20;
/// Meters.
pub const MAX_CABLE_LENGTH: f32 = 10.0;
pub const MAX_WORK_TIME: i32 = 20;
/// Millimeters, exclusive.
pub const MIN_CHUCK_DIAMETER: i32 = 5;

/// Values accepted by the `sort` list parameter.
pub const SORT_SAFELIST: &[&str] = &["id", "weight", "name", "-id", "-weight", "-name"];

/// The user-editable part of a drill, borrowed for validation.
#[derive(Debug, Clone, Copy)]
pub struct DrillAttributes<'a> {
    pub weight: f32,
    pub name: &'a str,
    pub cable_length: f32,
    pub work_time: i32,
    pub chuck_diameter: i32,
}

pub fn validate_id(v: &mut Validator, id: DbId) {
    v.check(id > 0, "id", "must be greater than zero");
}

/// Field keys match the JSON names clients send.
pub fn validate_attributes(v: &mut Validator, attrs: &DrillAttributes<'_>) {
    v.check(attrs.weight > 0.0, "weight", "must be greater than zero");
    v.check(attrs.weight.is_finite(), "weight", "must be a finite number");

    v.check(!attrs.name.is_empty(), "name", "must be provided");
    v.check(
        attrs.name.len() <= MAX_NAME_BYTES,
        "name",
        "must not be more than 20 bytes long",
    );

    v.check(
        attrs.cable_length <= MAX_CABLE_LENGTH,
        "length",
        "must not be more than 10 meters",
    );
    v.check(
        attrs.cable_length.is_finite(),
        "length",
        "must be a finite number",
    );

    v.check(attrs.work_time > 0, "worktime", "must be greater than zero");
    v.check(
        attrs.work_time <= MAX_WORK_TIME,
        "worktime",
        "must not be more than 20",
    );

    v.check(
        attrs.chuck_diameter > MIN_CHUCK_DIAMETER,
        "diameter",
        "must be greater than 5 mm",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good() -> DrillAttributes<'static> {
        DrillAttributes {
            weight: 2.4,
            name: "Makita HP457",
            cable_length: 3.0,
            work_time: 15,
            chuck_diameter: 13,
        }
    }

    fn check(attrs: DrillAttributes<'_>) -> Validator {
        let mut v = Validator::new();
        validate_attributes(&mut v, &attrs);
        v
    }

    #[test]
    fn well_formed_attributes_are_valid() {
        assert!(check(good()).valid());
    }

    #[test]
    fn boundaries_are_inclusive_where_expected() {
        let attrs = DrillAttributes {
            name: "abcdefghijklmnopqrst",
            cable_length: MAX_CABLE_LENGTH,
            work_time: MAX_WORK_TIME,
            chuck_diameter: MIN_CHUCK_DIAMETER + 1,
            ..good()
        };
        assert!(check(attrs).valid());
    }

    #[test]
    fn weight_must_be_positive() {
        for weight in [0.0, -1.5, f32::NAN] {
            let v = check(DrillAttributes { weight, ..good() });
            assert!(v.errors().contains_key("weight"), "weight {weight} accepted");
        }
    }

    #[test]
    fn name_must_be_present_and_short() {
        let v = check(DrillAttributes { name: "", ..good() });
        assert_eq!(v.errors()["name"], "must be provided");

        let v = check(DrillAttributes {
            name: "abcdefghijklmnopqrstu",
            ..good()
        });
        assert_eq!(v.errors()["name"], "must not be more than 20 bytes long");
    }

    #[test]
    fn name_length_counts_bytes_not_chars() {
        // 10 chars, 20 bytes: allowed. 11 chars, 22 bytes: rejected.
        assert!(check(DrillAttributes { name: "ääääääääää", ..good() }).valid());
        let v = check(DrillAttributes {
            name: "äääääääääää",
            ..good()
        });
        assert!(v.errors().contains_key("name"));
    }

    #[test]
    fn cable_length_capped_at_ten_meters() {
        let v = check(DrillAttributes {
            cable_length: 10.01,
            ..good()
        });
        assert_eq!(v.errors()["length"], "must not be more than 10 meters");
    }

    #[test]
    fn infinite_weight_and_length_are_rejected() {
        let v = check(DrillAttributes {
            weight: f32::INFINITY,
            cable_length: f32::NEG_INFINITY,
            ..good()
        });
        assert_eq!(v.errors()["weight"], "must be a finite number");
        assert_eq!(v.errors()["length"], "must be a finite number");

        let v = check(DrillAttributes {
            cable_length: f32::NAN,
            ..good()
        });
        assert!(v.errors().contains_key("length"));
    }

    #[test]
    fn work_time_within_range() {
        let v = check(DrillAttributes { work_time: 0, ..good() });
        assert_eq!(v.errors()["worktime"], "must be greater than zero");

        let v = check(DrillAttributes { work_time: 21, ..good() });
        assert_eq!(v.errors()["worktime"], "must not be more than 20");
    }

    #[test]
    fn chuck_diameter_above_five() {
        let v = check(DrillAttributes {
            chuck_diameter: 5,
            ..good()
        });
        assert_eq!(v.errors()["diameter"], "must be greater than 5 mm");
    }

    #[test]
    fn every_field_reported_at_once() {
        let v = check(DrillAttributes {
            weight: 0.0,
            name: "",
            cable_length: 11.0,
            work_time: 0,
            chuck_diameter: 0,
        });
        let fields: Vec<&str> = v.errors().keys().map(String::as_str).collect();
        assert_eq!(fields, ["diameter", "length", "name", "weight", "worktime"]);
    }

    #[test]
    fn id_must_be_positive() {
        let mut v = Validator::new();
        validate_id(&mut v, 0);
        assert_eq!(v.errors()["id"], "must be greater than zero");

        let mut v = Validator::new();
        validate_id(&mut v, 1);
        assert!(v.valid());
    }

    #[test]
    fn safelist_has_ascending_and_descending_forms() {
        for column in ["id", "weight", "name"] {
            assert!(SORT_SAFELIST.contains(&column));
            assert!(SORT_SAFELIST.contains(&format!("-{column}").as_str()));
        }
    }
}
