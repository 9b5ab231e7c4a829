//! Vehicle category inference.
//!
//! Every addendum is submitted with an explicit category even when the
//! vehicle record does not carry one. Precedence:
//!
//! 1. the record's own `vehicleType`;
//! 2. a passport number, or a plate registered outside Syria, means `foreign`;
//! 3. otherwise `syrian`.
//!
//! The final default is a placeholder policy kept for compatibility with the
//! existing backend data; records that hit it are reported by
//! [`InferenceSource::Default`] so callers can log them.

use crate::model::vehicle::{Vehicle, VehicleCategory};

const SYRIA_PLATE_CODES: [&str; 4] = ["sy", "syr", "سوريا", "سورية"];

/// Which rule decided the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceSource {
    Explicit,
    Passport,
    PlateCountry,
    /// Found by a search already scoped to one category.
    SearchCategory,
    Default,
}

pub fn infer_category(vehicle: &Vehicle) -> VehicleCategory {
    infer_category_with_source(vehicle).0
}

pub fn infer_category_with_source(vehicle: &Vehicle) -> (VehicleCategory, InferenceSource) {
    if let Some(explicit) = vehicle.vehicle_type {
        return (explicit, InferenceSource::Explicit);
    }
    if has_text(vehicle.passport_number.as_deref()) {
        return (VehicleCategory::Foreign, InferenceSource::Passport);
    }
    if let Some(country) = vehicle.plate_country.as_deref().filter(|c| !c.trim().is_empty()) {
        if !is_syria_code(country) {
            return (VehicleCategory::Foreign, InferenceSource::PlateCountry);
        }
    }
    (VehicleCategory::Syrian, InferenceSource::Default)
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn is_syria_code(country: &str) -> bool {
    let country = country.trim().to_lowercase();
    SYRIA_PLATE_CODES.contains(&country.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle {
            id: "64b7f0c2a1b2c3d4e5f60718".into(),
            plate_number: Some("123456".into()),
            owner_name: None,
            national_id: None,
            passport_number: None,
            plate_country: None,
            vehicle_type: None,
        }
    }

    #[test]
    fn explicit_field_wins_over_heuristics() {
        let v = Vehicle {
            vehicle_type: Some(VehicleCategory::Syrian),
            passport_number: Some("P123".into()),
            plate_country: Some("LB".into()),
            ..vehicle()
        };
        assert_eq!(infer_category_with_source(&v), (VehicleCategory::Syrian, InferenceSource::Explicit));
    }

    #[test]
    fn passport_implies_foreign() {
        let v = Vehicle { passport_number: Some("P123".into()), ..vehicle() };
        assert_eq!(infer_category_with_source(&v), (VehicleCategory::Foreign, InferenceSource::Passport));
    }

    #[test]
    fn blank_passport_is_ignored() {
        let v = Vehicle { passport_number: Some("  ".into()), ..vehicle() };
        assert_eq!(infer_category(&v), VehicleCategory::Syrian);
    }

    #[test]
    fn non_syrian_plate_implies_foreign() {
        let v = Vehicle { plate_country: Some("JO".into()), ..vehicle() };
        assert_eq!(
            infer_category_with_source(&v),
            (VehicleCategory::Foreign, InferenceSource::PlateCountry)
        );
        let v = Vehicle { plate_country: Some("SY".into()), ..vehicle() };
        assert_eq!(infer_category(&v), VehicleCategory::Syrian);
        let v = Vehicle { plate_country: Some("سوريا".into()), ..vehicle() };
        assert_eq!(infer_category(&v), VehicleCategory::Syrian);
    }

    #[test]
    fn defaults_to_syrian_without_discriminating_fields() {
        assert_eq!(
            infer_category_with_source(&vehicle()),
            (VehicleCategory::Syrian, InferenceSource::Default)
        );
    }
}
