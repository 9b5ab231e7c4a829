//! Addendum records as listed by `GET /api/addendums`.
//!
//! Addendums are owned by the backend; the console only reads them here and
//! creates new ones through [`crate::requests::CreateAddendumRequest`].

use serde::{Deserialize, Serialize};

use super::vehicle::{lenient_category, VehicleCategory, VehicleSummary};

/// The eight kinds of amendment the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddendumType {
    Copy,
    InfoUpdate,
    Financial,
    StampPayment,
    Correction,
    AdminCancellation,
    FullCancellation,
    RevokeAdminCancellation,
}

impl AddendumType {
    /// Every type, in the order the selects list them.
    pub const ALL: [AddendumType; 8] = [
        AddendumType::Copy,
        AddendumType::InfoUpdate,
        AddendumType::Financial,
        AddendumType::StampPayment,
        AddendumType::Correction,
        AddendumType::AdminCancellation,
        AddendumType::FullCancellation,
        AddendumType::RevokeAdminCancellation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AddendumType::Copy => "copy",
            AddendumType::InfoUpdate => "info_update",
            AddendumType::Financial => "financial",
            AddendumType::StampPayment => "stamp_payment",
            AddendumType::Correction => "correction",
            AddendumType::AdminCancellation => "admin_cancellation",
            AddendumType::FullCancellation => "full_cancellation",
            AddendumType::RevokeAdminCancellation => "revoke_admin_cancellation",
        }
    }

    /// Parses a select value. Unknown values, including `"all"`, give `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            AddendumType::Copy => "نسخة طبق الأصل",
            AddendumType::InfoUpdate => "تحديث معلومات",
            AddendumType::Financial => "ملحق مالي",
            AddendumType::StampPayment => "دفع رسم الطابع",
            AddendumType::Correction => "تصحيح",
            AddendumType::AdminCancellation => "إلغاء إداري",
            AddendumType::FullCancellation => "إلغاء كامل",
            AddendumType::RevokeAdminCancellation => "إلغاء الإلغاء الإداري",
        }
    }

    /// Only financial addendums expose the amount input.
    pub fn takes_amount(self) -> bool {
        self == AddendumType::Financial
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddendumStatus {
    Active,
    Cancelled,
    Revoked,
}

impl AddendumStatus {
    pub const ALL: [AddendumStatus; 3] = [
        AddendumStatus::Active,
        AddendumStatus::Cancelled,
        AddendumStatus::Revoked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AddendumStatus::Active => "active",
            AddendumStatus::Cancelled => "cancelled",
            AddendumStatus::Revoked => "revoked",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_active(self) -> bool {
        self == AddendumStatus::Active
    }

    /// Cancelled and revoked share a label and badge; they stay distinct values.
    pub fn label(self) -> &'static str {
        if self.is_active() { "ساري" } else { "ملغى" }
    }

    pub fn badge_class(self) -> &'static str {
        if self.is_active() { "badge badge-active" } else { "badge badge-cancelled" }
    }
}

/// Vehicle reference on an addendum: either populated or a bare identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleRef {
    Id(String),
    Embedded(VehicleSummary),
}

impl VehicleRef {
    /// Embedded vehicle fields; `None` when the backend sent only an identifier.
    pub fn summary(&self) -> Option<&VehicleSummary> {
        match self {
            VehicleRef::Embedded(summary) => Some(summary),
            VehicleRef::Id(_) => None,
        }
    }
}

/// Creator or issuing center reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Named {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl Reference {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Reference::Named { name, .. } => name.as_deref(),
            Reference::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Addendum {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub vehicle: Option<VehicleRef>,
    #[serde(default, deserialize_with = "lenient_category")]
    pub vehicle_type: Option<VehicleCategory>,
    pub addendum_type: AddendumType,
    #[serde(default)]
    pub addendum_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub effective_date: Option<String>,
    pub status: AddendumStatus,
    #[serde(default)]
    pub created_by: Option<Reference>,
    #[serde(default)]
    pub issuing_center: Option<Reference>,
}

impl Addendum {
    pub fn vehicle_summary(&self) -> Option<&VehicleSummary> {
        self.vehicle.as_ref().and_then(VehicleRef::summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_populated_and_bare_vehicle_references() {
        let populated: Addendum = serde_json::from_str(
            r#"{"_id":"a1","vehicle":{"_id":"v1","plateNumber":"123","ownerName":"Ali"},
                "addendumType":"financial","addendumNumber":"ADD-1","amount":2500,
                "status":"active","issuingCenter":{"_id":"c1","name":"دمشق"}}"#,
        )
        .unwrap();
        assert_eq!(populated.vehicle_summary().and_then(|v| v.plate_number.as_deref()), Some("123"));
        assert_eq!(populated.amount, Some(2500.0));
        assert_eq!(
            populated.issuing_center.as_ref().and_then(Reference::display_name),
            Some("دمشق")
        );

        let bare: Addendum = serde_json::from_str(
            r#"{"_id":"a2","vehicle":"64b7f0c2a1b2c3d4e5f60718","addendumType":"copy","status":"revoked"}"#,
        )
        .unwrap();
        assert!(bare.vehicle_summary().is_none());
        assert_eq!(bare.vehicle, Some(VehicleRef::Id("64b7f0c2a1b2c3d4e5f60718".into())));
    }

    #[test]
    fn plain_id_and_loose_category_are_read() {
        let addendum: Addendum = serde_json::from_str(
            r#"{"id":"a3","vehicle":{"id":"v3","plateNumber":"9"},"vehicleType":"Foreign",
                "addendumType":"correction","status":"active"}"#,
        )
        .unwrap();
        assert_eq!(addendum.id, "a3");
        assert_eq!(addendum.vehicle_summary().and_then(|v| v.id.as_deref()), Some("v3"));
        assert_eq!(addendum.vehicle_type, Some(VehicleCategory::Foreign));
    }

    #[test]
    fn type_values_match_wire_names() {
        for addendum_type in AddendumType::ALL {
            let json = serde_json::to_string(&addendum_type).unwrap();
            assert_eq!(json, format!("\"{}\"", addendum_type.as_str()));
            assert_eq!(AddendumType::from_value(addendum_type.as_str()), Some(addendum_type));
        }
        assert_eq!(AddendumType::from_value("all"), None);
    }

    #[test]
    fn cancelled_and_revoked_render_alike_but_differ() {
        assert_ne!(AddendumStatus::Cancelled, AddendumStatus::Revoked);
        assert_eq!(AddendumStatus::Cancelled.label(), AddendumStatus::Revoked.label());
        assert_eq!(
            AddendumStatus::Cancelled.badge_class(),
            AddendumStatus::Revoked.badge_class()
        );
        assert_ne!(AddendumStatus::Active.label(), AddendumStatus::Revoked.label());
    }

    #[test]
    fn only_financial_takes_amount() {
        let with_amount: Vec<_> = AddendumType::ALL.into_iter().filter(|t| t.takes_amount()).collect();
        assert_eq!(with_amount, vec![AddendumType::Financial]);
    }
}
