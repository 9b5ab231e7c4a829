use serde::{Deserialize, Deserializer, Serialize};

/// Classification of a vehicle, driving which listing and workflow applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Syrian,
    Foreign,
}

impl VehicleCategory {
    /// Both categories in the order plate searches prefer them.
    pub const PREFERENCE: [VehicleCategory; 2] = [VehicleCategory::Syrian, VehicleCategory::Foreign];

    /// Wire value used in query strings and request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Syrian => "syrian",
            VehicleCategory::Foreign => "foreign",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleCategory::Syrian => "سورية",
            VehicleCategory::Foreign => "أجنبية",
        }
    }

    /// Path of the listing page for this category.
    pub fn listing_route(self) -> &'static str {
        match self {
            VehicleCategory::Syrian => "/addendums/syrian",
            VehicleCategory::Foreign => "/addendums/foreign",
        }
    }

    /// Case-insensitive match on the wire value, ignoring surrounding whitespace.
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::PREFERENCE
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

/// Reads an optional category without failing the enclosing record.
///
/// Casing and padding are ignored. Null, non-string and unknown values
/// all come back as `None`, which leaves the category to inference.
pub fn lenient_category<'de, D>(deserializer: D) -> Result<Option<VehicleCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(VehicleCategory::from_value))
}

/// A vehicle record as returned by `GET /api/vehicles[/{id}]`.
///
/// The backend owns the schema; only the identifier is guaranteed, every
/// other field may be missing depending on the vehicle's category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub passport_number: Option<String>,
    /// Country code printed on the plate, only present for some records.
    #[serde(default)]
    pub plate_country: Option<String>,
    /// Explicit category, when the backend supplies a recognisable one.
    #[serde(default, deserialize_with = "lenient_category")]
    pub vehicle_type: Option<VehicleCategory>,
}

impl Vehicle {
    /// National id for Syrian owners, passport number otherwise.
    pub fn owner_document(&self) -> Option<&str> {
        self.national_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.passport_number.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Vehicle fields embedded in an addendum when the backend populates the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}
