use serde::Serialize;

use crate::model::addendum::AddendumType;
use crate::model::vehicle::VehicleCategory;

/// Body of `POST /api/addendums`.
///
/// Optional fields are left out of the JSON entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddendumRequest {
    pub vehicle_id: String,
    pub vehicle_type: VehicleCategory,
    pub addendum_type: AddendumType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub effective_date: String,
}
