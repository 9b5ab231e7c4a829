use common::model::vehicle::VehicleCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AddendumListProps {
    /// Category whose addendums this page lists.
    pub category: VehicleCategory,
}
