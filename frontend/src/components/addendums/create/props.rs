use yew::prelude::*;

/// Properties for the `AddendumFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct AddendumFormProps {
    /// Identifier to prefill, taken from the page's `?vehicleId=` parameter.
    ///
    /// ObjectId-shaped values are resolved as soon as the form is first
    /// rendered; anything else is only placed in the input.
    #[prop_or_default]
    pub initial_vehicle_id: Option<String>,
}
