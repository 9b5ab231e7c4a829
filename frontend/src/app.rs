use common::model::vehicle::VehicleCategory;
use yew::{html, Component, Context, Html};

use crate::components::addendums::create::AddendumFormComponent;
use crate::components::addendums::list::AddendumListComponent;
use crate::helpers::{current_path, query_param};

/// Query parameter the vehicle pages use to open the form for one vehicle.
const VEHICLE_ID_PARAM: &str = "vehicleId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Create,
    List(VehicleCategory),
}

/// Page shown for a path; unknown paths land on the Syrian listing.
fn page_for_path(path: &str) -> Page {
    match path.trim_end_matches('/') {
        "/addendums/new" => Page::Create,
        "/addendums/foreign" => Page::List(VehicleCategory::Foreign),
        _ => Page::List(VehicleCategory::Syrian),
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match page_for_path(&current_path()) {
            Page::Create => html! {
                <AddendumFormComponent initial_vehicle_id={query_param(VEHICLE_ID_PARAM)} />
            },
            Page::List(category) => html! {
                <AddendumListComponent {category} />
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(page_for_path("/addendums/new"), Page::Create);
        assert_eq!(page_for_path("/addendums/foreign/"), Page::List(VehicleCategory::Foreign));
        assert_eq!(page_for_path("/addendums/syrian"), Page::List(VehicleCategory::Syrian));
        assert_eq!(page_for_path("/"), Page::List(VehicleCategory::Syrian));
    }

    #[test]
    fn listing_routes_lead_back_to_their_page() {
        for category in VehicleCategory::PREFERENCE {
            assert_eq!(page_for_path(category.listing_route()), Page::List(category));
        }
    }
}
