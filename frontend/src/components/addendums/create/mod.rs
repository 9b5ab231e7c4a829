//! Addendum creation page.
//!
//! Resolves the typed vehicle identifier (direct lookup for ObjectIds, dual
//! category plate search otherwise), then submits the addendum and redirects
//! to the matching listing.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::RequestContext;
pub use messages::Msg;
pub use props::AddendumFormProps;
pub use state::AddendumFormComponent;

impl Component for AddendumFormComponent {
    type Message = Msg;
    type Properties = AddendumFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddendumFormComponent::new(RequestContext::from_browser())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            if let Some(vehicle_id) = &ctx.props().initial_vehicle_id {
                ctx.link().send_message(Msg::VehicleInputChanged(vehicle_id.clone()));
            }
        }
    }
}
