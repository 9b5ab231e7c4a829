//! Addendum listing page for one vehicle category.
//!
//! Fetches the category's addendums once on first render, then searches,
//! filters and paginates in memory.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api::{self, RequestContext};
pub use messages::Msg;
pub use props::AddendumListProps;
pub use state::AddendumListComponent;

impl Component for AddendumListComponent {
    type Message = Msg;
    type Properties = AddendumListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddendumListComponent::new(RequestContext::from_browser())
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
            ctx.link().send_message(Msg::Load);
        }
    }
}

fn spawn_load(ctx: &Context<AddendumListComponent>, api: RequestContext) {
    let link = ctx.link().clone();
    let category = ctx.props().category;
    spawn_local(async move {
        let result = api::list_addendums(&api, category).await;
        link.send_message(Msg::Loaded(result));
    });
}
