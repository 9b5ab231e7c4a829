//! Update function for the addendum listing.
//!
//! Key behaviors
//! - One fetch per page visit; a second `Load` while loading is ignored.
//! - A failed fetch keeps the page usable and shows the error inline and as a toast.
//! - Search, type and status changes reset the page to 1.
//! - Page navigation is clamped to the current page count and skips the
//!   re-render when the page does not change.

use yew::prelude::*;

use common::listing::{StatusFilter, TypeFilter};

use crate::helpers::{show_toast, ToastKind};

use super::messages::Msg;
use super::spawn_load;
use super::state::AddendumListComponent;

/// Central update function for the listing.
///
/// Contract
/// - Mutates `component` according to `msg`; filtering and paging are not
///   cached, `listing()` recomputes them for the view.
/// - `Load` spawns the fetch, which answers with `Loaded`.
/// - Returns `false` when the message changes nothing.
pub fn update(
    component: &mut AddendumListComponent,
    ctx: &Context<AddendumListComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            if component.loading {
                return false;
            }
            component.loading = true;
            component.error = None;
            spawn_load(ctx, component.api.clone());
            true
        }
        Msg::Loaded(Ok(addendums)) => {
            component.loading = false;
            component.addendums = addendums;
            component.page = 1;
            true
        }
        Msg::Loaded(Err(err)) => {
            let message = err.user_message();
            gloo_console::error!("failed to load addendums:", message.clone());
            show_toast(&message, ToastKind::Error);
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::SearchChanged(search) => {
            component.search = search;
            component.page = 1;
            true
        }
        Msg::TypeFilterChanged(value) => {
            component.type_filter = TypeFilter::from_value(&value);
            component.page = 1;
            true
        }
        Msg::StatusFilterChanged(value) => {
            component.status_filter = StatusFilter::from_value(&value);
            component.page = 1;
            true
        }
        Msg::GoToPage(page) => {
            let pager = component.listing().pager;
            let target = page.clamp(1, pager.total_pages);
            if target == component.page {
                return false;
            }
            component.page = target;
            true
        }
    }
}
