//! Async workers for the creation form.
//!
//! Each worker runs on `spawn_local` and reports back with a single message,
//! so `update` stays synchronous.

use yew::html::Scope;
use yew::platform::spawn_local;

use common::identifier::LookupKey;
use common::requests::CreateAddendumRequest;
use common::resolution::{resolve_direct, search_plate, SearchRequest};
use common::submission::classify_response;

use crate::api::{self, RequestContext};

use super::messages::Msg;
use super::state::AddendumFormComponent;

/// Runs one resolution attempt and reports it as `Msg::SearchSettled`.
///
/// # Arguments
/// * `link` - Scope of the form, used to deliver the outcome.
/// * `ctx` - Request context (base URL and token) for the lookups.
/// * `request` - The lookup key and the ticket it was issued under.
///
/// Plate keys go through `search_plate`, which issues one search per category
/// at once and waits for all of them before choosing.
pub fn spawn_search(link: Scope<AddendumFormComponent>, ctx: RequestContext, request: SearchRequest) {
    spawn_local(async move {
        let outcome = match &request.key {
            LookupKey::Direct(id) => resolve_direct(id, api::fetch_vehicle(&ctx, id).await),
            LookupKey::Plate(query) => {
                let ctx = &ctx;
                let query = query.as_str();
                search_plate(query, move |category| api::search_vehicles(ctx, category, query)).await
            }
        };
        link.send_message(Msg::SearchSettled {
            ticket: request.ticket,
            outcome,
        });
    });
}

pub fn spawn_submit(
    link: Scope<AddendumFormComponent>,
    ctx: RequestContext,
    body: CreateAddendumRequest,
) {
    let category = body.vehicle_type;
    spawn_local(async move {
        let result = match api::create_addendum(&ctx, &body).await {
            Ok(raw) => {
                let outcome = classify_response(raw.content_type.as_deref(), &raw.body);
                gloo_console::log!("addendum submission answered with status", raw.status);
                outcome.into_result()
            }
            Err(err) => Err(err),
        };
        link.send_message(Msg::SubmitSettled { category, result });
    });
}
