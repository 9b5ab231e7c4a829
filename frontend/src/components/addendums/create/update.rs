//! Update function for the addendum creation form.
//!
//! A single `update` function in the Elm style: it receives the form state,
//! the `Context` and a `Msg`, mutates the state, spawns the async worker if
//! one is needed, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Typing an ObjectId-shaped identifier starts a direct lookup at once;
//!   any other edit drops the resolved vehicle and stales in-flight searches.
//! - Results from stale searches are discarded without re-rendering.
//! - A vehicle whose category fell back to the default rule is logged.
//! - Editing the vehicle or the type clears a previous submission error.
//! - Submit validates locally first; nothing reaches the network on failure.
//! - After a created response a toast is shown and the page redirects to
//!   the category listing after `REDIRECT_DELAY_MS`.

use yew::prelude::*;

use common::submission::{build_request, redirect_route, SubmissionDraft, SubmissionState, REDIRECT_DELAY_MS};

use crate::helpers::{navigate, now_iso, show_toast, ToastKind};

use super::helpers::{spawn_search, spawn_submit};
use super::messages::Msg;
use super::state::AddendumFormComponent;

const CREATED_MESSAGE: &str = "تم إنشاء الملحق بنجاح";

/// Central update function for the creation form.
///
/// Contract
/// - Mutates `component` according to `msg`.
/// - Async work (lookups, the POST, the redirect timer) reports back through
///   `ctx.link()` with a follow-up message.
/// - Returns `false` only when nothing visible changed: a stale search result,
///   an action ignored while locked, or the redirect itself.
pub fn update(
    component: &mut AddendumFormComponent,
    ctx: &Context<AddendumFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::VehicleInputChanged(value) => {
            component.form_error = None;
            component.submission.draft_edited();
            let eager = component.resolver.edit(&value);
            component.draft.vehicle_input = value;
            if let Some(request) = eager {
                spawn_search(ctx.link().clone(), component.api.clone(), request);
            }
            true
        }
        Msg::Search => {
            if component.is_locked() {
                return false;
            }
            match component.resolver.begin(&component.draft.vehicle_input) {
                Ok(request) => {
                    component.form_error = None;
                    spawn_search(ctx.link().clone(), component.api.clone(), request);
                }
                Err(err) => component.form_error = Some(err.user_message()),
            }
            true
        }
        Msg::SearchSettled { ticket, outcome } => {
            if !component.resolver.finish(ticket, outcome) {
                gloo_console::log!("discarded stale vehicle search", ticket as f64);
                return false;
            }
            let state = component.resolver.state();
            if let Some(message) = state.error_message() {
                gloo_console::warn!("vehicle resolution failed:", message.to_string());
            }
            if let Some(resolved) = state.resolved().filter(|r| r.category_is_assumed()) {
                gloo_console::warn!(
                    "vehicle has no category field, passport or plate country; assuming",
                    resolved.category.as_str(),
                    "for",
                    resolved.vehicle.id.clone()
                );
            }
            true
        }
        Msg::SetType(addendum_type) => {
            component.draft.addendum_type = addendum_type;
            component.form_error = None;
            component.submission.draft_edited();
            true
        }
        Msg::DescriptionChanged(value) => {
            component.draft.description = value;
            true
        }
        Msg::NotesChanged(value) => {
            component.draft.notes = value;
            true
        }
        Msg::AmountChanged(value) => {
            component.draft.amount = value;
            true
        }
        Msg::EffectiveDateChanged(value) => {
            component.draft.effective_date = value;
            true
        }
        Msg::Submit => {
            if component.is_locked() {
                return false;
            }
            match build_request(&component.draft, component.resolver.state(), &now_iso()) {
                Ok(body) => {
                    component.form_error = None;
                    component.submission = SubmissionState::Submitting;
                    spawn_submit(ctx.link().clone(), component.api.clone(), body);
                }
                Err(err) => component.form_error = Some(err.user_message()),
            }
            true
        }
        Msg::SubmitSettled { category, result } => {
            match result {
                Ok(message) => {
                    let message = message.unwrap_or_else(|| CREATED_MESSAGE.to_string());
                    show_toast(&message, ToastKind::Success);
                    component.submission = SubmissionState::Success {
                        message,
                        redirect_to: redirect_route(category),
                    };
                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        link.send_message(Msg::Redirect);
                    });
                }
                Err(err) => {
                    let message = err.user_message();
                    gloo_console::error!("addendum submission failed:", message.clone());
                    show_toast(&message, ToastKind::Error);
                    component.submission = SubmissionState::SubmitError(message);
                }
            }
            true
        }
        Msg::Redirect => {
            if let SubmissionState::Success { redirect_to, .. } = &component.submission {
                navigate(redirect_to);
            }
            false
        }
        Msg::Reset => {
            if component.is_locked() {
                return false;
            }
            component.draft = SubmissionDraft::default();
            component.resolver.reset();
            component.submission = SubmissionState::Editing;
            component.form_error = None;
            true
        }
    }
}
