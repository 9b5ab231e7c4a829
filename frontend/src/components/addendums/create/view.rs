//! View rendering for the addendum creation form.
//!
//! The page reads top to bottom: vehicle lookup, resolved vehicle card,
//! addendum fields, then the action bar. The amount input only appears for
//! financial addendums; a value typed earlier is still submitted.
//!
//! Key behaviors
//! - Every input is disabled while the submission is locked.
//! - The vehicle card flags a category that came from the default rule, so
//!   the user can check it before submitting.
//! - Inline validation errors take precedence over the submission banner.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::addendum::AddendumType;
use common::resolution::{ResolutionState, ResolvedVehicle};
use common::submission::{can_submit, SubmissionState};

use super::messages::Msg;
use super::state::AddendumFormComponent;

/// Renders the whole form from `component`; no state is read from the DOM.
pub fn view(component: &AddendumFormComponent, ctx: &Context<AddendumFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="addendum-form" dir="rtl">
            <h2>{"إضافة ملحق جديد"}</h2>
            { build_vehicle_section(component, link) }
            { build_addendum_fields(component, link) }
            { build_feedback(component) }
            { build_actions(component, link) }
        </div>
    }
}

fn build_vehicle_section(component: &AddendumFormComponent, link: &Scope<AddendumFormComponent>) -> Html {
    let state = component.resolver.state();
    let searching = state.is_searching();

    html! {
        <section class="form-section">
            <label for="vehicle-input">{"رقم المركبة أو رقم اللوحة"}</label>
            <div class="input-row">
                <input
                    id="vehicle-input"
                    type="text"
                    value={component.draft.vehicle_input.clone()}
                    placeholder="معرّف المركبة (24 خانة) أو رقم اللوحة"
                    disabled={component.is_locked()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::VehicleInputChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| {
                        if e.key() == "Enter" {
                            e.prevent_default();
                            vec![Msg::Search]
                        } else {
                            vec![]
                        }
                    })}
                />
                <button
                    class="btn btn-secondary"
                    disabled={searching || component.is_locked()}
                    onclick={link.callback(|_| Msg::Search)}
                >
                    { if searching { "جارٍ البحث..." } else { "بحث" } }
                </button>
            </div>
            { resolution_status(state) }
        </section>
    }
}

fn resolution_status(state: &ResolutionState) -> Html {
    match state {
        ResolutionState::Idle => html! {},
        ResolutionState::Searching => html! {
            <div class="status status-pending">{"جارٍ البحث عن المركبة..."}</div>
        },
        ResolutionState::Resolved(resolved) => vehicle_card(resolved),
        ResolutionState::NotFound(message) | ResolutionState::SearchError(message) => html! {
            <div class="status status-error">{ message.clone() }</div>
        },
    }
}

/// Summary of the resolved vehicle.
///
/// # Arguments
/// * `resolved` - The confirmed vehicle and the category it will be submitted with.
///
/// # Returns
/// A definition list with plate, owner, document and category, plus a warning
/// line when the category was assumed rather than read from the record.
fn vehicle_card(resolved: &ResolvedVehicle) -> Html {
    let vehicle = &resolved.vehicle;
    let text = |value: Option<&str>| value.unwrap_or("—").to_string();

    html! {
        <div class="vehicle-card">
            <div class="status status-ok">{"تم العثور على المركبة"}</div>
            <dl>
                <dt>{"رقم اللوحة"}</dt>
                <dd>{ text(vehicle.plate_number.as_deref()) }</dd>
                <dt>{"اسم المالك"}</dt>
                <dd>{ text(vehicle.owner_name.as_deref()) }</dd>
                <dt>{"الرقم الوطني / رقم الجواز"}</dt>
                <dd>{ text(vehicle.owner_document()) }</dd>
                <dt>{"فئة المركبة"}</dt>
                <dd>{ resolved.category.label() }</dd>
            </dl>
            {
                if resolved.category_is_assumed() {
                    html! {
                        <div class="status status-warning">
                            { format!(
                                "لم تحدد فئة المركبة في سجلها، وتم اعتبارها {}. يرجى التحقق قبل الحفظ.",
                                resolved.category.label()
                            ) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_addendum_fields(component: &AddendumFormComponent, link: &Scope<AddendumFormComponent>) -> Html {
    let draft = &component.draft;
    let locked = component.is_locked();

    html! {
        <section class="form-section">
            <label for="addendum-type">{"نوع الملحق"}</label>
            <select
                id="addendum-type"
                disabled={locked}
                onchange={link.callback(|e: Event| {
                    Msg::SetType(AddendumType::from_value(&e.target_unchecked_into::<HtmlSelectElement>().value()))
                })}
            >
                <option value="" selected={draft.addendum_type.is_none()}>{"اختر نوع الملحق"}</option>
                { for AddendumType::ALL.iter().map(|t| html! {
                    <option value={t.as_str()} selected={draft.addendum_type == Some(*t)}>{ t.label() }</option>
                }) }
            </select>

            {
                if draft.shows_amount() {
                    html! {
                        <>
                            <label for="amount">{"المبلغ"}</label>
                            <input
                                id="amount"
                                type="text"
                                inputmode="decimal"
                                value={draft.amount.clone()}
                                disabled={locked}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::AmountChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                                })}
                            />
                        </>
                    }
                } else {
                    html! {}
                }
            }

            <label for="effective-date">{"تاريخ السريان"}</label>
            <input
                id="effective-date"
                type="date"
                value={draft.effective_date.clone()}
                disabled={locked}
                oninput={link.callback(|e: InputEvent| {
                    Msg::EffectiveDateChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />

            <label for="description">{"الوصف"}</label>
            <textarea
                id="description"
                rows={3}
                value={draft.description.clone()}
                disabled={locked}
                oninput={link.callback(|e: InputEvent| {
                    Msg::DescriptionChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />

            <label for="notes">{"ملاحظات"}</label>
            <textarea
                id="notes"
                rows={2}
                value={draft.notes.clone()}
                disabled={locked}
                oninput={link.callback(|e: InputEvent| {
                    Msg::NotesChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </section>
    }
}

/// Inline validation error, or the outcome of the last submission.
fn build_feedback(component: &AddendumFormComponent) -> Html {
    if let Some(error) = &component.form_error {
        return html! { <div class="alert alert-error">{ error.clone() }</div> };
    }
    match &component.submission {
        SubmissionState::SubmitError(message) => html! {
            <div class="alert alert-error">{ message.clone() }</div>
        },
        SubmissionState::Success { message, .. } => html! {
            <div class="alert alert-success">
                { message.clone() }
                <span class="hint">{" جارٍ التحويل إلى قائمة الملاحق..."}</span>
            </div>
        },
        _ => html! {},
    }
}

/// Submit and reset buttons.
///
/// Submit stays disabled until a vehicle is resolved and a type is chosen.
fn build_actions(component: &AddendumFormComponent, link: &Scope<AddendumFormComponent>) -> Html {
    let disabled = !can_submit(component.resolver.state(), component.draft.addendum_type)
        || component.is_locked();

    html! {
        <div class="form-actions">
            <button
                class="btn btn-primary"
                disabled={disabled}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if component.is_submitting() { "جارٍ الحفظ..." } else { "إنشاء الملحق" } }
            </button>
            <button
                class="btn btn-link"
                disabled={component.is_locked()}
                onclick={link.callback(|_| Msg::Reset)}
            >
                {"إعادة تعيين"}
            </button>
        </div>
    }
}
