//! View rendering for the addendum listing.
//!
//! Layout: header with the create button, summary counters, the filter bar,
//! the table for the current page and the pager. Cancelled and revoked rows
//! share one badge; the status filter still offers them separately.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::listing::{ListingSummary, Pager, ALL};
use common::model::addendum::{Addendum, AddendumStatus, AddendumType, Reference};

use crate::helpers::{format_amount, format_date};

use super::messages::Msg;
use super::state::AddendumListComponent;

/// Page the "new addendum" button leads to.
const CREATE_ROUTE: &str = "/addendums/new";

/// Renders the listing for the category given in the props.
pub fn view(component: &AddendumListComponent, ctx: &Context<AddendumListComponent>) -> Html {
    let link = ctx.link();
    let category = ctx.props().category;
    let listing = component.listing();

    html! {
        <div class="addendum-list" dir="rtl">
            <div class="page-header">
                <h2>{ format!("ملاحق المركبات {}", category.label()) }</h2>
                <a class="btn btn-primary" href={CREATE_ROUTE}>{"إضافة ملحق"}</a>
            </div>
            { build_summary(&listing.summary) }
            { build_filters(component, link) }
            {
                if component.loading {
                    html! { <div class="status status-pending">{"جارٍ تحميل الملاحق..."}</div> }
                } else if let Some(error) = &component.error {
                    html! {
                        <div class="alert alert-error">
                            { error.clone() }
                            <button class="btn btn-link" onclick={link.callback(|_| Msg::Load)}>
                                {"إعادة المحاولة"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            { build_table(&listing.rows) }
                            { build_pagination(&listing.pager, link) }
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_summary(summary: &ListingSummary) -> Html {
    html! {
        <div class="summary-cards">
            <div class="summary-card">
                <span class="summary-label">{"إجمالي الملاحق"}</span>
                <span class="summary-value">{ summary.total }</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"الملاحق السارية"}</span>
                <span class="summary-value">{ summary.active }</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"نتائج التصفية"}</span>
                <span class="summary-value">{ summary.filtered }</span>
            </div>
        </div>
    }
}

fn build_filters(component: &AddendumListComponent, link: &Scope<AddendumListComponent>) -> Html {
    let type_value = component.type_filter.value();
    let status_value = component.status_filter.value();

    html! {
        <div class="filters">
            <input
                type="search"
                placeholder="بحث برقم اللوحة أو اسم المالك أو رقم الملحق أو الوصف"
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SearchChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select
                onchange={link.callback(|e: Event| {
                    Msg::TypeFilterChanged(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value={ALL} selected={type_value == ALL}>{"كل الأنواع"}</option>
                { for AddendumType::ALL.iter().map(|t| html! {
                    <option value={t.as_str()} selected={type_value == t.as_str()}>{ t.label() }</option>
                }) }
            </select>
            <select
                onchange={link.callback(|e: Event| {
                    Msg::StatusFilterChanged(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value={ALL} selected={status_value == ALL}>{"كل الحالات"}</option>
                { for AddendumStatus::ALL.iter().map(|s| html! {
                    <option value={s.as_str()} selected={status_value == s.as_str()}>{ status_option_label(*s) }</option>
                }) }
            </select>
        </div>
    }
}

/// Filter options must tell cancelled and revoked apart even though the
/// table renders them alike.
fn status_option_label(status: AddendumStatus) -> &'static str {
    match status {
        AddendumStatus::Active => "ساري",
        AddendumStatus::Cancelled => "ملغى",
        AddendumStatus::Revoked => "مسحوب",
    }
}

/// Table of the current page, or an empty-state line when nothing matches.
fn build_table(rows: &[&Addendum]) -> Html {
    if rows.is_empty() {
        return html! { <div class="empty-state">{"لا توجد ملاحق مطابقة"}</div> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"رقم الملحق"}</th>
                    <th>{"رقم اللوحة"}</th>
                    <th>{"اسم المالك"}</th>
                    <th>{"النوع"}</th>
                    <th>{"المبلغ"}</th>
                    <th>{"تاريخ الإصدار"}</th>
                    <th>{"تاريخ السريان"}</th>
                    <th>{"مركز الإصدار"}</th>
                    <th>{"الحالة"}</th>
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|addendum| build_row(addendum)) }
            </tbody>
        </table>
    }
}

fn build_row(addendum: &Addendum) -> Html {
    let vehicle = addendum.vehicle_summary();
    let or_dash = |value: Option<&str>| value.unwrap_or("—").to_string();

    html! {
        <tr key={addendum.id.clone()}>
            <td>{ or_dash(addendum.addendum_number.as_deref()) }</td>
            <td>{ or_dash(vehicle.and_then(|v| v.plate_number.as_deref())) }</td>
            <td>{ or_dash(vehicle.and_then(|v| v.owner_name.as_deref())) }</td>
            <td>{ addendum.addendum_type.label() }</td>
            <td>{ format_amount(addendum.amount) }</td>
            <td>{ format_date(addendum.issue_date.as_deref()) }</td>
            <td>{ format_date(addendum.effective_date.as_deref()) }</td>
            <td>{ or_dash(addendum.issuing_center.as_ref().and_then(Reference::display_name)) }</td>
            <td>
                <span class={addendum.status.badge_class()}>{ addendum.status.label() }</span>
            </td>
        </tr>
    }
}

/// Previous/next controls with the page position.
///
/// # Arguments
/// * `pager` - Current page and total pages after filtering.
/// * `link` - Scope used to send `Msg::GoToPage`.
///
/// Each control is disabled at its end of the range.
fn build_pagination(pager: &Pager, link: &Scope<AddendumListComponent>) -> Html {
    let previous = pager.previous();
    let next = pager.next();

    html! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled={!pager.has_previous()}
                onclick={link.callback(move |_| Msg::GoToPage(previous))}
            >
                {"السابق"}
            </button>
            <span class="page-indicator">
                { format!("صفحة {} من {}", pager.page, pager.total_pages) }
            </span>
            <button
                class="btn btn-secondary"
                disabled={!pager.has_next()}
                onclick={link.callback(move |_| Msg::GoToPage(next))}
            >
                {"التالي"}
            </button>
        </div>
    }
}
