//! Browser glue shared by both pages.
//!
//! - **Storage & location**: reading the stored token, query parameters and
//!   the current path, and navigating away.
//! - **User feedback**: temporary toast notifications.
//! - **Display**: date and amount formatting for the listing table.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, UrlSearchParams};

use crate::config::TOKEN_STORAGE_KEY;

/// Bearer token saved by the login flow, if any.
pub fn stored_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

/// Value of `name` in the current page's query string.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
        .filter(|value| !value.trim().is_empty())
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn navigate(route: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(route).is_err() {
            gloo_console::error!("navigation failed:", route);
        }
    }
}

/// Current time as an ISO-8601 string, the same format the backend stores.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The element removes itself after three seconds. Text is set with
/// `set_text_content` because messages can echo backend or user input.
pub fn show_toast(message: &str, kind: ToastKind) {
    let background = match kind {
        ToastKind::Success => "#2e7d32",
        ToastKind::Error => "#c62828",
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("direction", "rtl").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// `YYYY-MM-DD` part of an ISO timestamp, or a dash.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.get(..10).unwrap_or(v).to_string(),
        None => "—".to_string(),
    }
}

/// Amount with thousands separators and at most two decimals.
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return "—".to_string();
    };
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let cents = ((rounded - rounded.trunc()).abs() * 100.0).round() as i64;
    let sign = if rounded < 0.0 && whole == 0 { "-" } else { "" };
    let whole = whole.to_formatted_string(&Locale::en);
    if cents == 0 {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{:02}", sign, whole, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_truncated_to_day() {
        assert_eq!(format_date(Some("2026-03-04T10:00:00.000Z")), "2026-03-04");
        assert_eq!(format_date(Some("2026")), "2026");
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some(" ")), "—");
    }

    #[test]
    fn amounts_get_separators() {
        assert_eq!(format_amount(Some(1_250_000.0)), "1,250,000");
        assert_eq!(format_amount(Some(1500.5)), "1,500.50");
        assert_eq!(format_amount(Some(-0.25)), "-0.25");
        assert_eq!(format_amount(None), "—");
    }
}
