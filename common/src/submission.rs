//! Building and interpreting `POST /api/addendums`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{
    ConsoleError, INVALID_AMOUNT_MESSAGE, MISSING_TYPE_MESSAGE, MISSING_VEHICLE_MESSAGE,
    SERVER_FAULT_MESSAGE, UNRESOLVED_VEHICLE_MESSAGE,
};
use crate::model::addendum::AddendumType;
use crate::model::api::ApiResponse;
use crate::model::vehicle::VehicleCategory;
use crate::requests::CreateAddendumRequest;
use crate::resolution::ResolutionState;

/// Delay between a successful submission and the redirect to the listing.
pub const REDIRECT_DELAY_MS: u32 = 2000;

const DEFAULT_REJECTION_MESSAGE: &str = "تعذر إنشاء الملحق";

/// Digits grouped by thousands with commas, e.g. `1,500` or `12,000,000.75`.
static GROUPED_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("grouped amount pattern compiles")
});

/// Raw form inputs, kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub vehicle_input: String,
    pub addendum_type: Option<AddendumType>,
    pub description: String,
    pub notes: String,
    pub amount: String,
    /// `YYYY-MM-DD` from the date input, blank when not chosen.
    pub effective_date: String,
}

impl SubmissionDraft {
    pub fn shows_amount(&self) -> bool {
        self.addendum_type.is_some_and(AddendumType::takes_amount)
    }
}

/// Phase of the submission half of the workflow.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    /// Created; the page redirects to the route after [`REDIRECT_DELAY_MS`].
    Success { message: String, redirect_to: &'static str },
    SubmitError(String),
}

impl SubmissionState {
    /// Submission is in flight or done; the form no longer accepts edits.
    pub fn is_locked(&self) -> bool {
        matches!(self, SubmissionState::Submitting | SubmissionState::Success { .. })
    }

    /// A field that feeds the request changed.
    ///
    /// A previous rejection no longer describes the draft, so it is cleared.
    /// A locked submission is left alone.
    pub fn draft_edited(&mut self) {
        if let SubmissionState::SubmitError(_) = self {
            *self = SubmissionState::Editing;
        }
    }
}

/// The submit button is enabled only for a resolved vehicle and a chosen type.
pub fn can_submit(resolution: &ResolutionState, addendum_type: Option<AddendumType>) -> bool {
    resolution.resolved().is_some() && addendum_type.is_some()
}

/// Validates the draft and assembles the request body.
///
/// `now_iso` is used as the effective date when none was picked.
pub fn build_request(
    draft: &SubmissionDraft,
    resolution: &ResolutionState,
    now_iso: &str,
) -> Result<CreateAddendumRequest, ConsoleError> {
    let resolved = resolution.resolved().ok_or_else(|| {
        let message = if draft.vehicle_input.trim().is_empty() {
            MISSING_VEHICLE_MESSAGE
        } else {
            UNRESOLVED_VEHICLE_MESSAGE
        };
        ConsoleError::Validation(message.to_string())
    })?;
    let addendum_type = draft
        .addendum_type
        .ok_or_else(|| ConsoleError::Validation(MISSING_TYPE_MESSAGE.to_string()))?;

    Ok(CreateAddendumRequest {
        vehicle_id: resolved.vehicle.id.clone(),
        vehicle_type: resolved.category,
        addendum_type,
        description: non_blank(&draft.description),
        notes: non_blank(&draft.notes),
        amount: parse_amount(&draft.amount)?,
        effective_date: non_blank(&draft.effective_date).unwrap_or_else(|| now_iso.to_string()),
    })
}

/// Blank means no amount; anything else must be a finite number.
///
/// Commas are only accepted as thousands separators. `1,5` is ambiguous
/// (a decimal comma or a typo) and is rejected rather than read as `15`.
pub fn parse_amount(raw: &str) -> Result<Option<f64>, ConsoleError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let digits = if GROUPED_AMOUNT.is_match(raw) {
        raw.replace(',', "")
    } else if raw.contains(',') {
        return Err(ConsoleError::Validation(INVALID_AMOUNT_MESSAGE.to_string()));
    } else {
        raw.to_string()
    };
    match digits.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(ConsoleError::Validation(INVALID_AMOUNT_MESSAGE.to_string())),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What the backend said about a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created { message: Option<String> },
    Rejected(String),
    ServerFault,
}

impl SubmitOutcome {
    pub fn into_result(self) -> Result<Option<String>, ConsoleError> {
        match self {
            SubmitOutcome::Created { message } => Ok(message),
            SubmitOutcome::Rejected(message) => Err(ConsoleError::Rejected(message)),
            SubmitOutcome::ServerFault => Err(ConsoleError::ServerFault),
        }
    }
}

/// Classifies a response by content type first, then by the `success` flag.
///
/// Anything that is not declared as JSON, or does not parse as the envelope,
/// is a server fault rather than a validation failure.
pub fn classify_response(content_type: Option<&str>, body: &str) -> SubmitOutcome {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if !is_json {
        return SubmitOutcome::ServerFault;
    }
    let Ok(envelope) = serde_json::from_str::<ApiResponse<Value>>(body) else {
        return SubmitOutcome::ServerFault;
    };
    if envelope.success {
        SubmitOutcome::Created { message: envelope.message }
    } else {
        SubmitOutcome::Rejected(
            envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string()),
        )
    }
}

/// Message for a network-level failure. JSON parse errors leaking out of the
/// HTTP client are replaced by the generic server-fault message.
pub fn transport_error_message(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.contains("json") || lowered.contains("unexpected token") {
        SERVER_FAULT_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}

pub fn redirect_route(category: VehicleCategory) -> &'static str {
    category.listing_route()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vehicle::Vehicle;
    use crate::resolution::{pick_plate_match, ResolvedVehicle};

    const NOW: &str = "2026-10-16T09:00:00.000Z";

    fn resolved(category: VehicleCategory) -> ResolutionState {
        let vehicle = Vehicle {
            id: "64b7f0c2a1b2c3d4e5f60718".into(),
            plate_number: Some("ABC123".into()),
            owner_name: None,
            national_id: None,
            passport_number: None,
            plate_country: None,
            vehicle_type: None,
        };
        ResolutionState::Resolved(ResolvedVehicle::from_search(vehicle, category))
    }

    fn draft() -> SubmissionDraft {
        SubmissionDraft {
            vehicle_input: "ABC123".into(),
            addendum_type: Some(AddendumType::Correction),
            ..SubmissionDraft::default()
        }
    }

    #[test]
    fn submit_enabled_only_when_resolved_and_typed() {
        let ok = resolved(VehicleCategory::Syrian);
        assert!(can_submit(&ok, Some(AddendumType::Copy)));
        assert!(!can_submit(&ok, None));
        assert!(!can_submit(&ResolutionState::Idle, Some(AddendumType::Copy)));
        assert!(!can_submit(&ResolutionState::Searching, Some(AddendumType::Copy)));
        assert!(!can_submit(&ResolutionState::NotFound("x".into()), Some(AddendumType::Copy)));
    }

    #[test]
    fn builds_minimal_request_with_current_timestamp() {
        let request = build_request(&draft(), &resolved(VehicleCategory::Foreign), NOW).unwrap();
        assert_eq!(request.vehicle_id, "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(request.vehicle_type, VehicleCategory::Foreign);
        assert_eq!(request.addendum_type, AddendumType::Correction);
        assert_eq!(request.description, None);
        assert_eq!(request.amount, None);
        assert_eq!(request.effective_date, NOW);
    }

    #[test]
    fn plate_search_resolution_feeds_the_request() {
        let state = pick_plate_match(
            "ABC123",
            Ok(vec![Vehicle {
                id: "5f0000000000000000000001".into(),
                plate_number: Some("ABC123".into()),
                owner_name: None,
                national_id: None,
                passport_number: None,
                plate_country: None,
                vehicle_type: None,
            }]),
            Ok(vec![]),
        );
        let request = build_request(&draft(), &state, NOW).unwrap();
        assert_eq!(request.vehicle_type, VehicleCategory::Syrian);
        assert_eq!(request.vehicle_id, "5f0000000000000000000001");
    }

    #[test]
    fn amount_is_sent_regardless_of_type() {
        let d = SubmissionDraft {
            amount: " 1,500.5 ".into(),
            description: "  وصف ".into(),
            effective_date: "2026-11-01".into(),
            ..draft()
        };
        assert!(!d.shows_amount());
        let request = build_request(&d, &resolved(VehicleCategory::Syrian), NOW).unwrap();
        assert_eq!(request.amount, Some(1500.5));
        assert_eq!(request.description.as_deref(), Some("وصف"));
        assert_eq!(request.effective_date, "2026-11-01");
    }

    #[test]
    fn commas_only_count_as_thousands_separators() {
        assert_eq!(parse_amount("1,500.5"), Ok(Some(1500.5)));
        assert_eq!(parse_amount("12,000,000"), Ok(Some(12_000_000.0)));
        assert_eq!(parse_amount("-2,500"), Ok(Some(-2500.0)));
        assert_eq!(parse_amount("1500.5"), Ok(Some(1500.5)));
        for ambiguous in ["1,5", "1,50", "12,34,567", "1,500,5", ",500", "1500,00"] {
            assert_eq!(
                parse_amount(ambiguous),
                Err(ConsoleError::Validation(INVALID_AMOUNT_MESSAGE.into())),
                "{ambiguous}"
            );
        }
    }

    #[test]
    fn editing_clears_a_rejection_but_not_a_locked_submission() {
        let mut state = SubmissionState::SubmitError("نوع الملحق مطلوب".into());
        state.draft_edited();
        assert_eq!(state, SubmissionState::Editing);

        let mut state = SubmissionState::Submitting;
        state.draft_edited();
        assert_eq!(state, SubmissionState::Submitting);
        assert!(state.is_locked());

        let mut state = SubmissionState::Success { message: "ok".into(), redirect_to: "/addendums/syrian" };
        state.draft_edited();
        assert!(state.is_locked());
    }

    #[test]
    fn validation_errors_never_build_a_request() {
        let unresolved = build_request(&draft(), &ResolutionState::Idle, NOW);
        assert_eq!(unresolved, Err(ConsoleError::Validation(UNRESOLVED_VEHICLE_MESSAGE.into())));

        let blank = SubmissionDraft { vehicle_input: " ".into(), ..draft() };
        assert_eq!(
            build_request(&blank, &ResolutionState::Idle, NOW),
            Err(ConsoleError::Validation(MISSING_VEHICLE_MESSAGE.into()))
        );

        let untyped = SubmissionDraft { addendum_type: None, ..draft() };
        assert_eq!(
            build_request(&untyped, &resolved(VehicleCategory::Syrian), NOW),
            Err(ConsoleError::Validation(MISSING_TYPE_MESSAGE.into()))
        );

        let bad_amount = SubmissionDraft { amount: "abc".into(), ..draft() };
        assert_eq!(
            build_request(&bad_amount, &resolved(VehicleCategory::Syrian), NOW),
            Err(ConsoleError::Validation(INVALID_AMOUNT_MESSAGE.into()))
        );
    }

    #[test]
    fn rejection_message_is_surfaced_verbatim() {
        let outcome = classify_response(
            Some("application/json; charset=utf-8"),
            r#"{"success":false,"message":"نوع الملحق مطلوب"}"#,
        );
        assert_eq!(outcome, SubmitOutcome::Rejected("نوع الملحق مطلوب".into()));
        assert_eq!(
            outcome.into_result().unwrap_err().user_message(),
            "نوع الملحق مطلوب"
        );
    }

    #[test]
    fn html_error_page_is_a_server_fault() {
        let outcome = classify_response(Some("text/html"), "<!DOCTYPE html><html>500</html>");
        assert_eq!(outcome, SubmitOutcome::ServerFault);
        assert_eq!(outcome.into_result().unwrap_err().user_message(), SERVER_FAULT_MESSAGE);
        assert_eq!(classify_response(None, "{}"), SubmitOutcome::ServerFault);
        assert_eq!(
            classify_response(Some("application/json"), "<html>"),
            SubmitOutcome::ServerFault
        );
    }

    #[test]
    fn success_carries_backend_message() {
        let outcome = classify_response(
            Some("application/json"),
            r#"{"success":true,"message":"تم إنشاء الملحق","data":{"_id":"a1"}}"#,
        );
        assert_eq!(outcome, SubmitOutcome::Created { message: Some("تم إنشاء الملحق".into()) });
    }

    #[test]
    fn json_parse_failures_become_generic_message() {
        assert_eq!(
            transport_error_message("Unexpected token < in JSON at position 0"),
            SERVER_FAULT_MESSAGE
        );
        assert_eq!(transport_error_message("Failed to fetch"), "Failed to fetch");
    }

    #[test]
    fn redirect_follows_category() {
        assert_eq!(redirect_route(VehicleCategory::Foreign), "/addendums/foreign");
        assert_eq!(redirect_route(VehicleCategory::Syrian), "/addendums/syrian");
    }
}
