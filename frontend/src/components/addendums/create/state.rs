//! Runtime state of the addendum creation form.
//!
//! The validation and workflow rules live in `common` (`Resolver`,
//! `SubmissionDraft`, `SubmissionState`); this struct only bundles them with
//! the request context and the page-level flags the view needs.

use common::resolution::Resolver;
use common::submission::{SubmissionDraft, SubmissionState};

use crate::api::RequestContext;

/// State container for `AddendumFormComponent`.
///
/// Fields are `pub` because `view` and `update` live in sibling modules.
pub struct AddendumFormComponent {
    /// Credentials and base URL used for every request of this page.
    pub api: RequestContext,

    /// Inputs as typed by the user.
    pub draft: SubmissionDraft,

    /// Vehicle resolution state and search tickets.
    pub resolver: Resolver,

    /// Editing, in flight, created (awaiting redirect) or rejected.
    pub submission: SubmissionState,

    /// Inline validation message; never sent to the network.
    pub form_error: Option<String>,

    /// Guard for the one-time prefill on first render.
    pub loaded: bool,
}

impl AddendumFormComponent {
    pub fn new(api: RequestContext) -> Self {
        Self {
            api,
            draft: SubmissionDraft::default(),
            resolver: Resolver::default(),
            submission: SubmissionState::Editing,
            form_error: None,
            loaded: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, SubmissionState::Submitting)
    }

    /// Inputs are disabled while the POST is in flight and after a created
    /// response, until the redirect happens.
    pub fn is_locked(&self) -> bool {
        self.submission.is_locked()
    }
}
