//! Vehicle resolution: turning the typed identifier into a confirmed vehicle.
//!
//! A 24-hex identifier is fetched directly. Anything else is searched as a
//! plate number in both categories; both searches settle before a match is
//! chosen, and the Syrian match wins when both categories return one.
//!
//! Searches are tagged with a ticket from [`SearchSequence`]. Editing the
//! input or starting another search makes older tickets stale, and their
//! results are dropped by [`Resolver::finish`].

use std::future::Future;

use futures_util::future::join_all;

use crate::category::{infer_category_with_source, InferenceSource};
use crate::error::ConsoleError;
use crate::identifier::{is_object_id, LookupKey};
use crate::model::vehicle::{Vehicle, VehicleCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVehicle {
    pub vehicle: Vehicle,
    pub category: VehicleCategory,
    /// Rule that produced `category`.
    pub source: InferenceSource,
}

impl ResolvedVehicle {
    /// A record fetched by id; its category is inferred from its fields.
    pub fn from_record(vehicle: Vehicle) -> Self {
        let (category, source) = infer_category_with_source(&vehicle);
        Self { vehicle, category, source }
    }

    /// A record returned by the search scoped to `category`.
    pub fn from_search(vehicle: Vehicle, category: VehicleCategory) -> Self {
        Self { vehicle, category, source: InferenceSource::SearchCategory }
    }

    /// True when no field of the record said anything about its category.
    pub fn category_is_assumed(&self) -> bool {
        self.source == InferenceSource::Default
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolutionState {
    #[default]
    Idle,
    Searching,
    Resolved(ResolvedVehicle),
    NotFound(String),
    SearchError(String),
}

impl ResolutionState {
    pub fn resolved(&self) -> Option<&ResolvedVehicle> {
        match self {
            ResolutionState::Resolved(resolved) => Some(resolved),
            _ => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, ResolutionState::Searching)
    }

    /// Message to show under the identifier input, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResolutionState::NotFound(msg) | ResolutionState::SearchError(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Result of one category search, already settled.
pub type CategorySearch = Result<Vec<Vehicle>, ConsoleError>;

/// Outcome of `GET /vehicles/{id}`.
///
/// `Ok(None)` covers non-success statuses and payloads that are not a vehicle.
pub fn resolve_direct(id: &str, lookup: Result<Option<Vehicle>, ConsoleError>) -> ResolutionState {
    match lookup {
        Ok(Some(vehicle)) => ResolutionState::Resolved(ResolvedVehicle::from_record(vehicle)),
        Ok(None) => not_found(id),
        Err(err) => ResolutionState::SearchError(err.user_message()),
    }
}

fn not_found(value: &str) -> ResolutionState {
    ResolutionState::NotFound(ConsoleError::NotFound(value.to_string()).user_message())
}

/// Searches `query` in every category at once and picks the match.
///
/// `lookup` is called exactly once per category, in
/// [`VehicleCategory::PREFERENCE`] order, and all searches are awaited
/// together before [`pick_first_match`] decides.
pub async fn search_plate<F, Fut>(query: &str, lookup: F) -> ResolutionState
where
    F: Fn(VehicleCategory) -> Fut,
    Fut: Future<Output = CategorySearch>,
{
    let outcomes = join_all(VehicleCategory::PREFERENCE.map(&lookup)).await;
    pick_first_match(query, VehicleCategory::PREFERENCE.into_iter().zip(outcomes))
}

/// Chooses the plate match once both category searches have settled.
pub fn pick_plate_match(query: &str, syrian: CategorySearch, foreign: CategorySearch) -> ResolutionState {
    pick_first_match(
        query,
        [(VehicleCategory::Syrian, syrian), (VehicleCategory::Foreign, foreign)],
    )
}

/// First match in iteration order wins.
///
/// A failed search counts as "no match" for its category; only when every
/// search failed is the state a search error, carrying the first failure.
pub fn pick_first_match(
    query: &str,
    outcomes: impl IntoIterator<Item = (VehicleCategory, CategorySearch)>,
) -> ResolutionState {
    let mut first_error = None;
    let mut any_succeeded = false;

    for (category, outcome) in outcomes {
        match outcome {
            Ok(vehicles) => {
                any_succeeded = true;
                if let Some(vehicle) = vehicles.into_iter().next() {
                    return ResolutionState::Resolved(ResolvedVehicle::from_search(vehicle, category));
                }
            }
            Err(err) => {
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) if !any_succeeded => ResolutionState::SearchError(err.user_message()),
        _ => not_found(query),
    }
}

/// Whether typing `input` should trigger a lookup without pressing search.
pub fn should_resolve_eagerly(input: &str) -> bool {
    is_object_id(input)
}

/// Monotonic ticket counter for searches.
#[derive(Debug, Clone, Default)]
pub struct SearchSequence {
    current: u64,
}

impl SearchSequence {
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Makes every ticket issued so far stale.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}

/// A lookup the caller has to perform, tagged with its ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: u64,
    pub key: LookupKey,
}

/// Resolution state plus the ticket bookkeeping that guards it.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    state: ResolutionState,
    sequence: SearchSequence,
}

impl Resolver {
    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn resolved(&self) -> Option<&ResolvedVehicle> {
        self.state.resolved()
    }

    /// The identifier input changed.
    ///
    /// Any resolution is dropped and in-flight searches become stale. When the
    /// new text is ObjectId-shaped a direct lookup is started right away.
    pub fn edit(&mut self, input: &str) -> Option<SearchRequest> {
        self.sequence.invalidate();
        self.state = ResolutionState::Idle;
        if should_resolve_eagerly(input) {
            self.begin(input).ok()
        } else {
            None
        }
    }

    /// Explicit search action. Blank input is rejected without changing state.
    pub fn begin(&mut self, input: &str) -> Result<SearchRequest, ConsoleError> {
        let key = LookupKey::classify(input)?;
        let ticket = self.sequence.next();
        self.state = ResolutionState::Searching;
        Ok(SearchRequest { ticket, key })
    }

    /// Applies a settled search. Returns `false` and leaves the state alone
    /// when the ticket is stale.
    pub fn finish(&mut self, ticket: u64, outcome: ResolutionState) -> bool {
        if !self.sequence.is_current(ticket) {
            return false;
        }
        self.state = outcome;
        true
    }

    pub fn reset(&mut self) {
        self.sequence.invalidate();
        self.state = ResolutionState::Idle;
    }
}
