//! State of the addendum listing page.
//!
//! Only the fetched set and the raw filter inputs are stored. The filtered
//! set, the current page and the counters are recomputed by [`ListingView`]
//! on every render.

use common::listing::{
    filter, page_slice, ListingQuery, ListingSummary, Pager, StatusFilter, TextSearch, TypeFilter,
    PAGE_SIZE,
};
use common::model::addendum::Addendum;

use crate::api::RequestContext;

/// State container for `AddendumListComponent`.
pub struct AddendumListComponent {
    pub api: RequestContext,
    /// Everything returned by the single fetch.
    pub addendums: Vec<Addendum>,
    pub loading: bool,
    /// Message of the failed fetch, shown instead of the table.
    pub error: Option<String>,
    /// Search box content as typed.
    pub search: String,
    pub type_filter: TypeFilter,
    pub status_filter: StatusFilter,
    /// 1-based page.
    pub page: usize,
    /// Guard for the one-time fetch on first render.
    pub loaded: bool,
}

/// Everything derived from the state for one render.
pub struct ListingView<'a> {
    pub rows: Vec<&'a Addendum>,
    pub pager: Pager,
    pub summary: ListingSummary,
}

impl AddendumListComponent {
    pub fn new(api: RequestContext) -> Self {
        Self {
            api,
            addendums: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            type_filter: TypeFilter::All,
            status_filter: StatusFilter::All,
            page: 1,
            loaded: false,
        }
    }

    pub fn query(&self) -> ListingQuery {
        ListingQuery {
            search: TextSearch::new(&self.search),
            type_filter: self.type_filter,
            status_filter: self.status_filter,
        }
    }

    /// Filters the fetched set, then slices the requested page out of it.
    ///
    /// # Returns
    /// Rows of the current page, a pager clamped to the filtered count, and
    /// counters over both the whole set and the filtered one.
    pub fn listing(&self) -> ListingView<'_> {
        let filtered = filter(&self.addendums, &self.query());
        let pager = Pager::new(self.page, filtered.len(), PAGE_SIZE);
        let summary = ListingSummary::compute(&self.addendums, &filtered);
        let rows = page_slice(&filtered, pager.page, PAGE_SIZE).to_vec();
        ListingView { rows, pager, summary }
    }
}
