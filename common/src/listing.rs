//! In-memory filtering, pagination and counters for the addendum listing.
//!
//! The listing fetches every addendum of one category once; everything here
//! runs over that fetched set.

use crate::model::addendum::{Addendum, AddendumStatus, AddendumType};

pub const PAGE_SIZE: usize = 50;

/// Select value that disables a filter.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(AddendumType),
}

impl TypeFilter {
    /// Parses a select value; `"all"` and unknown values disable the filter.
    pub fn from_value(value: &str) -> Self {
        AddendumType::from_value(value).map_or(TypeFilter::All, TypeFilter::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            TypeFilter::All => ALL,
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    pub fn matches(self, addendum: &Addendum) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => addendum.addendum_type == t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AddendumStatus),
}

impl StatusFilter {
    pub fn from_value(value: &str) -> Self {
        AddendumStatus::from_value(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    pub fn matches(self, addendum: &Addendum) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => addendum.status == s,
        }
    }
}

/// Case-insensitive substring search over plate, owner, number and description.
///
/// Vehicle fields only take part when the addendum embeds its vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(raw: &str) -> Self {
        Self { needle: raw.trim().to_lowercase() }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, addendum: &Addendum) -> bool {
        if self.is_empty() {
            return true;
        }
        let vehicle = addendum.vehicle_summary();
        [
            vehicle.and_then(|v| v.plate_number.as_deref()),
            vehicle.and_then(|v| v.owner_name.as_deref()),
            addendum.addendum_number.as_deref(),
            addendum.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// The three filter dimensions. Each is an independent predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub search: TextSearch,
    pub type_filter: TypeFilter,
    pub status_filter: StatusFilter,
}

impl ListingQuery {
    pub fn matches(&self, addendum: &Addendum) -> bool {
        self.search.matches(addendum)
            && self.type_filter.matches(addendum)
            && self.status_filter.matches(addendum)
    }
}

/// Addendums passing every filter, in fetched order.
pub fn filter<'a>(addendums: &'a [Addendum], query: &ListingQuery) -> Vec<&'a Addendum> {
    addendums.iter().filter(|a| query.matches(a)).collect()
}

/// Number of pages for `len` items; zero items still show one empty page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Items of the 1-based `page`, clamped into range.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let page = page.clamp(1, page_count(items.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start.min(items.len())..end]
}

/// Pagination controls; navigation past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(page: usize, filtered_len: usize, page_size: usize) -> Self {
        let total_pages = page_count(filtered_len, page_size);
        Self { page: page.clamp(1, total_pages), total_pages }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn previous(&self) -> usize {
        if self.has_previous() { self.page - 1 } else { self.page }
    }

    pub fn next(&self) -> usize {
        if self.has_next() { self.page + 1 } else { self.page }
    }
}

/// Derived counters shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSummary {
    pub total: usize,
    pub active: usize,
    pub filtered: usize,
}

impl ListingSummary {
    pub fn compute(all: &[Addendum], filtered: &[&Addendum]) -> Self {
        Self {
            total: all.len(),
            active: all.iter().filter(|a| a.status.is_active()).count(),
            filtered: filtered.len(),
        }
    }
}
