//! List query types: filters, ordering and pagination

use serde::{Deserialize, Serialize};

use aerodesk_core::Value;

/// Maximum items per page
const MAX_PER_PAGE: u32 = 100;

/// Default items per page
const DEFAULT_PER_PAGE: u32 = 20;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to 1..=100
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    /// Calculate total number of pages.
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            1
        } else {
            (self.total as u64).div_ceil(self.per_page as u64) as u32
        }
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub(crate) fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One list restriction; several are AND-ed together
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Column equals the value (`Null` means IS NULL)
    Equals { column: String, value: Value },
    /// Case-insensitive substring match on any of the text columns
    Contains { columns: Vec<String>, needle: String },
}

impl Filter {
    pub fn equals(column: impl Into<String>, value: Value) -> Self {
        Self::Equals {
            column: column.into(),
            value,
        }
    }

    pub fn contains<I, S>(columns: I, needle: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Contains {
            columns: columns.into_iter().map(Into::into).collect(),
            needle: needle.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<Filter>,
    /// Defaults to the primary key, ascending
    pub order_by: Option<(String, SortDirection)>,
    pub page: Pagination,
}

impl ListQuery {
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some((column.into(), direction));
        self
    }

    pub fn page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn clamps_page_and_size() {
        assert_eq!(Pagination::new(0, 10).page, 1);
        assert_eq!(Pagination::new(1, 0).per_page, 1);
        assert_eq!(Pagination::new(1, 999).per_page, 100);
    }

    #[test]
    fn total_pages() {
        let page = |total| Paginated::<()> {
            items: vec![],
            total,
            page: 1,
            per_page: 10,
        };
        assert_eq!(page(0).total_pages(), 1);
        assert_eq!(page(25).total_pages(), 3);
        assert_eq!(page(100).total_pages(), 10);
        assert!(page(25).has_next());
        assert!(!page(5).has_next());
    }

    #[test]
    fn builder_accumulates_filters() {
        let q = ListQuery::default()
            .filter(Filter::contains(["firstname", "lastname"], "love"))
            .filter(Filter::equals("countrycode", Value::Integer(44)))
            .order_by("lastname", SortDirection::Desc);

        assert_eq!(q.filters.len(), 2);
        assert_eq!(q.order_by, Some(("lastname".to_owned(), SortDirection::Desc)));
        assert_eq!(q.page, Pagination::default());
    }
}
