//! Shared types for filtered, paginated admin listings.

/// Filter on the `is_active` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Value to compare `is_active` against, `None` when unfiltered.
    pub fn as_active_flag(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// Offset/limit window derived from a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * self.page_size as i64
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_window() {
        let first = PageRequest {
            page: 1,
            page_size: 12,
        };
        assert_eq!(first.offset(), 0);
        assert_eq!(first.limit(), 12);

        let third = PageRequest {
            page: 3,
            page_size: 20,
        };
        assert_eq!(third.offset(), 40);
    }

    #[test]
    fn test_status_filter_flag() {
        assert_eq!(StatusFilter::All.as_active_flag(), None);
        assert_eq!(StatusFilter::Active.as_active_flag(), Some(true));
        assert_eq!(StatusFilter::Inactive.as_active_flag(), Some(false));
    }
}
