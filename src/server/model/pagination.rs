//! Page requests and paginated results.

use crate::model::api::PageDto;

/// Page size used when the requested size is missing or out of range.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A validated page request.
///
/// Only constructible through [`PageRequest::clamped`], so `page >= 1` and
/// `1 <= page_size <= 100` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Normalizes raw client input.
    ///
    /// - A missing page or one below 1 becomes 1
    /// - A missing page size or one outside `[1, 100]` becomes 10
    pub fn clamped(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if (1..=MAX_PAGE_SIZE as i64).contains(&s) => s as u64,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// 0-based page index as expected by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Number of rows skipped before this page.
    ///
    /// `None` when the offset overflows or does not fit in a signed 64-bit SQL integer.
    /// Such a page lies past the end of any table.
    pub fn offset(&self) -> Option<u64> {
        self.index()
            .checked_mul(self.page_size)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }

    /// Whether this page starts beyond the last of `total` rows, so it is empty.
    pub fn is_past_end(&self, total: u64) -> bool {
        self.offset().is_none_or(|offset| offset >= total)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::clamped(None, None)
    }
}

/// One page of domain items plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
        }
    }

    /// Converts every item with `f` and wraps the result in the wire format.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        PageDto {
            list: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
