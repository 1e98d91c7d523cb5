use serde::Serialize;

use super::{Result, StoreError};

/// Default number of rows on a list page.
pub const DEFAULT_PAGE_ROWS: i64 = 3;

/// One page of a sequence, plus the numbers the list view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pages: u64,
    pub page: u64,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Process-wide list position shared by every caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub page: i64,
    pub rows: i64,
}

impl PaginationCursor {
    pub fn new(rows: i64) -> Self {
        Self { page: 1, rows }
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_ROWS)
    }
}

/// Cuts `records[(page-1)*rows .. page*rows]` out of `records`.
///
/// A page past the end yields an empty slice; the page number is echoed back
/// unclamped. `rows == 0` is reported as [`StoreError::DivisionByZero`], and a
/// non-positive `page` or negative `rows` as [`StoreError::InvalidArgument`].
pub fn paginate<T: Clone>(records: &[T], page: i64, rows: i64) -> Result<Page<T>> {
    if rows == 0 {
        return Err(StoreError::DivisionByZero);
    }
    if rows < 0 {
        return Err(StoreError::invalid_argument(format!(
            "rows must be greater than 0, got {}",
            rows
        )));
    }
    if page <= 0 {
        return Err(StoreError::invalid_argument(format!(
            "page must be greater than 0, got {}",
            page
        )));
    }

    // Both are positive here, so the conversions only fail on 32-bit overflow.
    let rows = u64::try_from(rows).unwrap_or(u64::MAX);
    let page = u64::try_from(page).unwrap_or(u64::MAX);

    let start = (page - 1)
        .checked_mul(rows)
        .and_then(|start| usize::try_from(start).ok())
        .unwrap_or(usize::MAX);
    let take = usize::try_from(rows).unwrap_or(usize::MAX);

    let items = records.iter().skip(start).take(take).cloned().collect();
    let total = u64::try_from(records.len()).unwrap_or(u64::MAX);

    Ok(Page {
        items,
        pages: total.div_ceil(rows),
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = paginate(&["a", "b", "c"], 1, 1).unwrap();
        assert_eq!(page.items, vec!["a"]);
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate(&["a", "b", "c"], 4, 1).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 3);
        assert_eq!(page.page, 4);
    }

    #[test]
    fn test_partial_last_page() {
        let records: Vec<i32> = (1..=7).collect();
        let page = paginate(&records, 3, 3).unwrap();
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.pages, 3);
    }

    #[test]
    fn test_pages_partition_records() {
        for len in 0..20usize {
            let records: Vec<usize> = (0..len).collect();
            for rows in 1..6i64 {
                let first = paginate(&records, 1, rows).unwrap();
                assert_eq!(first.pages, (len as u64).div_ceil(rows as u64));

                let mut joined = Vec::new();
                for page in 1..=first.pages as i64 {
                    joined.extend(paginate(&records, page, rows).unwrap().items);
                }
                assert_eq!(joined, records, "len={} rows={}", len, rows);
            }
        }
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<i32> = Vec::new();
        let page = paginate(&records, 1, 3).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn test_zero_rows_is_division_error() {
        assert_eq!(paginate(&[1, 2], 1, 0), Err(StoreError::DivisionByZero));
    }

    #[test]
    fn test_non_positive_page_is_rejected() {
        assert!(matches!(
            paginate(&[1, 2], 0, 1),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            paginate(&[1, 2], -3, 1),
            Err(StoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            paginate(&[1, 2], 1, -1),
            Err(StoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = paginate(&[1, 2, 3], i64::MAX, i64::MAX).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pages, 1);
    }
}
