use serde::{Deserialize, Serialize};

/// Paging block of a list envelope.
///
/// The API sends it camelCase: `{"page":1,"pageSize":25,"totalRecords":57,"totalPages":3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_records: u64,
    pub total_pages: u32,
}

impl PageInfo {
    /// Placeholder shown before the first page arrives.
    pub fn empty(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_records: 0,
            total_pages: 0,
        }
    }

    /// Number of pages needed for `total_records` rows of `page_size` each.
    pub fn pages_for(total_records: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let size = u64::from(page_size);
        let pages = total_records.div_ceil(size);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Restores the paging invariants the server does not always keep.
    ///
    /// `total_pages` is recomputed from `total_records`, so it is zero exactly
    /// when there are no records. A zero page size (the questions endpoint
    /// reports its row count there) is clamped to one.
    pub fn normalized(self) -> Self {
        let page_size = self.page_size.max(1);
        Self {
            page: self.page.max(1),
            page_size,
            total_records: self.total_records,
            total_pages: Self::pages_for(self.total_records, page_size),
        }
    }

    /// 1-based index of the first row on this page, 0 when empty.
    pub fn first_row(&self) -> u64 {
        if self.total_records == 0 {
            return 0;
        }
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size) + 1
    }

    /// 1-based index of the last row on this page.
    pub fn last_row(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total_records)
    }
}

/// `{ data, pagination }` wrapper returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<R> {
    pub data: Vec<R>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_for() {
        assert_eq!(PageInfo::pages_for(57, 25), 3);
        assert_eq!(PageInfo::pages_for(50, 25), 2);
        assert_eq!(PageInfo::pages_for(1, 25), 1);
        assert_eq!(PageInfo::pages_for(0, 25), 0);
        assert_eq!(PageInfo::pages_for(10, 0), 0);
    }

    #[test]
    fn test_normalized_fixes_empty_set() {
        // the API answers an empty result with totalPages = 1
        let info = PageInfo {
            page: 1,
            page_size: 25,
            total_records: 0,
            total_pages: 1,
        };
        assert_eq!(info.normalized().total_pages, 0);
    }

    #[test]
    fn test_normalized_zero_page_size() {
        let info = PageInfo {
            page: 1,
            page_size: 0,
            total_records: 0,
            total_pages: 1,
        };
        let fixed = info.normalized();
        assert_eq!(fixed.page_size, 1);
        assert_eq!(fixed.total_pages, 0);
    }

    #[test]
    fn test_row_range() {
        let info = PageInfo {
            page: 3,
            page_size: 25,
            total_records: 57,
            total_pages: 3,
        };
        assert_eq!(info.first_row(), 51);
        assert_eq!(info.last_row(), 57);
        assert_eq!(PageInfo::empty(25).first_row(), 0);
    }

    #[test]
    fn test_envelope_camel_case() {
        let raw = r#"{"data":[1,2],"pagination":{"page":2,"pageSize":2,"totalRecords":5,"totalPages":3}}"#;
        let env: Envelope<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(env.data, vec![1, 2]);
        assert_eq!(env.pagination.page_size, 2);
        assert_eq!(env.pagination.total_records, 5);
    }

    #[test]
    fn test_envelope_missing_pagination_is_error() {
        let raw = r#"{"data":[]}"#;
        assert!(serde_json::from_str::<Envelope<u32>>(raw).is_err());
        let raw = r#"{"data":{},"pagination":{"page":1,"pageSize":1,"totalRecords":0,"totalPages":0}}"#;
        assert!(serde_json::from_str::<Envelope<u32>>(raw).is_err());
    }
}
