use serde::Deserialize;

/// One page of rows as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Total row count across all pages.
    pub total: usize,
    /// Zero-based index of this page.
    pub page: usize,
    pub page_size: usize,
    pub contents: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            total: 0,
            page: 0,
            page_size: 0,
            contents: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_envelope() {
        let page: PageResult<i64> =
            serde_json::from_str(r#"{"total":41,"page":1,"pageSize":20,"contents":[7,8]}"#)
                .unwrap();
        assert_eq!(page.total, 41);
        assert_eq!(page.contents, vec![7, 8]);
        assert_eq!(page.page_count(), 3);
    }
}
