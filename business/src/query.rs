/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Wire spelling the backend expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// One entry of a multi-column sort, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRule {
    pub column_key: String,
    pub direction: SortDirection,
}

impl SortRule {
    pub fn new(column_key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_key: column_key.into(),
            direction,
        }
    }
}

/// Everything a list request carries besides the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    pub sort: Vec<SortRule>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
            sort: Vec::new(),
        }
    }
}

impl QueryParams {
    /// Key/value pairs in the bracketed form the backend parses, e.g.
    /// `sort[0][columnKey]=custName&sort[0][direction]=ASC`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_owned(), self.page.to_string()),
            ("pageSize".to_owned(), self.page_size.to_string()),
        ];
        for (index, rule) in self.sort.iter().enumerate() {
            pairs.push((
                format!("sort[{index}][columnKey]"),
                rule.column_key.clone(),
            ));
            pairs.push((
                format!("sort[{index}][direction]"),
                rule.direction.as_str().to_owned(),
            ));
        }
        pairs
    }
}

/// Percent-encodes `pairs` into a query string, no leading `?`.
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = &'a (String, String)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_and_smallest_size() {
        let params = QueryParams::default();
        assert_eq!(params.page, 0);
        assert_eq!(params.page_size, PAGE_SIZE_OPTIONS[0]);
        assert!(params.sort.is_empty());
    }

    #[test]
    fn sort_rules_index_in_priority_order() {
        let params = QueryParams {
            sort: vec![
                SortRule::new("custName", SortDirection::Ascending),
                SortRule::new("createDate", SortDirection::Descending),
            ],
            ..QueryParams::default()
        };
        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_owned(), "0".to_owned()),
                ("pageSize".to_owned(), "20".to_owned()),
                ("sort[0][columnKey]".to_owned(), "custName".to_owned()),
                ("sort[0][direction]".to_owned(), "ASC".to_owned()),
                ("sort[1][columnKey]".to_owned(), "createDate".to_owned()),
                ("sort[1][direction]".to_owned(), "DESC".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_query_escapes_brackets() {
        let pairs = vec![("sort[0][columnKey]".to_owned(), "custName".to_owned())];
        assert_eq!(encode_query(&pairs), "sort%5B0%5D%5BcolumnKey%5D=custName");
    }
}
