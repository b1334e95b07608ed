use chrono::{DateTime, Utc};

use crate::{
    Debouncer, FetchStatus, FilterForm, QueryParams, Selection, SortDirection, SortRule,
};

/// Everything one grid screen tracks between frames: query parameters,
/// filter panel, row selection and the fetch lifecycle.
///
/// Widgets report edits here; once per frame the screen calls
/// [`GridState::take_refetch`] and issues a list request when it returns
/// true. Responses carry the id from [`GridState::begin_fetch`] so a slow
/// reply for an outdated query can be dropped.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub query: QueryParams,
    pub filter: FilterForm,
    pub selection: Selection,
    pub status: FetchStatus,
    /// Total row count reported by the last successful fetch.
    pub total: usize,
    debouncer: Debouncer,
    refetch_queued: bool,
    request_id: u64,
}

impl GridState {
    pub fn with_filter(filter: FilterForm) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Jumps to `page`. Moving off a page drops its selection.
    pub fn set_page(&mut self, page: usize) {
        if self.query.page == page {
            return;
        }
        self.query.page = page;
        self.selection.clear();
        self.refetch_queued = true;
    }

    /// Changes rows per page and goes back to the first page, so the new
    /// window never points past the shrunken page count.
    pub fn set_page_size(&mut self, page_size: usize) {
        if self.query.page_size == page_size {
            return;
        }
        self.query.page_size = page_size;
        self.query.page = 0;
        self.selection.clear();
        self.refetch_queued = true;
    }

    /// Cycles `column_key` through ascending, descending and unsorted.
    /// The grids sort by one column at a time.
    pub fn toggle_sort(&mut self, column_key: &str) {
        let next = match self.query.sort.first() {
            Some(rule) if rule.column_key == column_key => match rule.direction {
                SortDirection::Ascending => {
                    Some(SortRule::new(column_key, SortDirection::Descending))
                }
                SortDirection::Descending => None,
            },
            _ => Some(SortRule::new(column_key, SortDirection::Ascending)),
        };
        self.query.sort = next.into_iter().collect();
        self.refetch_queued = true;
    }

    pub fn sort_direction(&self, column_key: &str) -> Option<SortDirection> {
        self.query
            .sort
            .first()
            .filter(|rule| rule.column_key == column_key)
            .map(|rule| rule.direction)
    }

    /// A text filter edit arms that field's debounce timer instead of
    /// refetching on every keystroke.
    pub fn set_text_filter(&mut self, key: &str, value: &str, now: DateTime<Utc>) {
        if self.filter.set_text(key, value) {
            self.debouncer.touch(key, now);
        }
    }

    /// Dropdown filters refetch immediately.
    pub fn set_code_filter(&mut self, key: &str, seq: i64) {
        if self.filter.set_code(key, seq) {
            self.refetch_queued = true;
        }
    }

    pub fn set_filter_enabled(&mut self, enabled: bool) {
        if self.filter.enabled != enabled {
            self.filter.set_enabled(enabled);
            self.refetch_queued = true;
        }
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
        self.debouncer.clear();
        self.refetch_queued = true;
    }

    /// Asks once per frame. Consumes a queued refetch or a fired debounce.
    pub fn take_refetch(&mut self, now: DateTime<Utc>) -> bool {
        let due = self.refetch_queued || self.debouncer.fire(now);
        self.refetch_queued = false;
        due
    }

    pub fn queue_refetch(&mut self) {
        self.refetch_queued = true;
    }

    /// Marks a list request as in flight and returns its id.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_id += 1;
        self.status = FetchStatus::Fetching;
        self.request_id
    }

    /// True when `request_id` belongs to the newest request. Responses
    /// from superseded requests must be discarded, not applied.
    pub fn accept_response(&self, request_id: u64) -> bool {
        request_id == self.request_id
    }

    pub fn fetch_succeeded(&mut self, total: usize) {
        self.status = FetchStatus::Success;
        self.total = total;
    }

    pub fn fetch_failed(&mut self) {
        self.status = FetchStatus::Error;
    }

    /// After a bulk delete the old selection and page window are both
    /// meaningless. Back to page zero, nothing selected, fresh fetch.
    pub fn delete_completed(&mut self) {
        self.selection.clear();
        self.query.page = 0;
        self.refetch_queued = true;
    }

    pub fn page_count(&self) -> usize {
        if self.query.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.query.page_size)
    }

    /// All wire pairs for the current list request.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.query.query_pairs();
        pairs.extend(self.filter.query_pairs());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().unwrap()
    }

    fn grid() -> GridState {
        GridState::with_filter(FilterForm::new().text_field("custName"))
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut grid = grid();
        grid.set_page(3);
        grid.set_page_size(50);
        assert_eq!(grid.query.page, 0);
        assert_eq!(grid.query.page_size, 50);
        assert!(grid.take_refetch(at(0)));
    }

    #[test]
    fn page_change_drops_selection() {
        let mut grid = grid();
        grid.selection.set(7, true);
        grid.set_page(1);
        assert!(grid.selection.is_empty());
    }

    #[test]
    fn sort_cycles_asc_desc_off() {
        let mut grid = grid();
        grid.toggle_sort("custName");
        assert_eq!(
            grid.sort_direction("custName"),
            Some(SortDirection::Ascending)
        );
        grid.toggle_sort("custName");
        assert_eq!(
            grid.sort_direction("custName"),
            Some(SortDirection::Descending)
        );
        grid.toggle_sort("custName");
        assert_eq!(grid.sort_direction("custName"), None);
    }

    #[test]
    fn sorting_another_column_replaces_the_rule() {
        let mut grid = grid();
        grid.toggle_sort("custName");
        grid.toggle_sort("createDate");
        assert_eq!(grid.sort_direction("custName"), None);
        assert_eq!(
            grid.sort_direction("createDate"),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn text_filter_edits_debounce_into_one_refetch() {
        let mut grid = grid();
        grid.set_filter_enabled(true);
        assert!(grid.take_refetch(at(0)));

        grid.set_text_filter("custName", "a", at(0));
        assert!(!grid.take_refetch(at(100)));
        grid.set_text_filter("custName", "ac", at(300));
        assert!(!grid.take_refetch(at(600)));
        assert!(grid.take_refetch(at(800)));
        assert!(!grid.take_refetch(at(900)));
    }

    #[test]
    fn each_field_debounces_on_its_own() {
        let mut grid = GridState::with_filter(
            FilterForm::new().text_field("custName").text_field("email"),
        );
        grid.set_text_filter("custName", "a", at(0));
        grid.set_text_filter("email", "k", at(300));
        assert!(grid.take_refetch(at(500)));
        assert!(!grid.take_refetch(at(600)));
        assert!(grid.take_refetch(at(800)));
    }

    #[test]
    fn unchanged_text_does_not_rearm_debounce() {
        let mut grid = grid();
        grid.set_text_filter("custName", "a", at(0));
        grid.set_text_filter("custName", "a", at(400));
        assert!(grid.take_refetch(at(500)));
    }

    #[test]
    fn stale_responses_are_rejected() {
        let mut grid = grid();
        let first = grid.begin_fetch();
        let second = grid.begin_fetch();
        assert!(!grid.accept_response(first));
        assert!(grid.accept_response(second));
    }

    #[test]
    fn delete_resets_page_and_selection() {
        let mut grid = grid();
        grid.set_page(2);
        grid.selection.set_all([1, 2, 3], true);
        grid.take_refetch(at(0));

        grid.delete_completed();
        assert_eq!(grid.query.page, 0);
        assert!(grid.selection.is_empty());
        assert!(grid.take_refetch(at(0)));
    }

    #[test]
    fn query_pairs_merge_filter_when_enabled() {
        let mut grid = grid();
        grid.set_filter_enabled(true);
        grid.set_text_filter("custName", "acme", at(0));
        let pairs = grid.query_pairs();
        assert!(
            pairs.contains(&("filter[custName]".to_owned(), "acme".to_owned())),
            "{pairs:?}"
        );
    }
}
