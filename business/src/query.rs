//! The table's query controller: filter text, sort column/order, pagination,
//! and the translation of that state into request parameters.
//!
//! All transitions here are synchronous and touch nothing but the struct; the
//! caller re-dispatches `FetchUsersCommand` after any mutation.

use std::any::Any;

use roster_states::{State, state_assign_impl};

/// Rows per page when nothing else was picked.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Columns the backend can order by.
///
/// Ordering is fully delegated to the server via the `ordering` parameter;
/// sorting the fetched page locally would silently desynchronize from
/// server-side pagination, so no local sort path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Email,
    Phone,
    Address,
    City,
    Certifications,
}

impl SortColumn {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::Certifications,
    ];

    /// Field name sent in the `ordering` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::Certifications => "num_certifications",
        }
    }

    /// Header label shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::Certifications => "Certifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_asc(self) -> bool {
        matches!(self, Self::Asc)
    }
}

/// Filter/sort/page state driving the next fetch.
///
/// `page` is 0-indexed on this side; the backend counts from 1 and the
/// translation happens in [`Self::request`]. `sort_order` is meaningful only
/// while `sort_column` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub filter_text: String,
    pub sort_column: Option<SortColumn>,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_column: None,
            sort_order: SortOrder::Asc,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Replace the filter text. A new filter invalidates prior page offsets,
    /// so the page resets to 0. Any string is accepted.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.page = 0;
    }

    /// Click on a column header: same column flips the order, a new column
    /// starts ascending. Page position is deliberately preserved across
    /// re-sorts.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_column = Some(column);
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Jump to a page. No bounds clamping: a page past the end is a valid
    /// request that comes back empty.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Change row density. Resets the page to 0 since offsets no longer line
    /// up; zero is rejected to keep `page_size > 0`.
    pub fn set_page_size(&mut self, page_size: u32) {
        if page_size == 0 {
            log::warn!("set_page_size: ignoring page_size of 0");
            return;
        }
        self.page_size = page_size;
        self.page = 0;
    }

    /// Number of pages the server-reported total spans.
    ///
    /// Always derived from the server's `count`, never from the length of the
    /// locally held page.
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(u64::from(self.page_size))
    }

    /// Derive the wire-level request descriptor.
    pub fn request(&self) -> UserQuery {
        let ordering = self.sort_column.map(|column| match self.sort_order {
            SortOrder::Asc => column.as_param().to_string(),
            SortOrder::Desc => format!("-{}", column.as_param()),
        });

        UserQuery {
            search: self.filter_text.clone(),
            ordering,
            // Backend pages are 1-indexed; this off-by-one must hold exactly.
            page: self.page + 1,
            page_size: self.page_size,
        }
    }
}

impl State for QueryState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Box<dyn Any + Send> {
        Box::new(self.clone())
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Wire-level request parameters for one `GET <base>/user/` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    /// Field name, `-`-prefixed when descending; absent without a sort column.
    pub ordering: Option<String>,
    /// 1-indexed.
    pub page: u32,
    pub page_size: u32,
}

impl UserQuery {
    /// Pairs in the order they appear on the wire. `format=json` is fixed.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("search", self.search.clone())];
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", ordering.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("page_size", self.page_size.to_string()));
        pairs.push(("format", "json".to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let query = QueryState::default();
        assert_eq!(query.filter_text, "");
        assert_eq!(query.sort_column, None);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.page, 0);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn default_request_has_no_ordering_and_page_one() {
        let request = QueryState::default().request();
        assert_eq!(
            request,
            UserQuery {
                search: String::new(),
                ordering: None,
                page: 1,
                page_size: 10,
            }
        );
        assert_eq!(
            request.query_pairs(),
            vec![
                ("search", String::new()),
                ("page", "1".to_string()),
                ("page_size", "10".to_string()),
                ("format", "json".to_string()),
            ]
        );
    }

    #[test]
    fn set_filter_text_resets_page() {
        let mut query = QueryState::default();
        query.set_page(3);

        query.set_filter_text("ann");

        assert_eq!(query.page, 0);
        let request = query.request();
        assert_eq!(request.search, "ann");
        assert_eq!(request.page, 1);
    }

    #[test]
    fn toggle_sort_new_column_starts_ascending() {
        let mut query = QueryState::default();
        query.toggle_sort(SortColumn::Email);

        assert_eq!(query.sort_column, Some(SortColumn::Email));
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.request().ordering.as_deref(), Some("email"));
    }

    #[test]
    fn toggle_sort_same_column_flips_order() {
        let mut query = QueryState::default();
        query.toggle_sort(SortColumn::Name);
        query.toggle_sort(SortColumn::Name);

        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.request().ordering.as_deref(), Some("-name"));
    }

    #[test]
    fn toggle_sort_twice_round_trips_order() {
        let mut query = QueryState::default();
        query.toggle_sort(SortColumn::City);
        let original = query.sort_order;

        query.toggle_sort(SortColumn::City);
        query.toggle_sort(SortColumn::City);

        assert_eq!(query.sort_order, original);
    }

    #[test]
    fn toggle_sort_switching_column_resets_to_ascending() {
        let mut query = QueryState::default();
        query.toggle_sort(SortColumn::Name);
        query.toggle_sort(SortColumn::Name); // now Desc

        query.toggle_sort(SortColumn::Phone);

        assert_eq!(query.sort_column, Some(SortColumn::Phone));
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn toggle_sort_preserves_page() {
        let mut query = QueryState::default();
        query.set_page(4);

        query.toggle_sort(SortColumn::Name);

        assert_eq!(query.page, 4);
    }

    #[test]
    fn set_page_does_not_clamp() {
        let mut query = QueryState::default();
        query.set_page(9_999);

        assert_eq!(query.page, 9_999);
        assert_eq!(query.request().page, 10_000);
    }

    #[test]
    fn set_page_size_resets_page_and_rejects_zero() {
        let mut query = QueryState::default();
        query.set_page(5);

        query.set_page_size(25);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.page, 0);

        query.set_page(2);
        query.set_page_size(0);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn ordering_param_covers_every_column() {
        let params: Vec<&str> = SortColumn::ALL.iter().map(|c| c.as_param()).collect();
        assert_eq!(
            params,
            vec!["name", "email", "phone", "address", "city", "num_certifications"]
        );
    }

    #[test]
    fn total_pages_uses_ceiling_division() {
        let query = QueryState::default(); // page_size 10
        assert_eq!(query.total_pages(0), 0);
        assert_eq!(query.total_pages(10), 1);
        assert_eq!(query.total_pages(11), 2);
        assert_eq!(query.total_pages(95), 10);
    }
}
