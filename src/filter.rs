//! Filter State
//!
//! URL (de)serialization of the list filter and the debounced staging buffer
//! that sits between the filter inputs and the URL.
//!
//! The URL is the committed state. `FilterDraft` holds what the user is
//! typing and decides when that becomes a URL commit; the component only
//! owns the timer.

use leptos_router::params::ParamsMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{FilterState, StatusFilter};

/// Quiet period before a text edit is committed to the URL
pub const DEBOUNCE_MS: u32 = 500;

pub const QUERY_PARAM: &str = "query";
pub const STATUS_PARAM: &str = "status";

/// Everything but unreserved characters gets escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

impl FilterState {
    /// Build from raw URL parameters; absent means empty / all.
    ///
    /// A `status` other than `pending`/`completed` is read as all statuses,
    /// so the item API only ever sees `""`, `pending` or `completed`.
    pub fn from_params(query: Option<String>, status: Option<String>) -> Self {
        Self {
            query: query.unwrap_or_default(),
            status: status.as_deref().map(StatusFilter::parse).unwrap_or_default(),
        }
    }

    /// Search string for the list route, `""` when nothing is filtered
    pub fn to_search(&self) -> String {
        let mut pairs = Vec::with_capacity(2);
        if !self.query.is_empty() {
            pairs.push(format!(
                "{}={}",
                QUERY_PARAM,
                utf8_percent_encode(&self.query, QUERY_VALUE)
            ));
        }
        if !self.status.is_all() {
            pairs.push(format!("{}={}", STATUS_PARAM, self.status.as_str()));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Filter named by the router's already-decoded query parameters
pub fn filter_from_query(params: &ParamsMap) -> FilterState {
    FilterState::from_params(params.get(QUERY_PARAM), params.get(STATUS_PARAM))
}

/// Handle for one armed debounce; only the latest ticket can commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Staging buffer for the filter inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    staged: FilterState,
    committed: FilterState,
    generation: u64,
    armed: bool,
}

impl FilterDraft {
    pub fn new(initial: FilterState) -> Self {
        Self {
            staged: initial.clone(),
            committed: initial,
            generation: 0,
            armed: false,
        }
    }

    /// Current input values
    pub fn staged(&self) -> &FilterState {
        &self.staged
    }

    #[cfg(test)]
    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.armed
    }

    /// Store a keystroke and (re)arm the debounce
    pub fn edit_query(&mut self, query: String) -> DebounceTicket {
        self.staged.query = query;
        self.generation += 1;
        self.armed = true;
        DebounceTicket(self.generation)
    }

    /// Discrete control: commits right away together with the staged query
    pub fn select_status(&mut self, status: StatusFilter) -> Option<FilterState> {
        self.staged.status = status;
        self.cancel();
        self.commit()
    }

    /// Timer callback. `None` if the ticket was superseded or nothing changed.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<FilterState> {
        if !self.armed || ticket.0 != self.generation {
            return None;
        }
        self.armed = false;
        self.commit()
    }

    /// Disarm the pending debounce without committing
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.armed = false;
    }

    /// Record the URL state. Inputs follow it, except a query still being typed.
    pub fn sync_from_url(&mut self, url_state: FilterState) {
        if self.armed {
            self.staged.status = url_state.status;
        } else {
            self.staged = url_state.clone();
        }
        self.committed = url_state;
    }

    fn commit(&mut self) -> Option<FilterState> {
        if self.staged == self.committed {
            return None;
        }
        self.committed = self.staged.clone();
        Some(self.committed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    /// Reads a search string back the way a browser router would
    fn parse_search(search: &str) -> FilterState {
        let mut query = None;
        let mut status = None;
        for pair in search.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned();
            match key {
                QUERY_PARAM => query = Some(value),
                STATUS_PARAM => status = Some(value),
                _ => {}
            }
        }
        FilterState::from_params(query, status)
    }

    fn filter(query: &str, status: StatusFilter) -> FilterState {
        FilterState::new(query, status)
    }

    #[test]
    fn test_empty_filter_has_no_params() {
        assert_eq!(FilterState::default().to_search(), "");
        assert_eq!(parse_search(""), FilterState::default());
        assert_eq!(parse_search("?"), FilterState::default());
    }

    #[test]
    fn test_search_includes_only_set_fields() {
        assert_eq!(filter("milk", StatusFilter::All).to_search(), "?query=milk");
        assert_eq!(filter("", StatusFilter::Completed).to_search(), "?status=completed");
        assert_eq!(
            filter("buy", StatusFilter::Pending).to_search(),
            "?query=buy&status=pending"
        );
    }

    #[test]
    fn test_search_round_trip() {
        let cases = [
            filter("", StatusFilter::All),
            filter("buy", StatusFilter::Pending),
            filter("a & b = c?", StatusFilter::Completed),
            filter("100% café", StatusFilter::All),
            filter("plus+sign", StatusFilter::Pending),
        ];
        for case in cases {
            assert_eq!(parse_search(&case.to_search()), case);
        }
    }

    #[test]
    fn test_filter_from_router_query() {
        let mut params = ParamsMap::new();
        params.insert(QUERY_PARAM, "buy milk".to_string());
        params.insert(STATUS_PARAM, "completed".to_string());
        params.insert("page", "2".to_string());
        assert_eq!(filter_from_query(&params), filter("buy milk", StatusFilter::Completed));

        assert_eq!(filter_from_query(&ParamsMap::new()), FilterState::default());
    }

    #[test]
    fn test_parse_search_accepts_plus_as_space() {
        let parsed = parse_search("?query=buy+milk&status=bogus&page=2");
        assert_eq!(parsed, filter("buy milk", StatusFilter::All));
    }

    #[test]
    fn test_from_params_defaults() {
        assert_eq!(FilterState::from_params(None, None), FilterState::default());
        assert_eq!(
            FilterState::from_params(Some("buy".into()), Some("pending".into())),
            filter("buy", StatusFilter::Pending)
        );
        assert_eq!(
            FilterState::from_params(None, Some("archived".into())).status,
            StatusFilter::All
        );
    }

    #[test]
    fn test_keystrokes_coalesce_into_one_commit() {
        let mut draft = FilterDraft::default();
        let tickets: Vec<_> = ["m", "mi", "mil", "milk"]
            .iter()
            .map(|q| draft.edit_query(q.to_string()))
            .collect();

        // Earlier timers fire (or are late) but never commit
        for ticket in &tickets[..3] {
            assert_eq!(draft.fire(*ticket), None);
        }
        assert!(draft.is_pending());
        assert_eq!(draft.staged().query, "milk");
        assert_eq!(draft.committed(), &FilterState::default());

        let commit = draft.fire(tickets[3]);
        assert_eq!(commit.map(|f| f.to_search()), Some("?query=milk".to_string()));
        assert!(!draft.is_pending());

        // A ticket fires at most once
        assert_eq!(draft.fire(tickets[3]), None);
    }

    #[test]
    fn test_status_commits_immediately_with_staged_query() {
        let mut draft = FilterDraft::default();
        let ticket = draft.edit_query("buy".to_string());

        let commit = draft.select_status(StatusFilter::Pending);
        assert_eq!(commit, Some(filter("buy", StatusFilter::Pending)));

        // The query timer was folded into the status commit
        assert_eq!(draft.fire(ticket), None);
    }

    #[test]
    fn test_unchanged_value_does_not_commit() {
        let mut draft = FilterDraft::new(filter("milk", StatusFilter::All));
        draft.edit_query("milky".to_string());
        let ticket = draft.edit_query("milk".to_string());
        assert_eq!(draft.fire(ticket), None);
        assert_eq!(draft.select_status(StatusFilter::All), None);
    }

    #[test]
    fn test_cancel_drops_pending_commit() {
        let mut draft = FilterDraft::default();
        let ticket = draft.edit_query("eggs".to_string());
        draft.cancel();
        assert_eq!(draft.fire(ticket), None);
        assert!(!draft.is_pending());
    }

    #[test]
    fn test_url_sync_keeps_only_the_query_being_typed() {
        let mut draft = FilterDraft::default();
        draft.sync_from_url(filter("bread", StatusFilter::Completed));
        assert_eq!(draft.staged(), &filter("bread", StatusFilter::Completed));

        let ticket = draft.edit_query("butter".to_string());
        draft.sync_from_url(filter("jam", StatusFilter::All));
        assert_eq!(draft.staged(), &filter("butter", StatusFilter::All));
        assert_eq!(draft.committed(), &filter("jam", StatusFilter::All));

        assert_eq!(draft.fire(ticket), Some(filter("butter", StatusFilter::All)));
    }

    #[test]
    fn test_back_navigation_status_wins_over_stale_dropdown() {
        let mut draft = FilterDraft::new(filter("", StatusFilter::Completed));
        let ticket = draft.edit_query("butter".to_string());

        // Back button lands on an unfiltered URL while the debounce is armed
        draft.sync_from_url(FilterState::default());
        assert_eq!(draft.staged().status, StatusFilter::All);

        let commit = draft.fire(ticket).map(|f| f.to_search());
        assert_eq!(commit, Some("?query=butter".to_string()));
    }
}
