// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Store search state management.
//!
//! This module provides the state behind the search results view. A [`Search`]
//! owns at most one in-flight fetch at a time. Issuing a new search cancels
//! the previous fetch and every completion is matched against the current
//! [`FetchToken`] before it is applied, so a superseded fetch can never
//! overwrite a newer state or reach the completion callback.
//!
//! All mutation happens on the thread that owns the `Search` (the event loop).
//! Fetches run elsewhere and report back through [`Search::settle`].

use tracing::debug;

use crate::{
    model::{Category, FetchToken, SearchResult},
    net::FetchError,
};

/// What the results view shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum SearchState {
    #[default]
    NotSearched,
    Loading {
        query: String,
        category: Category,
    },
    NoResults,
    /// Never empty, an empty result set is [`SearchState::NoResults`].
    Results(Vec<SearchResult>),
}

/// A search request handed to the network collaborator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FetchRequest {
    pub(crate) token: FetchToken,
    pub(crate) query: String,
    pub(crate) category: Category,
}

/// The network side of a search.
///
/// Implementations run the request asynchronously and report the outcome for
/// `request.token` back to [`Search::settle`] on the owning thread.
pub(crate) trait SearchFetcher {
    fn dispatch(&mut self, request: FetchRequest);

    fn cancel(&mut self, token: FetchToken);
}

/// Called once with `true` when a search settles with results (possibly none),
/// or `false` when it failed.
pub(crate) type Completion = Box<dyn FnOnce(bool)>;

struct InFlight {
    token: FetchToken,
    completion: Completion,
}

pub(crate) struct Search<F: SearchFetcher> {
    state: SearchState,
    in_flight: Option<InFlight>,
    fetcher: F,
}

impl<F: SearchFetcher> Search<F> {
    pub(crate) fn new(fetcher: F) -> Self {
        Self {
            state: SearchState::NotSearched,
            in_flight: None,
            fetcher,
        }
    }

    pub(crate) fn state(&self) -> &SearchState {
        &self.state
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(crate) fn results(&self) -> &[SearchResult] {
        match &self.state {
            SearchState::Results(results) => results,
            _ => &[],
        }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Starts a new search, superseding any search still in flight.
    ///
    /// A blank query does not reach the network: the state goes back to
    /// [`SearchState::NotSearched`] and `completion` is dropped uncalled.
    pub(crate) fn perform_search(&mut self, query: &str, category: Category, completion: Completion) {
        self.cancel_in_flight();

        let query = query.trim();
        if query.is_empty() {
            self.state = SearchState::NotSearched;
            return;
        }

        let token = FetchToken::next();
        debug!(%token, query, ?category, "dispatching search");

        self.state = SearchState::Loading {
            query: query.to_string(),
            category,
        };
        self.in_flight = Some(InFlight { token, completion });

        self.fetcher.dispatch(FetchRequest {
            token,
            query: query.to_string(),
            category,
        });
    }

    /// Applies the outcome of the fetch identified by `token`.
    ///
    /// Returns `false`, changing nothing, when `token` is not the current
    /// fetch or the fetch was cancelled.
    pub(crate) fn settle(&mut self, token: FetchToken, outcome: Result<Vec<SearchResult>, FetchError>) -> bool {
        let is_current = self.in_flight.as_ref().is_some_and(|f| f.token == token);
        if !is_current {
            debug!(%token, "dropping superseded search completion");
            return false;
        }

        if matches!(outcome, Err(FetchError::Cancelled)) {
            return false;
        }

        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };

        let success = match outcome {
            Ok(results) if results.is_empty() => {
                self.state = SearchState::NoResults;
                true
            }
            Ok(results) => {
                self.state = SearchState::Results(results);
                true
            }
            Err(e) => {
                tracing::warn!(%token, error = %e, "search failed");
                self.state = SearchState::NotSearched;
                false
            }
        };

        debug!(%token, success, "search settled");
        (in_flight.completion)(success);

        true
    }

    /// Abandons the search in flight, if any, without notifying its caller.
    pub(crate) fn cancel(&mut self) {
        if self.cancel_in_flight() {
            self.state = SearchState::NotSearched;
        }
    }

    fn cancel_in_flight(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                debug!(token = %in_flight.token, "cancelling search");
                self.fetcher.cancel(in_flight.token);
                true
            }
            None => false,
        }
    }
}

impl<F: SearchFetcher> Drop for Search<F> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::model::fixtures::result;

    #[derive(Default)]
    struct RecordingFetcher {
        dispatched: Vec<FetchRequest>,
        cancelled: Vec<FetchToken>,
    }

    impl SearchFetcher for RecordingFetcher {
        fn dispatch(&mut self, request: FetchRequest) {
            self.dispatched.push(request);
        }

        fn cancel(&mut self, token: FetchToken) {
            self.cancelled.push(token);
        }
    }

    type Calls = Rc<RefCell<Vec<bool>>>;

    fn recorder() -> (Calls, impl Fn() -> Completion) {
        let calls: Calls = Rc::new(RefCell::new(vec![]));
        let make = {
            let calls = Rc::clone(&calls);
            move || -> Completion {
                let calls = Rc::clone(&calls);
                Box::new(move |success| calls.borrow_mut().push(success))
            }
        };
        (calls, make)
    }

    fn last_token(search: &Search<RecordingFetcher>) -> FetchToken {
        search.fetcher().dispatched.last().unwrap().token
    }

    #[test]
    fn test_initial_state() {
        let search = Search::new(RecordingFetcher::default());
        assert_eq!(search.state(), &SearchState::NotSearched);
        assert!(!search.is_loading());
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_perform_search_enters_loading() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("  beatles ", Category::Music, completion());

        assert_eq!(
            search.state(),
            &SearchState::Loading {
                query: "beatles".to_string(),
                category: Category::Music
            }
        );
        let request = &search.fetcher().dispatched[0];
        assert_eq!(request.query, "beatles");
        assert_eq!(request.category, Category::Music);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_results_settle() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("beatles", Category::All, completion());
        let token = last_token(&search);

        assert!(search.settle(token, Ok(vec![result("Help!"), result("Yesterday")])));
        assert_eq!(search.results().len(), 2);
        assert!(!search.is_loading());
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_empty_results_are_no_results() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("zzzzqqq", Category::All, completion());
        let token = last_token(&search);

        assert!(search.settle(token, Ok(vec![])));
        assert_eq!(search.state(), &SearchState::NoResults);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_failure_reverts_to_not_searched() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("beatles", Category::All, completion());
        let token = last_token(&search);

        assert!(search.settle(token, Err(FetchError::Network("timed out".to_string()))));
        assert_eq!(search.state(), &SearchState::NotSearched);
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn test_decode_failure_reports_false() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("beatles", Category::All, completion());
        let token = last_token(&search);

        search.settle(token, Err(FetchError::Decode("expected value".to_string())));
        assert_eq!(search.state(), &SearchState::NotSearched);
        assert_eq!(*calls.borrow(), vec![false]);
    }

    #[test]
    fn test_new_search_cancels_previous() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("first", Category::All, completion());
        let first = last_token(&search);
        search.perform_search("second", Category::All, completion());
        let second = last_token(&search);

        assert_eq!(search.fetcher().cancelled, vec![first]);
        assert_ne!(first, second);

        // The superseded fetch arrives late, it must be inert.
        assert!(!search.settle(first, Ok(vec![result("Stale")])));
        assert_eq!(
            search.state(),
            &SearchState::Loading {
                query: "second".to_string(),
                category: Category::All
            }
        );
        assert!(calls.borrow().is_empty());

        assert!(search.settle(second, Ok(vec![result("Fresh")])));
        assert_eq!(search.results()[0].name, "Fresh");
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_issue_order_wins_over_completion_order() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        let a = last_token(&search);
        search.perform_search("b", Category::All, completion());
        let b = last_token(&search);

        // B completes first, A physically arrives second.
        assert!(search.settle(b, Ok(vec![result("B")])));
        assert!(!search.settle(a, Ok(vec![result("A")])));

        assert_eq!(search.results(), &[result("B")]);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_stale_failure_is_inert() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        let a = last_token(&search);
        search.perform_search("b", Category::All, completion());
        let b = last_token(&search);
        search.settle(b, Ok(vec![result("B")]));

        assert!(!search.settle(a, Err(FetchError::Network("reset".to_string()))));
        assert_eq!(search.results(), &[result("B")]);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_cancelled_outcome_is_inert() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        let a = last_token(&search);

        assert!(!search.settle(a, Err(FetchError::Cancelled)));
        assert!(matches!(search.state(), SearchState::Loading { .. }));
        assert!(search.is_loading());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_settle_only_once() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        let a = last_token(&search);

        assert!(search.settle(a, Ok(vec![result("A")])));
        assert!(!search.settle(a, Ok(vec![])));
        assert_eq!(search.results(), &[result("A")]);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("beatles", Category::All, completion());
        let token = last_token(&search);
        search.settle(token, Ok(vec![result("Help!")]));

        search.perform_search("   ", Category::All, completion());

        assert_eq!(search.state(), &SearchState::NotSearched);
        assert_eq!(search.fetcher().dispatched.len(), 1);
        assert_eq!(*calls.borrow(), vec![true]);
    }

    #[test]
    fn test_empty_query_cancels_in_flight() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("beatles", Category::All, completion());
        let token = last_token(&search);
        search.perform_search("", Category::All, completion());

        assert_eq!(search.fetcher().cancelled, vec![token]);
        assert!(!search.settle(token, Ok(vec![result("Late")])));
        assert_eq!(search.state(), &SearchState::NotSearched);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_search_again_from_results() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        search.settle(last_token(&search), Ok(vec![]));
        assert_eq!(search.state(), &SearchState::NoResults);

        search.perform_search("a", Category::Software, completion());
        assert!(matches!(
            search.state(),
            SearchState::Loading { category: Category::Software, .. }
        ));
        // Nothing was in flight, so nothing to cancel.
        assert!(search.fetcher().cancelled.is_empty());

        search.settle(last_token(&search), Ok(vec![result("App")]));
        assert_eq!(*calls.borrow(), vec![true, true]);
    }

    #[test]
    fn test_cancel() {
        let (calls, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        search.perform_search("a", Category::All, completion());
        let a = last_token(&search);
        search.cancel();

        assert_eq!(search.state(), &SearchState::NotSearched);
        assert!(!search.settle(a, Ok(vec![result("A")])));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_drop_cancels_in_flight() {
        #[derive(Clone, Default)]
        struct SharedFetcher(Rc<RefCell<Vec<FetchToken>>>);

        impl SearchFetcher for SharedFetcher {
            fn dispatch(&mut self, _: FetchRequest) {}

            fn cancel(&mut self, token: FetchToken) {
                self.0.borrow_mut().push(token);
            }
        }

        let fetcher = SharedFetcher::default();
        let (_, completion) = recorder();
        {
            let mut search = Search::new(fetcher.clone());
            search.perform_search("a", Category::All, completion());
        }
        assert_eq!(fetcher.0.borrow().len(), 1);
    }

    #[test]
    fn test_results_never_empty() {
        let (_, completion) = recorder();
        let mut search = Search::new(RecordingFetcher::default());

        for batch in [vec![], vec![result("x")], vec![]] {
            search.perform_search("q", Category::All, completion());
            search.settle(last_token(&search), Ok(batch));
            if let SearchState::Results(items) = search.state() {
                assert!(!items.is_empty());
            }
        }
        assert_eq!(search.state(), &SearchState::NoResults);
    }
}
