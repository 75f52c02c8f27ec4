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

//! Artwork loading for reusable display slots.
//!
//! Each slot (a visible table row, or the detail view) shows the artwork for
//! whatever item is currently bound to it. Rebinding a slot to a different URL
//! cancels the outstanding fetch and issues a new one under a fresh
//! [`FetchToken`]. Completions are written only into the slot that still holds
//! the matching token, so a late download can never land in a slot that has
//! since been reused for a different item.

use tracing::debug;

use crate::{
    model::{Artwork, FetchToken},
    net::FetchError,
};

/// The image side of artwork loading.
pub(crate) trait ImageFetcher {
    fn fetch(&mut self, token: FetchToken, url: &str);

    fn cancel(&mut self, token: FetchToken);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum ArtworkStatus {
    #[default]
    Empty,
    Loading,
    Loaded(Artwork),
    Failed,
}

#[derive(Debug, Default)]
struct Slot {
    url: Option<String>,
    pending: Option<FetchToken>,
    status: ArtworkStatus,
}

pub(crate) struct ArtworkSlots<F: ImageFetcher> {
    slots: Vec<Slot>,
    fetcher: F,
}

impl<F: ImageFetcher> ArtworkSlots<F> {
    pub(crate) fn new(fetcher: F) -> Self {
        Self {
            slots: vec![],
            fetcher,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub(crate) fn status(&self, slot: usize) -> &ArtworkStatus {
        static EMPTY: ArtworkStatus = ArtworkStatus::Empty;
        self.slots.get(slot).map_or(&EMPTY, |s| &s.status)
    }

    /// Binds `slot` to the artwork at `url`, growing the arena if needed.
    ///
    /// Binding a slot to the URL it already shows is a no-op, anything else
    /// cancels the slot's outstanding fetch before the new one is issued.
    pub(crate) fn bind(&mut self, slot: usize, url: &str) {
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, Slot::default);
        }

        if self.slots[slot].url.as_deref() == Some(url) {
            return;
        }

        self.release(slot);

        if url.is_empty() {
            return;
        }

        let token = FetchToken::next();
        let entry = &mut self.slots[slot];
        entry.url = Some(url.to_string());
        entry.pending = Some(token);
        entry.status = ArtworkStatus::Loading;

        self.fetcher.fetch(token, url);
    }

    /// Cancels any fetch for `slot` and clears what it shows.
    pub(crate) fn release(&mut self, slot: usize) {
        let Some(entry) = self.slots.get_mut(slot) else {
            return;
        };

        if let Some(token) = entry.pending.take() {
            debug!(%token, slot, "cancelling artwork fetch");
            self.fetcher.cancel(token);
        }
        entry.url = None;
        entry.status = ArtworkStatus::Empty;
    }

    /// Releases every slot past `len` and shrinks the arena.
    pub(crate) fn truncate(&mut self, len: usize) {
        for slot in len..self.slots.len() {
            self.release(slot);
        }
        self.slots.truncate(len);
    }

    pub(crate) fn clear(&mut self) {
        self.truncate(0);
    }

    /// Applies the outcome of the artwork fetch identified by `token`.
    ///
    /// Returns `false` if no slot is still waiting on `token`.
    pub(crate) fn complete(&mut self, token: FetchToken, outcome: Result<Artwork, FetchError>) -> bool {
        let Some(entry) = self.slots.iter_mut().find(|s| s.pending == Some(token)) else {
            return false;
        };

        match outcome {
            Ok(artwork) => entry.status = ArtworkStatus::Loaded(artwork),
            Err(FetchError::Cancelled) => return false,
            Err(e) => {
                debug!(%token, error = %e, "artwork fetch failed");
                entry.status = ArtworkStatus::Failed;
            }
        }
        entry.pending = None;

        true
    }
}

impl<F: ImageFetcher> Drop for ArtworkSlots<F> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingFetcher {
        fetched: Rc<RefCell<Vec<(FetchToken, String)>>>,
        cancelled: Rc<RefCell<Vec<FetchToken>>>,
    }

    impl RecordingFetcher {
        fn token_for(&self, url: &str) -> FetchToken {
            self.fetched
                .borrow()
                .iter()
                .rev()
                .find(|(_, u)| u == url)
                .map(|(t, _)| *t)
                .unwrap()
        }
    }

    impl ImageFetcher for RecordingFetcher {
        fn fetch(&mut self, token: FetchToken, url: &str) {
            self.fetched.borrow_mut().push((token, url.to_string()));
        }

        fn cancel(&mut self, token: FetchToken) {
            self.cancelled.borrow_mut().push(token);
        }
    }

    fn artwork(byte: u8) -> Artwork {
        Artwork {
            bytes: vec![byte; 4],
            content_type: Some("image/jpeg".to_string()),
        }
    }

    #[test]
    fn test_bind_and_complete() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(2, "https://example.com/a.jpg");

        assert_eq!(slots.len(), 3);
        assert_eq!(slots.status(2), &ArtworkStatus::Loading);
        assert_eq!(slots.status(0), &ArtworkStatus::Empty);

        let token = slots.fetcher().token_for("https://example.com/a.jpg");
        assert!(slots.complete(token, Ok(artwork(1))));
        assert_eq!(slots.status(2), &ArtworkStatus::Loaded(artwork(1)));
    }

    #[test]
    fn test_rebinding_same_url_is_noop() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/a.jpg");
        slots.bind(0, "https://example.com/a.jpg");

        assert_eq!(slots.fetcher().fetched.borrow().len(), 1);
        assert!(slots.fetcher().cancelled.borrow().is_empty());
    }

    #[test]
    fn test_reused_slot_ignores_old_fetch() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/old.jpg");
        let old = slots.fetcher().token_for("https://example.com/old.jpg");

        slots.bind(0, "https://example.com/new.jpg");
        let new = slots.fetcher().token_for("https://example.com/new.jpg");
        assert_eq!(*slots.fetcher().cancelled.borrow(), vec![old]);

        // The old download raced the cancel and still completed.
        assert!(!slots.complete(old, Ok(artwork(1))));
        assert_eq!(slots.status(0), &ArtworkStatus::Loading);

        assert!(slots.complete(new, Ok(artwork(2))));
        assert_eq!(slots.status(0), &ArtworkStatus::Loaded(artwork(2)));
    }

    #[test]
    fn test_late_completion_after_new_image() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/old.jpg");
        let old = slots.fetcher().token_for("https://example.com/old.jpg");
        slots.bind(0, "https://example.com/new.jpg");
        let new = slots.fetcher().token_for("https://example.com/new.jpg");

        slots.complete(new, Ok(artwork(2)));
        assert!(!slots.complete(old, Ok(artwork(1))));
        assert_eq!(slots.status(0), &ArtworkStatus::Loaded(artwork(2)));
    }

    #[test]
    fn test_failed_fetch() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/a.jpg");
        let token = slots.fetcher().token_for("https://example.com/a.jpg");

        assert!(slots.complete(token, Err(FetchError::Network("404".to_string()))));
        assert_eq!(slots.status(0), &ArtworkStatus::Failed);
        // Settled, a second completion has nowhere to go.
        assert!(!slots.complete(token, Ok(artwork(1))));
    }

    #[test]
    fn test_cancelled_outcome_keeps_waiting() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/a.jpg");
        let token = slots.fetcher().token_for("https://example.com/a.jpg");

        assert!(!slots.complete(token, Err(FetchError::Cancelled)));
        assert_eq!(slots.status(0), &ArtworkStatus::Loading);
    }

    #[test]
    fn test_empty_url_leaves_slot_empty() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "");

        assert_eq!(slots.status(0), &ArtworkStatus::Empty);
        assert!(slots.fetcher().fetched.borrow().is_empty());
    }

    #[test]
    fn test_truncate_cancels_trailing_slots() {
        let mut slots = ArtworkSlots::new(RecordingFetcher::default());
        slots.bind(0, "https://example.com/a.jpg");
        slots.bind(1, "https://example.com/b.jpg");
        let b = slots.fetcher().token_for("https://example.com/b.jpg");

        slots.truncate(1);

        assert_eq!(slots.len(), 1);
        assert_eq!(*slots.fetcher().cancelled.borrow(), vec![b]);
        assert!(!slots.complete(b, Ok(artwork(1))));
    }

    #[test]
    fn test_drop_cancels_outstanding() {
        let fetcher = RecordingFetcher::default();
        {
            let mut slots = ArtworkSlots::new(fetcher.clone());
            slots.bind(0, "https://example.com/a.jpg");
            slots.bind(1, "https://example.com/b.jpg");
            let a = slots.fetcher().token_for("https://example.com/a.jpg");
            slots.complete(a, Ok(artwork(1)));
        }
        // Only the fetch still outstanding is cancelled.
        assert_eq!(fetcher.cancelled.borrow().len(), 1);
        assert_eq!(fetcher.cancelled.borrow()[0], fetcher.token_for("https://example.com/b.jpg"));
    }
}
