//! Records View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Record;
use crate::query::{self, QueryChange, QueryState};

/// Records view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RecordsState {
    /// Rows of the currently displayed page
    pub records: Vec<Record>,
    /// Paging, sorting and search
    pub query: QueryState,
    /// Derived from the probe query, not from `records`
    pub total_pages: u32,
}

/// Type alias for the store
pub type RecordsStore = Store<RecordsState>;

/// Tags fetch cycles so replies from a superseded cycle can be dropped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchGeneration(u64);

impl FetchGeneration {
    /// Start a new cycle and return its tag
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, cycle: u64) -> bool {
        self.0 == cycle
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_apply_query_change(store: &RecordsStore, change: QueryChange) {
    change.apply(&mut store.query().write());
}

pub fn store_set_records(store: &RecordsStore, records: Vec<Record>) {
    store.records().set(records);
}

pub fn store_set_total_pages(store: &RecordsStore, total_pages: u32) {
    store.total_pages().set(total_pages);
}

/// Remove a record from the displayed page by ID
pub fn store_remove_record(store: &RecordsStore, record_id: u64) {
    query::remove_record(&mut store.records().write(), record_id);
}

pub fn store_query(store: &RecordsStore) -> QueryState {
    store.query().get()
}

pub fn store_records(store: &RecordsStore) -> Vec<Record> {
    store.records().get()
}

pub fn store_page(store: &RecordsStore) -> u32 {
    store.query().with(|q| q.page)
}

pub fn store_total_pages(store: &RecordsStore) -> u32 {
    store.total_pages().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> Record {
        Record {
            id,
            operation_type: "DIVISION".to_string(),
            amount: 2.0,
            operation_response: Some("5".to_string()),
            date: None,
            user_balance: 50.0,
        }
    }

    #[test]
    fn test_fetch_generation() {
        let mut generation = FetchGeneration::default();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_store_remove_record() {
        let store = Store::new(RecordsState::default());
        store_set_records(&store, vec![record(4), record(5), record(6)]);
        store_set_total_pages(&store, 3);

        store_remove_record(&store, 5);

        let ids: Vec<u64> = store_records(&store).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 6]);
        // Page count is not recomputed after a local delete
        assert_eq!(store_total_pages(&store), 3);
    }

    #[test]
    fn test_store_search_change_resets_page() {
        let store = Store::new(RecordsState::default());
        store_apply_query_change(&store, QueryChange::NextPage);
        store_apply_query_change(&store, QueryChange::NextPage);
        assert_eq!(store_page(&store), 2);

        store_apply_query_change(&store, QueryChange::Search("SQUARE".to_string()));

        assert_eq!(store_page(&store), 0);
        assert_eq!(store_query(&store).search, "SQUARE");
    }
}
