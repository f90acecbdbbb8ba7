//! Records Page
//!
//! Each fetch cycle runs the count probe first, then the page request.
//! Replies from a superseded cycle are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_session::{use_session_store, Session};
use reactive_stores::Store;

use crate::api;
use crate::components::{BalanceBanner, PaginationControls, RecordTable, RecordsToolbar};
use crate::config::PROBE_PAGE_SIZE;
use crate::context::use_balance;
use crate::query::{total_pages, QueryChange};
use crate::store::{
    store_apply_query_change, store_page, store_query, store_records, store_remove_record,
    store_set_records, store_set_total_pages, store_total_pages, FetchGeneration, RecordsState,
};

#[component]
pub fn RecordsPage() -> impl IntoView {
    let session = use_session_store();
    let balance = use_balance();
    let store = Store::new(RecordsState::default());
    let generation = StoredValue::new(FetchGeneration::default());

    let is_current = move |cycle: u64| {
        generation
            .try_with_value(|g| g.is_current(cycle))
            .unwrap_or(false)
    };

    // Re-fetch whenever the query or the session changes
    Effect::new(move |_| {
        let query = store_query(&store);
        let Some(Session { token, username }) = session.session() else {
            return;
        };
        let cycle = generation
            .try_update_value(|g| g.advance())
            .unwrap_or_default();
        log::debug!("[RECORDS] Fetch cycle {} for {:?}", cycle, query);

        spawn_local(async move {
            let probe = api::get_records(&username, &token, &query, 0, PROBE_PAGE_SIZE).await;
            if !is_current(cycle) {
                log::debug!("[RECORDS] Dropping stale probe of cycle {}", cycle);
                return;
            }
            match probe.data {
                Some(rows) if probe.is_success() => {
                    store_set_total_pages(&store, total_pages(rows.len(), query.size));
                }
                _ => log::error!("Error fetching record count: status {}", probe.status),
            }

            let page = api::get_records(&username, &token, &query, query.page, query.size.get())
                .await;
            if !is_current(cycle) {
                log::debug!("[RECORDS] Dropping stale page of cycle {}", cycle);
                return;
            }
            match page.data {
                Some(records) if page.is_success() => store_set_records(&store, records),
                _ => log::error!("Error fetching records: status {}", page.status),
            }
        });
    });

    let on_change = Callback::new(move |change: QueryChange| {
        store_apply_query_change(&store, change);
    });

    let on_delete = Callback::new(move |record_id: u64| {
        let Some(token) = session.with_untracked(|s| s.map(|s| s.token.clone())) else {
            return;
        };
        spawn_local(async move {
            let response = api::delete_record(record_id, &token).await;
            if generation.try_with_value(|_| ()).is_none() {
                return;
            }
            if response.is_success() {
                log::info!("[RECORDS] Deleted record {}", record_id);
                store_remove_record(&store, record_id);
                balance.refresh();
            } else {
                log::error!(
                    "Error deleting record {}: status {}",
                    record_id,
                    response.status
                );
            }
        });
    });

    view! {
        <div>
            <BalanceBanner />
            <div class="table-container">
                <h1>"Operation Records"</h1>
                <RecordsToolbar
                    query=Signal::derive(move || store_query(&store))
                    on_change=on_change
                />
                <RecordTable
                    records=Signal::derive(move || store_records(&store))
                    on_delete=on_delete
                />
                <PaginationControls
                    page=Signal::derive(move || store_page(&store))
                    total_pages=Signal::derive(move || store_total_pages(&store))
                    on_previous=move |_: ()| on_change.run(QueryChange::PreviousPage)
                    on_next=move |_: ()| on_change.run(QueryChange::NextPage)
                />
            </div>
        </div>
    }
}
