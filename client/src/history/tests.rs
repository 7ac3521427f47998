//! History tests: parallel load, tab filtering on the cafe marker title.

#![allow(clippy::unwrap_used)]

use crate::api::{BalanceEntry, MockCinemaBackend, OrderSummary};
use crate::catalog::RemoteData;
use crate::history::environment::ProductionHistoryEnvironment;
use crate::history::{HistoryAction, HistoryReducer, HistoryState, HistoryTab, CAFE_ORDER_TITLE};
use crate::types::{OrderId, Rupiah, UserId};
use bioskop_core::reducer::Reducer;
use bioskop_runtime::Store;
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

fn order(id: u64, title: &str) -> OrderSummary {
    OrderSummary {
        order_id: OrderId(id),
        order_date: "2025-12-06 10:00:00".to_string(),
        total_amount: Rupiah::new(100_000),
        status: "PAID".to_string(),
        movie_title: title.to_string(),
        branch_name: "Bioskop Tunjungan".to_string(),
        start_time: String::new(),
    }
}

fn balance_row(id: u64) -> BalanceEntry {
    BalanceEntry {
        id,
        tanggal: "2025-12-01".to_string(),
        jenis: "TOPUP".to_string(),
        jumlah: Rupiah::new(100_000),
        keterangan: "Top up saldo".to_string(),
    }
}

#[tokio::test]
async fn load_settles_orders_and_balance() {
    let backend = Arc::new(
        MockCinemaBackend::new()
            .with_order_history(
                "budi",
                vec![order(1, "Laskar Pelangi"), order(2, CAFE_ORDER_TITLE)],
            )
            .with_balance_history("budi", vec![balance_row(1)]),
    );
    let store = Store::new(
        HistoryState::new(UserId::new("budi")),
        HistoryReducer::new(),
        ProductionHistoryEnvironment::new(backend),
    );

    let mut handle = store.send(HistoryAction::Load).await.unwrap();
    handle.wait().await;

    let (orders, balance) = store.state(|s| (s.orders.clone(), s.balance.clone())).await;
    assert_eq!(orders.ready().map(Vec::len), Some(2));
    assert_eq!(balance.ready().map(Vec::len), Some(1));
}

#[test]
fn tabs_split_tickets_from_cafe_orders() {
    let mut state = HistoryState::new(UserId::new("budi"));
    state.orders = RemoteData::Ready(vec![
        order(1, "Laskar Pelangi"),
        order(2, CAFE_ORDER_TITLE),
        order(3, "Petualangan Sherina"),
    ]);

    state.tab = HistoryTab::Tickets;
    let tickets = state.visible_orders();
    assert_eq!(tickets.len(), 2);
    assert!(tickets.iter().all(|o| o.movie_title != CAFE_ORDER_TITLE));

    state.tab = HistoryTab::Cafe;
    let cafe = state.visible_orders();
    assert_eq!(cafe.len(), 1);
    assert_eq!(cafe[0].order_id, OrderId(2));

    state.tab = HistoryTab::Balance;
    assert!(state.visible_orders().is_empty());
}

#[test]
fn stale_settle_is_discarded() {
    let reducer = HistoryReducer::new();
    let env = ProductionHistoryEnvironment::new(Arc::new(MockCinemaBackend::new()));
    let mut state = HistoryState::new(UserId::new("budi"));
    let stale = state.generation;
    state.generation = state.generation.next();

    reducer.reduce(
        &mut state,
        HistoryAction::OrdersSettled {
            generation: stale,
            data: RemoteData::Ready(vec![order(9, "Old")]),
        },
        &env,
    );
    assert!(state.orders.is_loading());
}

#[test]
fn select_tab_is_pure() {
    let reducer = HistoryReducer::new();
    let env = ProductionHistoryEnvironment::new(Arc::new(MockCinemaBackend::new()));
    let mut state = HistoryState::new(UserId::new("budi"));

    let effects = reducer.reduce(&mut state, HistoryAction::SelectTab(HistoryTab::Cafe), &env);
    assert!(effects.iter().all(bioskop_core::effect::Effect::is_none));
    assert_eq!(state.tab, HistoryTab::Cafe);
}
