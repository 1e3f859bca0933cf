use chrono::{DateTime, TimeZone, Utc};

use shopflow::engine::OrderService;
use shopflow::pipeline::{Order, PipelineTemplate};
use shopflow::store::memory::MemoryStore;

/// Fixed instant used as the service clock in tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// A service over a shared `MemoryStore` seeded with `orders`.
///
/// The returned store is a clone sharing state with the one inside the
/// service, so tests can inspect writes.
pub fn memory_service(orders: Vec<Order>) -> (OrderService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::with_orders(orders);
    let service =
        OrderService::new(store.clone(), PipelineTemplate::default()).with_clock(fixed_now);
    (service, store)
}
