// src/store/memory.rs

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::OrderStore;
use crate::errors::{Result, ShopflowError};
use crate::pipeline::Order;

/// In-memory store that counts reads and writes and can be switched into a
/// failing mode. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    orders: Arc<Mutex<Vec<Order>>>,
    loads: Arc<AtomicUsize>,
    saves: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let store = Self::default();
        *store.lock() = orders;
        store
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        // A panicking test thread must not wedge the others.
        self.orders.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current contents, bypassing the counters.
    pub fn snapshot(&self) -> Vec<Order> {
        self.lock().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every subsequent load and save fail with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ShopflowError::StoreUnavailable(
                "memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

impl OrderStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Order>> {
        self.check_available()?;
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.lock().clone())
    }

    fn save_all(&self, orders: &[Order]) -> Result<()> {
        self.check_available()?;
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.lock() = orders.to_vec();
        Ok(())
    }
}
