// src/engine/service.rs

//! Async shell around the pure dispatcher.
//!
//! `OrderService` is the single serialization point for one store. Every
//! mutation holds the write half of an `RwLock` across its whole
//! load → mutate → save cycle; listing and queue building take the read half,
//! so they can overlap each other but never a write.
//!
//! Store calls are synchronous and may block on disk, so they run on tokio's
//! blocking pool while the lock is held.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio::task;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::core::apply_action;
use crate::errors::{Result, ShopflowError};
use crate::pipeline::{NewOrder, Order, PipelineTemplate};
use crate::queue::{EmployeeTask, OrderFilter, OrderSummary, build_tasks, filter_orders};
use crate::store::OrderStore;
use crate::types::Action;

/// Source of "now" for department timestamps.
pub type Clock = fn() -> DateTime<Utc>;

#[derive(Debug)]
pub struct OrderService<S: OrderStore> {
    store: Arc<S>,
    /// Guards every load → save cycle on `store`.
    lock: RwLock<()>,
    template: PipelineTemplate,
    clock: Clock,
}

/// Run a store call on the blocking pool.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| ShopflowError::StoreUnavailable(format!("store task failed: {e}")))?
}

impl<S: OrderStore + 'static> OrderService<S> {
    pub fn new(store: S, template: PipelineTemplate) -> Self {
        Self {
            store: Arc::new(store),
            lock: RwLock::new(()),
            template,
            clock: Utc::now,
        }
    }

    /// Replace the wall clock (tests pin timestamps with this).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn template(&self) -> &PipelineTemplate {
        &self.template
    }

    /// Exclusive read-modify-write over the whole collection.
    ///
    /// `f` runs with the write lock held. If it returns an error the
    /// collection is dropped and nothing is written.
    pub async fn with_orders_mut<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Order>) -> Result<T>,
    {
        let _guard = self.lock.write().await;
        let mut orders = self.load().await?;
        let value = f(&mut orders)?;

        let store = Arc::clone(&self.store);
        blocking(move || store.save_all(&orders)).await?;
        Ok(value)
    }

    /// Shared read of a consistent snapshot.
    pub async fn with_orders<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&[Order]) -> T,
    {
        let _guard = self.lock.read().await;
        let orders = self.load().await?;
        Ok(f(&orders))
    }

    async fn load(&self) -> Result<Vec<Order>> {
        let store = Arc::clone(&self.store);
        blocking(move || store.load_all()).await
    }

    pub async fn list(&self) -> Result<Vec<Order>> {
        self.with_orders(|orders| orders.to_vec()).await
    }

    /// Manager roll-up with status filter and free-text search.
    pub async fn list_filtered(&self, search: &str, filter: OrderFilter) -> Result<Vec<Order>> {
        self.with_orders(|orders| {
            filter_orders(orders, search, filter)
                .into_iter()
                .cloned()
                .collect()
        })
        .await
    }

    pub async fn summary(&self) -> Result<OrderSummary> {
        self.with_orders(OrderSummary::from_orders).await
    }

    pub async fn create(&self, fields: NewOrder) -> Result<Order> {
        let template = &self.template;
        let order = self
            .with_orders_mut(|orders| {
                let mut id = Uuid::new_v4().to_string();
                while orders.iter().any(|o| o.id == id) {
                    id = Uuid::new_v4().to_string();
                }
                let order = Order::new(id, fields, template);
                orders.push(order.clone());
                Ok(order)
            })
            .await?;

        info!(order = %order.id, mfg_id = %order.mfg_id, customer = %order.customer, "created order");
        Ok(order)
    }

    /// Dispatch an action given by name.
    ///
    /// Unknown action names fail before the store is touched.
    pub async fn mutate(
        &self,
        order_id: &str,
        department: &str,
        action: &str,
        note: Option<&str>,
    ) -> Result<Order> {
        let action: Action = action.parse().inspect_err(|e| {
            warn!(order = order_id, department, error = %e, "rejected action");
        })?;
        self.apply(order_id, department, action, note).await
    }

    pub async fn apply(
        &self,
        order_id: &str,
        department: &str,
        action: Action,
        note: Option<&str>,
    ) -> Result<Order> {
        let now = (self.clock)();
        let result = self
            .with_orders_mut(|orders| apply_action(orders, order_id, department, action, note, now))
            .await;

        match result {
            Ok(applied) => {
                info!(
                    order = order_id,
                    department,
                    %action,
                    progress = applied.order.progress,
                    status = %applied.order.status,
                    "applied action"
                );
                Ok(applied.order)
            }
            Err(e) => {
                warn!(order = order_id, department, %action, error = %e, "action failed");
                Err(e)
            }
        }
    }

    /// Worker queue for `department`.
    pub async fn tasks_for(&self, department: &str) -> Result<Vec<EmployeeTask>> {
        self.with_orders(|orders| build_tasks(orders, department)).await
    }
}
