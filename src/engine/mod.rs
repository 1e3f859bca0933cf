// src/engine/mod.rs

//! Order action engine.
//!
//! The pure dispatcher lives in [`core`](self::core): it finds the order and department,
//! runs the transition and re-derives progress, with no IO. The async shell
//! in [`service`](self::service) wraps it with the store, the clock and the single-writer
//! lock that keeps whole-collection writes from clobbering each other.

pub mod core;
pub mod service;

pub use self::core::{Applied, apply_action};
pub use self::service::{Clock, OrderService};
