#![allow(dead_code)]

pub use shopflow_test_utils::{init_tracing, with_timeout};
pub use shopflow_test_utils::builders::OrderBuilder;
pub use shopflow_test_utils::fixtures::{fixed_now, memory_service};
