// tests/property/main.rs

mod progress;
mod queue;
