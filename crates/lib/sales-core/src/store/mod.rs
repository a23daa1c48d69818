mod postgres;

pub use postgres::{SalesStore, StoreError, StoreResult};
