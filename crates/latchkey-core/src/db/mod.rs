pub mod adapter;

pub use adapter::{DatabaseAdapter, DatabaseDialect};
