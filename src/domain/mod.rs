//! Pure domain models for the workshop: clients, catalog entries, work
//! orders, and the financial ledger. No I/O, no storage concerns.

pub mod catalog;
pub mod category;
pub mod client;
pub mod common;
pub mod order;
pub mod transaction;

pub use catalog::*;
pub use category::*;
pub use client::*;
pub use common::*;
pub use order::*;
pub use transaction::*;
