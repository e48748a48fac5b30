pub mod auction;
pub mod bidding;
pub mod error;
pub mod identity;
pub mod messaging;
pub mod query;
pub mod report;
pub mod scheduler;
pub mod shell;
pub mod store;
