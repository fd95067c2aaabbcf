//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! Handlers only translate between HTTP and these types.

pub mod send_workflow;
pub mod transaction_ledger;
pub mod wallet;
