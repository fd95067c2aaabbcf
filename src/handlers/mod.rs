//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query string)
//! 2. Delegates to the wallet or the send workflow
//! 3. Returns HTTP response (JSON, status code)

/// Liveness endpoint
pub mod health;
/// Network status endpoint
pub mod network;
/// Send and history endpoints
pub mod transfers;
/// Wallet address and balance endpoint
pub mod wallet;
