//! HTTP request execution and concurrent dispatch.
mod dispatch;
mod executor;


pub(crate) use dispatch::dispatch_requests;
pub(crate) use executor::{RequestOutcome, build_client, execute_request};
