//! Fetcher: one GET per call, reduced to an [`Outcome`](crate::Outcome)
//!
//! This module contains:
//! - The [`Fetcher`] that runs a request through a transport and classifies it
//! - The [`FetchResult`] and [`Response`] value types handed back to callers
//!
//! No retries happen here. The caller decides what to do from the outcome.

mod client;
mod result;

pub use client::Fetcher;
pub use result::{FetchResult, Response};

pub use crate::transport::Validators;
