//! Cached-query layer over the portal fetch functions.

#![allow(dead_code)]

mod cache;

pub use cache::{QueryCache, QueryState};
