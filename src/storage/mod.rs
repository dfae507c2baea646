//! Storage Module
//!
//! Holds the parsed glossary in memory with time-based freshness.
//!
//! ## Core Concepts
//! - **Snapshot**: An immutable `(index, fetched_at)` pair, replaced wholesale.
//! - **Expiry**: Snapshots older than the TTL (24 hours by default) are
//!   refreshed lazily by the next reader.
//! - **Soft failure**: A failed refresh yields an empty index for that call and
//!   is not cached, so the next call retries.
//! - **Access**: `TermCache` is the single owner of the snapshot slot; HTTP
//!   handlers expose the listing and cache status.

pub mod cache;
pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;
