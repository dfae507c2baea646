//! Mycology Glossary Library
//!
//! Annotates free-form text with interactive definitions for mycology terms
//! taken from the Wikipedia "Glossary of mycology" page, and answers single
//! term lookups. It serves as the foundation for the binary (`main.rs`).
//!
//! ## Architecture Modules
//! Data flows one way, from the external page to the callers:
//!
//! - **`ingestion`**: Downloads the glossary page and parses its definition
//!   list into an ordered, immutable `GlossaryIndex`.
//! - **`storage`**: The `TermCache`, which keeps the latest index for a fixed
//!   TTL and refreshes it lazily, degrading to an empty index on failure.
//! - **`search`**: Term resolution (normalization and plural fallbacks) and
//!   text annotation (longest-term-first marker insertion), plus their HTTP
//!   handlers.
//! - **`client`**: The consumer-side definition client with per-session
//!   memoization and preview truncation.
//! - **`config`**, **`router`**, **`markup`**: Runtime settings, the HTTP
//!   route table and shared HTML text helpers.

pub mod client;
pub mod config;
pub mod ingestion;
pub mod markup;
pub mod router;
pub mod search;
pub mod storage;
