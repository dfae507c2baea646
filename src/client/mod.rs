//! Definition Client
//!
//! The consumer side of the lookup API: what a page showing annotated text
//! uses to turn a marker's `data-term` into a definition on hover or click.
//!
//! - **`service`**: `DefinitionClient`, a per-session, memoizing HTTP client.
//! - **`types`**: Lookup outcomes and display constants.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
