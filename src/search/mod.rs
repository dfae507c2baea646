//! Search Module
//!
//! Everything that reads the cached glossary index to answer callers.
//!
//! ## Responsibilities
//! - **Resolution**: Turning a single query into a definition through
//!   normalization, case-insensitive matching and plural fallbacks.
//! - **Annotation**: Marking every known term inside a block of markup with an
//!   interactive, escaped marker span.
//! - **API**: Exposing lookup, existence checks and annotation over HTTP.
//!
//! ## Submodules
//! - **`tokenizer`**: Query normalization and plural-ending helpers.
//! - **`resolver`**: Pure lookup over a `GlossaryIndex`.
//! - **`annotator`**: Pure, longest-term-first annotation over a `GlossaryIndex`.
//! - **`engine`**: Ties the `TermCache` to resolver and annotator.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod annotator;
pub mod engine;
pub mod handlers;
pub mod resolver;
pub mod tokenizer;
pub mod types;
