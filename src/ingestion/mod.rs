//! Ingestion Module
//!
//! Acquires the glossary from its external source and turns it into an index.
//!
//! ## Workflow
//! 1. **Download**: `fetcher` requests the rendered glossary page from the
//!    MediaWiki parse API (single request, bounded timeout, no retries).
//! 2. **Parse**: `parser` scans the `<dt>`/`<dd>` definition list, strips edit
//!    links, reference markers and remaining tags.
//! 3. **Index**: the cleaned pairs become an immutable, insertion-ordered
//!    `GlossaryIndex` that the storage layer caches.

pub mod fetcher;
pub mod parser;
pub mod types;
