//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! verbosity is read from `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle + one line per operation
//! RUST_LOG=debug cargo run     # full request payloads
//! RUST_LOG=catalog_framework=debug,library_catalog=info cargo run
//! ```
//!
//! Every actor logs with an `entity_type` field (`Book`, `Member`,
//! `Librarian`) instead of a module path, so target names are switched off.
//! A borrow that runs out of copies shows up as:
//!
//! ```text
//! DEBUG Action entity_type="Member" id=M2 action=Borrow { library: "Central Library", isbn: Isbn("978-1") }
//!  WARN Action failed entity_type="Book" id=978-1 error=No copies available: 978-1
//!  WARN Action failed entity_type="Member" id=M2 error=No copies available: 978-1
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at program start.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
