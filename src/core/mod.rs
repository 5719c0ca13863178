//! Core extraction engine.
//!
//! Two independent extractors feed one merge:
//!
//! 1. **Man page** (`parsers::manpage`): `(key, type)` declarations from the
//!    RESOURCES section of fluxbox(1), brace families expanded
//! 2. **Source tree** (`parsers::source`): keys referenced by string literals
//!    and by screen-name concatenation in C/C++ sources
//! 3. **Merge** (`merge`): union with the supplemental table, type and
//!    provenance resolution, sorted by key
//!
//! `table` renders the result; `context` wires the stages to the filesystem.
//!
//! ## Module Structure
//!
//! - `context`: ExtractContext orchestrating one run
//! - `data`: ResourceRow, Scope, Source and the stage map types
//! - `file_scanner`: source tree walking
//! - `key`: key normalization and scope classification
//! - `merge`: merge policy and the built-in supplemental table
//! - `parsers`: man page and source text extractors
//! - `table`: TSV / JSON rendering
//! - `utils`: brace expansion

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod key;
pub mod merge;
pub mod parsers;
pub mod table;
pub mod utils;

pub use context::{ExtractContext, ExtractionOutcome, ExtractionStats};
pub use data::{CodeKeys, DocResources, ResourceRow, Scope, Source, SupplementalResources};
pub use key::{normalize_key, scope_for_key};
pub use merge::merge_resources;
pub use table::TableFormat;
