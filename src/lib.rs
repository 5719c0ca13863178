//! fbinit - Fluxbox init resource extractor
//!
//! fbinit reconciles the classic Fluxbox init resource schema from two
//! imperfect sources, the generated fluxbox(1) man page and a heuristic scan
//! of the compositor's C/C++ sources, into one sorted, provenance-tagged
//! table (`key`, `type`, `scope`, `source`).
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, output, summaries)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (expansion, normalization, extractors, merge)

pub mod cli;
pub mod config;
pub mod core;
