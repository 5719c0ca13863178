//! Text extractors for the two input corpora.
//!
//! - `manpage`: roff man page RESOURCES section
//! - `source`: C/C++ source text
//!
//! Both are pure functions of the text; reading files happens in `context`.

pub mod manpage;
pub mod source;
