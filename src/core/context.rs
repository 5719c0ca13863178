use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::ExtractArgs,
    config::{Config, STDOUT_SENTINEL, load_config},
    core::{
        data::{CodeKeys, DocResources, ResourceRow, SupplementalResources},
        file_scanner::scan_files,
        key::normalize_key,
        merge::{builtin_supplemental, merge_resources},
        parsers::{manpage::extract_doc_resources, source::extract_source_keys},
    },
};

/// Man page resources plus whether the man page could be read at all.
pub struct DocScan {
    pub resources: DocResources,
    pub found: bool,
}

/// Keys referenced by the source tree.
pub struct CodeScan {
    pub keys: CodeKeys,
    /// Files read and scanned.
    pub files_scanned: usize,
    /// Unreadable files and inaccessible directory entries.
    pub files_skipped: usize,
}

/// Counters describing one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub doc_found: bool,
    pub doc_keys: usize,
    pub code_keys: usize,
    pub supplemental_keys: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// The reconciled table and how it was produced.
pub struct ExtractionOutcome {
    pub rows: Vec<ResourceRow>,
    pub stats: ExtractionStats,
}

/// Inputs for one extraction run.
///
/// Paths are resolved at construction: CLI arguments relative to the
/// working directory, config file values relative to the config file.
pub struct ExtractContext {
    pub manpage: PathBuf,
    pub src_root: PathBuf,
    /// Output path, or `-` for stdout.
    pub out: String,
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub supplemental: SupplementalResources,
    pub verbose: bool,
}

impl ExtractContext {
    /// Create a context from CLI arguments.
    ///
    /// Configuration priority: CLI arguments > `.fbinitrc.json` > defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the config file exists but is invalid.
    pub fn new(args: &ExtractArgs) -> Result<Self> {
        let verbose = args.verbose;
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let config_result = load_config(&cwd)?;

        match &config_result.path {
            Some(path) if verbose => {
                eprintln!("{} Using config {}", "note:".bold().cyan(), path.display());
            }
            None if verbose => {
                eprintln!(
                    "{} No .fbinitrc.json found, using default configuration",
                    "note:".bold().cyan()
                );
            }
            _ => {}
        }

        // Keep paths short when the config sits in or below the working directory.
        let config_dir = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| dir.strip_prefix(&cwd).unwrap_or(dir).to_path_buf())
            .unwrap_or_default();

        let mut ctx = Self::from_config(config_result.config, &config_dir, verbose);

        if let Some(ref manpage) = args.manpage {
            ctx.manpage = manpage.clone();
        }
        if let Some(ref src_root) = args.src_root {
            ctx.src_root = src_root.clone();
        }
        if let Some(ref out) = args.out {
            ctx.out = out.clone();
        }

        Ok(ctx)
    }

    /// Create a context from a loaded config. Relative config paths are
    /// joined onto `config_dir`.
    pub fn from_config(config: Config, config_dir: &Path, verbose: bool) -> Self {
        let mut supplemental = builtin_supplemental();
        for (key, rtype) in config.extra_resources {
            supplemental.insert(normalize_key(&key), rtype);
        }

        let out = if config.out == STDOUT_SENTINEL {
            config.out
        } else {
            config_dir.join(&config.out).to_string_lossy().into_owned()
        };

        Self {
            manpage: config_dir.join(&config.manpage),
            src_root: config_dir.join(&config.src_root),
            out,
            extensions: config.extensions,
            ignores: config.ignores,
            supplemental,
            verbose,
        }
    }

    /// Read the man page. A missing or unreadable man page yields no
    /// resources.
    pub fn doc_resources(&self) -> DocScan {
        match fs::read(&self.manpage) {
            Ok(bytes) => DocScan {
                resources: extract_doc_resources(&String::from_utf8_lossy(&bytes)),
                found: true,
            },
            Err(e) => {
                if self.verbose {
                    eprintln!(
                        "{} Cannot read man page {}: {}",
                        "warning:".bold().yellow(),
                        self.manpage.display(),
                        e
                    );
                }
                DocScan {
                    resources: DocResources::new(),
                    found: false,
                }
            }
        }
    }

    /// Scan the source tree. Files are read and scanned in parallel; the
    /// union of per-file keys does not depend on scan order.
    pub fn code_keys(&self) -> CodeScan {
        let scan_result = scan_files(&self.src_root, &self.extensions, &self.ignores, self.verbose);

        let mut code = scan_source_files(&scan_result.files, self.verbose);
        code.files_skipped += scan_result.skipped_count;
        code
    }

    /// Run the whole pipeline.
    pub fn extract(&self) -> ExtractionOutcome {
        let (doc, code) = rayon::join(|| self.doc_resources(), || self.code_keys());

        let rows = merge_resources(&doc.resources, &code.keys, &self.supplemental);

        ExtractionOutcome {
            rows,
            stats: ExtractionStats {
                doc_found: doc.found,
                doc_keys: doc.resources.len(),
                code_keys: code.keys.len(),
                supplemental_keys: self.supplemental.len(),
                files_scanned: code.files_scanned,
                files_skipped: code.files_skipped,
            },
        }
    }
}

/// Scan `files` and union their keys in canonical form. Unreadable files
/// are counted in `files_skipped` and do not stop the scan.
pub fn scan_source_files(files: &[PathBuf], verbose: bool) -> CodeScan {
    let per_file: Vec<Option<CodeKeys>> = files
        .par_iter()
        .map(|path| scan_source_file(path, verbose))
        .collect();

    // Sequential merge (avoid lock contention)
    let mut keys = CodeKeys::new();
    let mut files_scanned = 0;
    let mut files_skipped = 0;
    for file_keys in per_file {
        match file_keys {
            Some(file_keys) => {
                files_scanned += 1;
                keys.extend(file_keys.iter().map(|key| normalize_key(key)));
            }
            None => files_skipped += 1,
        }
    }

    CodeScan {
        keys,
        files_scanned,
        files_skipped,
    }
}

/// Keys referenced by one source file, or `None` if it cannot be read.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn scan_source_file(path: &Path, verbose: bool) -> Option<CodeKeys> {
    match fs::read(path) {
        Ok(bytes) => Some(extract_source_keys(&String::from_utf8_lossy(&bytes))),
        Err(e) => {
            if verbose {
                eprintln!(
                    "{} Cannot read {}: {}",
                    "warning:".bold().yellow(),
                    path.display(),
                    e
                );
            }
            None
        }
    }
}
