//! Error types for the affiliate library.
//!
//! Every failure in a run is fatal: the pipeline aborts before any output is
//! persisted and the error is handed back to the caller. The variants cover:
//! - Reading the input files
//! - Malformed lines in either input file
//! - Authors that reference an affiliation the table does not define
//! - Writing the rendered output
//! - Loading a configuration file
//!
//! # Examples
//!
//! ```
//! use affiliate::{affiliation::Affiliations, error::AffiliateError};
//!
//! let result = Affiliations::parse("mit\n");
//! match result {
//!   Err(AffiliateError::MalformedAffiliationLine { line, .. }) => assert_eq!(line, 1),
//!   _ => unreachable!(),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type alias used for the [`affiliate`](crate) crate.
pub type Result<T> = core::result::Result<T, AffiliateError>;

/// Errors that can occur while numbering and rendering affiliations.
#[derive(Error, Debug)]
pub enum AffiliateError {
  /// An input file does not exist or could not be read.
  ///
  /// Raised for both the authors file and the affiliations file, before
  /// anything is parsed or written.
  #[error("Could not read input file {path:?}: {source}")]
  InputNotFound {
    /// The path that was being read
    path:   PathBuf,
    /// The underlying I/O failure
    source: std::io::Error,
  },

  /// A non-empty line of the authors file could not be split into a name and
  /// a list of affiliation shorthands.
  ///
  /// This occurs when:
  /// - The name before the separator is empty
  /// - A shorthand contains whitespace
  #[error("Malformed author on line {line}: {content:?} ({reason})")]
  MalformedAuthorLine {
    /// 1-based line number in the authors file
    line:    usize,
    /// The raw line as it appeared in the file
    content: String,
    /// What was wrong with the line
    reason:  &'static str,
  },

  /// A non-empty line of the affiliations file did not contain both a
  /// shorthand and a full name.
  #[error("Malformed affiliation on line {line}: {content:?} (expected a shorthand followed by a full name)")]
  MalformedAffiliationLine {
    /// 1-based line number in the affiliations file
    line:    usize,
    /// The raw line as it appeared in the file
    content: String,
  },

  /// An author references an affiliation shorthand that has no full name in
  /// the affiliations table.
  #[error("Author {author} has affiliation {shorthand} but the name of that affiliation was not given")]
  UnknownAffiliationShorthand {
    /// Name of the author carrying the reference
    author:    String,
    /// The shorthand that could not be resolved
    shorthand: String,
  },

  /// A rendered output could not be written to its destination.
  #[error("Could not write output file {path:?}: {source}")]
  OutputWriteFailure {
    /// The destination path
    path:   PathBuf,
    /// The underlying I/O failure
    source: std::io::Error,
  },

  /// A configuration file could not be deserialized.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration file could not be loaded for some other reason.
  #[error("{0}")]
  Config(String),
}
