//! Numbered author affiliation blocks for manuscripts.
//!
//! `affiliate` takes an ordered author list, where each author names the
//! shorthands of their affiliations, together with a table mapping those
//! shorthands to full affiliation names. It assigns every affiliation a label
//! in the order it is first mentioned and renders the author block:
//!
//! - HTML, with `<sup>` superscripts, for pasting into a web form or a word processor
//! - LaTeX source, with `$^{...}$` superscripts, for inclusion in a manuscript
//!
//! # Getting Started
//!
//! ```
//! use affiliate::{
//!   affiliation::Affiliations,
//!   author::Roster,
//!   render::{Format, Renderer},
//!   Config,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let affiliations = Affiliations::parse("a\tSome University\nb\tAnother Institute\n")?;
//! let roster = Roster::parse("Alice Smith\ta,b\nBob Jones\tb\n", &affiliations)?;
//!
//! let html = Format::Html.renderer(&Config::default()).render(&roster);
//! assert!(html.starts_with("Alice Smith<sup>1,2</sup>, Bob Jones<sup>2</sup>"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`affiliation`]: Parsing the shorthand to full name table
//! - [`registry`]: Label assignment in first-appearance order
//! - [`author`]: Parsing the author list and building the registry
//! - [`render`]: HTML and LaTeX output
//! - [`pipeline`]: Reading inputs and writing outputs for a whole run
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{HashMap, HashSet},
  fs,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod affiliation;
pub mod author;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod render;

use crate::{affiliation::*, author::*, error::*, registry::*};

/// Order in which an author's affiliation labels are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrder {
  /// Labels follow the order the author's shorthands were listed in
  #[default]
  Listed,
  /// Labels are sorted numerically
  Ascending,
}

/// Rendering options shared by every output format.
///
/// A configuration can be built in code with the `with_*` setters or loaded
/// from a TOML file:
///
/// ```toml
/// label_order = "ascending"
/// mbox_names = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// How each author's labels are ordered inside their superscript
  pub label_order: LabelOrder,
  /// Wrap given names and last name in `\mbox` in LaTeX output so neither is
  /// split across lines
  pub mbox_names:  bool,
}

impl Default for Config {
  fn default() -> Self { Self { label_order: LabelOrder::default(), mbox_names: true } }
}

impl Config {
  /// Reads a configuration from a TOML file. Missing keys keep their defaults.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      AffiliateError::Config(format!("Could not read config file {}: {e}", path.display()))
    })?;
    let config: Self = toml::from_str(&content)?;
    debug!(?config, path = %path.display(), "Loaded configuration");
    Ok(config)
  }

  /// Sets the label order.
  pub fn with_label_order(mut self, label_order: LabelOrder) -> Self {
    self.label_order = label_order;
    self
  }

  /// Enables or disables `\mbox` wrapping of names in LaTeX output.
  pub fn with_mbox_names(mut self, mbox_names: bool) -> Self {
    self.mbox_names = mbox_names;
    self
  }
}

/// Common traits and types for ergonomic imports.
///
/// ```
/// use affiliate::prelude::*;
///
/// fn example() -> Result<(), AffiliateError> {
///   let affiliations = Affiliations::parse("a Some University")?;
///   let roster = Roster::parse("Alice Smith: a", &affiliations)?;
///   let latex = Format::Latex.renderer(&Config::default()).render(&roster);
///   assert!(latex.contains("$^{1}$Some University."));
///   Ok(())
/// }
/// # example().unwrap();
/// ```
pub mod prelude {
  pub use crate::{
    affiliation::Affiliations,
    author::{Author, Roster},
    error::AffiliateError,
    pipeline::Pipeline,
    render::{Format, Renderer},
    Config, LabelOrder,
  };
}
