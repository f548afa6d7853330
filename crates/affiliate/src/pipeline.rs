//! A complete run: read both inputs, parse, render and write.
//!
//! The run is strictly linear:
//!
//! ```text
//! read inputs -> parse affiliations -> parse authors (+labels) -> render HTML -> [render LaTeX] -> write
//! ```
//!
//! Every output is rendered in memory and staged in a temporary file next to
//! its destination before any destination is touched, so a failure at any
//! step leaves existing files as they were.
//!
//! # Examples
//!
//! ```no_run
//! use affiliate::pipeline::Pipeline;
//!
//! # fn example() -> Result<(), affiliate::error::AffiliateError> {
//! let summary = Pipeline::new("authors.tsv", "affiliations.tsv", "authors.html")
//!   .with_latex_output("authors.tex")
//!   .run()?;
//! println!("{} authors, {} affiliations", summary.authors, summary.affiliations);
//! # Ok(())
//! # }
//! ```

use std::io::Write as _;

use tempfile::NamedTempFile;

use super::*;
use crate::render::{Format, Renderer};

/// Input and output locations of one run, plus its rendering options.
#[derive(Debug, Clone)]
pub struct Pipeline {
  authors_path:      PathBuf,
  affiliations_path: PathBuf,
  html_path:         PathBuf,
  latex_path:        Option<PathBuf>,
  config:            Config,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
  /// Number of authors rendered
  pub authors:      usize,
  /// Number of affiliations in the legend
  pub affiliations: usize,
  /// Every file written, HTML first
  pub written:      Vec<PathBuf>,
}

impl Pipeline {
  /// A run that reads `authors_path` and `affiliations_path` and writes HTML
  /// to `html_path`.
  pub fn new(
    authors_path: impl AsRef<Path>,
    affiliations_path: impl AsRef<Path>,
    html_path: impl AsRef<Path>,
  ) -> Self {
    Self {
      authors_path:      authors_path.as_ref().to_path_buf(),
      affiliations_path: affiliations_path.as_ref().to_path_buf(),
      html_path:         html_path.as_ref().to_path_buf(),
      latex_path:        None,
      config:            Config::default(),
    }
  }

  /// Also write LaTeX source to `latex_path`.
  pub fn with_latex_output(mut self, latex_path: impl AsRef<Path>) -> Self {
    self.latex_path = Some(latex_path.as_ref().to_path_buf());
    self
  }

  /// Use `config` for rendering.
  pub fn with_config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Executes the run.
  ///
  /// # Errors
  ///
  /// Any [`AffiliateError`] from reading, parsing or writing. Nothing is written
  /// unless every earlier step succeeded.
  #[instrument(skip(self), fields(authors = %self.authors_path.display()), level = "info")]
  pub fn run(&self) -> Result<Summary> {
    let affiliations_input = read_input(&self.affiliations_path)?;
    let authors_input = read_input(&self.authors_path)?;

    let affiliations = Affiliations::parse(&affiliations_input)?;
    let roster = Roster::parse(&authors_input, &affiliations)?;

    let mut outputs = vec![(Format::Html, self.html_path.as_path())];
    if let Some(latex_path) = &self.latex_path {
      outputs.push((Format::Latex, latex_path.as_path()));
    }

    let rendered: Vec<(&Path, String)> = outputs
      .into_iter()
      .map(|(format, path)| (path, format.renderer(&self.config).render(&roster)))
      .collect();

    let staged = rendered
      .iter()
      .map(|(path, content)| stage(path, content).map(|(file, target)| (file, target, *path)))
      .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(staged.len());
    for (file, target, path) in staged {
      file.persist(&target).map_err(|e| AffiliateError::OutputWriteFailure {
        path:   path.to_path_buf(),
        source: e.error,
      })?;
      info!(path = %path.display(), "Wrote output");
      written.push(path.to_path_buf());
    }

    Ok(Summary { authors: roster.authors.len(), affiliations: roster.registry.len(), written })
  }
}

/// Reads an input file in full.
fn read_input(path: &Path) -> Result<String> {
  let content = fs::read_to_string(path)
    .map_err(|source| AffiliateError::InputNotFound { path: path.to_path_buf(), source })?;
  debug!(path = %path.display(), bytes = content.len(), "Read input");
  Ok(content)
}

/// Writes `content` to a temporary file next to the file `path` resolves to,
/// ready to be persisted over it.
///
/// A symlinked destination is resolved so the link itself survives. The
/// staged file takes the permissions of the file it replaces, or `0o644` on
/// unix when there is nothing to replace.
fn stage(path: &Path, content: &str) -> Result<(NamedTempFile, PathBuf)> {
  let failure = |source| AffiliateError::OutputWriteFailure { path: path.to_path_buf(), source };

  let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
  let dir = match target.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  let mut file = NamedTempFile::new_in(dir).map_err(failure)?;
  file.write_all(content.as_bytes()).map_err(failure)?;
  file.flush().map_err(failure)?;

  match fs::metadata(&target) {
    Ok(existing) => file.as_file().set_permissions(existing.permissions()).map_err(failure)?,
    #[cfg(unix)]
    Err(_) => {
      use std::os::unix::fs::PermissionsExt;
      file.as_file().set_permissions(fs::Permissions::from_mode(0o644)).map_err(failure)?
    },
    #[cfg(not(unix))]
    Err(_) => {},
  }

  Ok((file, target))
}
