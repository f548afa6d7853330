//! The author list and the labels of the affiliations it references.
//!
//! Each non-empty line of the authors file is one author. The name is
//! separated from a comma-separated list of affiliation shorthands either by
//! a tab (the two-column file) or, when the line has no tab, by its last
//! colon:
//!
//! ```text
//! Alice Smith	a,b
//! Bob Jones: b
//! Carol Lee
//! ```
//!
//! An author with no separator, or with nothing after it, has no
//! affiliations. Parsing and label assignment happen in the same pass since
//! labels follow the order in which shorthands first appear in the list.

use super::*;

/// A single author and the shorthands of their affiliations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
  /// The author's full name as written in the authors file
  pub name:         String,
  /// Affiliation shorthands in listed order, without repeats
  pub affiliations: Vec<String>,
}

impl Author {
  /// Parses one trimmed, non-empty line of the authors file.
  ///
  /// `line` is the 1-based line number and `raw` the untrimmed line, both
  /// only used for error reporting.
  fn parse_line(line: usize, raw: &str, trimmed: &str) -> Result<Self> {
    let malformed = |reason| AffiliateError::MalformedAuthorLine {
      line,
      content: raw.to_string(),
      reason,
    };

    let (name, shorthands) = match trimmed.split_once('\t').or_else(|| trimmed.rsplit_once(':')) {
      Some((name, shorthands)) => (name.trim(), shorthands),
      None => (trimmed, ""),
    };
    if name.is_empty() {
      return Err(malformed("author name is empty"));
    }

    let mut affiliations: Vec<String> = Vec::new();
    for shorthand in shorthands.split(',').map(str::trim).filter(|s| !s.is_empty()) {
      if shorthand.contains(char::is_whitespace) {
        return Err(malformed("affiliation shorthands must be separated by commas"));
      }
      if !affiliations.iter().any(|seen| seen == shorthand) {
        affiliations.push(shorthand.to_string());
      }
    }

    Ok(Self { name: name.to_string(), affiliations })
  }
}

/// The parsed author list together with the label of every affiliation it
/// references.
///
/// A `Roster` is only ever built against an [`Affiliations`] table, so every
/// registered shorthand is guaranteed to have a full name.
#[derive(Debug, Clone)]
pub struct Roster {
  /// Authors in input order
  pub authors:      Vec<Author>,
  /// Labels of all referenced affiliations
  pub registry:     Registry,
  /// The table the shorthands were resolved against
  pub affiliations: Affiliations,
}

impl Roster {
  /// Parses the contents of an authors file, assigning labels as shorthands
  /// are encountered and resolving each one against `affiliations`.
  ///
  /// # Errors
  ///
  /// - [`AffiliateError::MalformedAuthorLine`] for a line with an empty name or a
  ///   shorthand containing whitespace
  /// - [`AffiliateError::UnknownAffiliationShorthand`] for a shorthand the table does not define
  #[instrument(skip(input, affiliations), level = "debug")]
  pub fn parse(input: &str, affiliations: &Affiliations) -> Result<Self> {
    let mut authors = Vec::new();
    let mut registry = Registry::default();
    let mut names = HashSet::new();

    for (index, raw) in input.lines().enumerate() {
      let trimmed = raw.trim();
      if trimmed.is_empty() {
        continue;
      }

      let author = Author::parse_line(index + 1, raw, trimmed)?;
      for shorthand in &author.affiliations {
        if !affiliations.contains(shorthand) {
          return Err(AffiliateError::UnknownAffiliationShorthand {
            author:    author.name.clone(),
            shorthand: shorthand.clone(),
          });
        }
        registry.register(shorthand);
      }

      if !names.insert(author.name.clone()) {
        warn!(name = %author.name, line = index + 1, "Author is listed more than once");
      }
      authors.push(author);
    }

    for shorthand in affiliations.shorthands().filter(|s| !registry.contains(s)) {
      info!(shorthand, "Affiliation is not referenced by any author and is left out");
    }

    debug!(authors = authors.len(), affiliations = registry.len(), "Parsed author list");
    Ok(Self { authors, registry, affiliations: affiliations.clone() })
  }

  /// Labels of `author`'s affiliations, ordered as `order` asks.
  pub fn labels(&self, author: &Author, order: LabelOrder) -> Vec<usize> {
    let mut labels: Vec<usize> =
      author.affiliations.iter().filter_map(|shorthand| self.registry.label(shorthand)).collect();
    if order == LabelOrder::Ascending {
      labels.sort_unstable();
    }
    labels
  }

  /// The legend: each referenced affiliation's label and full name, in label
  /// order.
  pub fn legend(&self) -> impl Iterator<Item = (usize, &str)> {
    self
      .registry
      .iter()
      .filter_map(|(label, shorthand)| self.affiliations.full_name(shorthand).map(|n| (label, n)))
  }
}
