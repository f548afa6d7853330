//! The affiliation table: full names keyed by shorthand.
//!
//! The affiliations file has one mapping per line. The shorthand runs up to
//! the first whitespace character (a tab in the usual two-column file, but a
//! space works too) and the rest of the line, trimmed, is the full name:
//!
//! ```text
//! broad	Broad Institute of MIT and Harvard
//! mit	Massachusetts Institute of Technology
//! ```
//!
//! Blank lines are skipped. When a shorthand is defined more than once the
//! last definition wins.

use super::*;

/// Full affiliation names keyed by their shorthand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affiliations {
  full_names: HashMap<String, String>,
}

impl Affiliations {
  /// Parses the contents of an affiliations file.
  ///
  /// # Errors
  ///
  /// Returns [`AffiliateError::MalformedAffiliationLine`] for a non-empty line
  /// that has a shorthand but no full name.
  #[instrument(skip(input), level = "debug")]
  pub fn parse(input: &str) -> Result<Self> {
    let mut full_names = HashMap::new();

    for (index, raw) in input.lines().enumerate() {
      let line = raw.trim();
      if line.is_empty() {
        continue;
      }

      let malformed =
        || AffiliateError::MalformedAffiliationLine { line: index + 1, content: raw.to_string() };
      let (shorthand, full_name) = line.split_once(char::is_whitespace).ok_or_else(malformed)?;
      let full_name = full_name.trim();
      if full_name.is_empty() {
        return Err(malformed());
      }

      if let Some(previous) = full_names.insert(shorthand.to_string(), full_name.to_string()) {
        warn!(
          shorthand,
          previous = %previous,
          replacement = %full_name,
          line = index + 1,
          "Affiliation defined more than once, keeping the last definition"
        );
      }
    }

    debug!(count = full_names.len(), "Parsed affiliation table");
    Ok(Self { full_names })
  }

  /// The full name of `shorthand`, if the table defines it.
  pub fn full_name(&self, shorthand: &str) -> Option<&str> {
    self.full_names.get(shorthand).map(String::as_str)
  }

  /// Whether the table defines `shorthand`.
  pub fn contains(&self, shorthand: &str) -> bool { self.full_names.contains_key(shorthand) }

  /// Shorthands defined in the table, in no particular order.
  pub fn shorthands(&self) -> impl Iterator<Item = &str> { self.full_names.keys().map(String::as_str) }

  /// Number of defined affiliations.
  pub fn len(&self) -> usize { self.full_names.len() }

  /// Whether the table is empty.
  pub fn is_empty(&self) -> bool { self.full_names.is_empty() }
}
