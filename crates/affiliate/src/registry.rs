//! Label assignment for affiliation shorthands.
//!
//! Labels are dense positive integers starting at 1, handed out in the order
//! shorthands are first registered. The [`Roster`] parser registers shorthands
//! while it walks the author list top to bottom and left to right within a
//! line, so a label reflects where its affiliation is first mentioned.

use super::*;

/// Mapping from affiliation shorthand to its numeric label.
///
/// # Examples
///
/// ```
/// use affiliate::registry::Registry;
///
/// let mut registry = Registry::default();
/// assert_eq!(registry.register("broad"), 1);
/// assert_eq!(registry.register("mit"), 2);
/// assert_eq!(registry.register("broad"), 1);
/// assert_eq!(registry.label("mit"), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
  labels:  HashMap<String, usize>,
  ordered: Vec<String>,
}

impl Registry {
  /// Returns the label of `shorthand`, assigning the next one if it is new.
  pub fn register(&mut self, shorthand: &str) -> usize {
    if let Some(&label) = self.labels.get(shorthand) {
      return label;
    }
    self.ordered.push(shorthand.to_string());
    let label = self.ordered.len();
    self.labels.insert(shorthand.to_string(), label);
    debug!(shorthand, label, "Assigned affiliation label");
    label
  }

  /// The label of a registered shorthand.
  pub fn label(&self, shorthand: &str) -> Option<usize> { self.labels.get(shorthand).copied() }

  /// Whether `shorthand` has been registered.
  pub fn contains(&self, shorthand: &str) -> bool { self.labels.contains_key(shorthand) }

  /// Registered shorthands with their labels, in label order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
    self.ordered.iter().enumerate().map(|(i, shorthand)| (i + 1, shorthand.as_str()))
  }

  /// Number of registered shorthands.
  pub fn len(&self) -> usize { self.ordered.len() }

  /// Whether no shorthand has been registered.
  pub fn is_empty(&self) -> bool { self.ordered.is_empty() }
}
