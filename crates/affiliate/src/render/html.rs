//! HTML output.
//!
//! Authors are joined by `, ` and followed by `<br><br>` and the legend:
//!
//! ```text
//! Alice Smith<sup>1,2</sup>, Bob Jones<sup>2</sup><br><br><sup>1</sup>Some University. <sup>2</sup>Another Institute.
//! ```

use std::fmt::Write as _;

use super::*;

/// Renders a roster as a single line of HTML.
#[derive(Debug, Clone, Default)]
pub struct Html {
  config: Config,
}

impl Html {
  /// Creates an HTML renderer.
  pub fn new(config: Config) -> Self { Self { config } }
}

impl Renderer for Html {
  fn render(&self, roster: &Roster) -> String {
    let mut out = String::new();

    for (i, author) in roster.authors.iter().enumerate() {
      if i > 0 {
        out.push_str(", ");
      }
      out.push_str(&escape(&author.name));
      let labels = roster.labels(author, self.config.label_order);
      if !labels.is_empty() {
        let _ = write!(out, "<sup>{}</sup>", join_labels(&labels));
      }
    }

    out.push_str("<br><br>");

    for (i, (label, full_name)) in roster.legend().enumerate() {
      if i > 0 {
        out.push(' ');
      }
      let _ = write!(out, "<sup>{label}</sup>{}.", escape(full_name));
    }

    out
  }
}

/// Escapes the characters HTML treats as markup.
pub fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
