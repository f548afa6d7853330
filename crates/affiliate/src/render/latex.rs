//! LaTeX output.
//!
//! The author list and the legend each sit between comment banners so the
//! blocks are easy to find once pasted into a manuscript:
//!
//! ```text
//! %%%%%%%%%%%%%%%%%%%%%
//! %% LIST OF AUTHORS %%
//! %%%%%%%%%%%%%%%%%%%%%
//! \mbox{Alice} \mbox{Smith}$^{1,2}$,
//! \mbox{Bob} \mbox{Jones}$^{2}$
//! %%%%%%%%%%%%%%%%%%%%%
//!
//!
//! %%%%%%%%%%%%%%%%%%%%%%%%%%
//! %% LIST OF AFFILIATIONS %%
//! %%%%%%%%%%%%%%%%%%%%%%%%%%
//! $^{1}$Some University.
//! $^{2}$Another Institute.
//! %%%%%%%%%%%%%%%%%%%%%%%%%%
//! ```
//!
//! Names and affiliation text are escaped with [`escape`].

use std::fmt::Write as _;

use super::*;

/// Title of the banner above the author list.
const AUTHORS_BANNER: &str = "%% LIST OF AUTHORS %%";
/// Title of the banner above the legend.
const AFFILIATIONS_BANNER: &str = "%% LIST OF AFFILIATIONS %%";

/// Renders a roster as LaTeX source.
#[derive(Debug, Clone, Default)]
pub struct Latex {
  config: Config,
}

impl Latex {
  /// Creates a LaTeX renderer.
  pub fn new(config: Config) -> Self { Self { config } }

  /// The escaped author name, with the given names and the last name each
  /// kept on one line when `mbox_names` is set.
  fn name(&self, name: &str) -> String {
    if !self.config.mbox_names {
      return escape(name);
    }
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.split_last() {
      Some((last, [])) => format!("\\mbox{{{}}}", escape(last)),
      Some((last, given)) => {
        format!("\\mbox{{{}}} \\mbox{{{}}}", escape(&given.join(" ")), escape(last))
      },
      None => String::new(),
    }
  }
}

impl Renderer for Latex {
  fn render(&self, roster: &Roster) -> String {
    let mut out = String::new();

    let rule = "%".repeat(AUTHORS_BANNER.len());
    let _ = writeln!(out, "{rule}\n{AUTHORS_BANNER}\n{rule}");
    for (i, author) in roster.authors.iter().enumerate() {
      if i > 0 {
        out.push_str(",\n");
      }
      out.push_str(&self.name(&author.name));
      let labels = roster.labels(author, self.config.label_order);
      if !labels.is_empty() {
        let _ = write!(out, "$^{{{}}}$", join_labels(&labels));
      }
    }
    let _ = writeln!(out, "\n{rule}\n\n");

    let rule = "%".repeat(AFFILIATIONS_BANNER.len());
    let _ = writeln!(out, "{rule}\n{AFFILIATIONS_BANNER}\n{rule}");
    for (label, full_name) in roster.legend() {
      let _ = writeln!(out, "$^{{{label}}}${}.", escape(full_name));
    }
    let _ = writeln!(out, "{rule}");

    out
  }
}

/// Escapes the characters LaTeX gives special meaning in text mode.
///
/// | input | output |
/// |-------|--------|
/// | `\` | `\textbackslash{}` |
/// | `&` `%` `$` `#` `_` `{` `}` | the character prefixed with `\` |
/// | `~` | `\textasciitilde{}` |
/// | `^` | `\textasciicircum{}` |
pub fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '\\' => escaped.push_str("\\textbackslash{}"),
      '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
        escaped.push('\\');
        escaped.push(c);
      },
      '~' => escaped.push_str("\\textasciitilde{}"),
      '^' => escaped.push_str("\\textasciicircum{}"),
      _ => escaped.push(c),
    }
  }
  escaped
}
