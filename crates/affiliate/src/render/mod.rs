//! Output formats for a [`Roster`].
//!
//! Both formats carry the same content: every author in input order followed
//! by the superscript labels of their affiliations, then a legend giving the
//! full name behind each label. Authors without affiliations get no
//! superscript at all.

use super::*;

pub mod html;
pub mod latex;

pub use self::{html::Html, latex::Latex};

/// Turns a parsed roster into the text of one output format.
pub trait Renderer {
  /// Renders the complete author block, legend included.
  fn render(&self, roster: &Roster) -> String;
}

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// Markup for display, with `<sup>` superscripts
  Html,
  /// LaTeX source, with math-mode superscripts
  Latex,
}

impl Format {
  /// A renderer for this format using `config`.
  pub fn renderer(self, config: &Config) -> Box<dyn Renderer> {
    match self {
      Format::Html => Box::new(Html::new(config.clone())),
      Format::Latex => Box::new(Latex::new(config.clone())),
    }
  }
}

/// Comma-separated label list, e.g. `1,3`.
fn join_labels(labels: &[usize]) -> String {
  labels.iter().map(usize::to_string).collect::<Vec<_>>().join(",")
}
