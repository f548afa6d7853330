//! End-to-end runs over small inline inputs.

use super::*;

#[test]
fn test_two_authors_share_an_affiliation() -> TestResult<()> {
  let (dir, authors, affiliations) =
    write_inputs("Alice Smith: a,b\nBob Jones: b\n", "a Some University\nb Another Institute\n");
  let html = dir.path().join("out.html");

  Pipeline::new(&authors, &affiliations, &html).run()?;

  let html = fs::read_to_string(&html)?;
  assert!(html.contains("Alice Smith<sup>1,2</sup>"));
  assert!(html.contains("Bob Jones<sup>2</sup>"));
  assert!(html.ends_with("<sup>1</sup>Some University. <sup>2</sup>Another Institute."));
  Ok(())
}

#[test]
fn test_legend_matches_used_labels() -> TestResult<()> {
  let affiliations = Affiliations::parse("x Ex\ny Why\nz Zed\nw Unused\n")?;
  let roster = Roster::parse("P: z\nQ: x, z\nR\nS: y,x\n", &affiliations)?;

  let mut used: Vec<usize> = roster
    .authors
    .iter()
    .flat_map(|author| roster.labels(author, LabelOrder::Listed))
    .collect();
  used.sort_unstable();
  used.dedup();
  let legend: Vec<usize> = roster.legend().map(|(label, _)| label).collect();

  assert_eq!(used, legend);
  assert_eq!(legend, vec![1, 2, 3]);
  Ok(())
}

#[test]
fn test_unknown_shorthand_writes_nothing() {
  let (dir, authors, affiliations) =
    write_inputs("Alice Smith: a\nCarol Lee: c\n", "a Some University\n");
  let html = dir.path().join("out.html");
  let latex = dir.path().join("out.tex");

  let err = Pipeline::new(&authors, &affiliations, &html).with_latex_output(&latex).run().unwrap_err();

  match err {
    AffiliateError::UnknownAffiliationShorthand { author, shorthand } => {
      assert_eq!(author, "Carol Lee");
      assert_eq!(shorthand, "c");
    },
    other => panic!("unexpected error: {other:?}"),
  }
  assert!(!html.exists());
  assert!(!latex.exists());
}

#[test]
fn test_failed_run_keeps_previous_output() -> TestResult<()> {
  let (dir, authors, affiliations) = write_inputs(": a\n", "a Some University\n");
  let html = dir.path().join("out.html");
  fs::write(&html, "previous")?;

  let err = Pipeline::new(&authors, &affiliations, &html).run().unwrap_err();

  assert!(matches!(err, AffiliateError::MalformedAuthorLine { line: 1, .. }));
  assert_eq!(fs::read_to_string(&html)?, "previous");
  Ok(())
}

#[test]
fn test_latex_escapes_special_characters() -> TestResult<()> {
  let (dir, authors, affiliations) =
    write_inputs("Jo_Ann Smith & Co\tlab\n", "lab R&D Lab, 100% {remote}\n");
  let html = dir.path().join("out.html");
  let latex = dir.path().join("out.tex");

  Pipeline::new(&authors, &affiliations, &html).with_latex_output(&latex).run()?;

  let latex = fs::read_to_string(&latex)?;
  assert!(latex.contains("\\mbox{Jo\\_Ann Smith \\&} \\mbox{Co}$^{1}$"));
  assert!(latex.contains("$^{1}$R\\&D Lab, 100\\% \\{remote\\}."));

  let html = fs::read_to_string(&html)?;
  assert!(html.starts_with("Jo_Ann Smith &amp; Co<sup>1</sup>"));
  Ok(())
}

#[test]
fn test_output_is_deterministic() -> TestResult<()> {
  let (dir, authors, affiliations) =
    write_inputs("A: c,a\nB: b\nC: a,b,c\n", "a Ay\nb Bee\nc Sea\n");
  let first = dir.path().join("first.html");
  let second = dir.path().join("second.html");

  Pipeline::new(&authors, &affiliations, &first).run()?;
  Pipeline::new(&authors, &affiliations, &second).run()?;

  assert_eq!(fs::read_to_string(first)?, fs::read_to_string(second)?);
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_output_permissions() -> TestResult<()> {
  use std::os::unix::fs::PermissionsExt;

  let (dir, authors, affiliations) = write_inputs("Alice Smith: a\n", "a Some University\n");
  let fresh = dir.path().join("fresh.html");
  let existing = dir.path().join("existing.tex");
  fs::write(&existing, "previous")?;
  fs::set_permissions(&existing, fs::Permissions::from_mode(0o640))?;

  Pipeline::new(&authors, &affiliations, &fresh).with_latex_output(&existing).run()?;

  let mode = |path: &Path| fs::metadata(path).map(|m| m.permissions().mode() & 0o777);
  assert_eq!(mode(&fresh)?, 0o644);
  assert_eq!(mode(&existing)?, 0o640);
  assert!(fs::read_to_string(&existing)?.contains("LIST OF AUTHORS"));
  Ok(())
}
