//! Runs over the sample files shipped in `tests/fixtures`.

use super::*;

#[test]
fn test_fixture_html() -> TestResult<()> {
  let dir = tempdir()?;
  let html = dir.path().join("authors.html");

  let summary =
    Pipeline::new(fixtures().join("authors.tsv"), fixtures().join("affiliations.tsv"), &html)
      .run()?;

  assert_eq!(summary.authors, 4);
  // `unused` is defined but never referenced
  assert_eq!(summary.affiliations, 3);
  assert_eq!(
    fs::read_to_string(&html)?,
    "Dana Whitfield<sup>1,2</sup>, Alice Smith<sup>3</sup>, Bob Jones<sup>2,3</sup>, Carol \
     Lee<br><br><sup>1</sup>Broad Institute of MIT and Harvard. <sup>2</sup>Massachusetts \
     Institute of Technology. <sup>3</sup>Harvard University."
  );
  Ok(())
}

#[test]
fn test_fixture_latex() -> TestResult<()> {
  let dir = tempdir()?;
  let html = dir.path().join("authors.html");
  let latex = dir.path().join("authors.tex");

  let summary =
    Pipeline::new(fixtures().join("authors.tsv"), fixtures().join("affiliations.tsv"), &html)
      .with_latex_output(&latex)
      .run()?;

  assert_eq!(summary.written, vec![html, latex.clone()]);
  let latex = fs::read_to_string(&latex)?;
  assert!(latex.contains("\\mbox{Dana} \\mbox{Whitfield}$^{1,2}$,\n"));
  assert!(latex.contains("\\mbox{Carol} \\mbox{Lee}\n%%%"));
  assert!(latex.contains("$^{3}$Harvard University.\n"));
  assert!(!latex.contains("Nowhere In Particular"));
  Ok(())
}

#[test]
fn test_fixture_ascending_labels() -> TestResult<()> {
  let (dir, authors, affiliations) = write_inputs("A: y\nB: z,y\n", "y Why\nz Zed\n");
  let html = dir.path().join("out.html");

  let config = Config::default().with_label_order(LabelOrder::Ascending);
  Pipeline::new(&authors, &affiliations, &html).with_config(config).run()?;

  assert!(fs::read_to_string(&html)?.starts_with("A<sup>1</sup>, B<sup>1,2</sup>"));
  Ok(())
}
