//! Integration tests for the analyzer driver.
//!
//! Scans the fixture corpus the original black-box harness serves over
//! HTTP, but fed through an in-memory `DocumentSource` so no network or
//! server is involved.

use taproot_common::{DocumentSource, RetrievalError};
use taproot_html::{Outcome, analyze, scan_document};

/// A `DocumentSource` serving a fixed in-memory document, or failing.
struct FakeSource(Option<&'static str>);

impl DocumentSource for FakeSource {
    fn fetch(&self, _url: &str) -> Result<String, RetrievalError> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| RetrievalError::Status(reqwest::StatusCode::NOT_FOUND))
    }
}

/// Helper to scan a document and unwrap the selected text
fn deepest(html: &str) -> String {
    scan_document(html)
        .expect("document should be well-formed")
        .expect("document should contain text")
}

#[test]
fn test_simple_structure_title_is_deeper_than_body() {
    let html = "\
<html>
  <head>
    <title>
      This is the title.
    </title>
  </head>
  <body>
    This is the body.
  </body>
</html>";
    // the title text is nested deeper than the body text
    assert_eq!(deepest(html), "This is the title.");
}

#[test]
fn test_multiple_nested_divs() {
    let html = "\
<html>
  <head>
    <title>This is the title.</title>
  </head>
  <body>
    <div>
      Text inside the div.
      <div>
        Text inside the second div.
      </div>
    </div>
  </body>
</html>";
    assert_eq!(deepest(html), "Text inside the second div.");
}

#[test]
fn test_deeply_nested_elements() {
    let html = "\
<html>
  <head>
    <title>This is the title.</title>
  </head>
  <body>
    <div>
      <section>
        <article>
          Text inside the article.
        </article>
      </section>
    </div>
  </body>
</html>";
    assert_eq!(deepest(html), "Text inside the article.");
}

#[test]
fn test_nested_lists() {
    let html = "\
<html>
  <head>
    <title>This is the title.</title>
  </head>
  <body>
    <ul>
      <li>
        First item
        <ul>
          <li>
            Subitem
          </li>
          <li>
            Sub-subitem
            <ul>
              <li>
                Sub-sub-subitem
              </li>
            </ul>
          </li>
        </ul>
      </li>
    </ul>
  </body>
</html>";
    assert_eq!(deepest(html), "Sub-sub-subitem");
}

#[test]
fn test_empty_body_with_title() {
    let html = "\
<html>
  <head>
    <title>
      This is the title.
    </title>
  </head>
  <body>
  </body>
</html>";
    assert_eq!(deepest(html), "This is the title.");
}

#[test]
fn test_indentation_and_blank_lines_are_cosmetic() {
    let compact =
        "<html><head><title>Same title.</title></head><body>Same body.</body></html>";
    let pretty = "\
<html>

  <head>
    <title>
      Same title.
    </title>
  </head>

  <body>
    Same body.

  </body>

</html>";
    assert_eq!(deepest(compact), deepest(pretty));
    assert_eq!(deepest(pretty), "Same title.");
}

#[test]
fn test_text_is_normalized_to_one_line() {
    let html = "<p>  one\n   two\t three  </p>";
    assert_eq!(deepest(html), "one two three");
}

#[test]
fn test_equal_depth_last_in_document_order_wins() {
    let html = "\
<html>
  <head><title>first run</title></head>
  <body><p>second run</p></body>
</html>";
    // title and p both sit at depth 2; the later run wins
    assert_eq!(deepest(html), "second run");
}

#[test]
fn test_case_insensitive_tag_matching() {
    let html = "<HTML><Body>text</BODY></html>";
    assert_eq!(deepest(html), "text");
}

#[test]
fn test_unclosed_tag_is_malformed() {
    let html = "\
<html>
  <head>
    <title>This is the title.</title>
  </head>
  <body>
    <div>Text inside the div.
  </body>
</html>";
    // the title was already found, but malformation is terminal
    assert!(scan_document(html).is_err());
}

#[test]
fn test_extra_closing_tag_is_malformed() {
    let html = "\
<html>
  <body>This is the body.</body>
</html>
</html>";
    assert!(scan_document(html).is_err());
}

#[test]
fn test_interleaved_tags_are_malformed() {
    // strict LIFO matching, no closest-name recovery
    assert!(scan_document("<div><span></div></span>").is_err());
}

#[test]
fn test_unterminated_tag_is_malformed() {
    assert!(scan_document("<html><body>text</body").is_err());
}

#[test]
fn test_well_formed_document_without_text() {
    assert_eq!(scan_document("<html><body></body></html>"), Ok(None));
}

#[test]
fn test_analyze_selects_deepest_text() {
    let source = FakeSource(Some(
        "<html><head><title>This is the title.</title></head><body>This is the body.</body></html>",
    ));
    assert_eq!(
        analyze(&source, "http://localhost:8000/example1.html"),
        Outcome::Selected("This is the title.".to_string())
    );
}

#[test]
fn test_analyze_reports_malformed_document() {
    let source = FakeSource(Some("<body><div>Text inside the div.</body></html>"));
    assert_eq!(
        analyze(&source, "http://localhost:8000/example3.html"),
        Outcome::StructurallyInvalid
    );
}

#[test]
fn test_analyze_reports_retrieval_failure() {
    let source = FakeSource(None);
    assert_eq!(
        analyze(&source, "http://localhost:8000/nonexistent.html"),
        Outcome::RetrievalFailed
    );
}

#[test]
fn test_analyze_reports_textless_document() {
    let source = FakeSource(Some("<html><body></body></html>"));
    assert_eq!(
        analyze(&source, "http://localhost:8000/empty.html"),
        Outcome::NoContent
    );
}

#[test]
fn test_outcome_report_lines() {
    assert_eq!(
        Outcome::Selected("This is the title.".to_string()).to_string(),
        "This is the title."
    );
    assert_eq!(Outcome::StructurallyInvalid.to_string(), "malformed HTML");
    assert_eq!(Outcome::NoContent.to_string(), "malformed HTML");
    assert_eq!(Outcome::RetrievalFailed.to_string(), "URL connection error");
}
