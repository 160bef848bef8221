//! Behaviour of the text-node substitution engine on whole documents.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use fale_proxy::dom::{self, Document};
use fale_proxy::{rewrite_bytes, rewrite_document, rewrite_html, rewrite_html_with_options, Error, Options};

const SAMPLE_HTML: &str = include_str!("fixtures/sample_yale.html");

fn rewritten(html: &str) -> Document {
    let out = rewrite_html(html).expect("rewrite should not fail on &str input");
    dom::parse(&out)
}

#[test]
fn replaces_yale_in_title() {
    let html = r#"
      <html>
        <head>
          <title>Yale University</title>
        </head>
        <body>
          <h1>Test</h1>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains("<title>Fale University</title>"));
}

#[test]
fn replaces_yale_in_body_text() {
    let html = r#"
      <html>
        <head>
          <title>Test</title>
        </head>
        <body>
          <p>Yale University is great.</p>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains("Fale University is great."));
    assert!(!out.contains("Yale University"));
}

#[test]
fn leaves_urls_alone() {
    let html = r#"
      <html>
        <head>
          <title>Test</title>
        </head>
        <body>
          <a href="https://www.yale.edu">Visit Yale</a>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains("https://www.yale.edu"));
    assert!(out.contains("Visit Fale"));
}

#[test]
fn document_without_token_is_unchanged() {
    let html = r#"
      <html>
        <head>
          <title>Test Page</title>
        </head>
        <body>
          <h1>Hello World</h1>
          <p>This is a test page with no references.</p>
        </body>
      </html>
    "#;
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();
    assert!(result.html.contains("<title>Test Page</title>"));
    assert!(result.html.contains("<h1>Hello World</h1>"));
    assert!(result.html.contains("<p>This is a test page with no references.</p>"));
    assert_eq!(result.stats.text_nodes_replaced, 0);

    // Same bytes as a plain round trip through the parser.
    assert_eq!(result.html, dom::serialize(&dom::parse(html)));
}

#[test]
fn replaces_all_three_casings() {
    let html = r#"
      <html>
        <head></head>
        <body>
          <p>YALE University, Yale College, and yale medical school are all part of the same institution.</p>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains("FALE University, Fale College, and fale medical school"));
}

#[test]
fn replaces_every_occurrence_in_one_paragraph() {
    let html = r#"
      <html>
        <body>
          <p>Yale was founded in 1701. Yale is in Connecticut. Go Yale!</p>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains("Fale was founded"));
    assert!(out.contains("Fale is in Connecticut"));
    assert!(out.contains("Go Fale!"));
    assert!(!out.contains("Yale"));
}

#[test]
fn preserves_structure_and_class_names() {
    let html = r#"
      <html>
        <body>
          <div class="yale-section">
            <h2>About Yale</h2>
            <p>Yale University description</p>
          </div>
        </body>
      </html>
    "#;
    let out = rewrite_html(html).unwrap();
    assert!(out.contains(r#"class="yale-section""#));
    assert!(out.contains("<h2>About Fale</h2>"));
    assert!(out.contains("Fale University description"));
}

#[test]
fn empty_body_stays_empty() {
    let html = "<html><head><title>Empty Page</title></head><body></body></html>";
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();
    assert!(result.html.contains("<title>Empty Page</title>"));
    assert!(result.html.contains("<body></body>"));
    assert_eq!(result.stats.text_nodes_visited, 0);
}

#[test]
fn body_with_only_images_is_noop() {
    let html = r#"<html><body><img src="https://www.yale.edu/logo.png" alt="Yale logo"><hr></body></html>"#;
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();
    assert_eq!(result.stats.text_nodes_replaced, 0);
    assert!(result.html.contains(r#"alt="Yale logo""#));
    assert!(result.html.contains(r#"src="https://www.yale.edu/logo.png""#));
}

#[test]
fn nested_text_replaced_like_shallow_text() {
    let html = "<body><p>Yale</p><div><div><p>Yale</p></div></div></body>";
    let doc = rewritten(html);
    let texts: Vec<String> = doc.select("p").iter().map(|p| p.text().to_string()).collect();
    assert_eq!(texts, vec!["Fale", "Fale"]);
}

#[test]
fn embedded_token_is_replaced() {
    let out = rewrite_html("<p>Yalestuff and preyale</p>").unwrap();
    assert!(out.contains("Falestuff and prefale"));
}

#[test]
fn every_attribute_value_survives() {
    let html = r#"<html><head><link rel="canonical" href="https://yale.edu/"></head><body>
        <a href="https://www.yale.edu/about" class="YALE yale" id="Yale" data-x="yale">About Yale</a>
        <input value="Yale" placeholder="YALE">
        </body></html>"#;

    let before = dom::parse(html);
    let after = rewritten(html);

    let attrs = |doc: &Document| -> Vec<Vec<(String, String)>> {
        doc.select("*")
            .iter()
            .map(|el| {
                el.nodes()
                    .first()
                    .map(|n| {
                        n.attrs()
                            .iter()
                            .map(|a| (a.name.local.to_string(), a.value.to_string()))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect()
    };
    assert_eq!(attrs(&before), attrs(&after));
    assert_eq!(&*after.select("a").text(), "About Fale");
}

#[test]
fn comments_are_not_text() {
    let out = rewrite_html("<body><!-- Yale footer --><p>Yale</p></body>").unwrap();
    assert!(out.contains("<!-- Yale footer -->"));
    assert!(out.contains("<p>Fale</p>"));
}

#[test]
fn title_is_rewritten_independent_of_body() {
    let html = "<html><head><title>Yale University Test Page</title></head><body><p>nothing</p></body></html>";
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();
    assert_eq!(result.title.as_deref(), Some("Fale University Test Page"));
    assert!(result.stats.title_written);
    assert_eq!(result.stats.text_nodes_replaced, 0);
}

#[test]
fn sample_page_end_to_end() {
    let doc = rewritten(SAMPLE_HTML);

    assert_eq!(&*doc.select("title").text(), "Fale University Test Page");
    assert_eq!(&*doc.select("h1").text(), "Welcome to Fale University");
    assert!(doc
        .select("p")
        .first()
        .text()
        .starts_with("Fale University is a private"));

    let links = doc.select("a");
    let hrefs: Vec<String> = links
        .iter()
        .filter_map(|a| a.attr("href").map(|h| h.to_string()))
        .collect();
    assert_eq!(
        hrefs,
        vec!["https://www.yale.edu/about", "https://www.yale.edu/admissions"]
    );
    assert_eq!(&*links.first().text(), "About Fale");
    assert!(doc.select("div p").text().contains("Visit FALE today!"));
}

#[test]
fn rewrite_document_mutates_in_place() {
    let doc = dom::parse(SAMPLE_HTML);
    let stats = rewrite_document(&doc, &Options::default());
    assert_eq!(stats.text_nodes_replaced, 6);
    assert!(!dom::serialize(&doc).contains(">About Yale<"));
}

#[test]
fn rewrite_bytes_accepts_utf8() {
    let out = rewrite_bytes("<p>Yale café</p>".as_bytes()).unwrap();
    assert!(out.contains("Fale café"));
}

#[test]
fn rewrite_bytes_rejects_undecodable_input() {
    let result = rewrite_bytes(b"<p>Yale \xFF\xFE</p>");
    assert!(matches!(result, Err(Error::ParseError(_))));
}

#[test]
fn title_inside_body_is_rewritten_once() {
    let html = "<html><head></head><body><title>Yale</title><p>Yale</p></body></html>";
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();

    assert!(result.html.contains("<body><title>Fale</title><p>Fale</p></body>"));
    assert_eq!(result.title.as_deref(), Some("Fale"));
    assert_eq!(result.stats.text_nodes_replaced, 2);
    assert!(result.stats.title_written);
}

#[test]
fn head_title_reported_when_svg_title_follows() {
    let html = "<html><head><title>Yale Home</title></head>\
                <body><svg><title>Yale Icon</title></svg><p>Yale</p></body></html>";
    let result = rewrite_html_with_options(html, &Options::default()).unwrap();

    assert_eq!(result.title.as_deref(), Some("Fale Home"));
    assert!(result.html.contains("<title>Fale Home</title>"));
    assert!(result.html.contains("Fale Icon"));
    assert!(!result.html.contains("Yale"));
    assert!(!result.html.contains("Ffale"));
    // svg title text and paragraph text, both under body
    assert_eq!(result.stats.text_nodes_replaced, 2);
}
