use scraper::{Html, Selector};
use nc_core::{Citation, Error, Result};

/// Collect the bare outbound links of an article body.
///
/// A link counts as a citation when its only attribute is an absolute
/// `http(s)` `href`. Links decorated with classes, ids, rel or tracking
/// attributes are treated as site chrome and skipped, which also drops some
/// genuine citations.
pub fn harvest_citations(html: &str) -> Result<Vec<Citation>> {
    if html.trim().is_empty() {
        return Err(Error::CitationExtraction("article has no HTML".to_string()));
    }
    // html5ever always synthesises a body, so look at the source itself
    if !has_body_tag(html) {
        return Err(Error::CitationExtraction("article HTML has no body element".to_string()));
    }

    let document = Html::parse_document(html);
    let selector = Selector::parse("body a")
        .map_err(|e| Error::CitationExtraction(format!("Invalid selector: {}", e)))?;

    Ok(document
        .select(&selector)
        .filter_map(|el| {
            let element = el.value();
            if element.attrs().count() != 1 {
                return None;
            }
            let href = element.attr("href")?;
            href.starts_with("http").then(|| Citation {
                href: href.to_string(),
                text: el.text().collect::<String>(),
            })
        })
        .collect())
}

/// Whether the raw source opens a real `<body>` element, ignoring comments
/// and the contents of `script`/`style` blocks.
fn has_body_tag(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    let mut rest = lower.as_str();
    while let Some(start) = rest.find('<') {
        rest = &rest[start..];
        if let Some(comment) = rest.strip_prefix("<!--") {
            match comment.find("-->") {
                Some(end) => {
                    rest = &comment[end + 3..];
                    continue;
                }
                None => return false,
            }
        }
        if let Some(raw) = ["script", "style"].iter().find(|name| opens_tag(rest, name)) {
            match rest.find(&format!("</{}", raw)) {
                Some(end) => {
                    rest = &rest[end + 2..];
                    continue;
                }
                None => return false,
            }
        }
        if opens_tag(rest, "body") {
            return true;
        }
        rest = &rest[1..];
    }
    false
}

fn opens_tag(source: &str, name: &str) -> bool {
    source
        .strip_prefix('<')
        .and_then(|s| s.strip_prefix(name))
        .map_or(false, |s| {
            matches!(s.bytes().next(), Some(b) if b == b'>' || b == b'/' || b.is_ascii_whitespace())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn citation(href: &str, text: &str) -> Citation {
        Citation {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_only_bare_links_are_kept() {
        let html = r#"<body><a href="https://x.com">X</a><a class="nav" href="https://y.com">Y</a></body>"#;
        assert_eq!(harvest_citations(html).unwrap(), vec![citation("https://x.com", "X")]);
    }

    #[test]
    fn test_relative_and_attributeless_links_are_skipped() {
        let html = r#"
            <html><body>
                <a href="/local">Local</a>
                <a>No href</a>
                <a name="anchor">Named</a>
                <a href="mailto:someone@example.com">Mail</a>
                <p>Read <a href="http://plain.example.org/doc">the <b>doc</b></a>.</p>
                <a href="https://x.com"></a>
            </body></html>
        "#;
        assert_eq!(
            harvest_citations(html).unwrap(),
            vec![citation("http://plain.example.org/doc", "the doc"), citation("https://x.com", "")]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"<body><a href="https://x.com">one</a><a href="https://x.com">two</a><a href="https://x.com">one</a></body>"#;
        let citations = harvest_citations(html).unwrap();
        assert_eq!(citations.len(), 3);
        assert_eq!(citations[0], citations[2]);
    }

    #[test]
    fn test_links_in_head_are_ignored() {
        let html = r#"<html><head><link href="https://x.com/style.css"></head><BODY><a href="https://z.com">Z</a></BODY></html>"#;
        assert_eq!(harvest_citations(html).unwrap(), vec![citation("https://z.com", "Z")]);
    }

    #[test]
    fn test_missing_body_is_an_error() {
        assert!(matches!(harvest_citations(""), Err(Error::CitationExtraction(_))));
        assert!(matches!(harvest_citations("   \n"), Err(Error::CitationExtraction(_))));
        assert!(matches!(
            harvest_citations(r#"<div><a href="https://x.com">X</a></div>"#),
            Err(Error::CitationExtraction(_))
        ));
    }

    #[test]
    fn test_body_lookalikes_are_not_a_body() {
        let lookalikes = [
            r#"<div><bodyguard><a href="https://x.com">X</a></bodyguard></div>"#,
            r#"<!-- <body> --><div><a href="https://x.com">X</a></div>"#,
            r#"<script>document.write("<body>")</script><a href="https://x.com">X</a>"#,
            r#"<style>/* <body> */</style><p>text</p>"#,
        ];
        for html in lookalikes {
            assert!(matches!(harvest_citations(html), Err(Error::CitationExtraction(_))), "{}", html);
        }
    }

    #[test]
    fn test_body_tag_variants_are_found() {
        assert!(has_body_tag("<BODY>"));
        assert!(has_body_tag(r#"<body class="story">"#));
        assert!(has_body_tag("<body\n>"));
        assert!(has_body_tag("<!-- intro --><script>var a = '<x>';</script><body>"));
        assert!(!has_body_tag("<!-- unterminated <body>"));
    }
}
