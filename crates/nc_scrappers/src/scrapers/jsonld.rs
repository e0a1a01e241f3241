use scraper::{Html, Selector};
use serde_json::Value;

/// Every JSON object found in `application/ld+json` scripts, with top-level
/// arrays and `@graph` containers flattened.
fn json_ld_objects(document: &Html) -> Vec<Value> {
    let mut objects = Vec::new();

    if let Ok(script_selector) = Selector::parse("script[type='application/ld+json']") {
        for script in document.select(&script_selector) {
            if let Ok(json) = serde_json::from_str::<Value>(script.text().collect::<String>().trim()) {
                flatten(json, &mut objects);
            }
        }
    }

    objects
}

fn flatten(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        Value::Object(mut obj) => {
            if let Some(graph) = obj.remove("@graph") {
                flatten(graph, out);
            }
            out.push(Value::Object(obj));
        }
        _ => {}
    }
}

/// Extracts authors from JSON-LD metadata in the HTML document.
/// Returns a vector of author names.
pub fn extract_authors(document: &Html) -> Vec<String> {
    let mut authors = Vec::new();

    for json in json_ld_objects(document) {
        if let Some(author) = json.get("author") {
            match author {
                Value::Array(arr) => {
                    for author_obj in arr {
                        if let Some(name) = author_name(author_obj) {
                            authors.push(name);
                        }
                    }
                }
                other => {
                    if let Some(name) = author_name(other) {
                        authors.push(name);
                    }
                }
            }
        }
    }

    authors
}

fn author_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::Object(obj) => obj.get("name").and_then(|n| n.as_str())?,
        Value::String(s) => s.as_str(),
        _ => return None,
    };
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Raw `datePublished` value of the first JSON-LD object carrying one.
pub fn extract_date_published(document: &Html) -> Option<String> {
    json_ld_objects(document)
        .iter()
        .find_map(|json| json.get("datePublished").and_then(|d| d.as_str()).map(str::to_string))
}
