use std::collections::HashMap;
use scraper::{ElementRef, Html, Selector};
use url::Url;
use nc_core::{PageSummary, PreviewImage, Result};
use super::utils;

const OG_PREFIX: &str = "og:";

/// Summarise a page from the meta tags in its `<head>`.
///
/// `og:` properties and `name=` metas share one key space and the first value
/// seen for a key wins. Every `og:image` opens a new preview image that the
/// following `og:image:*` properties describe.
pub fn extract_summary(page_url: &str, html: &str) -> Result<PageSummary> {
    let base = utils::parse_url(page_url)?;
    let document = Html::parse_document(html);

    let mut props: HashMap<String, String> = HashMap::new();
    let mut images: Vec<PreviewImage> = Vec::new();

    if let Ok(meta_selector) = Selector::parse("head meta") {
        for meta in document.select(&meta_selector) {
            let Some((key, value)) = meta_property(&meta) else {
                continue;
            };
            if key == "image" || key == "image:url" {
                if key == "image" || images.last().map_or(true, |img| !img.url.is_empty()) {
                    images.push(PreviewImage::default());
                }
                if let Some(image) = images.last_mut() {
                    image.url = absolutize(&base, &value);
                }
            } else if let Some(attr) = key.strip_prefix("image:") {
                if let Some(image) = images.last_mut() {
                    apply_image_attr(image, attr, &value);
                }
            } else {
                props.entry(key).or_insert(value);
            }
        }
    }

    let mut take = |key: &str| props.remove(key).unwrap_or_default();

    let mut title = take("title");
    if title.is_empty() {
        title = utils::extract_text(&document, "head title").unwrap_or_default();
    }

    let keywords = take("keywords")
        .replace(' ', "")
        .split(',')
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    Ok(PageSummary {
        page_type: take("type"),
        url: take("url"),
        title,
        site_name: take("site_name"),
        description: take("description"),
        author: take("author"),
        keywords,
        icon: extract_icon(&document, &base),
        images,
    })
}

fn meta_property(meta: &ElementRef) -> Option<(String, String)> {
    let el = meta.value();
    let name = el
        .attr("name")
        .map(str::to_string)
        .or_else(|| el.attr("property").and_then(|p| p.strip_prefix(OG_PREFIX)).map(str::to_string))?;
    let content = el.attr("content")?;
    if name.is_empty() || content.is_empty() {
        return None;
    }
    Some((name, content.to_string()))
}

fn apply_image_attr(image: &mut PreviewImage, attr: &str, value: &str) {
    match attr {
        "secure_url" if image.secure_url.is_empty() => image.secure_url = value.to_string(),
        "type" if image.mime_type.is_empty() => image.mime_type = value.to_string(),
        "width" if image.width == 0 => image.width = value.trim().parse().unwrap_or(0),
        "height" if image.height == 0 => image.height = value.trim().parse().unwrap_or(0),
        "alt" if image.alt.is_empty() => image.alt = value.to_string(),
        _ => {}
    }
}

fn extract_icon(document: &Html, base: &Url) -> Option<PreviewImage> {
    let selector = Selector::parse("head link[rel='icon']").ok()?;
    let link = document.select(&selector).next()?;
    let el = link.value();

    let mut icon = PreviewImage {
        url: absolutize(base, el.attr("href").unwrap_or_default()),
        mime_type: el.attr("type").unwrap_or_default().to_string(),
        ..PreviewImage::default()
    };
    if let Some((w, h)) = el.attr("sizes").and_then(|s| s.split_once(['x', 'X'])) {
        icon.width = w.trim().parse().unwrap_or(0);
        icon.height = h.trim().parse().unwrap_or(0);
    }
    Some(icon)
}

/// Root-relative paths are resolved against the page; anything else is kept as is.
fn absolutize(base: &Url, href: &str) -> String {
    if href.starts_with('/') {
        utils::resolve(base, href)
    } else {
        href.to_string()
    }
}
