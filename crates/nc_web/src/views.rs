use html_escape::{encode_double_quoted_attribute, encode_text};
use nc_core::query::SearchEngine;
use nc_core::{QueryLinks, ResultRecord};

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} | newscheck</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">About</a> | <a href=\"/search\">Check an article</a></nav>\n\
         <main>\n{}\n</main>\n</body>\n</html>\n",
        encode_text(title),
        body
    )
}

pub fn about_page() -> String {
    layout(
        "About",
        "<h1>newscheck</h1>\n\
         <p>Paste the address of a news article to see who wrote it, when, for which publication, \
         and which sources it links to.</p>\n\
         <p><a href=\"/search\">Check an article</a></p>",
    )
}

pub fn search_page(message: Option<&str>) -> String {
    let flash = message
        .map(|m| format!("<p class=\"flash\">{}</p>\n", encode_text(m)))
        .unwrap_or_default();
    layout(
        "Check an article",
        &format!(
            "<h1>Check an article</h1>\n{}\
             <form method=\"post\" action=\"/search\">\n\
             <input type=\"text\" name=\"search\" placeholder=\"https://\" size=\"60\">\n\
             <button type=\"submit\">Check</button>\n\
             </form>",
            flash
        ),
    )
}

fn link_list(links: &QueryLinks) -> String {
    SearchEngine::ALL
        .iter()
        .map(|engine| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\">{}</a></li>",
                encode_double_quoted_attribute(links.get(*engine)),
                engine.name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn result_page(record: &ResultRecord) -> String {
    let image = if record.top_image.is_empty() {
        String::new()
    } else {
        format!("<img src=\"{}\" alt=\"\" width=\"480\">\n", encode_double_quoted_attribute(&record.top_image))
    };

    let citations = record
        .citations
        .iter()
        .map(|c| {
            let label = if c.text.trim().is_empty() { &c.href } else { &c.text };
            format!("<li><a href=\"{}\">{}</a></li>", encode_double_quoted_attribute(&c.href), encode_text(label))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "<h1>{title}</h1>\n\
         <p><a href=\"{href}\">{url}</a></p>\n\
         {image}\
         <dl>\n\
         <dt>Author(s)</dt><dd>{authors}</dd>\n\
         <dt>Published</dt><dd>{date}</dd>\n\
         <dt>Days since publication</dt><dd>{days}</dd>\n\
         <dt>Keywords</dt><dd>{keywords}</dd>\n\
         </dl>\n\
         <h2>Summary</h2>\n<p>{summary}</p>\n\
         <h2>Search the web for this story</h2>\n<ul>\n{search_links}\n</ul>\n\
         <h2>Source</h2>\n\
         <dl>\n\
         <dt>Publication</dt><dd>{source_name}</dd>\n\
         <dt>Home page</dt><dd>{source_url}</dd>\n\
         <dt>Description</dt><dd>{source_description}</dd>\n\
         </dl>\n\
         <h3>Find out more about this source</h3>\n<ul>\n{source_links}\n</ul>\n\
         <h2>Citations ({count})</h2>\n<ul>\n{citations}\n</ul>",
        title = encode_text(&record.title),
        href = encode_double_quoted_attribute(&record.url),
        url = encode_text(&record.url),
        image = image,
        authors = encode_text(&record.authors),
        date = encode_text(&record.publish_date),
        days = encode_text(&record.days_since_publish),
        keywords = encode_text(&record.keywords),
        summary = encode_text(&record.summary),
        search_links = link_list(&record.search_links),
        source_name = encode_text(&record.source_name),
        source_url = encode_text(&record.source_url),
        source_description = encode_text(&record.source_description),
        source_links = link_list(&record.source_links),
        count = record.citation_count,
        citations = citations,
    );

    layout(&record.title, &body)
}
