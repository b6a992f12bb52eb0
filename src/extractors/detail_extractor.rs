//! Detail-page extraction.
//!
//! Every field tolerates its own region being absent, independently of the
//! others. The page title is the exception: a detail page without
//! `h1#instant-page-title` is considered malformed and fails as a whole.

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{ScrapeError, ScrapeResult};
use crate::extractors::SoundDetail;

/// Extract the full record from a sound's detail page.
pub fn parse_detail(html: &str, id: &str, origin: &str) -> ScrapeResult<SoundDetail> {
    let document = Html::parse_document(html);

    let title_sel = Selector::parse("h1#instant-page-title").unwrap();
    let title = document
        .select(&title_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or(ScrapeError::PageMalformed {
            element: "h1#instant-page-title",
        })?;

    let button_sel = Selector::parse("button#instant-page-button-element").unwrap();
    let mp3 = document
        .select(&button_sel)
        .next()
        .and_then(|el| el.value().attr("data-url"))
        .map(|path| format!("{origin}{path}"));

    let description_sel = Selector::parse("div#instant-page-description").unwrap();
    let description = document
        .select(&description_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let tag_sel = Selector::parse("div#instant-page-tags a").unwrap();
    let tags: Vec<String> = document
        .select(&tag_sel)
        .map(|a| {
            let text = a.text().collect::<String>().trim().to_string();
            match text.strip_prefix('#') {
                Some(stripped) => stripped.to_string(),
                None => text,
            }
        })
        .collect();

    let favorites = parse_favorites(&document);
    let views = parse_views(&document);

    let uploader_sel = Selector::parse(r#"a[href*="/profile/"]"#).unwrap();
    let uploader_link = document.select(&uploader_sel).next();
    let uploader = uploader_link.map(|a| a.text().collect::<String>().trim().to_string());
    let uploader_url = uploader_link
        .and_then(|a| a.value().attr("href"))
        .map(|href| format!("{origin}{href}"));

    Ok(SoundDetail {
        id: id.to_string(),
        url: format!("{origin}/en/instant/{id}"),
        title,
        mp3,
        description,
        tags,
        favorites,
        views,
        uploader,
        uploader_url,
    })
}

/// First digit run inside the likes region's `<b>` element, or 0.
fn parse_favorites(document: &Html) -> u64 {
    let likes_sel = Selector::parse("div#instant-page-likes b").unwrap();
    let digits = Regex::new(r"\d+").unwrap();

    document
        .select(&likes_sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .and_then(|text| digits.find(&text).map(|m| m.as_str().to_string()))
        .and_then(|run| run.parse().ok())
        .unwrap_or(0)
}

/// First text node anywhere in the document matching "<n> views", or 0.
fn parse_views(document: &Html) -> u64 {
    let views_re = Regex::new(r"(\d+)\s*views").unwrap();

    for text in document.root_element().text() {
        if let Some(caps) = views_re.captures(text) {
            return caps[1].parse().unwrap_or(0);
        }
    }

    0
}
