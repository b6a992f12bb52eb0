//! Listing-page extraction.
//!
//! Trending, best-of, recent, profile and search pages all render sounds as
//! repeating `div.instant` cards. Document order reflects the site's own
//! ranking (trending order, search relevance) and is preserved.

use scraper::{Html, Selector};

use crate::extractors::{parse_play_args, Sound};

/// Extract every usable sound card from a listing page.
///
/// Cards missing their title link, or whose play-trigger attribute does not
/// parse to at least one string argument, are dropped entirely; a sound
/// that cannot be played is not useful to return.
pub fn parse_sounds(html: &str, origin: &str) -> Vec<Sound> {
    let document = Html::parse_document(html);

    let card_sel = Selector::parse("div.instant").unwrap();
    let link_sel = Selector::parse("a.instant-link").unwrap();
    let button_sel = Selector::parse("button.small-button").unwrap();

    let mut sounds = Vec::new();

    for card in document.select(&card_sel) {
        let link = match card.select(&link_sel).next() {
            Some(link) => link,
            None => continue,
        };

        let title = link.text().collect::<String>().trim().to_string();
        let path = link.value().attr("href").unwrap_or("");
        // `/en/instant/abc123/` -> `abc123`
        let id = path.rsplit('/').nth(1).unwrap_or("").to_string();

        let onclick = match card
            .select(&button_sel)
            .next()
            .and_then(|button| button.value().attr("onclick"))
        {
            Some(onclick) => onclick,
            None => continue,
        };

        let mp3_path = match parse_play_args(onclick)
            .and_then(|args| args.first().and_then(|arg| arg.as_str().map(str::to_string)))
        {
            Some(mp3_path) => mp3_path,
            None => continue,
        };

        sounds.push(Sound {
            id,
            title,
            url: format!("{origin}{path}"),
            mp3: format!("{origin}{mp3_path}"),
        });
    }

    sounds
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://www.myinstants.com";

    fn card(id: &str, title: &str, onclick: &str) -> String {
        format!(
            r#"<div class="instant">
                <a class="instant-link" href="/en/instant/{id}/">{title}</a>
                <button class="small-button" onclick="{onclick}"></button>
            </div>"#
        )
    }

    #[test]
    fn test_no_cards_yields_empty() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert!(parse_sounds(html, ORIGIN).is_empty());
    }

    #[test]
    fn test_single_card() {
        let html = card("vine-boom", "Vine Boom", "play('/media/sounds/vine-boom.mp3')");
        let sounds = parse_sounds(&html, ORIGIN);

        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].id, "vine-boom");
        assert_eq!(sounds[0].title, "Vine Boom");
        assert_eq!(sounds[0].url, "https://www.myinstants.com/en/instant/vine-boom/");
        assert_eq!(
            sounds[0].mp3,
            "https://www.myinstants.com/media/sounds/vine-boom.mp3"
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let html = format!(
            "{}{}{}",
            card("a", "A", "play('/media/a.mp3')"),
            card("b", "B", "play('/media/b.mp3')"),
            card("c", "C", "play('/media/c.mp3')"),
        );
        let sounds = parse_sounds(&html, ORIGIN);

        let ids: Vec<&str> = sounds.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_card_without_link_is_skipped() {
        let html = format!(
            r#"<div class="instant">
                <button class="small-button" onclick="play('/media/a.mp3')"></button>
            </div>{}"#,
            card("b", "B", "play('/media/b.mp3')"),
        );
        let sounds = parse_sounds(&html, ORIGIN);

        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].id, "b");
    }

    #[test]
    fn test_card_without_button_is_skipped() {
        let html = r#"<div class="instant">
            <a class="instant-link" href="/en/instant/a/">A</a>
        </div>"#;
        assert!(parse_sounds(html, ORIGIN).is_empty());
    }

    #[test]
    fn test_malformed_onclick_excludes_card_only() {
        let html = format!(
            "{}{}",
            card("bad", "Bad", "play('/media/a.mp3'"),
            card("good", "Good", "play('/media/b.mp3')"),
        );
        let sounds = parse_sounds(&html, ORIGIN);

        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].id, "good");
    }

    #[test]
    fn test_empty_argument_list_excludes_card() {
        let html = card("a", "A", "play()");
        assert!(parse_sounds(&html, ORIGIN).is_empty());
    }

    #[test]
    fn test_numeric_first_argument_excludes_card() {
        let html = card("a", "A", "play(42, '/media/a.mp3')");
        assert!(parse_sounds(&html, ORIGIN).is_empty());
    }

    #[test]
    fn test_id_from_detail_path() {
        let html = card("abc123", "Sound", "play('/media/abc.mp3')");
        let sounds = parse_sounds(&html, ORIGIN);
        assert_eq!(sounds[0].id, "abc123");
    }

    #[test]
    fn test_missing_href_yields_empty_id() {
        let html = r#"<div class="instant">
            <a class="instant-link">No href</a>
            <button class="small-button" onclick="play('/media/a.mp3')"></button>
        </div>"#;
        let sounds = parse_sounds(html, ORIGIN);

        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].id, "");
        assert_eq!(sounds[0].url, ORIGIN);
    }
}
