//! HTML rendering for the page transport.
//!
//! The page is driven by htmx: the two mutating actions answer with
//! [`update_fragment`], whose blocks replace `#cards-grid` and `#card-info`
//! out of band.

mod escape;

pub use escape::escape_html;

use crate::domain::{CardView, ReadingView};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.3";
const TAILWIND_HREF: &str = "https://cdn.jsdelivr.net/npm/tailwindcss/dist/tailwind.min.css";

/// Full page for the `view` action.
pub fn index_page(view: &ReadingView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>UnfoldFate</title>
    <script src="{HTMX_SRC}"></script>
    <link href="{TAILWIND_HREF}" rel="stylesheet">
</head>
<body class="bg-gray-100">
<div class="max-w-6xl mx-auto p-4">
    <h1 class="text-3xl font-bold mb-4 text-center">UnfoldFate</h1>
    <button hx-post="/new-reading" hx-swap="none" class="mb-4 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600">
        New Reading
    </button>
    <div id="cards-grid">
{grid}
    </div>
    <div id="card-info" class="mt-4">
{info}
    </div>
</div>
</body>
</html>
"#,
        grid = cards_grid(view),
        info = card_info(view),
    )
}

/// Out-of-band swap returned by `new reading` and `select card`.
pub fn update_fragment(view: &ReadingView) -> String {
    format!(
        r#"<div id="cards-grid" hx-swap-oob="true">
{grid}
</div>
<div id="card-info" class="mt-4" hx-swap-oob="true">
{info}
</div>
"#,
        grid = cards_grid(view),
        info = card_info(view),
    )
}

fn cards_grid(view: &ReadingView) -> String {
    let mut out = String::from(
        r#"<div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">"#,
    );
    out.push('\n');
    for card in &view.cards {
        out.push_str(&card_cell(card, view.accepting_selection));
    }
    out.push_str("</div>");
    out
}

fn card_cell(card: &CardView, accepting_selection: bool) -> String {
    let alt = match &card.name {
        Some(name) => escape_html(name),
        None => "Face-down card".to_string(),
    };

    let (style, trigger) = if accepting_selection {
        (
            String::new(),
            format!(
                r#" hx-post="/select_card" hx-vals='{{"card_index": "{}"}}' hx-swap="none""#,
                card.position
            ),
        )
    } else {
        (" pointer-events: none;".to_string(), String::new())
    };

    format!(
        r#"    <div class="card" data-position="{position}">
        <img src="{src}" alt="{alt}" class="object-cover border border-white rounded cursor-pointer" style="width:150px; height:230px;{style}"{trigger}>
    </div>
"#,
        position = card.position,
        src = escape_html(&card.image),
    )
}

fn card_info(view: &ReadingView) -> String {
    match &view.revealed {
        Some(card) => format!(
            "<div>\n    <h2 class=\"text-xl font-bold mt-4\">{}</h2>\n    <p class=\"text-lg mt-2\">{}</p>\n</div>",
            escape_html(&card.name),
            escape_html(&card.description),
        ),
        None => "<div></div>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Card, Deck, ReadingSession, DECK_SIZE};

    fn session() -> ReadingSession {
        let cards = (0..DECK_SIZE)
            .map(|i| Card::new(format!("Arcana <{i}>"), format!("Meaning & {i}"), format!("/img/{i}.png")))
            .collect();
        let deck = Arc::new(Deck::new("/img/back.jpg", cards).unwrap());
        ReadingSession::initialize_with_seed(deck, 11)
    }

    #[test]
    fn fresh_page_has_title_button_and_22_backs() {
        let html = index_page(&session().current_view());
        assert!(html.contains("<h1 class=\"text-3xl font-bold mb-4 text-center\">UnfoldFate</h1>"));
        assert!(html.contains("New Reading"));
        assert_eq!(html.matches("class=\"card\"").count(), DECK_SIZE);
        assert_eq!(html.matches("src=\"/img/back.jpg\"").count(), DECK_SIZE);
        assert_eq!(html.matches("hx-post=\"/select_card\"").count(), DECK_SIZE);
        assert!(html.contains("<div id=\"card-info\" class=\"mt-4\">\n<div></div>"));
    }

    #[test]
    fn revealed_fragment_shows_escaped_info_and_disables_clicks() {
        let mut session = session();
        session.select_card(5);
        let view = session.current_view();
        let html = update_fragment(&view);
        let card = view.revealed.as_ref().unwrap();

        assert_eq!(html.matches("hx-swap-oob=\"true\"").count(), 2);
        assert_eq!(html.matches("src=\"/img/back.jpg\"").count(), DECK_SIZE - 1);
        assert!(html.contains(&format!("src=\"{}\"", card.image_filename)));
        assert!(html.contains(&format!("<h2 class=\"text-xl font-bold mt-4\">{}</h2>", escape_html(&card.name))));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("Arcana <"));
        assert!(!html.contains("hx-post=\"/select_card\""));
        assert_eq!(html.matches("pointer-events: none;").count(), DECK_SIZE);
    }
}
