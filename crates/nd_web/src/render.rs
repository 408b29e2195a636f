//! Server-side HTML for the front page: filter controls plus a card grid,
//! assembled into one self-contained document with an embedded stylesheet.

use nd_core::{Article, Category, HeadlineQuery, COUNTRIES};

const STYLESHEET: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;background:#f9fafb;color:#111827}
header{background:linear-gradient(to right,#1d4ed8,#3730a3);color:#fff;padding:1.5rem 1rem;box-shadow:0 1px 3px rgba(0,0,0,.2)}
header h1{margin:0;text-align:center;font-size:1.875rem}
.controls{display:flex;flex-wrap:wrap;justify-content:center;gap:1rem;margin:1.5rem auto;max-width:72rem;padding:0 1rem}
.controls select{padding:.5rem 1rem;border:1px solid #1d4ed8;border-radius:.25rem;background:#fff;font-size:.875rem}
.categories{display:flex;flex-wrap:wrap;gap:.5rem}
.pill{padding:.5rem 1rem;border-radius:9999px;font-size:.875rem;text-decoration:none;border:1px solid #1d4ed8;color:#1d4ed8;background:#fff}
.pill.active{background:#1d4ed8;color:#fff}
.notice{max-width:72rem;margin:0 auto 1rem;padding:0 1rem;text-align:center;color:#b91c1c}
.grid{display:grid;grid-template-columns:1fr;gap:1.5rem;max-width:72rem;margin:0 auto;padding:0 1rem 2rem}
@media(min-width:640px){.grid{grid-template-columns:repeat(2,1fr)}}
@media(min-width:1024px){.grid{grid-template-columns:repeat(3,1fr)}}
.card{background:#fff;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.1);overflow:hidden;display:flex;flex-direction:column}
.card img{height:12rem;width:100%;object-fit:cover}
.no-image{height:12rem;display:flex;flex-direction:column;align-items:center;justify-content:center;background:#e5e7eb;color:#9ca3af;font-size:.875rem}
.no-image svg{width:3rem;height:3rem;margin-bottom:.5rem}
.card-body{padding:1rem;display:flex;flex-direction:column;flex-grow:1}
.card-body h2{margin:0 0 .25rem;font-size:1.125rem;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden}
.source{margin:0 0 .5rem;font-size:.875rem;color:#6b7280}
.description{margin:0;font-size:.875rem;color:#374151;flex-grow:1;display:-webkit-box;-webkit-line-clamp:3;-webkit-box-orient:vertical;overflow:hidden}
.more{display:inline-block;margin-top:1rem;font-size:.875rem;color:#2563eb;text-decoration:none}
.more:hover{text-decoration:underline}
footer{text-align:center;font-size:.875rem;color:#6b7280;margin-top:2.5rem;padding:1.5rem 0}
footer a{color:#2563eb;text-decoration:none}
"#;

const NO_IMAGE_BLOCK: &str = r#"<div class="no-image">
<svg fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
<path stroke-linecap="round" stroke-linejoin="round" d="M3 7v10a4 4 0 004 4h10a4 4 0 004-4V7a4 4 0 00-4-4H7a4 4 0 00-4 4z"/>
<path stroke-linecap="round" stroke-linejoin="round" d="M8 11a4 4 0 018 0"/>
</svg>
<span>No Image</span>
</div>
"#;

pub fn render_page(query: &HeadlineQuery, articles: &[Article], notice: Option<&str>) -> String {
    let mut page = String::with_capacity(8 * 1024);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>World News Today</title>\n");
    page.push_str("<style>");
    page.push_str(STYLESHEET);
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str("<header><h1>🌐 World News Today</h1></header>\n");
    page.push_str(&render_controls(query));
    if let Some(notice) = notice {
        page.push_str(&format!("<p class=\"notice\">{}</p>\n", escape_html(notice)));
    }
    page.push_str("<main class=\"grid\">\n");
    for article in articles {
        page.push_str(&render_card(article));
    }
    page.push_str("</main>\n");
    page.push_str(
        "<footer>Powered by <a href=\"https://newsapi.org\">NewsAPI.org</a></footer>\n",
    );
    page.push_str("</body>\n</html>\n");
    page
}

/// Country dropdown and the category pill row. The dropdown sits in a GET
/// form that resubmits on change and carries the current category along in a
/// hidden field, so either control navigates with both filters intact.
fn render_controls(query: &HeadlineQuery) -> String {
    let mut controls = String::new();
    controls.push_str("<div class=\"controls\">\n<form method=\"get\" action=\"/\">\n");
    controls.push_str("<select name=\"country\" onchange=\"this.form.submit()\">\n");
    for country in &COUNTRIES {
        let selected = if country.code == query.country {
            " selected"
        } else {
            ""
        };
        controls.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            country.code, selected, country.name
        ));
    }
    controls.push_str("</select>\n");
    controls.push_str(&format!(
        "<input type=\"hidden\" name=\"category\" value=\"{}\">\n",
        escape_html(&query.category)
    ));
    controls.push_str("<noscript><button type=\"submit\">Go</button></noscript>\n</form>\n");
    controls.push_str("<nav class=\"categories\">\n");
    for category in &Category::ALL {
        let class = if category.as_str() == query.category {
            "pill active"
        } else {
            "pill"
        };
        controls.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>\n",
            class,
            escape_html(&filter_href(&query.country, category.as_str())),
            category.label()
        ));
    }
    controls.push_str("</nav>\n</div>\n");
    controls
}

fn render_card(article: &Article) -> String {
    let mut card = String::new();
    card.push_str("<article class=\"card\">\n");
    match article.url_to_image.as_deref() {
        Some(src) => card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_html(src),
            escape_html(&article.title)
        )),
        None => card.push_str(NO_IMAGE_BLOCK),
    }
    card.push_str("<div class=\"card-body\">\n");
    card.push_str(&format!("<h2>{}</h2>\n", escape_html(&article.title)));
    card.push_str(&format!(
        "<p class=\"source\">{}</p>\n",
        escape_html(&article.source.name)
    ));
    card.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_html(article.description.as_deref().unwrap_or_default())
    ));
    card.push_str(&format!(
        "<a class=\"more\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Read more →</a>\n",
        escape_html(&article.url)
    ));
    card.push_str("</div>\n</article>\n");
    card
}

fn filter_href(country: &str, category: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("country", country)
        .append_pair("category", category)
        .finish();
    format!("/?{query}")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
