//! Rendered HTML pages.
//!
//! Static pages are embedded at compile time; the results page is built
//! with `format!` from the recommendation list or an error message.

use crate::models::TrackRecord;

pub const HOME_HTML: &str = include_str!("pages/home.html");
pub const RECOMMEND_HTML: &str = include_str!("pages/recommend.html");

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Tunematch — Results</title>
    <style>
        body { font-family: sans-serif; max-width: 720px; margin: 4rem auto; padding: 0 1rem; }
        table { border-collapse: collapse; width: 100%; }
        th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #ddd; }
        p.message { color: #b00020; }
        a { color: #1db954; }
    </style>
</head>
<body>
    <h1>Results</h1>
"#;

const PAGE_FOOT: &str = r#"    <p><a href="/knnrecomendation">Try another track</a></p>
</body>
</html>
"#;

/// Results page carrying only a message (the error path).
pub fn message_page(message: &str) -> String {
    format!(
        "{PAGE_HEAD}    <p class=\"message\">{}</p>\n{PAGE_FOOT}",
        escape(message)
    )
}

/// Results page listing the recommended tracks.
pub fn results_page(recommendations: &[TrackRecord]) -> String {
    let mut rows = String::new();
    for record in recommendations {
        rows.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&record.track_name),
            escape(&record.artists),
            escape(&record.track_genre),
            escape(&record.popularity),
        ));
    }

    format!(
        "{PAGE_HEAD}    <table>\n        \
         <tr><th>Track</th><th>Artist</th><th>Genre</th><th>Popularity</th></tr>\n\
         {rows}    </table>\n{PAGE_FOOT}"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
