// src/templates/layout.rs
use super::html_escape;

const TAG_STYLES: &str = r#"
        .tag-label, .tag-label-color {
            display: inline-block;
            padding: 0 0.4em;
            border-radius: 3px;
            white-space: nowrap;
        }
        .tag-label-color a { text-decoration: none; }
        .tag-count { margin-left: 0.25em; font-size: 0.8em; }
        ul.tags { list-style: none; padding: 0; }
        ul.tags li { margin: 0.25em 0; }
        div.tags { text-align: center; line-height: 2em; }
        .tag-nube-1 { font-size: 0.8em; }
        .tag-nube-2 { font-size: 0.9em; }
        .tag-nube-3 { font-size: 1em; }
        .tag-nube-4 { font-size: 1.1em; }
        .tag-nube-5 { font-size: 1.2em; }
        .tag-nube-6 { font-size: 1.3em; }
        .tag-nube-7 { font-size: 1.4em; }
        .tag-nube-8 { font-size: 1.5em; }"#;

pub fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Tags</title>
    <style>{}
    </style>
</head>
<body>
    <main class="main">
        <div class="container">
            {}
        </div>
    </main>
</body>
</html>"#,
        html_escape(title),
        TAG_STYLES,
        content
    )
}
