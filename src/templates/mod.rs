// src/templates/mod.rs
pub mod tag_link;
pub mod tags;
pub mod tags_list;

mod layout;

pub use layout::render_page;
pub use tag_link::TagRenderer;

// Helper function for HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders ` class="..." style="..."`, skipping empty values.
pub fn html_attrs(class: &str, style: &str) -> String {
    let mut attrs = String::new();
    if !class.is_empty() {
        attrs.push_str(&format!(r#" class="{}""#, html_escape(class)));
    }
    if !style.is_empty() {
        attrs.push_str(&format!(r#" style="{}""#, html_escape(style)));
    }
    attrs
}
