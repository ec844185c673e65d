// src/templates/tags.rs
use super::{html_escape, render_page, TagRenderer};
use crate::error::Result;
use crate::models::{RenderOptions, Tag};

/// Full tags page for a project, or for all projects when `project` is `None`.
pub fn render(
    renderer: &TagRenderer<'_>,
    project: Option<&str>,
    tags: &[Tag],
    options: &RenderOptions,
) -> Result<String> {
    let tags_html = if tags.is_empty() {
        r#"<div class="empty-state">
            <p>No tags found.</p>
        </div>"#
            .to_string()
    } else {
        renderer.render_tags_list(tags, options)?
    };

    let title = match project {
        Some(project) => format!("Tags in {}", project),
        None => "Tags".to_string(),
    };

    let content = format!(
        r#"
    <h1>{}</h1>
    <p class="subtitle">{} tags</p>

    {}
    "#,
        html_escape(&title),
        tags.len(),
        tags_html
    );

    Ok(render_page(&title, &content))
}
