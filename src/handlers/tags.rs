// src/handlers/tags.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::parse_flag;
use crate::error::TagError;
use crate::models::{ListStyle, RenderOptions};
use crate::templates::{self, TagRenderer};
use crate::utils::links::LinkContext;
use crate::utils::validation::validate_project_id;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TagsQuery {
    pub style: Option<String>,
    pub show_count: Option<String>,
    pub open_only: Option<String>,
    pub use_search: Option<String>,
}

impl TagsQuery {
    /// Display options requested by the query string; clouds by default.
    pub fn render_options(&self) -> Result<RenderOptions, (StatusCode, String)> {
        let style = match self.style.as_deref() {
            None | Some("") => ListStyle::Cloud,
            Some(style) => style
                .parse::<ListStyle>()
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        };
        let flag = |value: &Option<String>| value.as_deref().map(parse_flag).unwrap_or(false);

        Ok(RenderOptions {
            show_count: flag(&self.show_count),
            open_only: flag(&self.open_only),
            use_search: flag(&self.use_search),
            style: Some(style),
        })
    }
}

// Options are validated before rendering, so a failure here is on our side
fn render_failure(e: TagError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

// Tags of a single project
pub async fn project_tags_page(
    State(state): State<Arc<AppState>>,
    Path(project): Path<String>,
    Query(query): Query<TagsQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    validate_project_id(&project).map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    let options = query.render_options()?;

    let tags = state.catalog.project_tags(&project).unwrap_or_default();
    let links = LinkContext::for_project(&project);
    let renderer = TagRenderer::new(&state.config.settings, &links);

    templates::tags::render(&renderer, Some(&project), tags, &options)
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render tags for {}: {}", project, e);
            render_failure(e)
        })
}

// Tags across all projects
pub async fn tags_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TagsQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let options = query.render_options()?;

    let tags = state.catalog.all_tags();
    let links = LinkContext::default();
    let renderer = TagRenderer::new(&state.config.settings, &links);

    templates::tags::render(&renderer, None, &tags, &options)
        .map(Html)
        .map_err(|e| {
            tracing::error!("Failed to render tags: {}", e);
            render_failure(e)
        })
}

pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TagsQuery::default().render_options().unwrap();
        assert_eq!(options, RenderOptions::with_style(ListStyle::Cloud));
    }

    #[test]
    fn test_query_options() {
        let query = TagsQuery {
            style: Some("simple_cloud".to_string()),
            show_count: Some("1".to_string()),
            open_only: Some("true".to_string()),
            use_search: Some("0".to_string()),
        };
        let options = query.render_options().unwrap();
        assert_eq!(options.style, Some(ListStyle::SimpleCloud));
        assert!(options.show_count);
        assert!(options.open_only);
        assert!(!options.use_search);
    }

    #[test]
    fn test_render_failure_is_server_error() {
        let (status, message) = render_failure(TagError::InvalidColor("#zz".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("#zz"));
    }

    #[test]
    fn test_unknown_style_is_bad_request() {
        let query = TagsQuery {
            style: Some("bogus".to_string()),
            ..TagsQuery::default()
        };
        let (status, message) = query.render_options().unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(message.contains("bogus"));
    }
}
