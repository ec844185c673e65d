// src/templates/tag_link.rs
use super::{html_attrs, html_escape};
use crate::config::TagSettings;
use crate::models::{RenderOptions, Tag};
use crate::utils::color::background_color;
use crate::utils::links::{Filter, LinkContext};

/// Renders tag links and tag lists for one request.
#[derive(Debug, Clone, Copy)]
pub struct TagRenderer<'a> {
    pub settings: &'a TagSettings,
    pub links: &'a LinkContext,
}

impl<'a> TagRenderer<'a> {
    pub fn new(settings: &'a TagSettings, links: &'a LinkContext) -> Self {
        Self { settings, links }
    }

    /// Renders a single tag as a labelled link.
    ///
    /// With colors enabled the label gets a background derived from the tag
    /// name and a readable text color on top of it. The link points to the
    /// issue filter for the tag, or to the search page with `use_search`.
    pub fn render_tag_link(&self, tag: &Tag, options: &RenderOptions) -> String {
        let mut filters = vec![Filter::tag(&tag.name)];
        if options.open_only {
            filters.push(Filter::open_status());
        }

        let (label_class, label_style, link_style) = if self.settings.issues_use_colors {
            let bg = background_color(tag);
            let fg = bg.contrast();
            (
                "tag-label-color",
                format!("background-color: {}", bg),
                format!("color: {}", fg),
            )
        } else {
            ("tag-label", String::new(), String::new())
        };

        let href = if options.use_search {
            self.links.search_url(&tag.name)
        } else {
            self.links.filter_url(&filters)
        };

        let mut content = format!(
            r#"<a href="{}"{}>{}</a>"#,
            html_escape(&href),
            html_attrs("", &link_style),
            html_escape(&tag.name)
        );
        if options.show_count {
            content.push_str(&format!(
                r#"<span{}>({})</span>"#,
                html_attrs("tag-count", &link_style),
                tag.count
            ));
        }

        format!(
            r#"<span{}>{}</span>"#,
            html_attrs(label_class, &label_style),
            content
        )
    }
}
