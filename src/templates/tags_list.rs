// src/templates/tags_list.rs
use super::{html_attrs, TagRenderer};
use crate::error::{Result, TagError};
use crate::models::{ListStyle, RenderOptions, Tag, CLOUD_WEIGHTS};
use crate::utils::cloud::{snowball, weigh};
use crate::utils::sort::SortKey;

impl<'a> TagRenderer<'a> {
    /// Renders a list of tags.
    ///
    /// Lists become a `ul` with one `li` per tag, clouds a `div` with one
    /// `span` per tag. Every item carries a `tag-nube-N` class where `N` is
    /// its weight. Plain clouds are reordered so the leading tags of the
    /// configured sort end up in the middle. An empty collection renders
    /// nothing.
    pub fn render_tags_list<'t, I>(&self, tags: I, options: &RenderOptions) -> Result<String>
    where
        I: IntoIterator<Item = &'t Tag>,
    {
        let mut tags: Vec<&Tag> = tags.into_iter().collect();
        if tags.is_empty() {
            return Ok(String::new());
        }

        let style = options
            .style
            .ok_or_else(|| TagError::UnknownStyle(String::new()))?;
        let link_options = options.link_options();

        SortKey::from_settings(self.settings).sort(&mut tags);

        let (list_el, item_el, list_style, item_style) = match style {
            ListStyle::List => ("ul", "li", "", ""),
            ListStyle::SimpleCloud => ("div", "span", "text-align: left;", "font-size: 1em;"),
            ListStyle::Cloud => {
                tags = snowball(tags);
                ("div", "span", "", "")
            }
        };

        let items = weigh(&tags, CLOUD_WEIGHTS)
            .into_iter()
            .map(|weighted| {
                format!(
                    "<{item}{attrs}>{link}</{item}>",
                    item = item_el,
                    attrs = html_attrs(&format!("tag-nube-{}", weighted.weight), item_style),
                    link = self.render_tag_link(weighted.tag, &link_options)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!("Rendered {} tags as {}", tags.len(), style);

        Ok(format!(
            "<{list}{attrs}>{items}</{list}>",
            list = list_el,
            attrs = html_attrs("tags", list_style),
            items = items
        ))
    }
}
