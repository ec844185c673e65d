// src/models.rs
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::TagError;

/// Number of weight buckets a cloud is split into (`tag-nube-1` .. `tag-nube-8`).
pub const CLOUD_WEIGHTS: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    pub name: String,
    pub count: u64,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Anything that can stand in for a tag when only its name matters.
pub trait TagName {
    fn tag_name(&self) -> &str;
}

impl TagName for Tag {
    fn tag_name(&self) -> &str {
        &self.name
    }
}

impl TagName for str {
    fn tag_name(&self) -> &str {
        self
    }
}

impl TagName for String {
    fn tag_name(&self) -> &str {
        self
    }
}

impl<T: TagName + ?Sized> TagName for &T {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }
}

/// A tag paired with its cloud weight, in `1..=CLOUD_WEIGHTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedTag<'a> {
    pub tag: &'a Tag,
    pub weight: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    List,
    Cloud,
    SimpleCloud,
}

impl ListStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::List => "list",
            ListStyle::Cloud => "cloud",
            ListStyle::SimpleCloud => "simple_cloud",
        }
    }
}

impl FromStr for ListStyle {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ListStyle::List),
            "cloud" => Ok(ListStyle::Cloud),
            "simple_cloud" => Ok(ListStyle::SimpleCloud),
            other => Err(TagError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display options for tag links and tag lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the usage count after each link.
    pub show_count: bool,
    /// Limit the generated filter link to open issues.
    pub open_only: bool,
    /// Link to the search page instead of the issue filter.
    pub use_search: bool,
    /// Only read by the list renderer.
    pub style: Option<ListStyle>,
}

impl RenderOptions {
    pub fn with_style(style: ListStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Options handed down to each tag link, with the list style stripped.
    pub fn link_options(&self) -> RenderOptions {
        RenderOptions {
            style: None,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_style_parsing() {
        assert_eq!("list".parse::<ListStyle>().unwrap(), ListStyle::List);
        assert_eq!("cloud".parse::<ListStyle>().unwrap(), ListStyle::Cloud);
        assert_eq!(
            "simple_cloud".parse::<ListStyle>().unwrap(),
            ListStyle::SimpleCloud
        );
        assert!(matches!(
            "bogus".parse::<ListStyle>(),
            Err(TagError::UnknownStyle(s)) if s == "bogus"
        ));
    }

    #[test]
    fn test_link_options_drop_style() {
        let options = RenderOptions {
            show_count: true,
            open_only: true,
            use_search: false,
            style: Some(ListStyle::Cloud),
        };
        let link = options.link_options();
        assert_eq!(link.style, None);
        assert!(link.show_count);
        assert!(link.open_only);
        assert_eq!(options.style, Some(ListStyle::Cloud));
    }

    #[test]
    fn test_tag_name_accessor() {
        let tag = Tag::new("rust", 3);
        assert_eq!(tag.tag_name(), "rust");
        assert_eq!("rust".tag_name(), "rust");
        assert_eq!(String::from("rust").tag_name(), "rust");
    }
}
