// src/utils/sort.rs
use crate::config::TagSettings;
use crate::models::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    CountAsc,
    CountDesc,
}

impl SortKey {
    /// Parses a `sort_by:sort_order` pair such as `count:desc`.
    pub fn parse(sorting: &str) -> Option<Self> {
        match sorting {
            "name:asc" => Some(SortKey::NameAsc),
            "name:desc" => Some(SortKey::NameDesc),
            "count:asc" => Some(SortKey::CountAsc),
            "count:desc" => Some(SortKey::CountDesc),
            _ => None,
        }
    }

    /// Sort order configured in `settings`, falling back to ascending names.
    pub fn from_settings(settings: &TagSettings) -> Self {
        let sorting = format!("{}:{}", settings.issues_sort_by, settings.issues_sort_order);
        SortKey::parse(&sorting).unwrap_or_else(|| {
            tracing::warn!("Unknown tag sorting option: <{}>", sorting);
            SortKey::NameAsc
        })
    }

    pub fn sort(&self, tags: &mut [&Tag]) {
        match self {
            SortKey::NameAsc => tags.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::NameDesc => tags.sort_by(|a, b| b.name.cmp(&a.name)),
            SortKey::CountAsc => tags.sort_by_key(|t| t.count),
            SortKey::CountDesc => tags.sort_by(|a, b| b.count.cmp(&a.count)),
        }
    }
}
