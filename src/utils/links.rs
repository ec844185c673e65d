// src/utils/links.rs
use std::fmt::Write;

/// One condition of an issue filter, e.g. `tags = rust` or `status_id o`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: &'static str,
    pub operator: &'static str,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(field: &'static str, operator: &'static str, values: Vec<String>) -> Self {
        Self {
            field,
            operator,
            values,
        }
    }

    pub fn tag(name: &str) -> Self {
        Filter::new("tags", "=", vec![name.to_string()])
    }

    pub fn open_status() -> Self {
        Filter::new("status_id", "o", Vec::new())
    }
}

/// Where generated tag links point to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkContext {
    pub project: Option<String>,
}

impl LinkContext {
    pub fn new(project: Option<String>) -> Self {
        Self { project }
    }

    pub fn for_project(project: &str) -> Self {
        Self::new(Some(project.to_string()))
    }

    fn scoped(&self, path: &str) -> String {
        match &self.project {
            Some(project) => format!("/projects/{}/{}", urlencoding::encode(project), path),
            None => format!("/{}", path),
        }
    }

    /// Issue list URL with the given filters applied.
    pub fn filter_url(&self, filters: &[Filter]) -> String {
        let mut url = self.scoped("issues");
        url.push_str("?set_filter=1");
        for filter in filters {
            let _ = write!(
                url,
                "&f[]={field}&op[{field}]={op}",
                field = filter.field,
                op = urlencoding::encode(filter.operator)
            );
            for value in &filter.values {
                let _ = write!(url, "&v[{}][]={}", filter.field, urlencoding::encode(value));
            }
        }
        url
    }

    /// Search URL over issues and wiki pages.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&wiki_pages=1&issues=1",
            self.scoped("search"),
            urlencoding::encode(query)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_url_for_tag() {
        let links = LinkContext::for_project("ecookbook");
        assert_eq!(
            links.filter_url(&[Filter::tag("bug")]),
            "/projects/ecookbook/issues?set_filter=1&f[]=tags&op[tags]=%3D&v[tags][]=bug"
        );
    }

    #[test]
    fn test_filter_url_open_only() {
        let links = LinkContext::for_project("ecookbook");
        assert_eq!(
            links.filter_url(&[Filter::tag("bug"), Filter::open_status()]),
            "/projects/ecookbook/issues?set_filter=1&f[]=tags&op[tags]=%3D&v[tags][]=bug&f[]=status_id&op[status_id]=o"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let links = LinkContext::for_project("ecookbook");
        assert_eq!(
            links.search_url("needs review&more"),
            "/projects/ecookbook/search?q=needs%20review%26more&wiki_pages=1&issues=1"
        );
        assert_eq!(LinkContext::default().search_url("x"), "/search?q=x&wiki_pages=1&issues=1");
    }

    #[test]
    fn test_global_filter_url() {
        assert_eq!(
            LinkContext::default().filter_url(&[Filter::tag("a b")]),
            "/issues?set_filter=1&f[]=tags&op[tags]=%3D&v[tags][]=a%20b"
        );
    }
}
