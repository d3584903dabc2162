//! Page entity: an external link filed under a category.

/// A linked resource belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub views: i32,
}

impl Page {
    /// Creates a new Page instance.
    pub fn new(id: i64, category_id: i64, title: String, url: String, views: i32) -> Self {
        Self {
            id,
            category_id,
            title,
            url,
            views,
        }
    }
}

/// A validated page that is not yet attached to a category.
///
/// Produced by the page form; the owning category is resolved afterwards and
/// the draft is turned into a [`NewPage`] with [`PageDraft::attach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub title: String,
    pub url: String,
}

impl PageDraft {
    /// Attaches the draft to a category. The view counter always starts at zero.
    pub fn attach(self, category_id: i64) -> NewPage {
        NewPage {
            category_id,
            title: self.title,
            url: self.url,
            views: 0,
        }
    }
}

/// Input data for creating a new page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    pub category_id: i64,
    pub title: String,
    pub url: String,
    pub views: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_creation() {
        let page = Page::new(
            1,
            2,
            "Official Python Tutorial".to_string(),
            "http://docs.python.org/2/tutorial/".to_string(),
            12,
        );

        assert_eq!(page.id, 1);
        assert_eq!(page.category_id, 2);
        assert_eq!(page.views, 12);
    }

    #[test]
    fn test_attach_draft_resets_views() {
        let draft = PageDraft {
            title: "Bottle".to_string(),
            url: "http://bottlepy.org/docs/dev/".to_string(),
        };

        let new_page = draft.attach(9);

        assert_eq!(new_page.category_id, 9);
        assert_eq!(new_page.title, "Bottle");
        assert_eq!(new_page.url, "http://bottlepy.org/docs/dev/");
        assert_eq!(new_page.views, 0);
    }
}
