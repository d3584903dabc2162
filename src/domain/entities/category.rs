//! Category entity: a named grouping of pages.

/// A named grouping of pages with a popularity counter.
///
/// Names are unique across the catalog. The URL-safe form of the name is
/// derived on demand via [`crate::utils::slug::encode`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub likes: i32,
}

impl Category {
    /// Creates a new Category instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let category = Category::new(1, "Other Frameworks".to_string(), 32);
    /// ```
    pub fn new(id: i64, name: String, likes: i32) -> Self {
        Self { id, name, likes }
    }

    /// Returns the URL slug for this category's name.
    pub fn slug(&self) -> String {
        crate::utils::slug::encode(&self.name)
    }
}

/// Input data for creating a new category.
///
/// Categories submitted through the web form always start with `likes = 0`;
/// the admin CLI may seed other values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub likes: i32,
}

impl NewCategory {
    /// Category with the given name and no likes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            likes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::new(7, "Python".to_string(), 64);

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Python");
        assert_eq!(category.likes, 64);
    }

    #[test]
    fn test_category_slug() {
        let category = Category::new(3, "Other Frameworks".to_string(), 0);

        assert_eq!(category.slug(), "Other_Frameworks");
    }

    #[test]
    fn test_new_category_named_starts_without_likes() {
        let new_category = NewCategory::named("Django");

        assert_eq!(new_category.name, "Django");
        assert_eq!(new_category.likes, 0);
    }
}
