//! Category and page lookup, ranking and creation.

use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory, Page, PageDraft};
use crate::domain::repositories::{CategoryRepository, PageRepository};
use crate::error::AppError;
use crate::utils::slug;

/// Number of categories and pages shown on the home listing.
pub const HOME_LISTING_LIMIT: i64 = 5;

/// A category together with its pre-computed URL slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub url: String,
}

impl From<Category> for CategoryListing {
    fn from(category: Category) -> Self {
        let url = slug::encode(&category.name);
        Self { category, url }
    }
}

/// Most liked categories and most viewed pages.
#[derive(Debug, Clone, Default)]
pub struct HomeListing {
    pub categories: Vec<CategoryListing>,
    pub pages: Vec<Page>,
}

/// Outcome of resolving a category by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLookup {
    Found { category: Category, pages: Vec<Page> },
    Absent,
}

/// Everything the category page needs, whether or not the category exists.
#[derive(Debug, Clone)]
pub struct CategoryDetail {
    /// Display name decoded from the slug.
    pub category_name: String,
    /// The slug as requested, used to build "add page" links.
    pub category_name_url: String,
    pub lookup: CategoryLookup,
}

/// Outcome of filing a page under a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCreation {
    Created(Page),
    /// No category matches the decoded slug; nothing was written.
    CategoryMissing,
}

/// Service behind the catalog pages.
///
/// Every call re-reads the store; nothing is cached between requests.
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    pages: Arc<dyn PageRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(categories: Arc<dyn CategoryRepository>, pages: Arc<dyn PageRepository>) -> Self {
        Self { categories, pages }
    }

    /// Top categories by likes and top pages by views.
    ///
    /// Both lists hold at most [`HOME_LISTING_LIMIT`] entries; an empty store
    /// yields two empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn home_listing(&self) -> Result<HomeListing, AppError> {
        let categories = self
            .categories
            .list_by_likes(HOME_LISTING_LIMIT)
            .await?
            .into_iter()
            .take(HOME_LISTING_LIMIT as usize)
            .map(CategoryListing::from)
            .collect();

        let mut pages = self.pages.list_by_views(HOME_LISTING_LIMIT).await?;
        pages.truncate(HOME_LISTING_LIMIT as usize);

        Ok(HomeListing { categories, pages })
    }

    /// Resolves a category slug to the category and its pages.
    ///
    /// A missing category is reported as [`CategoryLookup::Absent`], not as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn category_detail(&self, category_name_url: &str) -> Result<CategoryDetail, AppError> {
        let category_name = slug::decode(category_name_url);

        let lookup = match self.categories.find_by_name(&category_name).await? {
            Some(category) => {
                let pages = self.pages.list_by_category(category.id).await?;
                CategoryLookup::Found { category, pages }
            }
            None => CategoryLookup::Absent,
        };

        Ok(CategoryDetail {
            category_name,
            category_name_url: category_name_url.to_string(),
            lookup,
        })
    }

    /// Persists a new category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_category(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let category = self.categories.create(new_category).await?;

        metrics::counter!("catalog_categories_created_total").increment(1);
        tracing::info!(id = category.id, name = %category.name, "Category created");

        Ok(category)
    }

    /// Files a validated page under the category named by `category_name_url`.
    ///
    /// The page is only written once its category is resolved; the view
    /// counter always starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_page(
        &self,
        category_name_url: &str,
        draft: PageDraft,
    ) -> Result<PageCreation, AppError> {
        let category_name = slug::decode(category_name_url);

        let Some(category) = self.categories.find_by_name(&category_name).await? else {
            tracing::warn!(category = %category_name, "Page submitted for unknown category");
            return Ok(PageCreation::CategoryMissing);
        };

        let page = match self.pages.create(draft.attach(category.id)).await {
            Ok(page) => page,
            Err(AppError::NotFound { .. }) => return Ok(PageCreation::CategoryMissing),
            Err(e) => return Err(e),
        };

        metrics::counter!("catalog_pages_created_total").increment(1);
        tracing::info!(
            id = page.id,
            category = %category.name,
            title = %page.title,
            "Page created"
        );

        Ok(PageCreation::Created(page))
    }

    /// Counts stored categories and pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        Ok((self.categories.count().await?, self.pages.count().await?))
    }
}
