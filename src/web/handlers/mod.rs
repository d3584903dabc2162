//! HTML template rendering handlers.

mod about;
mod add_category;
mod add_page;
mod category;
mod index;

pub use about::about_handler;
pub use add_category::{add_category_form_handler, add_category_handler};
pub use add_page::{add_page_form_handler, add_page_handler};
pub use category::category_handler;
pub use index::index_handler;
