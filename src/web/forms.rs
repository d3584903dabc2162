//! HTML form bindings for category and page submissions.
//!
//! Forms deserialize from `application/x-www-form-urlencoded` bodies, validate
//! with [`validator`], and clean into domain input types. Fields the forms do
//! not declare (`likes`, `views`, ...) are ignored, so counters can never be
//! set from a browser.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{NewCategory, PageDraft};
use crate::utils::url_normalizer::normalize_page_url;

pub const NAME_MAX_LENGTH: u64 = 128;
pub const TITLE_MAX_LENGTH: u64 = 128;
pub const URL_MAX_LENGTH: u64 = 200;

/// Field-level validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    /// Errors holding a single message for one field.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Messages for `field`, empty when the field is valid.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn merge(&mut self, other: FormErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = Self::default();

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                form_errors.add(&field.to_string(), message);
            }
        }

        form_errors
    }
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("This field is required.")));
    }
    Ok(())
}

/// Submitted category fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryForm {
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = NAME_MAX_LENGTH, message = "Ensure this value has at most 128 characters.")
    )]
    pub name: String,
}

impl CategoryForm {
    /// Validates the form and produces a category with no likes.
    ///
    /// Surrounding whitespace in the name is dropped before validation.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] describing every invalid field.
    pub fn clean(&self) -> Result<NewCategory, FormErrors> {
        let cleaned = CategoryForm {
            name: self.name.trim().to_string(),
        };

        cleaned.validate()?;

        Ok(NewCategory::named(cleaned.name))
    }
}

/// Submitted page fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageForm {
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = TITLE_MAX_LENGTH, message = "Ensure this value has at most 128 characters.")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(max = URL_MAX_LENGTH, message = "Ensure this value has at most 200 characters.")
    )]
    pub url: String,
}

impl PageForm {
    /// Validates the form and produces a page draft.
    ///
    /// A URL typed without a scheme gets `http://` prepended before the
    /// length check.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] describing every invalid field.
    pub fn clean(&self) -> Result<PageDraft, FormErrors> {
        let mut cleaned = PageForm {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
        };
        let mut errors = FormErrors::default();

        if !cleaned.url.is_empty() {
            match normalize_page_url(&cleaned.url) {
                Ok(url) => cleaned.url = url,
                Err(e) => errors.add("url", e.to_string()),
            }
        }

        if let Err(validation) = cleaned.validate() {
            errors.merge(validation.into());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PageDraft {
            title: cleaned.title,
            url: cleaned.url,
        })
    }
}
