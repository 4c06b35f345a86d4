//! Course Gateway
//!
//! Courses carry a thumbnail upload, so create/update use multipart bodies.
//! Search, category, price type and status are filtered server-side.

use super::http::{self, ApiResult};
use crate::controller::{CrudGateway, FilterParams, ListGateway, ResourceItem};
use crate::models::{Course, PriceType, ResourceId};

impl ResourceItem for Course {
    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseFilters {
    pub search: String,
    pub category_id: Option<ResourceId>,
    pub price_type: Option<PriceType>,
    pub active: Option<bool>,
}

impl FilterParams for CourseFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.search.trim().is_empty() {
            query.push(("search", self.search.trim().to_string()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("category", category_id.to_string()));
        }
        if let Some(price_type) = self.price_type {
            query.push(("priceType", price_type.as_str().to_string()));
        }
        if let Some(active) = self.active {
            query.push(("status", active.to_string()));
        }
        query
    }
}

/// Form state for create/edit. Raw strings from inputs; `validate` enforces
/// the required-field and price rules before any network call.
#[derive(Clone, Debug, Default)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub paid: bool,
    pub category_id: Option<ResourceId>,
    pub instructor: String,
    pub thumbnail: Option<web_sys::File>,
}

impl CourseForm {
    /// `require_media` is true for create (the backend cannot default a
    /// thumbnail) and false for update (existing file is kept).
    pub fn validate(&self, require_media: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Course title is required".to_string());
        }
        if self.instructor.trim().is_empty() {
            return Err("Instructor is required".to_string());
        }
        if self.category_id.is_none() {
            return Err("Please select a category".to_string());
        }
        if self.paid {
            match self.price.trim().parse::<f64>() {
                Ok(p) if p > 0.0 => {}
                _ => return Err("Enter a valid price for a paid course".to_string()),
            }
        }
        if require_media && self.thumbnail.is_none() {
            return Err("Course thumbnail is required".to_string());
        }
        Ok(())
    }

    pub fn to_form_data(&self) -> web_sys::FormData {
        let form = web_sys::FormData::new().unwrap();
        let _ = form.append_with_str("title", self.title.trim());
        let _ = form.append_with_str("description", self.description.trim());
        let price = if self.paid { self.price.trim() } else { "0" };
        let _ = form.append_with_str("price", price);
        let price_type = if self.paid { PriceType::Paid } else { PriceType::Free };
        let _ = form.append_with_str("priceType", price_type.as_str());
        if let Some(category_id) = self.category_id {
            let _ = form.append_with_str("categoryId", &category_id.to_string());
        }
        let _ = form.append_with_str("instructor", self.instructor.trim());
        if let Some(file) = &self.thumbnail {
            let _ = form.append_with_blob_and_filename("thumbnail", file, &file.name());
        }
        form
    }
}

pub async fn list_courses(filters: &CourseFilters) -> ApiResult<Vec<Course>> {
    http::get_json("/course/get", &filters.to_query()).await
}

pub async fn get_course(id: ResourceId) -> ApiResult<Course> {
    http::get_json(&format!("/course/get/{}", id), &[]).await
}

pub async fn create_course(form: &CourseForm) -> ApiResult<Course> {
    http::post_form("/course/create", &form.to_form_data()).await
}

pub async fn update_course(id: ResourceId, form: &CourseForm) -> ApiResult<Course> {
    http::put_form(&format!("/course/update/{}", id), &form.to_form_data()).await
}

pub async fn delete_course(id: ResourceId) -> ApiResult<()> {
    http::delete(&format!("/course/delete/{}", id)).await
}

pub async fn toggle_course_status(id: ResourceId) -> ApiResult<Course> {
    http::patch_empty(&format!("/course/toggle-status/{}", id)).await
}

pub struct CourseGateway;

impl ListGateway for CourseGateway {
    type Item = Course;
    type Filters = CourseFilters;

    async fn list(filters: CourseFilters) -> ApiResult<Vec<Course>> {
        list_courses(&filters).await
    }
}

impl CrudGateway for CourseGateway {
    type Payload = CourseForm;

    async fn create(form: CourseForm) -> ApiResult<Course> {
        create_course(&form).await
    }

    async fn update(id: ResourceId, form: CourseForm) -> ApiResult<Course> {
        update_course(id, &form).await
    }

    async fn delete(id: ResourceId) -> ApiResult<()> {
        delete_course(id).await
    }

    async fn toggle_status(id: ResourceId) -> ApiResult<Course> {
        toggle_course_status(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_are_omitted_from_query() {
        let filters = CourseFilters::default();
        assert!(filters.to_query().is_empty());

        let filters = CourseFilters {
            search: "  ".to_string(),
            ..Default::default()
        };
        assert!(filters.to_query().is_empty(), "blank search must not be sent");
    }

    #[test]
    fn set_filters_become_query_pairs() {
        let filters = CourseFilters {
            search: "rust".to_string(),
            category_id: Some(3),
            price_type: Some(PriceType::Paid),
            active: Some(true),
        };
        let query = filters.to_query();
        assert_eq!(
            query,
            vec![
                ("search", "rust".to_string()),
                ("category", "3".to_string()),
                ("priceType", "paid".to_string()),
                ("status", "true".to_string()),
            ]
        );
    }

    fn valid_form() -> CourseForm {
        CourseForm {
            title: "Rust Basics".to_string(),
            description: "intro".to_string(),
            price: "49.99".to_string(),
            paid: true,
            category_id: Some(1),
            instructor: "Ada".to_string(),
            thumbnail: None,
        }
    }

    #[test]
    fn missing_title_or_category_fails_validation() {
        let mut form = valid_form();
        form.title = "".to_string();
        assert!(form.validate(false).is_err());

        let mut form = valid_form();
        form.category_id = None;
        assert!(form.validate(false).is_err());
    }

    #[test]
    fn paid_course_needs_positive_price_free_does_not() {
        let mut form = valid_form();
        form.price = "0".to_string();
        assert!(form.validate(false).is_err());

        form.paid = false;
        form.price = "".to_string();
        assert!(form.validate(false).is_ok());
    }

    #[test]
    fn create_requires_thumbnail_update_does_not() {
        let form = valid_form();
        assert!(form.validate(true).is_err());
        assert!(form.validate(false).is_ok());
    }
}
