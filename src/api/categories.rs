//! Category Gateway
//!
//! Categories are small JSON resources; search happens client-side, so the
//! list endpoint takes no query parameters.

use serde::Serialize;

use super::http::{self, ApiResult};
use crate::controller::{CrudGateway, FilterParams, ListGateway, ResourceItem};
use crate::models::{Category, ResourceId};

impl ResourceItem for Category {
    fn id(&self) -> ResourceId {
        self.id
    }
}

/// No server-side filters for categories.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryFilters;

impl FilterParams for CategoryFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl CategoryPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".to_string());
        }
        Ok(())
    }
}

pub async fn list_categories() -> ApiResult<Vec<Category>> {
    http::get_json("/category/get", &[]).await
}

pub async fn get_category(id: ResourceId) -> ApiResult<Category> {
    http::get_json(&format!("/category/get/{}", id), &[]).await
}

pub async fn create_category(payload: &CategoryPayload) -> ApiResult<Category> {
    http::post_json("/category/create", payload).await
}

pub async fn update_category(id: ResourceId, payload: &CategoryPayload) -> ApiResult<Category> {
    http::put_json(&format!("/category/update/{}", id), payload).await
}

pub async fn delete_category(id: ResourceId) -> ApiResult<()> {
    http::delete(&format!("/category/delete/{}", id)).await
}

pub async fn toggle_category_status(id: ResourceId) -> ApiResult<Category> {
    http::patch_empty(&format!("/category/toggle-status/{}", id)).await
}

pub struct CategoryGateway;

impl ListGateway for CategoryGateway {
    type Item = Category;
    type Filters = CategoryFilters;

    async fn list(_filters: CategoryFilters) -> ApiResult<Vec<Category>> {
        list_categories().await
    }
}

impl CrudGateway for CategoryGateway {
    type Payload = CategoryPayload;

    async fn create(payload: CategoryPayload) -> ApiResult<Category> {
        create_category(&payload).await
    }

    async fn update(id: ResourceId, payload: CategoryPayload) -> ApiResult<Category> {
        update_category(id, &payload).await
    }

    async fn delete(id: ResourceId) -> ApiResult<()> {
        delete_category(id).await
    }

    async fn toggle_status(id: ResourceId) -> ApiResult<Category> {
        toggle_category_status(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        let payload = CategoryPayload {
            name: "   ".to_string(),
        };
        assert!(payload.validate().is_err());
        let payload = CategoryPayload {
            name: "Python".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn category_list_sends_no_query() {
        assert!(CategoryFilters.to_query().is_empty());
    }
}
