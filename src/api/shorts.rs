//! Short Video Gateway
//!
//! Shorts carry a video upload (and optional thumbnail), so create/update
//! use multipart bodies. Search is server-side.

use super::http::{self, ApiResult};
use crate::controller::{CrudGateway, FilterParams, ListGateway, ResourceItem};
use crate::models::{ResourceId, Short};

impl ResourceItem for Short {
    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShortFilters {
    pub search: String,
}

impl FilterParams for ShortFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.search.trim().is_empty() {
            query.push(("search", self.search.trim().to_string()));
        }
        query
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShortForm {
    pub title: String,
    pub video: Option<web_sys::File>,
    pub thumbnail: Option<web_sys::File>,
}

impl ShortForm {
    pub fn validate(&self, require_media: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Short title is required".to_string());
        }
        if require_media && self.video.is_none() {
            return Err("Video file is required".to_string());
        }
        Ok(())
    }

    pub fn to_form_data(&self) -> web_sys::FormData {
        let form = web_sys::FormData::new().unwrap();
        let _ = form.append_with_str("title", self.title.trim());
        if let Some(file) = &self.video {
            let _ = form.append_with_blob_and_filename("video", file, &file.name());
        }
        if let Some(file) = &self.thumbnail {
            let _ = form.append_with_blob_and_filename("thumbnail", file, &file.name());
        }
        form
    }
}

pub async fn list_shorts(filters: &ShortFilters) -> ApiResult<Vec<Short>> {
    http::get_json("/short/get", &filters.to_query()).await
}

pub async fn get_short(id: ResourceId) -> ApiResult<Short> {
    http::get_json(&format!("/short/get/{}", id), &[]).await
}

pub async fn create_short(form: &ShortForm) -> ApiResult<Short> {
    http::post_form("/short/create", &form.to_form_data()).await
}

pub async fn update_short(id: ResourceId, form: &ShortForm) -> ApiResult<Short> {
    http::put_form(&format!("/short/update/{}", id), &form.to_form_data()).await
}

pub async fn delete_short(id: ResourceId) -> ApiResult<()> {
    http::delete(&format!("/short/delete/{}", id)).await
}

pub async fn toggle_short_status(id: ResourceId) -> ApiResult<Short> {
    http::patch_empty(&format!("/short/toggle-status/{}", id)).await
}

pub struct ShortGateway;

impl ListGateway for ShortGateway {
    type Item = Short;
    type Filters = ShortFilters;

    async fn list(filters: ShortFilters) -> ApiResult<Vec<Short>> {
        list_shorts(&filters).await
    }
}

impl CrudGateway for ShortGateway {
    type Payload = ShortForm;

    async fn create(form: ShortForm) -> ApiResult<Short> {
        create_short(&form).await
    }

    async fn update(id: ResourceId, form: ShortForm) -> ApiResult<Short> {
        update_short(id, &form).await
    }

    async fn delete(id: ResourceId) -> ApiResult<()> {
        delete_short(id).await
    }

    async fn toggle_status(id: ResourceId) -> ApiResult<Short> {
        toggle_short_status(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_sends_nothing() {
        let filters = ShortFilters {
            search: "  ".to_string(),
        };
        assert!(filters.to_query().is_empty());
    }

    #[test]
    fn create_requires_video() {
        let form = ShortForm {
            title: "Intro".to_string(),
            video: None,
            thumbnail: None,
        };
        assert!(form.validate(true).is_err());
        assert!(form.validate(false).is_ok());
    }
}
