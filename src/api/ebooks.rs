//! E-Book Gateway
//!
//! E-books carry a cover image and a PDF, so create/update use multipart
//! bodies. Search and category are filtered server-side.

use super::http::{self, ApiResult};
use crate::controller::{CrudGateway, FilterParams, ListGateway, ResourceItem};
use crate::models::{Ebook, PriceType, ResourceId};

impl ResourceItem for Ebook {
    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EbookFilters {
    pub search: String,
    pub category_id: Option<ResourceId>,
    pub price_type: Option<PriceType>,
}

impl FilterParams for EbookFilters {
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
        query
    }
}

#[derive(Clone, Debug, Default)]
pub struct EbookForm {
    pub title: String,
    pub author: String,
    pub price: String,
    pub paid: bool,
    pub category_id: Option<ResourceId>,
    pub cover: Option<web_sys::File>,
    pub pdf: Option<web_sys::File>,
}

impl EbookForm {
    pub fn validate(&self, require_media: bool) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("E-book title is required".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("Author is required".to_string());
        }
        if self.category_id.is_none() {
            return Err("Please select a category".to_string());
        }
        if self.paid {
            match self.price.trim().parse::<f64>() {
                Ok(p) if p > 0.0 => {}
                _ => return Err("Enter a valid price for a paid e-book".to_string()),
            }
        }
        if require_media && self.pdf.is_none() {
            return Err("PDF file is required".to_string());
        }
        Ok(())
    }

    pub fn to_form_data(&self) -> web_sys::FormData {
        let form = web_sys::FormData::new().unwrap();
        let _ = form.append_with_str("title", self.title.trim());
        let _ = form.append_with_str("author", self.author.trim());
        let price = if self.paid { self.price.trim() } else { "0" };
        let _ = form.append_with_str("price", price);
        let price_type = if self.paid { PriceType::Paid } else { PriceType::Free };
        let _ = form.append_with_str("priceType", price_type.as_str());
        if let Some(category_id) = self.category_id {
            let _ = form.append_with_str("categoryId", &category_id.to_string());
        }
        if let Some(file) = &self.cover {
            let _ = form.append_with_blob_and_filename("cover", file, &file.name());
        }
        if let Some(file) = &self.pdf {
            let _ = form.append_with_blob_and_filename("pdf", file, &file.name());
        }
        form
    }
}

pub async fn list_ebooks(filters: &EbookFilters) -> ApiResult<Vec<Ebook>> {
    http::get_json("/ebook/get", &filters.to_query()).await
}

pub async fn get_ebook(id: ResourceId) -> ApiResult<Ebook> {
    http::get_json(&format!("/ebook/get/{}", id), &[]).await
}

pub async fn create_ebook(form: &EbookForm) -> ApiResult<Ebook> {
    http::post_form("/ebook/create", &form.to_form_data()).await
}

pub async fn update_ebook(id: ResourceId, form: &EbookForm) -> ApiResult<Ebook> {
    http::put_form(&format!("/ebook/update/{}", id), &form.to_form_data()).await
}

pub async fn delete_ebook(id: ResourceId) -> ApiResult<()> {
    http::delete(&format!("/ebook/delete/{}", id)).await
}

pub async fn toggle_ebook_status(id: ResourceId) -> ApiResult<Ebook> {
    http::patch_empty(&format!("/ebook/toggle-status/{}", id)).await
}

pub struct EbookGateway;

impl ListGateway for EbookGateway {
    type Item = Ebook;
    type Filters = EbookFilters;

    async fn list(filters: EbookFilters) -> ApiResult<Vec<Ebook>> {
        list_ebooks(&filters).await
    }
}

impl CrudGateway for EbookGateway {
    type Payload = EbookForm;

    async fn create(form: EbookForm) -> ApiResult<Ebook> {
        create_ebook(&form).await
    }

    async fn update(id: ResourceId, form: EbookForm) -> ApiResult<Ebook> {
        update_ebook(id, &form).await
    }

    async fn delete(id: ResourceId) -> ApiResult<()> {
        delete_ebook(id).await
    }

    async fn toggle_status(id: ResourceId) -> ApiResult<Ebook> {
        toggle_ebook_status(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_unset_fields() {
        let filters = EbookFilters {
            search: "rust".to_string(),
            category_id: None,
            price_type: None,
        };
        assert_eq!(filters.to_query(), vec![("search", "rust".to_string())]);
    }

    #[test]
    fn create_requires_pdf() {
        let form = EbookForm {
            title: "The Book".to_string(),
            author: "Ada".to_string(),
            price: "".to_string(),
            paid: false,
            category_id: Some(2),
            cover: None,
            pdf: None,
        };
        assert!(form.validate(true).is_err());
        assert!(form.validate(false).is_ok());
    }
}
