//! Job Gateway
//!
//! Plain JSON resource; the jobs screen searches client-side, so the list
//! endpoint takes no query parameters.

use serde::Serialize;

use super::http::{self, ApiResult};
use crate::controller::{CrudGateway, FilterParams, ListGateway, ResourceItem};
use crate::models::{Job, ResourceId};

impl ResourceItem for Job {
    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JobFilters;

impl FilterParams for JobFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JobPayload {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "jobType")]
    pub job_type: String,
    #[serde(rename = "salaryRange", skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
}

impl JobPayload {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Job title is required".to_string());
        }
        if self.company.trim().is_empty() {
            return Err("Company is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        if self.job_type.trim().is_empty() {
            return Err("Job type is required".to_string());
        }
        Ok(())
    }
}

pub async fn list_jobs() -> ApiResult<Vec<Job>> {
    http::get_json("/job/get", &[]).await
}

pub async fn get_job(id: ResourceId) -> ApiResult<Job> {
    http::get_json(&format!("/job/get/{}", id), &[]).await
}

pub async fn create_job(payload: &JobPayload) -> ApiResult<Job> {
    http::post_json("/job/create", payload).await
}

pub async fn update_job(id: ResourceId, payload: &JobPayload) -> ApiResult<Job> {
    http::put_json(&format!("/job/update/{}", id), payload).await
}

pub async fn delete_job(id: ResourceId) -> ApiResult<()> {
    http::delete(&format!("/job/delete/{}", id)).await
}

pub async fn toggle_job_status(id: ResourceId) -> ApiResult<Job> {
    http::patch_empty(&format!("/job/toggle-status/{}", id)).await
}

pub struct JobGateway;

impl ListGateway for JobGateway {
    type Item = Job;
    type Filters = JobFilters;

    async fn list(_filters: JobFilters) -> ApiResult<Vec<Job>> {
        list_jobs().await
    }
}

impl CrudGateway for JobGateway {
    type Payload = JobPayload;

    async fn create(payload: JobPayload) -> ApiResult<Job> {
        create_job(&payload).await
    }

    async fn update(id: ResourceId, payload: JobPayload) -> ApiResult<Job> {
        update_job(id, &payload).await
    }

    async fn delete(id: ResourceId) -> ApiResult<()> {
        delete_job(id).await
    }

    async fn toggle_status(id: ResourceId) -> ApiResult<Job> {
        toggle_job_status(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_core_fields_are_required() {
        let payload = JobPayload {
            title: "Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            job_type: "full-time".to_string(),
            salary_range: None,
        };
        assert!(payload.validate().is_ok());

        let mut missing = payload.clone();
        missing.company = " ".to_string();
        assert!(missing.validate().is_err());
    }

    #[test]
    fn unset_salary_is_not_serialized() {
        let payload = JobPayload {
            title: "t".to_string(),
            company: "c".to_string(),
            location: "l".to_string(),
            job_type: "full-time".to_string(),
            salary_range: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("salaryRange"));
    }
}
