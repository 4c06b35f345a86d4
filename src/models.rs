//! Frontend Models
//!
//! Data structures mirroring backend resources. Every managed resource is
//! backend-owned; these are transient client copies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque backend identifier shared by all resources.
pub type ResourceId = u32;

/// Course/ebook pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Free,
    Paid,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Free => "free",
            PriceType::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceType::Free => "Free",
            PriceType::Paid => "Paid",
        }
    }
}

/// Course/ebook/job category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: ResourceId,
    pub name: String,
    pub is_active: bool,
}

/// Course resource (thumbnail is a backend-hosted URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub price_type: PriceType,
    pub category_id: ResourceId,
    pub instructor: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub is_active: bool,
}

/// E-book resource (cover and pdf are backend-hosted URLs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ebook {
    pub id: ResourceId,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub price_type: PriceType,
    pub category_id: ResourceId,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub is_active: bool,
}

/// Job posting resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: ResourceId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub is_active: bool,
}

/// Short video resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Short {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub is_active: bool,
}

/// Enrollment record (read-only on this side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: ResourceId,
    pub course_id: ResourceId,
    pub course_title: String,
    pub student_name: String,
    pub student_email: String,
    pub amount: f64,
    pub enrolled_at: DateTime<Utc>,
}

/// Headline counts for the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub courses: u64,
    pub ebooks: u64,
    pub jobs: u64,
    pub categories: u64,
}

/// Case-insensitive substring match used by client-side search screens.
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_search("JavaScript Basics", "java"));
        assert!(!matches_search("Python 101", "java"));
        assert!(matches_search("Python 101", ""));
    }

    #[test]
    fn price_type_round_trips_lowercase() {
        let json = serde_json::to_string(&PriceType::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
        let back: PriceType = serde_json::from_str("\"free\"").unwrap();
        assert_eq!(back, PriceType::Free);
    }
}
