//! Enrollment Gateway
//!
//! Enrollments are read-only on the admin side: list with server-side
//! filtering by course and student search.

use super::http::{self, ApiResult};
use crate::controller::{FilterParams, ListGateway, ResourceItem};
use crate::models::{Enrollment, ResourceId};

impl ResourceItem for Enrollment {
    fn id(&self) -> ResourceId {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnrollmentFilters {
    /// Matches student name or email server-side.
    pub search: String,
    pub course_id: Option<ResourceId>,
}

impl FilterParams for EnrollmentFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.search.trim().is_empty() {
            query.push(("search", self.search.trim().to_string()));
        }
        if let Some(course_id) = self.course_id {
            query.push(("course", course_id.to_string()));
        }
        query
    }
}

pub async fn list_enrollments(filters: &EnrollmentFilters) -> ApiResult<Vec<Enrollment>> {
    http::get_json("/enrollment/get", &filters.to_query()).await
}

pub struct EnrollmentGateway;

impl ListGateway for EnrollmentGateway {
    type Item = Enrollment;
    type Filters = EnrollmentFilters;

    async fn list(filters: EnrollmentFilters) -> ApiResult<Vec<Enrollment>> {
        list_enrollments(&filters).await
    }
}

/// Client-side revenue total for the visible enrollments.
pub fn revenue_total(enrollments: &[Enrollment]) -> f64 {
    enrollments.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn course_filter_becomes_query_pair() {
        let filters = EnrollmentFilters {
            search: String::new(),
            course_id: Some(12),
        };
        assert_eq!(filters.to_query(), vec![("course", "12".to_string())]);
    }

    #[test]
    fn revenue_sums_amounts() {
        let make = |id, amount| Enrollment {
            id,
            course_id: 1,
            course_title: "Rust".to_string(),
            student_name: "A".to_string(),
            student_email: "a@example.com".to_string(),
            amount,
            enrolled_at: Utc::now(),
        };
        let list = vec![make(1, 10.0), make(2, 5.5)];
        assert!((revenue_total(&list) - 15.5).abs() < f64::EPSILON);
    }
}
