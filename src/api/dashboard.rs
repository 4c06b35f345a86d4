//! Dashboard Gateway
//!
//! Headline counts for the landing page.

use super::http::{self, ApiResult};
use crate::models::DashboardStats;

pub async fn get_dashboard_stats() -> ApiResult<DashboardStats> {
    http::get_json("/dashboard/stats", &[]).await
}
