//! Resource Screens
//!
//! One page component per admin screen, all driven by the shared
//! ResourceController.

use leptos::html;
use leptos::prelude::*;

use crate::models::ResourceId;

mod categories;
mod courses;
mod dashboard;
mod ebooks;
mod enrollments;
mod jobs;
mod shorts;

pub use categories::CategoriesPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use ebooks::EbooksPage;
pub use enrollments::EnrollmentsPage;
pub use jobs::JobsPage;
pub use shorts::ShortsPage;

/// Create/edit form state shared by the modal screens:
/// `None` = closed, `Some(None)` = creating, `Some(Some(id))` = editing.
pub(crate) type FormTarget = Option<Option<ResourceId>>;

/// Selected file of a file input, read at submit time through its node ref.
/// `None` until the input is mounted or while no file is chosen.
pub(crate) fn selected_file(input: NodeRef<html::Input>) -> Option<web_sys::File> {
    input
        .get()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_file_input_yields_no_file() {
        let input: NodeRef<html::Input> = NodeRef::new();
        assert!(selected_file(input).is_none());
    }
}
