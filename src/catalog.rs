use crate::error::AppError;
use crate::models::Course;

/// Owns the course records for one session. Seat counts on these records are
/// authoritative; the cart ledger only ever changes them through
/// [`CatalogStore::adjust_seats`].
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    courses: Vec<Course>,
}

impl CatalogStore {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Wholesale replacement after an authoritative remote refresh. Any cart
    /// entries must be reconciled against the new seat counts afterwards.
    pub fn replace_all(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// Adjusts `seats_remaining` by `delta`, returning the new count.
    pub fn adjust_seats(&mut self, id: &str, delta: i64) -> Result<u32, AppError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let next = i64::from(course.seats_remaining) + delta;
        if next < 0 {
            return Err(AppError::InvalidAdjustment {
                id: id.to_string(),
                delta,
                remaining: course.seats_remaining,
            });
        }
        course.seats_remaining = next as u32;
        Ok(course.seats_remaining)
    }
}
