use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub location: String,
    pub category: String,
    pub price: f64,
    pub instructor: String,
    pub rating: f64,
    pub seats_remaining: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl Course {
    pub fn has_seats(&self) -> bool {
        self.seats_remaining > 0
    }
}

/// Static seed catalog, used when neither a persisted snapshot nor a remote
/// catalog is available.
pub fn seed_courses() -> Vec<Course> {
    fn course(
        id: &str,
        title: &str,
        topic: &str,
        location: &str,
        category: &str,
        price: f64,
        instructor: &str,
        rating: f64,
        seats_remaining: u32,
    ) -> Course {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            topic: topic.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            price,
            instructor: instructor.to_string(),
            rating,
            seats_remaining,
            image: None,
        }
    }

    vec![
        course("c1", "Python for Beginners", "Python", "Hendon", "programming", 24.99, "A. Smith", 4.7, 5),
        course("c2", "Web Development Bootcamp", "Web", "Colindale", "programming", 39.99, "B. Lee", 4.8, 6),
        course("c3", "Data Science with Python", "Data", "Brent Cross", "data", 49.99, "C. Zhao", 4.9, 4),
        course("c4", "UI/UX Design Fundamentals", "Design", "Golders Green", "design", 19.99, "D. Kumar", 4.5, 7),
        course("c5", "Intro to Machine Learning", "ML", "Hendon", "data", 59.99, "E. Gomez", 4.8, 3),
        course("c6", "Business Analytics", "Business", "Colindale", "business", 29.99, "F. Rossi", 4.6, 8),
        course("c7", "Advanced JavaScript", "JavaScript", "Brent Cross", "programming", 34.99, "G. Patel", 4.6, 5),
        course("c8", "Databases with MongoDB", "Databases", "Golders Green", "data", 44.99, "H. Wang", 4.7, 6),
        course("c9", "Responsive Web Design", "Design", "Hendon", "design", 22.99, "I. Murphy", 4.5, 9),
        course("c10", "DevOps Essentials", "DevOps", "Colindale", "business", 49.99, "J. Nasser", 4.4, 4),
    ]
}
