use crate::models::{Course, Filters, SortKey};

/// Maps the catalog through the active filters into an ordered view list.
/// Pure: the input slice is never touched and the output is always a fresh
/// `Vec`.
pub fn filter_courses(courses: &[Course], filters: &Filters) -> Vec<Course> {
    let query = filters.query.trim().to_lowercase();

    let mut list: Vec<Course> = courses
        .iter()
        .filter(|c| matches_query(c, &query) && matches_category(c, filters.category.as_deref()))
        .cloned()
        .collect();

    match filters.sort {
        // Catalog order is the popularity order.
        SortKey::Popular => {}
        SortKey::PriceAsc => list.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => list.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Newest => list.reverse(),
    }
    list
}

fn matches_query(course: &Course, query: &str) -> bool {
    query.is_empty()
        || course.title.to_lowercase().contains(query)
        || course.instructor.to_lowercase().contains(query)
}

fn matches_category(course: &Course, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(cat) => course.category == cat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_courses;

    fn ids(list: &[Course]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn empty_filters_return_catalog_order() {
        let courses = seed_courses();
        let list = filter_courses(&courses, &Filters::default());

        assert_eq!(list.len(), courses.len());
        assert_eq!(ids(&list)[0], "c1");
    }

    #[test]
    fn query_matches_title_or_instructor_case_insensitively() {
        let courses = seed_courses();

        let by_title = filter_courses(
            &courses,
            &Filters {
                query: "  PYTHON ".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_title), vec!["c1", "c3"]);

        let by_instructor = filter_courses(
            &courses,
            &Filters {
                query: "rossi".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(ids(&by_instructor), vec!["c6"]);
    }

    #[test]
    fn category_must_match_exactly() {
        let courses = seed_courses();
        let list = filter_courses(
            &courses,
            &Filters {
                category: Some("design".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(ids(&list), vec!["c4", "c9"]);
    }

    #[test]
    fn price_sorts_are_stable_on_ties() {
        let courses = seed_courses();
        let asc = filter_courses(
            &courses,
            &Filters {
                sort: SortKey::PriceAsc,
                ..Default::default()
            },
        );
        let prices: Vec<f64> = asc.iter().map(|c| c.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        // c3 and c10 share 49.99; catalog order must survive the sort
        let c3 = asc.iter().position(|c| c.id == "c3").unwrap();
        let c10 = asc.iter().position(|c| c.id == "c10").unwrap();
        assert!(c3 < c10);

        let desc = filter_courses(
            &courses,
            &Filters {
                sort: SortKey::PriceDesc,
                ..Default::default()
            },
        );
        let prices: Vec<f64> = desc.iter().map(|c| c.price).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn newest_reverses_catalog_order() {
        let courses = seed_courses();
        let list = filter_courses(
            &courses,
            &Filters {
                sort: SortKey::Newest,
                ..Default::default()
            },
        );
        assert_eq!(ids(&list)[0], "c10");
        assert_eq!(ids(&list)[9], "c1");
    }

    #[test]
    fn engine_is_idempotent_and_does_not_mutate_input() {
        let courses = seed_courses();
        let filters = Filters {
            query: "web".to_string(),
            sort: SortKey::PriceDesc,
            ..Default::default()
        };

        let first = filter_courses(&courses, &filters);
        let second = filter_courses(&courses, &filters);
        assert_eq!(first, second);
        assert_eq!(courses, seed_courses());
    }
}
