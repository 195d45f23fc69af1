//! Catalog statistics.

use crate::models::{Course, CourseStatistics};
use std::collections::BTreeMap;

pub(super) fn compute(courses: &[Course]) -> CourseStatistics {
    let mut categories = BTreeMap::new();
    let mut levels = BTreeMap::new();
    let mut total_seats = 0u64;
    let mut fee_sum = 0u64;

    for course in courses {
        *categories.entry(course.category.clone()).or_insert(0) += 1;
        *levels.entry(course.level.as_str().to_string()).or_insert(0) += 1;
        total_seats += u64::from(course.available_seats);
        fee_sum += course.tuition_amount();
    }

    let average_fee = if courses.is_empty() {
        0.0
    } else {
        fee_sum as f64 / courses.len() as f64
    };

    CourseStatistics {
        total_courses: courses.len(),
        total_seats,
        categories,
        levels,
        average_fee,
    }
}
