//! Interest-based course recommendations.
//!
//! Scoring per interest term: one point if the title, description or category
//! contains it, plus one point for every feature that contains it. A term can
//! therefore contribute several points to the same course.

use crate::config::QueryConfig;
use crate::models::{contains_ci, Course, Recommendation, RecommendationCriteria, Recommendations};
use tracing::debug;

fn relevance(course: &Course, interests: &[String]) -> u32 {
    let mut score = 0;
    for interest in interests {
        if contains_ci(&course.title, interest)
            || contains_ci(&course.description, interest)
            || contains_ci(&course.category, interest)
        {
            score += 1;
        }
        score += course
            .features
            .iter()
            .filter(|feature| contains_ci(feature, interest))
            .count() as u32;
    }
    score
}

pub(super) fn recommend(courses: &[Course], criteria: RecommendationCriteria) -> Recommendations {
    // Blank terms would match every field; drop them before scoring.
    let interests: Vec<String> = criteria
        .interests
        .iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    let candidates = courses
        .iter()
        .filter(|c| criteria.budget == 0 || c.tuition_amount() <= criteria.budget)
        .filter(|c| criteria.level.is_empty() || contains_ci(c.level.as_str(), &criteria.level));

    let mut picked: Vec<Recommendation> = if interests.is_empty() {
        candidates
            .map(|course| Recommendation {
                course: course.clone(),
                relevance_score: None,
            })
            .collect()
    } else {
        let mut scored: Vec<Recommendation> = candidates
            .map(|course| Recommendation {
                relevance_score: Some(relevance(course, &interests)),
                course: course.clone(),
            })
            .collect();
        // sort_by is stable, so ties keep catalog order
        scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        scored
    };
    picked.truncate(QueryConfig::RECOMMENDATION_LIMIT);

    debug!(
        "Recommended {} courses for {:?}",
        picked.len(),
        criteria.interests
    );

    Recommendations {
        courses: picked,
        criteria,
    }
}
