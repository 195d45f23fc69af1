//! The sample course list the site ships with.

use crate::models::{Course, CourseLevel};
use chrono::NaiveDate;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    description: &str,
    duration: &str,
    level: CourseLevel,
    category: &str,
    image: &str,
    features: &[&str],
    career_prospects: &[&str],
    admission_requirements: &[&str],
    tuition_fee: &str,
    available_seats: u32,
) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        level,
        category: category.to_string(),
        image: image.to_string(),
        features: strings(features),
        career_prospects: strings(career_prospects),
        admission_requirements: strings(admission_requirements),
        tuition_fee: tuition_fee.to_string(),
        available_seats,
        start_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or_default(),
    }
}

pub(super) fn seed_courses() -> Vec<Course> {
    vec![
        course(
            1,
            "Computer Science & Engineering",
            "Comprehensive program covering software development, algorithms, data structures, and emerging technologies.",
            "4 years",
            CourseLevel::Undergraduate,
            "Technology",
            "/images/courses/computer-science.jpg",
            &["AI & Machine Learning", "Web Development", "Mobile App Development", "Cybersecurity"],
            &["Software Engineer", "Data Scientist", "AI Specialist", "Tech Lead"],
            &["High School Diploma", "Mathematics Proficiency", "English Proficiency"],
            "$15,000/year",
            50,
        ),
        course(
            2,
            "Business Administration",
            "Strategic business education focusing on management, finance, marketing, and entrepreneurship.",
            "3 years",
            CourseLevel::Undergraduate,
            "Business",
            "/images/courses/business-admin.jpg",
            &["Strategic Management", "Digital Marketing", "Financial Analysis", "Leadership Development"],
            &["Business Manager", "Marketing Director", "Financial Analyst", "Entrepreneur"],
            &["High School Diploma", "Basic Mathematics", "Communication Skills"],
            "$12,000/year",
            40,
        ),
        course(
            3,
            "Digital Media & Design",
            "Creative program combining graphic design, video production, and digital marketing strategies.",
            "2 years",
            CourseLevel::Diploma,
            "Creative Arts",
            "/images/courses/digital-media.jpg",
            &["Graphic Design", "Video Production", "UI/UX Design", "Social Media Marketing"],
            &["Graphic Designer", "Video Editor", "UI/UX Designer", "Content Creator"],
            &["High School Diploma", "Portfolio Submission", "Creative Aptitude"],
            "$10,000/year",
            30,
        ),
        course(
            4,
            "Environmental Science",
            "Interdisciplinary program addressing environmental challenges and sustainable development.",
            "4 years",
            CourseLevel::Undergraduate,
            "Science",
            "/images/courses/environmental-science.jpg",
            &["Climate Change Studies", "Renewable Energy", "Conservation Biology", "Environmental Policy"],
            &["Environmental Consultant", "Conservation Scientist", "Policy Analyst", "Research Scientist"],
            &["High School Diploma", "Science Background", "Environmental Awareness"],
            "$13,000/year",
            25,
        ),
        course(
            5,
            "Data Science & Analytics",
            "Advanced program in data analysis, machine learning, and business intelligence.",
            "2 years",
            CourseLevel::Postgraduate,
            "Technology",
            "/images/courses/data-science.jpg",
            &["Machine Learning", "Big Data Analytics", "Statistical Modeling", "Data Visualization"],
            &["Data Scientist", "Business Analyst", "ML Engineer", "Research Analyst"],
            &["Bachelor's Degree", "Programming Knowledge", "Statistics Background"],
            "$18,000/year",
            20,
        ),
        course(
            6,
            "Healthcare Management",
            "Specialized program for managing healthcare organizations and improving patient care systems.",
            "3 years",
            CourseLevel::Undergraduate,
            "Healthcare",
            "/images/courses/healthcare-management.jpg",
            &["Healthcare Systems", "Medical Ethics", "Health Informatics", "Quality Management"],
            &["Hospital Administrator", "Health Policy Analyst", "Healthcare Consultant", "Quality Manager"],
            &["High School Diploma", "Science Background Preferred", "Communication Skills"],
            "$14,000/year",
            35,
        ),
    ]
}
