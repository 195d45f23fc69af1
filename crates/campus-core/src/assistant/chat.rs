//! Keyword-matched chat replies.
//!
//! Two tables exist: the short one answered by `POST /api/chat`, and the richer
//! one the in-page chat widget uses, which picks a random reply from a set.

use super::{KeywordRule, KeywordTable};
use rand::seq::IndexedRandom;
use rand::Rng;

const API_DEFAULT: &str = "Thank you for your question! For specific information, please contact our admissions office at info@die.edu or call +94 11 234 5678.";

const WIDGET_DEFAULTS: &[&str] = &[
    "That's an interesting question! Could you provide more details so I can assist you better?",
    "I'd be happy to help! Could you rephrase your question or be more specific about what you're looking for?",
    "I'm here to help with information about DIE. Could you tell me more about what you need assistance with?",
    "Let me help you with that! Could you provide more context about your question?",
    "I want to make sure I give you the right information. Could you clarify what specific aspect you're interested in?",
];

/// Chat reply selection over a keyword table of reply sets.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    table: KeywordTable<Vec<&'static str>>,
    fallback: Vec<&'static str>,
}

impl ChatResponder {
    /// Greeting shown when the widget opens.
    pub const WELCOME: &'static str = "Hello! I'm your DIE AI Assistant. I can help you with information about courses, campus facilities, admissions, and more. How can I assist you today?";

    /// Table answered by the HTTP chat endpoint. One reply per topic.
    pub fn api() -> Self {
        let rule = |keyword: &'static str, reply: &'static str| KeywordRule {
            keywords: vec![keyword],
            value: vec![reply],
        };
        Self {
            table: KeywordTable::new(vec![
                rule("courses", "We offer various courses including Computer Science, Business Administration, Digital Media, Environmental Science, Data Science, and Healthcare Management. Would you like to know more about any specific course?"),
                rule("admission", "Admissions are open for the next academic year. You can apply online through our website. Requirements vary by program but generally include academic transcripts and personal statements."),
                rule("campus", "Our modern campus features state-of-the-art facilities including a central library, science laboratories, sports complex, and student accommodation. You can take a 3D virtual tour!"),
                rule("fees", "Tuition fees vary by program, ranging from $10,000 to $18,000 per year. We offer scholarships and financial aid for eligible students."),
                rule("contact", "You can reach us at info@die.edu or call +94 11 234 5678. We're located in Colombo, Sri Lanka."),
            ]),
            fallback: vec![API_DEFAULT],
        }
    }

    /// Table used by the in-page chat widget.
    pub fn widget() -> Self {
        Self {
            table: KeywordTable::new(vec![
                KeywordRule {
                    keywords: vec!["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
                    value: vec![
                        "Hello! Welcome to DIE. How can I help you today?",
                        "Hi there! I'm here to assist you with any questions about our institute.",
                        "Greetings! What would you like to know about DIE?",
                    ],
                },
                KeywordRule {
                    keywords: vec!["course", "program", "study", "degree", "diploma", "curriculum"],
                    value: vec![
                        "We offer a wide range of courses including Computer Science, Engineering, Business Administration, and Liberal Arts. Would you like specific information about any particular program?",
                        "Our academic programs are designed to meet industry standards. We have undergraduate and postgraduate courses available. Which field interests you?",
                        "DIE provides comprehensive education in various disciplines. You can explore our courses section for detailed information about each program.",
                    ],
                },
                KeywordRule {
                    keywords: vec!["admission", "apply", "application", "enroll", "registration", "requirements"],
                    value: vec![
                        "Admissions are open for the next academic year. You can apply online through our website. Do you need information about specific requirements?",
                        "To apply to DIE, you'll need to submit your academic transcripts, personal statement, and meet our entrance requirements. Would you like details about the application process?",
                        "Our admissions team is here to help! Applications can be submitted online. What specific information do you need about the admission process?",
                    ],
                },
                KeywordRule {
                    keywords: vec!["campus", "facilities", "library", "laboratory", "sports", "accommodation"],
                    value: vec![
                        "Our modern campus features state-of-the-art facilities including a central library, science laboratories, sports complex, and student accommodation. You can take a 3D virtual tour!",
                        "DIE campus is equipped with modern amenities to support your learning experience. We have excellent library resources, well-equipped labs, and recreational facilities.",
                        "The campus offers a vibrant learning environment with all necessary facilities. Would you like to know about any specific facility?",
                    ],
                },
                KeywordRule {
                    keywords: vec!["fee", "cost", "tuition", "payment", "scholarship", "financial"],
                    value: vec![
                        "Our fee structure varies by program. We also offer scholarships and financial aid for eligible students. Would you like specific information about fees for a particular course?",
                        "Tuition fees depend on the program you choose. We have flexible payment options and scholarship opportunities available. Contact our finance office for detailed information.",
                        "We strive to make quality education affordable. Various financial assistance programs are available. Which program are you interested in?",
                    ],
                },
                KeywordRule {
                    keywords: vec!["3d", "voice search", "ai", "technology", "digital", "online"],
                    value: vec![
                        "DIE embraces modern technology! We have 3D campus visualization, voice search capabilities, and AI assistance to enhance your experience.",
                        "Our institute uses cutting-edge technology including virtual reality campus tours, voice-activated search, and AI-powered learning assistance.",
                        "Technology is integrated into our learning environment. You can explore our campus in 3D, use voice commands, and get AI assistance anytime!",
                    ],
                },
                KeywordRule {
                    keywords: vec!["contact", "phone", "email", "address", "location", "visit"],
                    value: vec![
                        "You can reach us at info@die.edu or call +94 11 234 5678. We're located in Colombo, Sri Lanka. Our admissions office is open Monday to Friday.",
                        "For more information, contact our admissions office at info@die.edu. You can also visit our campus in Colombo for a personal consultation.",
                        "Feel free to contact us! Email: info@die.edu, Phone: +94 11 234 5678. We'd be happy to arrange a campus visit for you.",
                    ],
                },
            ]),
            fallback: WIDGET_DEFAULTS.to_vec(),
        }
    }

    /// Pick a reply for `message` from the first matching topic, or a fallback.
    pub fn reply<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> &'static str {
        let replies = self.table.first_match(message).unwrap_or(&self.fallback);
        replies.choose(rng).copied().unwrap_or(API_DEFAULT)
    }

    /// True when `message` hits a topic rather than the fallback.
    pub fn recognizes(&self, message: &str) -> bool {
        self.table.first_match(message).is_some()
    }
}
