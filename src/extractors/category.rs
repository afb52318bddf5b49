//! Category matching for events.

use super::contains_word;
use crate::types::KnownCategory;

/// Keyword buckets and the category-name fragments each bucket maps onto.
const BUCKETS: &[(&[&str], &[&str])] = &[
    (
        &["exam", "test", "quiz", "midterm", "final"],
        &["exam", "test", "quiz"],
    ),
    (
        &[
            "homework",
            "hw",
            "assignment",
            "essay",
            "paper",
            "project",
            "problem set",
            "submit",
            "due",
            "deadline",
        ],
        &["assignment", "homework", "school", "academic"],
    ),
    (&["lab", "experiment"], &["lab"]),
    (
        &[
            "gym",
            "workout",
            "run",
            "yoga",
            "doctor",
            "dentist",
            "birthday",
            "party",
            "dinner",
            "lunch",
            "appointment",
            "haircut",
            "groceries",
            "errand",
            "bank",
            "rent",
            "shift",
        ],
        &["personal", "health", "fitness", "errand", "finance", "work", "life"],
    ),
];

/// Category whose name appears in the text, else one reached through the keyword buckets.
pub fn match_category<'a>(text: &str, categories: &'a [KnownCategory]) -> Option<&'a KnownCategory> {
    let lower = text.to_lowercase();

    let direct = categories.iter().find(|category| {
        let name = category.name.to_lowercase();
        let singular = name.strip_suffix('s').unwrap_or(&name);
        !singular.is_empty() && (lower.contains(&name) || contains_word(&lower, singular))
    });
    if direct.is_some() {
        return direct;
    }

    BUCKETS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| contains_word(&lower, k)))
        .find_map(|(_, fragments)| {
            categories.iter().find(|category| {
                let name = category.name.to_lowercase();
                fragments.iter().any(|f| name.contains(f))
            })
        })
}
