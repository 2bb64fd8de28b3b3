//! Tree Utilities
//!
//! Flattens the lesson catalogue for rendering.

use std::collections::HashSet;

use booking_core::catalogue::{LessonCategory, CATALOGUE};

use crate::models::CatalogueRow;

/// Render the catalogue as an indented tree.
/// Returns (row, depth) pairs in display order; lessons of collapsed
/// categories are left out.
pub fn flatten_catalogue(categories: &[LessonCategory], expanded: &HashSet<String>) -> Vec<(CatalogueRow, usize)> {
    let mut result = Vec::new();
    for category in categories {
        result.push((
            CatalogueRow {
                key: category.key.to_string(),
                title: category.title,
                tone: category.tone,
                child_count: category.lessons.len(),
            },
            0,
        ));

        if !expanded.contains(category.key) {
            continue;
        }
        for (index, title) in category.lessons.iter().enumerate() {
            let row = CatalogueRow {
                key: category.lesson_key(index),
                title: *title,
                tone: category.tone,
                child_count: 0,
            };
            result.push((row, 1));
        }
    }
    result
}

/// The storefront's catalogue
pub fn catalogue_rows(expanded: &HashSet<String>) -> Vec<(CatalogueRow, usize)> {
    flatten_catalogue(&CATALOGUE, expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_catalogue_shows_categories() {
        let rows = catalogue_rows(&HashSet::new());
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|(row, depth)| row.is_category() && *depth == 0));
    }

    #[test]
    fn test_flatten_expanded_category() {
        let expanded: HashSet<String> = ["adult".to_string()].into_iter().collect();
        let rows = catalogue_rows(&expanded);

        // Categories, with the three adult lessons after "Adult Lessons"
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2].0.key, "adult"); assert_eq!(rows[2].1, 0);
        assert_eq!(rows[3].0.key, "adult-0"); assert_eq!(rows[3].1, 1);
        assert_eq!(rows[5].0.title, "Advanced"); assert_eq!(rows[5].1, 1);
        assert_eq!(rows[6].0.key, "private"); assert_eq!(rows[6].1, 0);
    }
}
