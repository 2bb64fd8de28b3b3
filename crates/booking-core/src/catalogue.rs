//! Lesson Catalogue
//!
//! The lesson categories offered by the club and a checkable tree
//! selection over them (categories check or uncheck all their lessons).

use std::collections::BTreeSet;

/// A group of lessons shown as one branch of the catalogue tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonCategory {
    pub key: &'static str,
    pub title: &'static str,
    /// Colour family used for the category badge
    pub tone: &'static str,
    pub lessons: &'static [&'static str],
}

impl LessonCategory {
    /// Key of the lesson at `index`, e.g. `adultChild-2`
    pub fn lesson_key(&self, index: usize) -> String {
        format!("{}-{}", self.key, index)
    }

    pub fn lesson_keys(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.lessons.len()).map(|i| self.lesson_key(i))
    }
}

pub const CATALOGUE: [LessonCategory; 4] = [
    LessonCategory {
        key: "adultChild",
        title: "Adult and Child Lessons",
        tone: "emerald",
        lessons: &[
            "Smiley the Turtle",
            "Bubble the Seahorse",
            "Carl the Clownfish",
            "Danny the Dolphin",
            "Jelly the Jellyfish",
            "Snappy the Crab",
            "Twinkle the Starfish",
        ],
    },
    LessonCategory {
        key: "independantChild",
        title: "Independent Children's Lessons",
        tone: "blue",
        lessons: &["Stage 1", "Stage 2", "Stage 3", "Stage 4", "Stage 5"],
    },
    LessonCategory {
        key: "adult",
        title: "Adult Lessons",
        tone: "amber",
        lessons: &["Beginner", "Intermediate", "Advanced"],
    },
    LessonCategory {
        key: "private",
        title: "Private Lessons",
        tone: "rose",
        lessons: &["Children's Class", "Adult's Class"],
    },
];

pub fn find_category(key: &str) -> Option<&'static LessonCategory> {
    CATALOGUE.iter().find(|c| c.key == key)
}

/// Title of the lesson behind a leaf key
pub fn lesson_title(key: &str) -> Option<&'static str> {
    let (category, index) = key.rsplit_once('-')?;
    let index: usize = index.parse().ok()?;
    find_category(category)?.lessons.get(index).copied()
}

/// Checkbox state of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// Checked lessons, by leaf key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSelection {
    checked: BTreeSet<String>,
}

impl TreeSelection {
    /// Toggle a lesson, or every lesson of a category
    pub fn toggle(&mut self, key: &str) {
        if let Some(category) = find_category(key) {
            let check = self.check_state(key) != CheckState::Checked;
            for leaf in category.lesson_keys() {
                if check {
                    self.checked.insert(leaf);
                } else {
                    self.checked.remove(&leaf);
                }
            }
        } else if lesson_title(key).is_some() && !self.checked.remove(key) {
            self.checked.insert(key.to_string());
        }
    }

    pub fn check_state(&self, key: &str) -> CheckState {
        match find_category(key) {
            Some(category) => {
                let checked = category.lesson_keys().filter(|k| self.checked.contains(k)).count();
                if checked == 0 {
                    CheckState::Unchecked
                } else if checked == category.lessons.len() {
                    CheckState::Checked
                } else {
                    CheckState::Indeterminate
                }
            }
            None if self.checked.contains(key) => CheckState::Checked,
            None => CheckState::Unchecked,
        }
    }

    /// Titles of checked lessons in catalogue order
    pub fn selected_titles(&self) -> Vec<&'static str> {
        CATALOGUE
            .iter()
            .flat_map(|category| {
                category
                    .lessons
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| self.checked.contains(&category.lesson_key(*i)))
                    .map(|(_, title)| *title)
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_title() {
        assert_eq!(lesson_title("adultChild-1"), Some("Bubble the Seahorse"));
        assert_eq!(lesson_title("adult-9"), None);
        assert_eq!(lesson_title("nope"), None);
    }

    #[test]
    fn test_category_toggle_checks_all() {
        let mut selection = TreeSelection::default();
        selection.toggle("adult");
        assert_eq!(selection.check_state("adult"), CheckState::Checked);
        assert_eq!(selection.selected_titles(), vec!["Beginner", "Intermediate", "Advanced"]);

        selection.toggle("adult-1");
        assert_eq!(selection.check_state("adult"), CheckState::Indeterminate);

        // toggling a partly checked category checks the rest
        selection.toggle("adult");
        assert_eq!(selection.check_state("adult"), CheckState::Checked);

        selection.toggle("adult");
        assert_eq!(selection.check_state("adult"), CheckState::Unchecked);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut selection = TreeSelection::default();
        selection.toggle("private-7");
        assert_eq!(selection, TreeSelection::default());
    }
}
