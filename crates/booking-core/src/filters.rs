//! Calendar Filters
//!
//! Filter state for the lesson calendar, its round trip through the page's
//! query string, and matching against listed sessions.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Youngest and oldest selectable ages; 18 means "18+"
pub const AGE_BOUNDS: (u8, u8) = (0, 18);

pub const LOCATIONS: [&str; 2] = ["Little Thetford", "Newmarket"];
pub const COACHES: [&str; 2] = ["Michael Phelps", "Adam Peaty"];
pub const LEVELS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}

/// Bottom drawers on small screens; at most one is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDrawer {
    Class,
    Age,
    Location,
    TimeOfDay,
    Coach,
}

/// A scheduled lesson as listed on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    pub title: String,
    pub location: String,
    pub level: String,
    pub coach: String,
    /// 24h start hour
    pub start_hour: u8,
    pub min_age: u8,
    pub max_age: u8,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarFilters {
    pub age: (u8, u8),
    pub classes: Vec<String>,
    pub locations: Vec<String>,
    pub levels: Vec<String>,
    pub availability: Vec<String>,
    pub times_of_day: Vec<TimeOfDay>,
    pub coaches: Vec<String>,
}

impl Default for CalendarFilters {
    fn default() -> Self {
        Self {
            age: AGE_BOUNDS,
            classes: Vec::new(),
            locations: Vec::new(),
            levels: Vec::new(),
            availability: Vec::new(),
            times_of_day: Vec::new(),
            coaches: Vec::new(),
        }
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|v| *v == value) {
        Some(index) => {
            values.remove(index);
        }
        None => values.push(value),
    }
}

impl CalendarFilters {
    /// "5 years old" for a single age, "0 to 18 years" for a span
    pub fn age_label(&self) -> String {
        let (min, max) = self.age;
        if min == max {
            format!("{} years old", min)
        } else {
            format!("{} to {} years", min, max)
        }
    }

    /// Set the age span; bounds are ordered and clamped
    pub fn set_age(&mut self, a: u8, b: u8) {
        let (lo, hi) = AGE_BOUNDS;
        let a = a.clamp(lo, hi);
        let b = b.clamp(lo, hi);
        self.age = (a.min(b), a.max(b));
    }

    pub fn toggle_class(&mut self, class: &str) {
        toggle(&mut self.classes, class.to_string());
    }

    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.locations, location.to_string());
    }

    pub fn toggle_level(&mut self, level: &str) {
        toggle(&mut self.levels, level.to_string());
    }

    pub fn toggle_time_of_day(&mut self, time: TimeOfDay) {
        toggle(&mut self.times_of_day, time);
    }

    pub fn toggle_coach(&mut self, coach: &str) {
        toggle(&mut self.coaches, coach.to_string());
    }

    /// "Clear all": class, location, time of day and age
    pub fn clear_all(&mut self) {
        self.classes.clear();
        self.locations.clear();
        self.times_of_day.clear();
        self.age = AGE_BOUNDS;
    }

    pub fn matches(&self, session: &ClassSession) -> bool {
        let (min, max) = self.age;
        let ages_overlap = session.min_age <= max && session.max_age >= min;
        let allowed = |list: &[String], value: &str| list.is_empty() || list.iter().any(|v| v == value);

        ages_overlap
            && allowed(&self.classes, &session.title)
            && allowed(&self.locations, &session.location)
            && allowed(&self.levels, &session.level)
            && allowed(&self.coaches, &session.coach)
            && (self.times_of_day.is_empty()
                || self.times_of_day.contains(&TimeOfDay::from_hour(session.start_hour)))
    }

    /// Query string kept in the address bar, without the leading `?`
    pub fn to_query(&self) -> String {
        let encode = |values: &[String]| {
            values
                .iter()
                .map(|v| utf8_percent_encode(v, NON_ALPHANUMERIC).to_string())
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut params = vec![format!("age={},{}", self.age.0, self.age.1)];
        if !self.locations.is_empty() {
            params.push(format!("location={}", encode(&self.locations)));
        }
        if !self.levels.is_empty() {
            params.push(format!("level={}", encode(&self.levels)));
        }
        params.join("&")
    }

    /// Read `age`, `location` and `level` from a query string; anything
    /// missing or unreadable keeps its default
    pub fn from_query(query: &str) -> Self {
        let mut filters = Self::default();
        let decode = |value: &str| -> Vec<String> {
            value
                .split(',')
                .filter(|v| !v.is_empty())
                .map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
                .collect()
        };

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "age" => {
                    let bounds: Vec<u8> = value.split(',').filter_map(|v| v.parse().ok()).collect();
                    if let [a, b] = bounds.as_slice() {
                        filters.set_age(*a, *b);
                    }
                }
                "location" => filters.locations = decode(value),
                "level" => filters.levels = decode(value),
                _ => {}
            }
        }
        filters
    }
}

/// Sessions shown on the calendar
pub fn sample_sessions() -> Vec<ClassSession> {
    let session = |title: &str, location: &str, level: &str, coach: &str, start_hour, ages: (u8, u8), price: &str| {
        ClassSession {
            title: title.to_string(),
            location: location.to_string(),
            level: level.to_string(),
            coach: coach.to_string(),
            start_hour,
            min_age: ages.0,
            max_age: ages.1,
            price: price.to_string(),
        }
    };

    vec![
        session("Bubble the Seahorse", "Little Thetford", "1", "Michael Phelps", 11, (0, 3), "£16.00"),
        session("Smiley the Turtle", "Newmarket", "1", "Adam Peaty", 9, (0, 2), "£16.00"),
        session("Stage 1", "Newmarket", "2", "Adam Peaty", 16, (4, 7), "£12.00"),
        session("Stage 3", "Little Thetford", "4", "Michael Phelps", 17, (6, 10), "£12.00"),
        session("Beginner", "Newmarket", "5", "Adam Peaty", 19, (18, 18), "£14.00"),
        session("Advanced", "Little Thetford", "8", "Michael Phelps", 7, (18, 18), "£14.00"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label() {
        let mut filters = CalendarFilters::default();
        assert_eq!(filters.age_label(), "0 to 18 years");
        filters.set_age(5, 5);
        assert_eq!(filters.age_label(), "5 years old");
        filters.set_age(30, 4);
        assert_eq!(filters.age, (4, 18));
    }

    #[test]
    fn test_clear_all_keeps_levels() {
        let mut filters = CalendarFilters::default();
        filters.toggle_location("Newmarket");
        filters.toggle_level("3");
        filters.toggle_time_of_day(TimeOfDay::Evening);
        filters.set_age(3, 6);
        filters.clear_all();
        assert!(filters.locations.is_empty());
        assert!(filters.times_of_day.is_empty());
        assert_eq!(filters.age, AGE_BOUNDS);
        assert_eq!(filters.levels, vec!["3".to_string()]);
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut filters = CalendarFilters::default();
        filters.toggle_coach("Adam Peaty");
        filters.toggle_coach("Adam Peaty");
        assert!(filters.coaches.is_empty());
    }

    #[test]
    fn test_query_round_trip() {
        let mut filters = CalendarFilters::default();
        filters.set_age(2, 9);
        filters.toggle_location("Little Thetford");
        filters.toggle_location("Newmarket");
        filters.toggle_level("1");
        filters.toggle_level("4");

        let query = filters.to_query();
        assert_eq!(query, "age=2,9&location=Little%20Thetford,Newmarket&level=1,4");

        let parsed = CalendarFilters::from_query(&format!("?{}", query));
        assert_eq!(parsed.age, (2, 9));
        assert_eq!(parsed.locations, filters.locations);
        assert_eq!(parsed.levels, filters.levels);
    }

    #[test]
    fn test_from_query_ignores_garbage() {
        let parsed = CalendarFilters::from_query("age=x&location=&foo=bar&level");
        assert_eq!(parsed, CalendarFilters::default());
    }

    #[test]
    fn test_matches() {
        let sessions = sample_sessions();
        let mut filters = CalendarFilters::default();
        assert_eq!(sessions.iter().filter(|s| filters.matches(s)).count(), sessions.len());

        filters.toggle_location("Newmarket");
        filters.toggle_time_of_day(TimeOfDay::Afternoon);
        let titles: Vec<&str> = sessions
            .iter()
            .filter(|s| filters.matches(s))
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Stage 1"]);

        filters.set_age(10, 12);
        assert_eq!(sessions.iter().filter(|s| filters.matches(s)).count(), 0);
    }
}
