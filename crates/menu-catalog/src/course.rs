//! Course categories and the selection used by the course filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownCourse;

/// Course a menu item belongs to.
///
/// Serialised using the human-readable label, so `MainCourse` appears as
/// `"Main Course"` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    /// Starters served before the main course.
    Appetizer,
    /// The principal dish.
    #[serde(rename = "Main Course")]
    MainCourse,
    /// Sweets served at the end of the meal.
    Dessert,
    /// Drinks.
    Beverage,
}

impl Course {
    /// Every course in menu order.
    pub const ALL: [Self; 4] = [Self::Appetizer, Self::MainCourse, Self::Dessert, Self::Beverage];

    /// Human-readable label, e.g. `Main Course`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
        }
    }

    /// Kebab-case slug, e.g. `main-course`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Appetizer => "appetizer",
            Self::MainCourse => "main-course",
            Self::Dessert => "dessert",
            Self::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = UnknownCourse;

    /// Accepts the label (any case) or the slug.
    ///
    /// ```
    /// use menu_catalog::Course;
    ///
    /// assert_eq!("main course".parse(), Ok(Course::MainCourse));
    /// assert_eq!("main-course".parse(), Ok(Course::MainCourse));
    /// assert!("brunch".parse::<Course>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|course| {
                course.label().eq_ignore_ascii_case(trimmed)
                    || course.slug().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownCourse {
                label: trimmed.to_owned(),
            })
    }
}

/// Selection applied by the course filter: everything, or a single course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CourseSelection {
    /// Every course.
    #[default]
    All,
    /// Only the given course.
    Course(Course),
}

impl CourseSelection {
    /// Selector options in display order, `All` first.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Course(Course::Appetizer),
        Self::Course(Course::MainCourse),
        Self::Course(Course::Dessert),
        Self::Course(Course::Beverage),
    ];

    /// Label shown on the selector tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Course(course) => course.label(),
        }
    }

    /// Returns `true` if an item of `course` passes this selection.
    #[must_use]
    pub fn matches(self, course: Course) -> bool {
        match self {
            Self::All => true,
            Self::Course(selected) => selected == course,
        }
    }
}

impl From<Course> for CourseSelection {
    fn from(value: Course) -> Self {
        Self::Course(value)
    }
}

impl fmt::Display for CourseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourseSelection {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Course)
    }
}
