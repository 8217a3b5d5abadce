//! Category Model

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::subcategory::Subcategory;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Subcategory tags shared by every product of this category
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// Per-weekday dispatch rules
    #[serde(default)]
    pub category_lines: Vec<CategoryLine>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subcategories: Vec::new(),
            category_lines: Vec::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    pub fn with_line(mut self, line: CategoryLine) -> Self {
        self.category_lines.push(line);
        self
    }

    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }

    pub fn has_subcategory(&self, name: &str) -> bool {
        self.subcategories.iter().any(|s| s.name == name)
    }

    pub fn subcategory_names(&self) -> impl Iterator<Item = &str> {
        self.subcategories.iter().map(|s| s.name.as_str())
    }

    /// Active dispatch rule for a weekday
    pub fn line_for(&self, weekday: Weekday) -> Option<&CategoryLine> {
        self.category_lines
            .iter()
            .find(|l| l.active && l.weekday == weekday)
    }
}

/// Dispatch rule of a category for one weekday
///
/// An order for that weekday has to be placed at least `preparation_days`
/// before dispatch, and on the last day no later than `maximum_order_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLine {
    pub weekday: Weekday,
    pub preparation_days: u32,
    pub maximum_order_time: NaiveTime,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_for_skips_inactive() {
        let cutoff = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let category = Category::new(1, "ENSALADAS")
            .with_line(CategoryLine {
                weekday: Weekday::Mon,
                preparation_days: 1,
                maximum_order_time: cutoff,
                active: false,
            })
            .with_line(CategoryLine {
                weekday: Weekday::Tue,
                preparation_days: 2,
                maximum_order_time: cutoff,
                active: true,
            });

        assert!(category.line_for(Weekday::Mon).is_none());
        assert_eq!(category.line_for(Weekday::Tue).unwrap().preparation_days, 2);
    }

    #[test]
    fn test_subcategory_lookup() {
        let category = Category::new(1, "ENTRADAS").with_subcategory(Subcategory::new(3, "ENTRADA"));
        assert!(category.has_subcategories());
        assert!(category.has_subcategory("ENTRADA"));
        assert!(!category.has_subcategory("POSTRES"));
    }
}
