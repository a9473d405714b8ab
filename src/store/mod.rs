//! Restaurant/menu record store interface.
//!
//! The store is the source of truth and lives outside this crate. Queries are
//! parameterized by a typed field and a [`SearchPattern`] instead of
//! string-built query documents.

pub mod error;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryStore, MENUS_FILE, RESTAURANTS_FILE};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockRestaurantStore;

use crate::model::{MenuRecord, RestaurantRecord};

/// Restaurant fields that can be pattern-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantField {
    Name,
    Attributes,
}

impl RestaurantField {
    pub fn field_path(&self) -> &'static str {
        match self {
            RestaurantField::Name => "name",
            RestaurantField::Attributes => "attributes",
        }
    }
}

/// Menu fields that can be pattern-matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuField {
    ItemName,
    ItemAttributes,
}

impl MenuField {
    pub fn field_path(&self) -> &'static str {
        match self {
            MenuField::ItemName => "items.name",
            MenuField::ItemAttributes => "items.attributes",
        }
    }
}

/// Case-insensitive substring pattern.
///
/// The user query is matched literally; no characters are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    raw: String,
    needle: String,
}

impl SearchPattern {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            needle: query.to_lowercase(),
        }
    }

    /// The query as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    /// Returns `true` if any element matches.
    pub fn matches_any<S: AsRef<str>>(&self, values: &[S]) -> bool {
        values.iter().any(|v| self.matches(v.as_ref()))
    }
}

impl RestaurantRecord {
    /// Returns `true` if `field` matches `pattern`.
    pub fn matches(&self, field: RestaurantField, pattern: &SearchPattern) -> bool {
        match field {
            RestaurantField::Name => pattern.matches(&self.name),
            RestaurantField::Attributes => pattern.matches_any(&self.attributes),
        }
    }
}

impl MenuRecord {
    /// Returns `true` if any item's `field` matches `pattern`.
    pub fn matches(&self, field: MenuField, pattern: &SearchPattern) -> bool {
        self.items.iter().any(|item| match field {
            MenuField::ItemName => pattern.matches(&item.name),
            MenuField::ItemAttributes => pattern.matches_any(&item.attributes),
        })
    }
}

/// Read-only async interface to the record store.
///
/// Result order must be stable for identical store contents; search merging
/// depends on it.
pub trait RestaurantStore: Send + Sync {
    /// Returns every restaurant.
    fn find_all(&self) -> impl std::future::Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;

    /// Returns restaurants whose `field` matches `pattern`.
    fn find_restaurants_matching(
        &self,
        field: RestaurantField,
        pattern: &SearchPattern,
    ) -> impl std::future::Future<Output = StoreResult<Vec<RestaurantRecord>>> + Send;

    /// Returns menus with at least one item whose `field` matches `pattern`.
    fn find_menus_matching(
        &self,
        field: MenuField,
        pattern: &SearchPattern,
    ) -> impl std::future::Future<Output = StoreResult<Vec<MenuRecord>>> + Send;

    /// Point lookup by restaurant id.
    fn find_restaurant_by_id(
        &self,
        restaurant_id: &str,
    ) -> impl std::future::Future<Output = StoreResult<Option<RestaurantRecord>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemRecord;

    #[test]
    fn test_pattern_is_case_insensitive_substring() {
        let pattern = SearchPattern::new("BiRy");
        assert!(pattern.matches("Chicken Biryani"));
        assert!(pattern.matches("biryani house"));
        assert!(!pattern.matches("Pulao"));
    }

    #[test]
    fn test_pattern_is_literal() {
        let pattern = SearchPattern::new(".*");
        assert!(!pattern.matches("anything"));
        assert!(pattern.matches("weird .* name"));
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(RestaurantField::Name.field_path(), "name");
        assert_eq!(RestaurantField::Attributes.field_path(), "attributes");
        assert_eq!(MenuField::ItemName.field_path(), "items.name");
        assert_eq!(MenuField::ItemAttributes.field_path(), "items.attributes");
    }

    #[test]
    fn test_menu_matches_item_fields() {
        let menu = MenuRecord {
            restaurant_id: "1".to_string(),
            items: vec![ItemRecord {
                name: "Masala Dosa".to_string(),
                attributes: vec!["South Indian".to_string(), "Spicy".to_string()],
            }],
        };

        assert!(menu.matches(MenuField::ItemName, &SearchPattern::new("dosa")));
        assert!(!menu.matches(MenuField::ItemName, &SearchPattern::new("spicy")));
        assert!(menu.matches(MenuField::ItemAttributes, &SearchPattern::new("spicy")));
    }
}
