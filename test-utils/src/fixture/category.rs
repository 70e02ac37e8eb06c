//! Category fixtures for creating in-memory test data.

use entity::category;

use super::fixed_timestamp;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Test Category";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "Category used in tests";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Category"`
/// - description: `"Category used in tests"`
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    name: String,
    description: String,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and returns the category entity model.
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: fixed_timestamp(),
        }
    }
}
