//! Tag fixtures for creating in-memory test data.

use entity::tag;

use super::fixed_timestamp;

/// Default test tag name.
pub const DEFAULT_NAME: &str = "Test Tag";

/// Creates a tag entity model with default values (id `1`, name `"Test Tag"`).
pub fn entity() -> tag::Model {
    entity_builder().build()
}

/// Creates a tag entity builder for customization.
pub fn entity_builder() -> TagEntityBuilder {
    TagEntityBuilder::default()
}

/// Builder for creating customized tag entity models.
pub struct TagEntityBuilder {
    id: i32,
    name: String,
}

impl Default for TagEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl TagEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> tag::Model {
        tag::Model {
            id: self.id,
            name: self.name,
            created_at: fixed_timestamp(),
        }
    }
}
