use std::collections::HashMap;

use serde::Serialize;

use crate::error::{AtlasError, Result};

/// Static attributes of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub id: String,
    pub category: String,
    pub cost: u64,
}

/// Owns every [`Entity`], keyed by identifier. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    by_id: HashMap<String, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
        }
    }

    /// Register an entity. The first registration of an id wins; returns
    /// false for a duplicate.
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.by_id.contains_key(&entity.id) {
            tracing::warn!(id = %entity.id, "duplicate entity record ignored");
            return false;
        }
        self.by_id.insert(entity.id.clone(), self.entities.len());
        self.entities.push(entity);
        true
    }

    /// Look up an entity, failing with [`AtlasError::NotFound`].
    pub fn lookup(&self, id: &str) -> Result<&Entity> {
        self.get(id).ok_or_else(|| AtlasError::NotFound { id: id.to_string() })
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.by_id.get(id).map(|&i| &self.entities[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }
}

impl FromIterator<Entity> for EntityRegistry {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut registry = EntityRegistry::new();
        for entity in iter {
            registry.insert(entity);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, category: &str, cost: u64) -> Entity {
        Entity {
            id: id.to_string(),
            category: category.to_string(),
            cost,
        }
    }

    #[test]
    fn test_lookup_found() {
        let registry: EntityRegistry = vec![entity("Peru", "South America", 4)].into_iter().collect();
        let peru = registry.lookup("Peru").unwrap();
        assert_eq!(peru.category, "South America");
        assert_eq!(peru.cost, 4);
    }

    #[test]
    fn test_lookup_not_found() {
        let registry = EntityRegistry::new();
        let err = registry.lookup("Atlantis").unwrap_err();
        assert_eq!(err, AtlasError::NotFound { id: "Atlantis".to_string() });
        assert_eq!(err.id(), "Atlantis");
        assert_eq!(err.to_string(), "'Atlantis' is not a known location");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry: EntityRegistry = vec![entity("Peru", "South America", 4)].into_iter().collect();
        assert!(registry.lookup("peru").is_err());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut registry = EntityRegistry::new();
        assert!(registry.insert(entity("Peru", "South America", 4)));
        assert!(!registry.insert(entity("Peru", "Europe", 9)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("Peru").unwrap().cost, 4);
    }

    #[test]
    fn test_iter_registration_order() {
        let registry: EntityRegistry = vec![
            entity("B", "X", 1),
            entity("A", "Y", 2),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = registry.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert!(!registry.is_empty());
        assert!(registry.contains("A"));
    }
}
