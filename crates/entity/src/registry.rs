use std::collections::BTreeMap;

use framecore_common::EntityId;
use serde::{Deserialize, Serialize};

use crate::child::Child;

/// Events produced by registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    Added { entity: EntityId, group: String },
    Removed { entity: EntityId, group: String },
}

/// Every entity of a scene, keyed by id.
///
/// Uses BTreeMap for canonical iteration order. All mutations produce events.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    children: BTreeMap<EntityId, Child>,
    events: Vec<RegistryEvent>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all pending registry events.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// Insert an entity under its own id, replacing any previous one.
    pub fn insert(&mut self, child: Child) -> EntityId {
        let entity = child.id();
        if let Some(old) = self.children.remove(&entity) {
            self.events.push(RegistryEvent::Removed {
                entity,
                group: old.group().to_string(),
            });
        }
        self.events.push(RegistryEvent::Added {
            entity,
            group: child.group().to_string(),
        });
        tracing::debug!(entity = %entity.short(), group = child.group(), "entity added");
        self.children.insert(entity, child);
        entity
    }

    /// Insert a fresh entity at the origin and return its id.
    pub fn spawn(&mut self) -> EntityId {
        self.insert(Child::default())
    }

    pub fn remove(&mut self, entity: EntityId) -> Option<Child> {
        let removed = self.children.remove(&entity);
        if let Some(ref child) = removed {
            self.events.push(RegistryEvent::Removed {
                entity,
                group: child.group().to_string(),
            });
            tracing::debug!(entity = %entity.short(), "entity removed");
        }
        removed
    }

    pub fn get(&self, entity: EntityId) -> Option<&Child> {
        self.children.get(&entity)
    }

    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut Child> {
        self.children.get_mut(&entity)
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.children.contains_key(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Child)> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&EntityId, &mut Child)> {
        self.children.iter_mut()
    }

    /// Entities tagged with `group`, in id order.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Child> + 'a {
        self.children.values().filter(move |c| c.group() == group)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn insert_remove_events() {
        let mut reg = EntityRegistry::new();
        let id = reg.insert(Child::new(Vec3::ONE).with_group("walls"));
        assert!(reg.contains(id));
        reg.remove(id);
        assert!(reg.is_empty());

        let events = reg.drain_events();
        assert_eq!(
            events,
            vec![
                RegistryEvent::Added { entity: id, group: "walls".into() },
                RegistryEvent::Removed { entity: id, group: "walls".into() },
            ]
        );
        assert!(reg.events().is_empty());
    }

    #[test]
    fn reinsert_replaces() {
        let mut reg = EntityRegistry::new();
        let child = Child::new(Vec3::ZERO);
        let id = reg.insert(child.clone());
        let mut moved = child;
        moved.set_position(Vec3::X);
        reg.insert(moved);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(id).map(|c| c.position()), Some(Vec3::X));
        assert_eq!(reg.events().len(), 3);
    }

    #[test]
    fn remove_missing_is_silent() {
        let mut reg = EntityRegistry::new();
        assert!(reg.remove(EntityId::new()).is_none());
        assert!(reg.events().is_empty());
    }

    #[test]
    fn group_filter() {
        let mut reg = EntityRegistry::new();
        reg.insert(Child::default().with_group("enemy"));
        reg.insert(Child::default().with_group("enemy"));
        reg.insert(Child::default().with_group("floor"));
        reg.spawn();
        assert_eq!(reg.in_group("enemy").count(), 2);
        assert_eq!(reg.in_group("").count(), 1);
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let mut reg = EntityRegistry::new();
        for _ in 0..5 {
            reg.spawn();
        }
        let ids: Vec<EntityId> = reg.iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn mutate_through_get_mut() {
        let mut reg = EntityRegistry::new();
        let id = reg.spawn();
        if let Some(c) = reg.get_mut(id) {
            c.set_velocity(Vec3::Y);
        }
        for (_, c) in reg.iter_mut() {
            c.set_gravity(0.5);
        }
        let c = reg.get(id).unwrap();
        assert_eq!((c.velocity(), c.gravity()), (Vec3::Y, 0.5));
    }
}
