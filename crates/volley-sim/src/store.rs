//! Entity store: owns every simulated entity.
//!
//! Entities live in a hecs `World`; an ordered index maps the stable
//! `EntityId` to the hecs handle so iteration follows insertion order.
//! Removal only marks an entity dead. The physical despawn happens in
//! `flush`, which the session calls once at the end of each tick.

use std::collections::BTreeMap;

use hecs::World;

use volley_core::components::{Collider, Identity, Position, Velocity};
use volley_core::enums::EntityKind;
use volley_core::error::SimError;
use volley_core::state::Entity;
use volley_core::types::{EntityId, Point2D};

pub struct EntityStore {
    world: World,
    index: BTreeMap<EntityId, hecs::Entity>,
    next_id: u64,
    despawn_buffer: Vec<(EntityId, hecs::Entity)>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            index: BTreeMap::new(),
            next_id: 0,
            despawn_buffer: Vec::new(),
        }
    }

    /// Add an entity. Ids start at 1 and are never handed out twice.
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        position: Point2D,
        velocity: Point2D,
        radius: f64,
    ) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        let entity = self.world.spawn((
            Identity {
                id,
                kind,
                alive: true,
            },
            Position(position),
            Velocity(velocity),
            Collider { radius },
        ));
        self.index.insert(id, entity);
        id
    }

    /// Mark an entity dead. Returns false (and changes nothing) if the id is
    /// unknown or already removed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(&entity) = self.index.get(&id) else {
            return false;
        };
        match self.world.get::<&mut Identity>(entity) {
            Ok(mut identity) if identity.alive => {
                identity.alive = false;
                self.despawn_buffer.push((id, entity));
                true
            }
            _ => false,
        }
    }

    /// Live entities of one kind, in id order.
    ///
    /// The sequence is a snapshot: removing or spawning entities while
    /// walking it does not change what it yields.
    pub fn iterate(&self, kind: EntityKind) -> std::vec::IntoIter<Entity> {
        self.collect(|entity| entity.kind == kind).into_iter()
    }

    /// Every live entity, in id order.
    pub fn all(&self) -> Vec<Entity> {
        self.collect(|_| true)
    }

    pub fn get(&self, id: EntityId) -> Option<Entity> {
        let &entity = self.index.get(&id)?;
        self.read(entity).filter(|e| e.alive)
    }

    pub fn try_get(&self, id: EntityId) -> Result<Entity, SimError> {
        self.get(id).ok_or(SimError::UnknownEntityId(id))
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.index.len() - self.despawn_buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&Identity>()
            .iter()
            .filter(|(_, identity)| identity.alive && identity.kind == kind)
            .count()
    }

    /// Despawn everything removed since the last flush.
    /// Returns how many entities were despawned.
    pub fn flush(&mut self) -> usize {
        let count = self.despawn_buffer.len();
        for (id, entity) in self.despawn_buffer.drain(..) {
            self.index.remove(&id);
            let _ = self.world.despawn(entity);
        }
        count
    }

    /// Drop every entity. Ids keep increasing afterwards.
    pub fn clear(&mut self) {
        self.world.clear();
        self.index.clear();
        self.despawn_buffer.clear();
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn collect(&self, filter: impl Fn(&Entity) -> bool) -> Vec<Entity> {
        self.index
            .values()
            .filter_map(|&entity| self.read(entity))
            .filter(|e| e.alive && filter(e))
            .collect()
    }

    fn read(&self, entity: hecs::Entity) -> Option<Entity> {
        let mut query = self
            .world
            .query_one::<(&Identity, &Position, &Velocity, &Collider)>(entity)
            .ok()?;
        let (identity, position, velocity, collider) = query.get()?;
        Some(Entity {
            id: identity.id,
            kind: identity.kind,
            position: position.0,
            velocity: velocity.0,
            radius: collider.radius,
            alive: identity.alive,
        })
    }
}
