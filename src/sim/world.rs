//! Entity storage
//!
//! Walls, coins and enemies live in one arena addressed by stable ids. Ids
//! are handed out in increasing order and entities are kept in insertion
//! order, so iteration is deterministic and doubles as draw order.

use glam::Vec2;

use super::rect::Rect;

/// Stable entity handle, never reused within a session
pub type EntityId = u32;

/// Per-kind data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// Static arena boundary
    Wall,
    /// Pickup worth one point
    Coin,
    /// Hazard drifting across the screen at a fixed velocity
    Enemy { vel: Vec2 },
}

/// Kind tag without payload, for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Wall,
    Coin,
    Enemy,
}

impl EntityKind {
    pub fn class(&self) -> EntityClass {
        match self {
            EntityKind::Wall => EntityClass::Wall,
            EntityKind::Coin => EntityClass::Coin,
            EntityKind::Enemy { .. } => EntityClass::Enemy,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub rect: Rect,
}

impl Entity {
    pub fn class(&self) -> EntityClass {
        self.kind.class()
    }

    /// Advance one frame. Only enemies move on their own.
    pub fn advance(&mut self) {
        if let EntityKind::Enemy { vel } = self.kind {
            self.rect.translate(vel);
        }
    }
}

/// Arena of all non-player entities
#[derive(Debug, Clone)]
pub struct World {
    entities: Vec<Entity>,
    next_id: EntityId,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve an id without storing an entity (used for the player)
    pub fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, kind: EntityKind, rect: Rect) -> EntityId {
        let id = self.allocate_id();
        self.entities.push(Entity { id, kind, rect });
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn of_class(&self, class: EntityClass) -> impl Iterator<Item = &Entity> + Clone {
        self.entities.iter().filter(move |e| e.class() == class)
    }

    pub fn count(&self, class: EntityClass) -> usize {
        self.of_class(class).count()
    }

    /// Wall rectangles, in insertion order
    pub fn walls(&self) -> impl Iterator<Item = &Rect> + Clone {
        self.of_class(EntityClass::Wall).map(|e| &e.rect)
    }

    pub fn coins(&self) -> impl Iterator<Item = &Entity> + Clone {
        self.of_class(EntityClass::Coin)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Entity> + Clone {
        self.of_class(EntityClass::Enemy)
    }

    /// Move every entity by its own velocity
    pub fn advance(&mut self) {
        for entity in &mut self.entities {
            entity.advance();
        }
    }

    /// Remove every entity of `class` overlapping `rect` and return them
    pub fn take_overlapping(&mut self, rect: &Rect, class: EntityClass) -> Vec<Entity> {
        let mut taken = Vec::new();
        self.entities.retain(|e| {
            if e.class() == class && e.rect.intersects(rect) {
                taken.push(e.clone());
                false
            } else {
                true
            }
        });
        taken
    }

    /// Keep only entities for which `keep` returns true; returns how many were dropped
    pub fn retain(&mut self, mut keep: impl FnMut(&Entity) -> bool) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| keep(e));
        before - self.entities.len()
    }
}
