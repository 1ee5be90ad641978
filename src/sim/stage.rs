//! Role bookkeeping for placed entities
//!
//! Every placed id lives in `placed` until it is collected or torn down.
//! Reward, terminal and hazard roles are recorded at placement and only ever
//! removed afterwards.

use std::collections::{HashMap, HashSet};

use super::backend::EntityId;

/// Effects a placed entity has when the agent touches it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Role {
    /// Granted once, then the entity is removed
    pub reward: Option<f32>,
    /// Touching ends the episode
    pub terminal: bool,
    /// Touching costs a small amount every tick
    pub hazard: bool,
}

impl Role {
    pub const NEUTRAL: Role = Role {
        reward: None,
        terminal: false,
        hazard: false,
    };

    pub const TERMINAL: Role = Role {
        reward: None,
        terminal: true,
        hazard: false,
    };

    pub const HAZARD: Role = Role {
        reward: None,
        terminal: false,
        hazard: true,
    };

    pub fn reward(amount: f32) -> Self {
        Self {
            reward: Some(amount),
            ..Self::NEUTRAL
        }
    }

    pub fn and_terminal(mut self, terminal: bool) -> Self {
        self.terminal |= terminal;
        self
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Owned classification tables of the current episode
#[derive(Debug, Clone, Default)]
pub struct StageRegistry {
    placed: Vec<EntityId>,
    reward_table: HashMap<EntityId, f32>,
    terminal: HashSet<EntityId>,
    hazard: HashSet<EntityId>,
}

impl StageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly placed entity and its role
    pub fn register(&mut self, id: EntityId, role: Role) {
        self.placed.push(id);
        if let Some(amount) = role.reward {
            self.reward_table.insert(id, amount);
        }
        if role.terminal {
            self.terminal.insert(id);
        }
        if role.hazard {
            self.hazard.insert(id);
        }
    }

    /// Empty all four collections, returning the ids that were placed
    pub fn take_all(&mut self) -> Vec<EntityId> {
        self.reward_table.clear();
        self.terminal.clear();
        self.hazard.clear();
        std::mem::take(&mut self.placed)
    }

    /// Take the reward of `id`, if it has one, and forget the entity
    pub fn collect_reward(&mut self, id: EntityId) -> Option<f32> {
        let amount = self.reward_table.remove(&id)?;
        self.placed.retain(|&p| p != id);
        Some(amount)
    }

    pub fn is_terminal(&self, id: EntityId) -> bool {
        self.terminal.contains(&id)
    }

    pub fn is_hazard(&self, id: EntityId) -> bool {
        self.hazard.contains(&id)
    }

    pub fn reward_of(&self, id: EntityId) -> Option<f32> {
        self.reward_table.get(&id).copied()
    }

    pub fn is_placed(&self, id: EntityId) -> bool {
        self.placed.contains(&id)
    }

    /// Current role of `id`; neutral when it carries no classification
    pub fn role_of(&self, id: EntityId) -> Role {
        Role {
            reward: self.reward_of(id),
            terminal: self.is_terminal(id),
            hazard: self.is_hazard(id),
        }
    }

    pub fn placed(&self) -> &[EntityId] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
