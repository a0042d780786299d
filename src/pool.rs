/// Fixed-size enemy slot pool.
///
/// Slots are pre-allocated; `acquire` activates the lowest free slot and
/// `release` hands it back. Every activation change bumps the slot's
/// generation, so a [`SlotHandle`] taken before a release no longer
/// resolves afterwards.

use crate::entities::{Enemy, MAX_ENEMIES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    pub index: usize,
    pub generation: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyPool {
    slots: Vec<Enemy>,
    generations: Vec<u32>,
    active_count: usize,
}

impl EnemyPool {
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENEMIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(Enemy::baseline).collect(),
            generations: vec![0; capacity],
            active_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Lowest-indexed inactive slot.
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|e| !e.active)
    }

    /// Activate the lowest free slot. `None` when the pool is exhausted.
    pub fn acquire(&mut self) -> Option<usize> {
        let index = self.first_free()?;
        self.activate(index);
        Some(index)
    }

    /// Activate a specific slot. No-op when it is already active or out of range.
    pub fn acquire_at(&mut self, index: usize) -> bool {
        match self.slots.get(index) {
            Some(enemy) if !enemy.active => {
                self.activate(index);
                true
            }
            _ => false,
        }
    }

    fn activate(&mut self, index: usize) {
        self.slots[index].active = true;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.active_count += 1;
    }

    /// Return a slot to the pool. Releasing an inactive slot is a no-op.
    pub fn release(&mut self, index: usize) {
        let Some(enemy) = self.slots.get_mut(index) else {
            return;
        };
        if !enemy.active {
            return;
        }
        enemy.active = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.active_count -= 1;
    }

    pub fn release_all(&mut self) {
        for index in 0..self.slots.len() {
            self.release(index);
        }
    }

    /// Handle to an active slot, valid until the slot is released.
    pub fn handle(&self, index: usize) -> Option<SlotHandle> {
        let enemy = self.slots.get(index)?;
        enemy.active.then(|| SlotHandle {
            index,
            generation: self.generations[index],
        })
    }

    /// Resolve a handle; `None` once the slot was released or recycled.
    pub fn get(&self, handle: SlotHandle) -> Option<&Enemy> {
        let enemy = self.slots.get(handle.index)?;
        (enemy.active && self.generations[handle.index] == handle.generation).then_some(enemy)
    }

    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut Enemy> {
        let generation = *self.generations.get(handle.index)?;
        let enemy = &mut self.slots[handle.index];
        (enemy.active && generation == handle.generation).then_some(enemy)
    }

    /// Raw slot access, active or not.
    pub fn slot(&self, index: usize) -> Option<&Enemy> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut Enemy)> {
        self.slots.iter_mut().enumerate().filter(|(_, e)| e.active)
    }
}

impl Default for EnemyPool {
    fn default() -> Self {
        Self::new()
    }
}
