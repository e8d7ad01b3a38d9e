//=========================================================================
// Entity Pool
//=========================================================================
//
// Growable arena of recyclable entities indexed by slot.
//
// Architecture:
//   acquire() → first inactive slot (reused) or a new slot (grown)
//   kill_and_hide() → inactive + invisible, slot kept for reuse
//
// Slots are never removed, so a slot index stays valid for the pool's
// whole lifetime.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Slot ================================================================

#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    active: bool,
    visible: bool,
}

//=== Pool ================================================================

/// A pool of `T` with per-slot active/visible flags.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    //--- Acquire / Release ------------------------------------------------

    /// Returns the index of a slot that is now active and visible.
    ///
    /// The first inactive slot is reused and handed to `reuse` for
    /// re-initialization; if every slot is active the pool grows by one
    /// item built by `create`.
    pub fn acquire<C, R>(&mut self, create: C, reuse: R) -> usize
    where
        C: FnOnce() -> T,
        R: FnOnce(&mut T),
    {
        if let Some(index) = self.slots.iter().position(|slot| !slot.active) {
            let slot = &mut self.slots[index];
            reuse(&mut slot.item);
            slot.active = true;
            slot.visible = true;
            trace!("Pool reused slot {}", index);
            return index;
        }

        self.slots.push(Slot {
            item: create(),
            active: true,
            visible: true,
        });
        trace!("Pool grew to {} slots", self.slots.len());
        self.slots.len() - 1
    }

    /// Deactivates and hides the slot. Returns `false` if it was not active.
    pub fn kill_and_hide(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.active => {
                slot.active = false;
                slot.visible = false;
                true
            }
            _ => false,
        }
    }

    //--- Access -----------------------------------------------------------

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|slot| &slot.item)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|slot| &mut slot.item)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.active)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.visible)
    }

    /// Iterates `(index, item)` over active slots.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(|(index, slot)| (index, &slot.item))
    }

    /// Iterates `(index, item)` mutably over active slots.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(|(index, slot)| (index, &mut slot.item))
    }

    /// Total number of slots, active or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn count_active(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }

    /// Drops every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
