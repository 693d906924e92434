//! Entity containers ("chunks") and the entity capability interface
//!
//! A `Chunk<T>` is an unordered, mutable collection addressed by
//! generation-counted handles:
//! - insertion returns a stable `Handle`,
//! - removal is O(1) and never invalidates other members' handles,
//! - a member may expire itself during a bulk update pass without skipping
//!   or double-processing any sibling (removal is deferred to pass end)
//!
//! Iteration order equals container order; drawing performs no z-sorting.
//!
//! Heterogeneous chunks hold `Box<dyn Entity>`, the shared update/draw
//! capability implemented by every world entity kind.

use rand_chacha::ChaCha8Rng;

use crate::simulation::canvas::{Camera, Canvas};
use crate::simulation::craft::Craft;
use crate::simulation::params::Parameters;

/// Outcome of one member update: `Expired` members are removed from their
/// chunk once the current pass completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vitality {
    Alive,
    Expired,
}

/// Stable, opaque identity of an entity inside one chunk.
///
/// The generation counter detects stale handles: a handle kept across a
/// removal (or across slot reuse) stops resolving instead of aliasing a
/// different entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
}

struct Entry<T> {
    value: T,
    order_pos: u32, // back-pointer into `order`
}

/// Owning entity collection with a shared update/draw lifecycle pass.
pub struct Chunk<T> {
    slots: Vec<Slot<T>>,
    order: Vec<u32>, // live slot indices, in container order
    free: Vec<u32>,
}

impl<T> Chunk<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add an entity; returns its stable handle.
    pub fn insert(&mut self, value: T) -> Handle {
        let order_pos = self.order.len() as u32;
        let index = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(Entry { value, order_pos });
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(Entry { value, order_pos }),
                });
                index
            }
        };
        self.order.push(index);
        Handle {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// Remove by handle. Stale handles return `None` and leave the chunk
    /// untouched.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);

        // Patch container order: swap the last live index into the hole.
        let pos = entry.order_pos as usize;
        self.order.swap_remove(pos);
        if let Some(&moved) = self.order.get(pos) {
            if let Some(moved_entry) = self.slots[moved as usize].entry.as_mut() {
                moved_entry.order_pos = pos as u32;
            }
        }
        Some(entry.value)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref().map(|e| &e.value)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_mut().map(|e| &mut e.value)
    }

    /// Iterate members in container order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order
            .iter()
            .filter_map(move |&i| self.slots[i as usize].entry.as_ref().map(|e| &e.value))
    }

    /// Invoke `f` exactly once on every member present at pass start.
    ///
    /// Members reporting `Expired` are collected and removed after the
    /// traversal, so self-removal can never corrupt the pass.
    pub fn update_each(&mut self, mut f: impl FnMut(&mut T) -> Vitality) {
        let mut expired: Vec<Handle> = Vec::new();
        for pos in 0..self.order.len() {
            let index = self.order[pos];
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation;
            if let Some(entry) = slot.entry.as_mut() {
                if f(&mut entry.value) == Vitality::Expired {
                    expired.push(Handle { index, generation });
                }
            }
        }
        for handle in expired {
            self.remove(handle);
        }
    }

    /// Invoke `f` on every member, in container order.
    pub fn draw_each(&mut self, mut f: impl FnMut(&mut T)) {
        for pos in 0..self.order.len() {
            let index = self.order[pos] as usize;
            if let Some(entry) = self.slots[index].entry.as_mut() {
                f(&mut entry.value);
            }
        }
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared capability interface for world entities.
///
/// Replaces the concrete-type dispatch of the original design: the chunk
/// iterates over this interface and never branches on entity kind. Gravity
/// sources receive the player craft as the pull target; purely decorative
/// entities ignore it.
pub trait Entity {
    fn update(&mut self, dt: f64, craft: &mut Craft, params: &Parameters) -> Vitality;

    /// Draw relative to `camera`. Takes `&mut self` because background
    /// stars relocate themselves when they fall outside the viewport.
    fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, rng: &mut ChaCha8Rng);
}

impl Chunk<Box<dyn Entity + Send + Sync>> {
    /// Update every member, with the craft as the shared reference point.
    pub fn update(&mut self, dt: f64, craft: &mut Craft, params: &Parameters) {
        self.update_each(|e| e.update(dt, craft, params));
    }

    /// Draw every member through the camera transform, in container order.
    pub fn draw(&mut self, camera: &Camera, canvas: &mut dyn Canvas, rng: &mut ChaCha8Rng) {
        self.draw_each(|e| e.draw(camera, canvas, rng));
    }
}
