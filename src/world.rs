//! A population of independent solids stepped together each tick.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::integrator::validate_dt;
use crate::solid::Solid;
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Handle to a solid stored in a [`SolidSet`].
///
/// Removing the solid bumps its slot's generation, so every copy of the
/// old handle resolves to [`PhysicsError::StaleHandle`] afterwards. A slot
/// whose generation reaches `u32::MAX` is retired instead of reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolidHandle {
    index: usize,
    generation: u32,
}

impl SolidHandle {
    pub fn index(&self) -> usize { self.index }
    pub fn generation(&self) -> u32 { self.generation }

    fn stale(&self) -> PhysicsError {
        PhysicsError::StaleHandle { index: self.index, generation: self.generation }
    }
}

struct Slot<F: Float> {
    generation: u32,
    solid: Option<Solid<F>>,
}

/// Owns a set of solids behind generational handles.
pub struct SolidSet<F: Float> {
    slots: AllocVec<Slot<F>>,
    free: AllocVec<usize>,
    len: usize,
}

impl<F: Float> SolidSet<F> {
    pub fn new() -> Self {
        SolidSet {
            slots: AllocVec::new(),
            free: AllocVec::new(),
            len: 0,
        }
    }

    /// Take ownership of `solid`. Fails with `AllocationFailed` instead of
    /// aborting when storage cannot grow.
    pub fn insert(&mut self, solid: Solid<F>) -> Result<SolidHandle, PhysicsError> {
        solid.validate()?;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.solid = Some(solid);
            self.len += 1;
            return Ok(SolidHandle { index, generation: slot.generation });
        }

        // Reserve the free list up front so `remove` never allocates.
        let free_needed = self.slots.len() + 1 - self.free.len();
        self.slots.try_reserve(1).map_err(|_| PhysicsError::AllocationFailed)?;
        self.free.try_reserve(free_needed).map_err(|_| PhysicsError::AllocationFailed)?;

        let index = self.slots.len();
        self.slots.push(Slot { generation: 0, solid: Some(solid) });
        self.len += 1;
        Ok(SolidHandle { index, generation: 0 })
    }

    /// Take the solid back out, invalidating `handle`.
    pub fn remove(&mut self, handle: SolidHandle) -> Result<Solid<F>, PhysicsError> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or_else(|| handle.stale())?;
        let solid = slot.solid.take().ok_or_else(|| handle.stale())?;
        // A slot out of generations is retired rather than wrapped, so no
        // old handle can ever resolve again.
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(handle.index);
        }
        self.len -= 1;
        Ok(solid)
    }

    pub fn get(&self, handle: SolidHandle) -> Result<&Solid<F>, PhysicsError> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.solid.as_ref())
            .ok_or_else(|| handle.stale())
    }

    pub fn get_mut(&mut self, handle: SolidHandle) -> Result<&mut Solid<F>, PhysicsError> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.solid.as_mut())
            .ok_or_else(|| handle.stale())
    }

    pub fn contains(&self, handle: SolidHandle) -> bool {
        self.get(handle).is_ok()
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Live solids with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SolidHandle, &Solid<F>)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.solid
                .as_ref()
                .map(|solid| (SolidHandle { index, generation: slot.generation }, solid))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SolidHandle, &mut Solid<F>)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.solid
                .as_mut()
                .map(|solid| (SolidHandle { index, generation }, solid))
        })
    }

    /// Advance every solid by `dt`.
    ///
    /// `dt` and every solid are checked before anything moves, so an error
    /// leaves the whole set untouched.
    pub fn step(&mut self, dt: F) -> Result<(), PhysicsError> {
        validate_dt(dt)?;
        for (_, solid) in self.iter() {
            solid.validate()?;
        }
        self.step_unchecked(dt)
    }

    #[cfg(not(feature = "parallel"))]
    fn step_unchecked(&mut self, dt: F) -> Result<(), PhysicsError> {
        for (_, solid) in self.iter_mut() {
            solid.update(dt)?;
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn step_unchecked(&mut self, dt: F) -> Result<(), PhysicsError> {
        self.slots
            .par_iter_mut()
            .filter_map(|slot| slot.solid.as_mut())
            .try_for_each(|solid| solid.update(dt))
    }
}

impl<F: Float> Default for SolidSet<F> {
    fn default() -> Self {
        Self::new()
    }
}
