// src/spawner/pool.rs
//! Bounded free-list of reusable instances with lifecycle hooks.
//! - `get` pops an inactive instance, or creates one when the free list is empty
//! - `release` pushes back while fewer than `max_size` instances are free,
//!   otherwise the instance is destroyed
//! - hooks write through `Commands`, so transitions land at the next sync point

use bevy::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

type CreateHook<T> = Box<dyn FnMut(&mut Commands) -> T + Send + Sync>;
type LifecycleHook<T> = Box<dyn FnMut(&mut Commands, T) + Send + Sync>;

/// Capacity knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolLimits {
    /// Free-list capacity reserved up front (nothing is created eagerly).
    pub default_capacity: usize,
    /// Most instances the free list will hold; releases past this destroy.
    pub max_size: usize,
}

/// The four transitions of a pooled instance.
pub struct PoolHooks<T> {
    create: CreateHook<T>,
    on_get: LifecycleHook<T>,
    on_release: LifecycleHook<T>,
    on_destroy: LifecycleHook<T>,
}

impl<T: 'static> PoolHooks<T> {
    pub fn new(create: impl FnMut(&mut Commands) -> T + Send + Sync + 'static) -> Self {
        Self {
            create: Box::new(create),
            on_get: Box::new(|_, _| {}),
            on_release: Box::new(|_, _| {}),
            on_destroy: Box::new(|_, _| {}),
        }
    }

    pub fn on_get(mut self, hook: impl FnMut(&mut Commands, T) + Send + Sync + 'static) -> Self {
        self.on_get = Box::new(hook);
        self
    }

    pub fn on_release(mut self, hook: impl FnMut(&mut Commands, T) + Send + Sync + 'static) -> Self {
        self.on_release = Box::new(hook);
        self
    }

    pub fn on_destroy(mut self, hook: impl FnMut(&mut Commands, T) + Send + Sync + 'static) -> Self {
        self.on_destroy = Box::new(hook);
        self
    }
}

/// What happened to a released instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Released {
    /// Back on the free list.
    Pooled,
    /// Free list was full; the destroy hook ran.
    Destroyed,
}

pub struct Pool<T> {
    free: Vec<T>,
    /// Checked-out instances. Guards against double release.
    active: HashSet<T>,
    hooks: PoolHooks<T>,
    limits: PoolLimits,
    /// Live instances (active + free) this pool is responsible for.
    count_all: usize,
}

impl<T: Copy + Eq + Hash> Pool<T> {
    pub fn new(hooks: PoolHooks<T>, limits: PoolLimits) -> Self {
        Self {
            free: Vec::with_capacity(limits.default_capacity),
            active: HashSet::with_capacity(limits.default_capacity),
            hooks,
            limits,
            count_all: 0,
        }
    }

    /// Check out an instance, reusing the most recently released one first.
    pub fn get(&mut self, commands: &mut Commands) -> T {
        let item = match self.free.pop() {
            Some(item) => item,
            None => {
                self.count_all += 1;
                (self.hooks.create)(commands)
            }
        };
        (self.hooks.on_get)(commands, item);
        self.active.insert(item);
        item
    }

    pub fn release(&mut self, commands: &mut Commands, item: T) -> Result<Released, PoolError> {
        if !self.active.remove(&item) {
            return Err(PoolError::NotCheckedOut);
        }
        (self.hooks.on_release)(commands, item);

        if self.free.len() < self.limits.max_size {
            self.free.push(item);
            Ok(Released::Pooled)
        } else {
            self.count_all -= 1;
            (self.hooks.on_destroy)(commands, item);
            Ok(Released::Destroyed)
        }
    }

    /// Checked-out instances, in no particular order.
    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.active.iter()
    }

    #[cfg(test)]
    fn is_active(&self, item: &T) -> bool {
        self.active.contains(item)
    }

    pub fn count_active(&self) -> usize {
        self.active.len()
    }

    pub fn count_inactive(&self) -> usize {
        self.free.len()
    }

    pub fn count_all(&self) -> usize {
        self.count_all
    }

    pub fn limits(&self) -> PoolLimits {
        self.limits
    }
}

// ---------- Errors ----------

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("instance is not checked out of this pool (already released, or never pooled)")]
    NotCheckedOut,
}
