use std::any::TypeId;
use std::collections::HashMap;

use crate::State;

/// Container for all application state, keyed by concrete type.
///
/// One instance lives in the app; each screen registers its state struct once
/// at startup (or lazily via [`StateCtx::state_mut`], which inserts the
/// default) and accesses it by type every frame.
#[derive(Default)]
pub struct StateCtx {
    storage: HashMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    /// Immutable access. Returns `None` when the state was never registered.
    pub fn state<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    /// Mutable access, inserting `T::default()` on first use.
    pub fn state_mut<T: State + Default>(&mut self) -> &mut T {
        let boxed = self
            .storage
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(T::default()));
        boxed
            .as_any_mut()
            .downcast_mut::<T>()
            .expect("state stored under its own TypeId")
    }

    /// Drops the state of type `T`, if present.
    ///
    /// Used on page unmount so debounce deadlines and selections do not leak
    /// into the next visit.
    pub fn remove_state<T: State>(&mut self) {
        self.storage.remove(&TypeId::of::<T>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn state_mut_inserts_default() {
        let mut ctx = StateCtx::new();
        assert!(!ctx.has_state::<Counter>());
        ctx.state_mut::<Counter>().value += 1;
        assert_eq!(ctx.state::<Counter>().map(|c| c.value), Some(1));
    }

    #[test]
    fn add_state_replaces_existing() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter { value: 3 });
        ctx.add_state(Counter { value: 7 });
        assert_eq!(ctx.state::<Counter>().map(|c| c.value), Some(7));
    }

    #[test]
    fn remove_state_forgets_values() {
        let mut ctx = StateCtx::new();
        ctx.state_mut::<Counter>().value = 9;
        ctx.remove_state::<Counter>();
        assert_eq!(ctx.state_mut::<Counter>().value, 0);
    }
}
