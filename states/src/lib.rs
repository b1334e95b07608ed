//! Typed state container shared by the manage console.
//!
//! Screens keep their state in plain structs implementing [`State`] and store
//! them in a [`StateCtx`] owned by the app. UI code reads and mutates state
//! with `state_mut::<T>()`; tests construct a `StateCtx`, seed it, and drive
//! widgets against it.

mod ctx;
mod state;
mod time;

pub use ctx::StateCtx;
pub use state::State;
pub use time::Time;
