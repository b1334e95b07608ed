use std::any::Any;

/// A piece of application state stored in a [`crate::StateCtx`].
///
/// Implementors are plain structs; the `as_any` pair exists so the context
/// can downcast boxed state back to the concrete type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
