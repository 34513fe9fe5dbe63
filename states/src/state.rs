use std::any::Any;

/// A piece of application state registered in [`crate::StateCtx`].
///
/// Implementations are plain data. The `snapshot`/`assign_box` pair exists so
/// commands can read a clone at dispatch time and replace the value wholesale
/// when they finish; implement both with `Clone` via [`state_assign_impl`].
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of the current value, boxed for [`crate::CommandSnapshot`].
    fn snapshot(&self) -> Box<dyn Any + Send>;

    /// Replace `self` with a value produced by an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite in place.
///
/// A type mismatch means an updater was wired to the wrong state type; that is
/// a programming error, logged rather than propagated because `sync_states`
/// runs inside the frame loop.
pub fn state_assign_impl<T: Any>(dst: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(boxed) => *dst = *boxed,
        Err(_) => log::error!(
            "assign_box: value is not a {}, update dropped",
            std::any::type_name::<T>()
        ),
    }
}
