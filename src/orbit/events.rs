//! Host callback boundary

/// Callbacks the field fires while a body is being dragged.
///
/// Every callback runs synchronously inside the inbound call that caused it
/// and carries only the body id; the host pulls position or phase back out
/// of the field as needed. Default implementations do nothing, so a host
/// can implement just the events it cares about.
pub trait FieldEvents {
    /// A body switched from autonomous revolution to pointer control.
    fn on_manipulation_begin(&mut self, _id: u32) {}
    /// A manipulated body's phase was re-derived from a pointer position.
    fn on_manipulation_move(&mut self, _id: u32) {}
    /// A body was released and resumed autonomous revolution.
    fn on_manipulation_end(&mut self, _id: u32) {}
}

/// For hosts that don't watch manipulation at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvents;

impl FieldEvents for NullEvents {}

impl<E: FieldEvents + ?Sized> FieldEvents for &mut E {
    fn on_manipulation_begin(&mut self, id: u32) {
        (**self).on_manipulation_begin(id);
    }

    fn on_manipulation_move(&mut self, id: u32) {
        (**self).on_manipulation_move(id);
    }

    fn on_manipulation_end(&mut self, id: u32) {
        (**self).on_manipulation_end(id);
    }
}
