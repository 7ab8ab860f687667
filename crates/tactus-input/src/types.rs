//! Raw device vocabulary.
//!
//! Platform layers (winit, web, test drivers) translate their native
//! events into these before handing them to the normalizer. Hosts with
//! pointer-event style input map `pointerType` themselves: a primary
//! pointer of type touch is a touch contact, anything mouse-like is a
//! mouse.

/// Identifier of one finger as reported by the platform.
pub type TouchId = u64;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}
