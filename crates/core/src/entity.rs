//! Entity trait: identity that survives state changes.

/// Something identified by its id rather than its field values.
///
/// A document whose page count changes is still the same document, while two
/// documents built from identical parameters are not.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every other field.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
