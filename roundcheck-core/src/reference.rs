use std::cell::Ref as CellRef;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference to a value that may be owned, borrowed, borrowed from a
/// [RefCell](std::cell::RefCell) or shared via [Arc].
///
/// Signals hand out values through this type so that both plain values and
/// interior-mutable state can be read through one interface.
pub enum Ref<'a, T> {
    /// An owned value.
    Owned(T),
    /// A plain borrow.
    Borrow(&'a T),
    /// A borrow out of a [RefCell](std::cell::RefCell).
    Cell(CellRef<'a, T>),
    /// A shared value.
    Arc(Arc<T>),
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Ref::Owned(value) => value,
            Ref::Borrow(value) => value,
            Ref::Cell(value) => value,
            Ref::Arc(value) => value,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: fmt::Display> fmt::Display for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_all_variants() {
        let owned = Ref::Owned(1);
        assert_eq!(*owned, 1);

        let value = 2;
        let borrow = Ref::Borrow(&value);
        assert_eq!(*borrow, 2);

        let cell = std::cell::RefCell::new(3);
        let cell_ref = Ref::Cell(cell.borrow());
        assert_eq!(*cell_ref, 3);

        let arc = Ref::Arc(Arc::new(4));
        assert_eq!(*arc, 4);
    }
}
