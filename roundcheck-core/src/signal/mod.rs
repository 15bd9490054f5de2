//! Signal system for reactive programming.
//!
//! Widgets take their inputs as [MaybeSignal]s: either a plain value fixed
//! at construction or a shared [Signal] the host mutates between frames.

pub use crate::reference::Ref;

/// Contains the [FixedSignal](fixed::FixedSignal) with an immutable value.
pub mod fixed;

/// Contains the [StateSignal](state::StateSignal) for shared mutable state.
pub mod state;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// A listener callback invoked with the new value when a signal changes.
pub type Listener<T> = Box<dyn Fn(Ref<'_, T>)>;

/// The base trait of all signals.
pub trait Signal<T: 'static> {
    /// Get the current value of the signal.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the value of the signal without notifying listeners.
    fn set_value(&self, value: T);

    /// Register a listener to be notified on changes.
    fn listen(&mut self, listener: Listener<T>);

    /// Notify all listeners with the current value.
    fn notify(&self);

    /// Clone the signal into a box.
    fn dyn_clone(&self) -> BoxedSignal<T>;

    /// Replace the value of the signal. Implementations that support
    /// listeners notify them from here.
    fn set(&self, value: T) {
        self.set_value(value);
    }
}

/// Either a plain value or a shared signal.
///
/// Most widget setters accept `impl Into<MaybeSignal<T>>`, so callers can
/// pass a bare value or a signal interchangeably.
pub enum MaybeSignal<T: 'static> {
    /// A plain value.
    Value(T),
    /// A shared signal.
    Signal(BoxedSignal<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Create a [MaybeSignal] from a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Create a [MaybeSignal] from a signal.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Get the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Value(value) => Ref::Borrow(value),
            Self::Signal(signal) => signal.get(),
        }
    }

    /// The underlying signal, if this is one. Plain values return [None].
    pub fn as_signal(&self) -> Option<&dyn Signal<T>> {
        match self {
            Self::Value(_) => None,
            Self::Signal(signal) => Some(signal.as_ref()),
        }
    }
}

impl<T: Clone + 'static> Clone for MaybeSignal<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Signal(signal) => Self::Signal(signal.dyn_clone()),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: 'static> From<state::StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: state::StateSignal<T>) -> Self {
        Self::signal(signal)
    }
}

impl<T: Send + Sync + 'static> From<fixed::FixedSignal<T>> for MaybeSignal<T> {
    fn from(signal: fixed::FixedSignal<T>) -> Self {
        Self::signal(signal)
    }
}
