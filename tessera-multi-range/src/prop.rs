//! Callback handles used in slider options and props.
//!
//! ## Usage
//!
//! Wrap caller closures in one of the handle types so options can be cloned
//! and compared without comparing closures.

use std::sync::Arc;

use crate::{
    drag::ChangeVerdict,
    range::{Range, Thumb},
};

/// Shared closure compared by pointer.
struct Slot<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Slot<F> {
    fn get(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Closure over a single owned argument, e.g. label formatting or the
/// empty-space click report.
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot(Arc::new(handler)),
        }
    }

    pub fn call(&self, value: T) -> R {
        (self.slot.get())(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

/// Callback evaluated against a borrowed [`Range`].
///
/// Backs the `get_track_color` and `is_immovable` options.
pub struct RangeCallback<R> {
    slot: Slot<dyn Fn(&Range) -> R + Send + Sync>,
}

impl<R> RangeCallback<R> {
    /// Create a range callback from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Range) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot(Arc::new(handler)),
        }
    }

    /// Evaluate the callback for `range`.
    pub fn call(&self, range: &Range) -> R {
        (self.slot.get())(range)
    }
}

impl<R, F> From<F> for RangeCallback<R>
where
    F: Fn(&Range) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<R> Clone for RangeCallback<R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<R> PartialEq for RangeCallback<R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<R> Eq for RangeCallback<R> {}

/// Change policy consulted before a thumb value is applied.
///
/// Receives the dragged range as it was before the change, the clamped value
/// and the thumb being moved, and answers with a [`ChangeVerdict`].
#[derive(Clone, PartialEq, Eq)]
pub struct ChangeCallback {
    slot: Slot<dyn Fn(&Range, f64, Thumb) -> ChangeVerdict + Send + Sync>,
}

impl ChangeCallback {
    /// Create a change policy from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Range, f64, Thumb) -> ChangeVerdict + Send + Sync + 'static,
    {
        Self {
            slot: Slot(Arc::new(handler)),
        }
    }

    /// Ask the policy about a proposed value.
    pub fn call(&self, range: &Range, value: f64, thumb: Thumb) -> ChangeVerdict {
        (self.slot.get())(range, value, thumb)
    }
}

impl<F> From<F> for ChangeCallback
where
    F: Fn(&Range, f64, Thumb) -> ChangeVerdict + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}
