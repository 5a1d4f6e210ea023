//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. They are defined entirely
//! by their attribute values, and two value objects of the same kind with the same values
//! are considered equal.

use core::any::Any;
use core::fmt;
use core::ops::Deref;

/// Nominal tag identifying a concrete value object type.
///
/// Equality checks this tag before looking at the payload, so two types that happen to
/// carry identically shaped props never compare equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValueKind(&'static str);

impl ValueKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Read-only holder for a value object's props.
///
/// The payload is moved in at construction and is only reachable through `&T` afterwards:
/// there is no `DerefMut`, no `&mut` accessor and the field is private. Since the holder
/// owns its payload, nested containers cannot be mutated from outside either.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frozen<T>(T);

impl<T> Frozen<T> {
    pub fn new(props: T) -> Self {
        Self(props)
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Numeric equality for props fields: `NaN` equals `NaN`, `0.0` equals `-0.0`.
///
/// Plain `f64` equality would make a value holding `NaN` unequal to itself.
pub fn same_number(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Base abstraction for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// Implementors store their payload in a [`Frozen`] and expose it through [`props`].
/// Validation, if any, happens in the implementor's constructor before the payload is
/// frozen; the base performs none.
///
/// ## Equality
///
/// - Statically, `PartialEq` on the concrete type compares the frozen props.
/// - Dynamically, [`equals`] accepts any value object (or none) and returns `true` only if
///   the [`ValueKind`] tags match, the other value is the same Rust type, and the props
///   are structurally equal.
///
/// Structural equality is the props' own `PartialEq`: field by field, order-sensitive for
/// sequences (`Vec`), order-insensitive for maps (`HashMap`, `BTreeMap`).
///
/// ## Usage Pattern
///
/// ```
/// use valuekit_core::{Frozen, ValueKind, ValueObject};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct PointProps {
///     x: i64,
///     y: i64,
/// }
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point {
///     props: Frozen<PointProps>,
/// }
///
/// impl ValueObject for Point {
///     type Props = PointProps;
///     const KIND: ValueKind = ValueKind::new("point");
///
///     fn props(&self) -> &PointProps {
///         &self.props
///     }
/// }
///
/// let a = Point { props: Frozen::new(PointProps { x: 1, y: 2 }) };
/// let b = Point { props: Frozen::new(PointProps { x: 1, y: 2 }) };
/// assert!(a.equals(Some(&b)));
/// assert!(!a.equals(None));
/// ```
///
/// [`props`]: ValueObject::props
/// [`equals`]: ValueObject::equals
pub trait ValueObject: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Shape of the carried data.
    type Props: Clone + PartialEq + fmt::Debug + Send + Sync;

    /// Nominal tag of the concrete type.
    const KIND: ValueKind;

    /// Read-only view of the frozen payload.
    fn props(&self) -> &Self::Props;

    /// Value equality against an arbitrary (possibly absent) value object.
    ///
    /// Never fails: an absent or incompatible comparand is simply unequal.
    fn equals(&self, other: Option<&dyn AnyValueObject>) -> bool {
        let Some(other) = other else {
            return false;
        };

        tracing::trace!(this = %Self::KIND, other = %other.kind(), "comparing value objects");

        if other.kind() != Self::KIND {
            return false;
        }

        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self.props() == other.props())
    }
}

/// Object-safe view over any value object, used as the comparand of
/// [`ValueObject::equals`].
pub trait AnyValueObject: fmt::Debug + Send + Sync {
    fn kind(&self) -> ValueKind;

    fn as_any(&self) -> &dyn Any;
}

impl<V: ValueObject> AnyValueObject for V {
    fn kind(&self) -> ValueKind {
        V::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
