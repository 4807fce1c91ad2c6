//! Shallow comparison of derived properties.

use std::rc::Rc;
use std::sync::Arc;

/// One-level equality used to decide whether a view must re-render.
///
/// Primitives and strings compare by value; shared pointers compare by
/// identity, so an unchanged `Arc` field is detected without walking it.
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

macro_rules! shallow_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShallowEq for $ty {
                fn shallow_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

shallow_eq_by_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

impl ShallowEq for &str {
    fn shallow_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: ?Sized> ShallowEq for Arc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ShallowEq for Rc<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.shallow_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Implement [`ShallowEq`] for a props struct by comparing the listed fields.
///
/// ```
/// use std::sync::Arc;
/// use statelink::ShallowEq;
///
/// struct Props {
///     count: u64,
///     items: Arc<Vec<String>>,
/// }
///
/// statelink::shallow_props!(Props { count, items });
///
/// let items = Arc::new(vec!["a".to_string()]);
/// let before = Props { count: 1, items: Arc::clone(&items) };
/// let after = Props { count: 1, items };
/// assert!(before.shallow_eq(&after));
/// ```
#[macro_export]
macro_rules! shallow_props {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::binder::ShallowEq for $ty {
            fn shallow_eq(&self, other: &Self) -> bool {
                true $(&& $crate::binder::ShallowEq::shallow_eq(&self.$field, &other.$field))+
            }
        }
    };
}
