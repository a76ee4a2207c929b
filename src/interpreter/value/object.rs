use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

type DisplayFn = fn(&(dyn Any + Send + Sync), &mut fmt::Formatter<'_>) -> fmt::Result;

/// An opaque host value.
///
/// The host decides what it wraps (a 3D point, a brush, a template handle).
/// Scripts can only reach it through the members of the type descriptor
/// registered for `T`, and print it through `T`'s `Display`.
#[derive(Clone)]
pub struct Object {
    type_id:   TypeId,
    type_name: &'static str,
    data:      Arc<dyn Any + Send + Sync>,
    display:   DisplayFn,
}

impl Object {
    /// Wraps a host value.
    ///
    /// # Example
    /// ```
    /// use mapscript::interpreter::value::object::Object;
    ///
    /// let object = Object::new(42_u32);
    /// assert_eq!(object.downcast_ref::<u32>(), Some(&42));
    /// assert_eq!(object.to_string(), "42");
    /// ```
    pub fn new<T>(value: T) -> Self
        where T: Any + Send + Sync + fmt::Display
    {
        Self { type_id:   TypeId::of::<T>(),
               type_name: std::any::type_name::<T>(),
               data:      Arc::new(value),
               display:   display_as::<T>, }
    }

    /// The Rust type identity the type registry is keyed by.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Borrows the wrapped value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }

    /// Identity comparison used by `==`.
    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

fn display_as<T>(data: &(dyn Any + Send + Sync), f: &mut fmt::Formatter<'_>) -> fmt::Result
    where T: Any + fmt::Display
{
    match data.downcast_ref::<T>() {
        Some(value) => fmt::Display::fmt(value, f),
        None => Ok(()),
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.display)(self.data.as_ref(), f)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
         .field("type", &self.type_name)
         .field("value", &format_args!("{self}"))
         .finish()
    }
}
