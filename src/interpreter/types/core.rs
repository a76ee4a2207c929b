use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock},
};

use crate::{
    ast::Position,
    interpreter::{
        evaluator::core::EvalResult,
        types::builtin,
        value::{core::Value, function::Arity},
    },
};

/// Signature of a property getter: receiver in, value out.
pub type PropertyFn = dyn Fn(&Value, Position) -> EvalResult<Value> + Send + Sync;
/// Signature of a method body: receiver and evaluated arguments in.
pub type MethodFn = dyn Fn(&Value, &[Value], Position) -> EvalResult<Value> + Send + Sync;

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// A pure getter, run as soon as `.name` is evaluated.
pub struct PropertyDescriptor {
    getter: Box<PropertyFn>,
}

impl PropertyDescriptor {
    /// Reads the property from `receiver`.
    pub fn get(&self, receiver: &Value, position: Position) -> EvalResult<Value> {
        (self.getter)(receiver, position)
    }
}

/// A method; member access binds it to its receiver and a call runs it.
pub struct MethodDescriptor {
    name:  String,
    arity: Arity,
    func:  Box<MethodFn>,
}

impl MethodDescriptor {
    /// Name of the method.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument counts the method accepts, not counting the receiver.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Checks the argument count, then runs the method on `receiver`.
    pub fn invoke(&self, receiver: &Value, args: &[Value], position: Position) -> EvalResult<Value> {
        self.arity.ensure(&self.name, args.len(), position)?;
        (self.func)(receiver, args, position)
    }
}

/// One entry of a type's member table.
pub enum Member {
    Property(PropertyDescriptor),
    Method(Arc<MethodDescriptor>),
}

/// A named table of properties and methods that makes values of one type
/// scriptable through `.member` and `.method()` syntax.
///
/// # Example
/// ```
/// use mapscript::interpreter::{
///     types::core::{Member, TypeDescriptor},
///     value::{core::Value, function::Arity},
/// };
///
/// let descriptor = TypeDescriptor::new("counter")
///     .property("zero", |_, _| Ok(Value::Number(0.0)))
///     .method("echo", Arity::Exact(1), |_, args, _| Ok(args[0].clone()));
///
/// assert_eq!(descriptor.name(), "counter");
/// assert!(matches!(descriptor.member("zero"), Some(Member::Property(_))));
/// assert!(matches!(descriptor.member("echo"), Some(Member::Method(_))));
/// assert!(descriptor.member("missing").is_none());
/// ```
pub struct TypeDescriptor {
    name:    String,
    members: HashMap<String, Member>,
}

impl TypeDescriptor {
    /// Creates a descriptor with no members.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name:    name.to_string(),
               members: HashMap::new(), }
    }

    /// Adds a property. A later member with the same name replaces it.
    #[must_use]
    pub fn property<F>(mut self, name: &str, getter: F) -> Self
        where F: Fn(&Value, Position) -> EvalResult<Value> + Send + Sync + 'static
    {
        self.members.insert(name.to_string(),
                            Member::Property(PropertyDescriptor { getter: Box::new(getter) }));
        self
    }

    /// Adds a property of a host type `T`, reading it from the wrapped
    /// value directly.
    #[must_use]
    pub fn host_property<T, F>(self, name: &str, getter: F) -> Self
        where T: Any,
              F: Fn(&T) -> Value + Send + Sync + 'static
    {
        self.property(name, move |receiver, position| Ok(getter(receiver.as_object::<T>(position)?)))
    }

    /// Adds a method. A later member with the same name replaces it.
    #[must_use]
    pub fn method<F>(mut self, name: &str, arity: Arity, func: F) -> Self
        where F: Fn(&Value, &[Value], Position) -> EvalResult<Value> + Send + Sync + 'static
    {
        let method = MethodDescriptor { name: name.to_string(),
                                        arity,
                                        func: Box::new(func) };
        self.members.insert(name.to_string(), Member::Method(Arc::new(method)));
        self
    }

    /// Name of the type, as reported in error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a member by exact name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Names of all members, sorted.
    #[must_use]
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.members.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
         .field("name", &self.name)
         .field("members", &self.member_names())
         .finish()
    }
}

/// Resolves every runtime value to exactly one [`TypeDescriptor`].
///
/// The built-in descriptors are always present. Hosts add descriptors for
/// their own types through [`TypeRegistry::builder`]; a host object whose
/// type was never registered resolves to the member-less `object`
/// descriptor.
///
/// A registry is built once and never mutated afterwards, so it can be read
/// from any thread without locking.
pub struct TypeRegistry {
    none:     TypeDescriptor,
    number:   TypeDescriptor,
    vector:   TypeDescriptor,
    string:   TypeDescriptor,
    function: TypeDescriptor,
    object:   TypeDescriptor,
    hosts:    HashMap<TypeId, TypeDescriptor>,
}

impl TypeRegistry {
    /// Starts building a registry with the built-in descriptors.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder { hosts: HashMap::new() }
    }

    /// The descriptor that governs member access on `value`.
    ///
    /// # Example
    /// ```
    /// use mapscript::interpreter::{types::core::TypeRegistry, value::core::Value};
    ///
    /// let registry = TypeRegistry::default();
    /// assert_eq!(registry.descriptor_of(&Value::from([1.0, 2.0])).name(), "vector");
    /// assert_eq!(registry.descriptor_of(&Value::None).name(), "none");
    /// ```
    #[must_use]
    pub fn descriptor_of(&self, value: &Value) -> &TypeDescriptor {
        match value {
            Value::None => &self.none,
            Value::Number(_) => &self.number,
            Value::Vector(_) => &self.vector,
            Value::String(_) => &self.string,
            Value::Function(_) => &self.function,
            Value::Object(object) => self.hosts.get(&object.type_id()).unwrap_or(&self.object),
        }
    }

    /// The descriptor registered for host type `T`, if any.
    #[must_use]
    pub fn host_descriptor<T: Any>(&self) -> Option<&TypeDescriptor> {
        self.hosts.get(&TypeId::of::<T>())
    }

    /// The process-wide registry.
    ///
    /// Returns the registry passed to [`TypeRegistry::install`], or one with
    /// only the built-in descriptors if nothing was installed before the first
    /// call.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::default)
    }

    /// Makes `registry` the process-wide registry.
    ///
    /// Must run once at startup, before any evaluation reads the global
    /// registry.
    ///
    /// # Errors
    /// Gives the registry back if a global registry is already in place.
    pub fn install(registry: Self) -> Result<(), Self> {
        let host_types = registry.hosts.len();
        GLOBAL.set(registry)?;
        tracing::debug!(host_types, "installed global type registry");
        Ok(())
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Collects host descriptors before the registry is frozen.
pub struct TypeRegistryBuilder {
    hosts: HashMap<TypeId, TypeDescriptor>,
}

impl TypeRegistryBuilder {
    /// Registers the descriptor for host values of type `T`.
    ///
    /// Registering the same type twice keeps the last descriptor.
    #[must_use]
    pub fn register<T: Any>(mut self, descriptor: TypeDescriptor) -> Self {
        self.hosts.insert(TypeId::of::<T>(), descriptor);
        self
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> TypeRegistry {
        TypeRegistry { none:     builtin::none_type(),
                       number:   builtin::number_type(),
                       vector:   builtin::vector_type(),
                       string:   builtin::string_type(),
                       function: builtin::function_type(),
                       object:   builtin::object_type(),
                       hosts:    self.hosts, }
    }
}
