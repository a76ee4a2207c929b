use std::{fmt, sync::LazyLock, thread};

use mapscript::{
    Arity, Context, Error, Function, Object, TypeDescriptor, TypeRegistry, Value, error::EvalError, evaluate,
    parse_expression,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// A host type nobody registers a descriptor for.
struct Brush;

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brush")
    }
}

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
    let point = TypeDescriptor::new("point").host_property::<Point, _>("x", |p| Value::Number(p.x))
                                            .host_property::<Point, _>("y", |p| Value::Number(p.y))
                                            .host_property::<Point, _>("z", |p| Value::Number(p.z))
                                            .host_property::<Point, _>("origin", |p| Value::from([p.x, p.y, p.z]))
                                            .method("offset", Arity::Exact(1), |receiver, args, position| {
                                                let p = receiver.as_object::<Point>(position)?;
                                                let [dx, dy, dz] = args[0].as_vector(position)? else {
                                                    return Err(EvalError::InvalidArgument { details:  "offset expects a 3 component vector".to_string(),
                                                                                            position, });
                                                };
                                                Ok(Value::from(Object::new(Point { x: p.x + dx,
                                                                                   y: p.y + dy,
                                                                                   z: p.z + dz, })))
                                            });

    TypeRegistry::builder().register::<Point>(point).build()
});

fn spawn_context() -> Context {
    let mut ctx = Context::with_registry(&REGISTRY);
    ctx.bind("spawn", Object::new(Point { x: 1.0, y: 2.0, z: 3.0 }));
    ctx
}

#[test]
fn values_are_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Value>();
    assert_send_sync::<Context>();
    assert_send_sync::<TypeRegistry>();
}

#[test]
fn host_properties_and_methods() {
    let ctx = spawn_context();

    assert_eq!(evaluate("spawn.x", &ctx).unwrap(), Value::Number(1.0));
    assert_eq!(evaluate("spawn.z * 2", &ctx).unwrap(), Value::Number(6.0));
    assert_eq!(evaluate("spawn.origin", &ctx).unwrap().to_string(), "1 2 3");
    assert_eq!(evaluate("spawn.origin.length > 3", &ctx).unwrap(), Value::Number(1.0));
    assert_eq!(evaluate("spawn.offset([0, 0, 64]).z", &ctx).unwrap(), Value::Number(67.0));
    assert_eq!(evaluate("spawn.offset([1, 1, 1])", &ctx).unwrap().to_string(), "2 3 4");
}

#[test]
fn host_objects_print_through_their_display() {
    let ctx = spawn_context();

    assert_eq!(evaluate("spawn", &ctx).unwrap().to_string(), "1 2 3");
}

#[test]
fn host_method_errors() {
    let ctx = spawn_context();

    assert!(matches!(evaluate("spawn.offset([1, 2])", &ctx),
                     Err(Error::Eval(EvalError::InvalidArgument { .. }))));
    assert!(matches!(evaluate("spawn.offset()", &ctx),
                     Err(Error::Eval(EvalError::ArgumentCountMismatch { .. }))));
    assert!(matches!(evaluate("spawn.offset(5)", &ctx),
                     Err(Error::Eval(EvalError::ExpectedVector { .. }))));

    match evaluate("spawn.w", &ctx) {
        Err(Error::Eval(EvalError::UnknownMember { type_name, member, .. })) => {
            assert_eq!(type_name, "point");
            assert_eq!(member, "w");
        },
        other => panic!("Unexpected result {other:?}"),
    }
}

#[test]
fn unregistered_objects_have_no_members() {
    let mut ctx = spawn_context();
    ctx.bind("brush", Object::new(Brush));

    match evaluate("brush.x", &ctx) {
        Err(Error::Eval(EvalError::UnknownMember { type_name, .. })) => assert_eq!(type_name, "object"),
        other => panic!("Unexpected result {other:?}"),
    }

    assert_eq!(evaluate("brush", &ctx).unwrap().to_string(), "brush");
    assert_eq!(evaluate("1 if brush else 0", &ctx).unwrap(), Value::Number(1.0));
    assert_eq!(REGISTRY.descriptor_of(&Value::from(Object::new(Brush))).name(), "object");
    assert!(REGISTRY.host_descriptor::<Brush>().is_none());
    assert_eq!(REGISTRY.host_descriptor::<Point>().map(TypeDescriptor::name), Some("point"));
}

#[test]
fn global_registry_only_knows_builtins() {
    let ctx = {
        let mut ctx = Context::new();
        ctx.bind("spawn", Object::new(Point { x: 1.0, y: 2.0, z: 3.0 }));
        ctx
    };

    assert!(matches!(evaluate("spawn.x", &ctx),
                     Err(Error::Eval(EvalError::UnknownMember { .. }))));
    assert_eq!(evaluate("'abc'.length", &ctx).unwrap(), Value::Number(3.0));
}

#[test]
fn global_registry_is_installed_once() {
    let _ = TypeRegistry::global();

    assert!(TypeRegistry::install(TypeRegistry::default()).is_err());
}

#[test]
fn objects_compare_by_identity() {
    let mut ctx = spawn_context();
    ctx.bind("twin", Object::new(Point { x: 1.0, y: 2.0, z: 3.0 }));

    assert_eq!(evaluate("spawn == spawn", &ctx).unwrap(), Value::Number(1.0));
    assert_eq!(evaluate("spawn == twin", &ctx).unwrap(), Value::None);
    assert_eq!(evaluate("spawn.origin == twin.origin", &ctx).unwrap(), Value::Number(1.0));
}

#[test]
fn bound_methods_keep_their_receiver() {
    let mut ctx = spawn_context();

    let offset = evaluate("spawn.offset", &ctx).unwrap();
    let Value::Function(Function::Bound(bound)) = &offset else {
        panic!("Expected a bound method, found {offset:?}");
    };
    assert_eq!(bound.receiver().as_object::<Point>(mapscript::Position::start()).unwrap().y,
               2.0);

    ctx.bind("lift", offset);
    ctx.bind("spawn", Value::None);
    assert_eq!(evaluate("lift([0, 0, 10]).z", &ctx).unwrap(), Value::Number(13.0));
}

#[test]
fn concurrent_evaluation() {
    let expr = parse_expression("spawn.offset([index * 64, 0, 0]).x").unwrap();
    let shared = spawn_context();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8_u8).map(|index| {
                                            let expr = &expr;
                                            scope.spawn(move || {
                                                     let mut ctx = spawn_context();
                                                     ctx.bind("index", f64::from(index));
                                                     ctx.eval(expr).unwrap()
                                                 })
                                        })
                                        .collect();

        for (index, handle) in handles.into_iter().enumerate() {
            let expected = 1.0 + 64.0 * f64::from(u8::try_from(index).unwrap());
            assert_eq!(handle.join().unwrap(), Value::Number(expected));
        }

        for _ in 0..4 {
            let shared = &shared;
            scope.spawn(move || {
                     assert_eq!(evaluate("spawn.y + spawn.z", shared).unwrap(), Value::Number(5.0));
                 });
        }
    });
}
