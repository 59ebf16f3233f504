use crate::{
    router::{Invocation, Shape},
    types::Operation,
};
use fxhash::FxHashMap;
use itertools::Itertools;
use std::{fmt, sync::Arc};

/// A severity-specific operation overload.
pub type Handler = Box<dyn Fn(&Invocation<'_>) + Send + Sync>;

/// Lookup table of the operation overloads a target implements,
/// keyed by operation and parameter shape.
#[derive(Default)]
pub struct Overloads {
    handlers: FxHashMap<(Operation, Shape), Handler>,
}

impl Overloads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for one overload, replacing any previous one.
    pub fn on<F>(mut self, operation: Operation, shape: Shape, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) + Send + Sync + 'static,
    {
        self.insert(operation, shape, handler);
        self
    }

    /// Registers `handler` for all eight shapes of `operation`.
    pub fn on_all_shapes<F>(mut self, operation: Operation, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        for shape in Shape::all() {
            let h = Arc::clone(&handler);
            self.insert(operation, shape, move |inv: &Invocation<'_>| h(inv));
        }
        self
    }

    pub fn insert<F>(&mut self, operation: Operation, shape: Shape, handler: F) -> Option<Handler>
    where
        F: Fn(&Invocation<'_>) + Send + Sync + 'static,
    {
        self.handlers
            .insert((operation, shape), Box::new(handler))
    }

    pub fn get(&self, operation: Operation, shape: Shape) -> Option<&Handler> {
        self.handlers.get(&(operation, shape))
    }

    pub fn contains(&self, operation: Operation, shape: Shape) -> bool {
        self.handlers.contains_key(&(operation, shape))
    }

    /// The shapes registered for `operation`, in a stable order.
    pub fn shapes(&self, operation: Operation) -> impl Iterator<Item = Shape> + '_ {
        self.handlers
            .keys()
            .filter(move |(op, _)| *op == operation)
            .map(|(_, shape)| *shape)
            .sorted()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Overloads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.handlers.keys().sorted())
            .finish()
    }
}

/// The receiver of routed log calls.
pub trait LogTarget {
    fn overloads(&self) -> &Overloads;
}

impl LogTarget for Overloads {
    fn overloads(&self) -> &Overloads {
        self
    }
}
