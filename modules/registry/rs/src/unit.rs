use eyre::Result;

use crate::handle::ModuleHandle;
use crate::registry::Registry;

/// Lookup capability handed to registration units. Units can read every declared namespace and
/// attach declarations to it, but never get a mutable handle, so they cannot add namespaces.
pub struct Resolver<'a, H> {
    registry: &'a mut Registry<H>,
}

impl<'a, H> Resolver<'a, H> {
    pub fn new(registry: &'a mut Registry<H>) -> Self {
        Self { registry }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.registry.contains(path)
    }

    pub fn resolve(&self, path: &str) -> Result<&H> {
        self.registry.resolve(path)
    }
}

impl<H: ModuleHandle> Resolver<'_, H> {
    /// Attach a declaration to the namespace at `path`.
    pub fn attach(&mut self, path: &str, declaration: H::Declaration) -> Result<()> {
        self.registry.attach(path, declaration)
    }
}

/// Independent procedure that declares entities into one or more namespaces.
pub trait RegistrationUnit<H> {
    fn name(&self) -> &str;

    fn register(&self, resolver: &mut Resolver<'_, H>) -> Result<()>;
}

/// Registration unit backed by a closure.
pub struct FnUnit<F> {
    name: String,
    func: F,
}

impl<H, F> RegistrationUnit<H> for FnUnit<F>
where
    F: Fn(&mut Resolver<'_, H>) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, resolver: &mut Resolver<'_, H>) -> Result<()> {
        (self.func)(resolver)
    }
}

/// Wrap a closure into a named registration unit. The handle type usually has to be spelled out,
/// e.g. `unit::<Module, _>("bind_bdsg_odgi", |resolver| ...)`.
pub fn unit<H, F>(name: impl Into<String>, func: F) -> FnUnit<F>
where
    F: Fn(&mut Resolver<'_, H>) -> Result<()>,
{
    FnUnit {
        name: name.into(),
        func,
    }
}
