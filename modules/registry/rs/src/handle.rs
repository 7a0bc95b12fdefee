use eyre::Result;

/// A registration target: something that declarations can be attached to and that can host
/// nested namespaces.
pub trait ModuleHandle: Sized {
    type Declaration;

    /// Create a child namespace beneath this one. The child is attached to `self`.
    fn submodule(&mut self, name: &str, doc: &str) -> Result<Self>;

    /// Attach a single declaration to the namespace.
    fn attach(&mut self, declaration: Self::Declaration) -> Result<()>;
}
