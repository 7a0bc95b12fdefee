use pyo3::prelude::*;
use pyo3::PyTypeInfo;

pub use bdsg_registry_rs::{bdsg, Declaration, DeclarationKind, Registry};
pub use declaration::PyDeclaration;
pub use error::{into_pyerr, MissingNamespaceError};
pub use namespace::PyNamespace;

mod declaration;
mod error;
mod namespace;

/// Build the bdsg namespace tree on top of `module` and run every registration unit.
pub fn register(module: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = module.py();
    let sysmod = py.import("sys")?.getattr("modules")?;

    module.setattr("__doc__", bdsg::ROOT_DOC)?;
    let root = PyNamespace::new(module.clone(), sysmod.clone())?;
    let registry = bdsg::manifest::<PyNamespace>()
        .initialize(root)
        .map_err(into_pyerr)?;
    log::debug!("Registered bdsg namespaces:\n{registry}");

    let path = module.name()?;
    module.add_class::<PyDeclaration>()?;
    module.add(
        "MissingNamespaceError",
        py.get_type::<MissingNamespaceError>(),
    )?;

    for typbj in [
        PyDeclaration::type_object(py),
        MissingNamespaceError::type_object(py),
    ] {
        typbj.setattr("__module__", &path)?
    }

    // Add the module to sys.modules cache
    sysmod.set_item(path, module)?;

    Ok(())
}
