use pyo3::create_exception;
use pyo3::exceptions::PyRuntimeError;
use pyo3::PyErr;

create_exception!(
    bdsg,
    MissingNamespaceError,
    PyRuntimeError,
    "Raised when a namespace is accessed before it was created."
);

/// Convert an initialization error into a Python exception, keeping the full error chain in the
/// message.
pub fn into_pyerr(err: eyre::Report) -> PyErr {
    if err
        .downcast_ref::<bdsg_registry_rs::MissingNamespaceError>()
        .is_some()
    {
        return MissingNamespaceError::new_err(format!("{err:#}"));
    }
    PyErr::from(err)
}
