use pyo3::prelude::*;

pub const __VERSION__: &str = env!("CARGO_PKG_VERSION");

#[pymodule]
pub fn bdsg(module: &Bound<'_, PyModule>) -> PyResult<()> {
    bdsg_registry_py::register(module)?;

    // Constants
    module.add("__version__", __VERSION__)?;

    Ok(())
}
