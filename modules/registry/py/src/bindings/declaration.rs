use derive_getters::Dissolve;
use derive_more::{From, Into};
use pyo3::prelude::*;

use bdsg_registry_rs::Declaration;

#[pyclass(frozen, eq, hash, name = "Declaration")]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Dissolve, From, Into)]
pub struct PyDeclaration {
    pub declaration: Declaration,
    pub module: String,
}

#[pymethods]
impl PyDeclaration {
    #[getter]
    pub fn name(&self) -> &str {
        self.declaration.name()
    }

    #[getter]
    pub fn kind(&self) -> String {
        self.declaration.kind().to_string()
    }

    #[getter]
    pub fn doc(&self) -> Option<&str> {
        self.declaration.doc().as_deref()
    }

    #[getter]
    pub fn module(&self) -> &str {
        &self.module
    }

    fn __repr__(&self) -> String {
        format!(
            "Declaration({}.{}, {})",
            self.module,
            self.declaration.name(),
            self.declaration.kind()
        )
    }
}
