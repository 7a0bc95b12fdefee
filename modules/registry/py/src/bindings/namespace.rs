use derive_getters::Getters;
use eyre::Result;
use pyo3::prelude::*;

use bdsg_registry_rs::{Declaration, ModuleHandle};

use crate::declaration::PyDeclaration;

/// Python module acting as a registration target. Every submodule is attached to its parent and
/// published in `sys.modules` under its dotted path, so `import bdsg.bdsg.algorithms` works.
#[derive(Debug, Clone, Getters)]
pub struct PyNamespace<'py> {
    module: Bound<'py, PyModule>,
    path: String,
    sysmod: Bound<'py, PyAny>,
}

impl<'py> PyNamespace<'py> {
    pub fn new(module: Bound<'py, PyModule>, sysmod: Bound<'py, PyAny>) -> PyResult<Self> {
        let path = module.name()?.extract::<String>()?;
        Ok(Self {
            module,
            path,
            sysmod,
        })
    }
}

impl ModuleHandle for PyNamespace<'_> {
    type Declaration = Declaration;

    fn submodule(&mut self, name: &str, doc: &str) -> Result<Self> {
        let path = format!("{}.{}", self.path, name);
        let module = PyModule::new(self.module.py(), name)?;
        module.setattr("__doc__", doc)?;

        self.module.add_submodule(&module)?;
        self.sysmod.set_item(&path, &module)?;

        Ok(Self {
            module,
            path,
            sysmod: self.sysmod.clone(),
        })
    }

    fn attach(&mut self, declaration: Declaration) -> Result<()> {
        let name = declaration.name().clone();
        let object = Bound::new(
            self.module.py(),
            PyDeclaration {
                declaration,
                module: self.path.clone(),
            },
        )?;
        self.module.add(name, object)?;
        Ok(())
    }
}
