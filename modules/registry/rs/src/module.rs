use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use crate::declaration::Declaration;
use crate::handle::ModuleHandle;

/// In-memory module handle that records everything attached to it.
#[derive(Clone, PartialEq, Eq, Debug, Default, Getters, Dissolve)]
pub struct Module {
    name: String,
    doc: String,
    declarations: Vec<Declaration>,
    submodules: Vec<String>,
}

impl Module {
    pub fn new(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            declarations: Vec::new(),
            submodules: Vec::new(),
        }
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|x| x.name() == name)
    }
}

impl ModuleHandle for Module {
    type Declaration = Declaration;

    fn submodule(&mut self, name: &str, doc: &str) -> Result<Self> {
        ensure!(
            !self.submodules.iter().any(|x| x == name),
            "Module '{}' already has a submodule named '{}'",
            self.name,
            name
        );
        self.submodules.push(name.to_string());
        Ok(Module::new(name, doc))
    }

    fn attach(&mut self, declaration: Declaration) -> Result<()> {
        ensure!(
            self.declaration(declaration.name()).is_none(),
            "Module '{}' already declares '{}'",
            self.name,
            declaration.name()
        );
        self.declarations.push(declaration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_attach() {
        let mut module = Module::new("bdsg", "bdsg module");
        module.attach(Declaration::class("ODGI")).unwrap();
        module
            .attach(Declaration::function("wang_hash_64"))
            .unwrap();

        assert_eq!(module.declarations().len(), 2);
        assert_eq!(
            module.declaration("ODGI"),
            Some(&Declaration::class("ODGI"))
        );
        assert!(module.declaration("HashGraph").is_none());

        assert!(
            module.attach(Declaration::function("ODGI")).is_err(),
            "Duplicate declaration"
        );
    }

    #[test]
    fn test_module_submodule() {
        let mut module = Module::new("", "root");
        let child = module
            .submodule("bdsg", "Bindings for ::bdsg namespace")
            .unwrap();

        assert_eq!(child.name(), "bdsg");
        assert_eq!(child.doc(), "Bindings for ::bdsg namespace");
        assert_eq!(module.submodules(), &vec!["bdsg".to_string()]);
        assert!(module.submodule("bdsg", "").is_err(), "Duplicate submodule");
    }
}
