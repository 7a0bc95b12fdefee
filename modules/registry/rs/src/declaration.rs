use derive_getters::{Dissolve, Getters};
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum DeclarationKind {
    #[display("class")]
    Class,
    #[display("function")]
    Function,
}

/// Description of a single entity exported by the wrapped library.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Getters, Dissolve)]
pub struct Declaration {
    name: String,
    kind: DeclarationKind,
    doc: Option<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            doc: None,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Class)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(name, DeclarationKind::Function)
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}
