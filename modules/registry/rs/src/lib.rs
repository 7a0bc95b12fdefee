pub use declaration::{Declaration, DeclarationKind};
pub use error::{DuplicateNamespaceError, InvalidSegmentError, MissingNamespaceError};
pub use handle::ModuleHandle;
pub use manifest::{Initializer, Manifest, NamespaceTable, State};
pub use module::Module;
pub use registry::{Registry, Tree};
pub use unit::{unit, FnUnit, RegistrationUnit, Resolver};

pub mod bdsg;
mod declaration;
mod error;
mod handle;
mod manifest;
mod module;
pub mod path;
mod registry;
mod unit;
