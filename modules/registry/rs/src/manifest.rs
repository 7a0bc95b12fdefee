use derive_more::{Display, From, Into};
use eyre::{ensure, Report, Result, WrapErr};

use crate::handle::ModuleHandle;
use crate::registry::Registry;
use crate::unit::{RegistrationUnit, Resolver};

/// Ordered list of `(parent, child)` namespace declarations.
///
/// The table is applied in a single pass, so every parent must be declared by an earlier row
/// (or be the root).
#[derive(Clone, PartialEq, Eq, Debug, Default, From, Into)]
pub struct NamespaceTable(Vec<(String, String)>);

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, parent: impl Into<String>, child: impl Into<String>) -> &mut Self {
        self.0.push((parent.into(), child.into()));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn build<H: ModuleHandle>(&self, registry: &mut Registry<H>) -> Result<()> {
        for (parent, child) in self.iter() {
            registry.declare(parent, child)?;
        }
        Ok(())
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for NamespaceTable {
    fn from_iter<T: IntoIterator<Item = (P, C)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(p, c)| (p.into(), c.into()))
                .collect(),
        )
    }
}

/// Everything needed to bring a namespace tree up: the declaration table and the registration
/// units, executed in the order they were added.
pub struct Manifest<H> {
    table: NamespaceTable,
    units: Vec<Box<dyn RegistrationUnit<H>>>,
}

impl<H> Default for Manifest<H> {
    fn default() -> Self {
        Self {
            table: NamespaceTable::new(),
            units: Vec::new(),
        }
    }
}

impl<H> Manifest<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &NamespaceTable {
        &self.table
    }

    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|x| x.name())
    }

    pub fn add_namespace(mut self, parent: impl Into<String>, child: impl Into<String>) -> Self {
        self.table.push(parent, child);
        self
    }

    pub fn add_namespaces<P: Into<String>, C: Into<String>>(
        mut self,
        namespaces: impl IntoIterator<Item = (P, C)>,
    ) -> Self {
        for (parent, child) in namespaces {
            self.table.push(parent, child);
        }
        self
    }

    pub fn add_unit(mut self, unit: impl RegistrationUnit<H> + 'static) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    pub fn add_units(
        mut self,
        units: impl IntoIterator<Item = Box<dyn RegistrationUnit<H>>>,
    ) -> Self {
        self.units.extend(units);
        self
    }
}

impl<H: ModuleHandle> Manifest<H> {
    /// Build the namespace tree beneath `root` and run every registration unit.
    pub fn initialize(self, root: H) -> Result<Registry<H>> {
        let mut initializer = Initializer::new(root, self);
        initializer.build_tree()?;
        initializer.run_units()?;
        initializer.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum State {
    Uninitialized,
    TreeBuilt,
    UnitsRunning,
    Ready,
    Failed,
}

/// Step-wise initialization: `Uninitialized -> TreeBuilt -> UnitsRunning -> Ready`.
/// Any error moves the initializer to `Failed`, which is terminal.
pub struct Initializer<H> {
    registry: Registry<H>,
    manifest: Manifest<H>,
    state: State,
}

impl<H: ModuleHandle> Initializer<H> {
    pub fn new(root: H, manifest: Manifest<H>) -> Self {
        Self {
            registry: Registry::new(root),
            manifest,
            state: State::Uninitialized,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn registry(&self) -> &Registry<H> {
        &self.registry
    }

    fn expect(&self, state: State) -> Result<()> {
        ensure!(
            self.state == state,
            "Initialization step requires state '{}', but the registry is '{}'",
            state,
            self.state
        );
        Ok(())
    }

    fn fail(&mut self, err: Report) -> Report {
        self.state = State::Failed;
        log::error!("Namespace registry initialization failed: {err:#}");
        err
    }

    pub fn build_tree(&mut self) -> Result<()> {
        self.expect(State::Uninitialized)?;
        match self.manifest.table.build(&mut self.registry) {
            Ok(()) => {
                log::debug!(
                    "Namespace tree built with {} namespaces",
                    self.manifest.table.len()
                );
                self.state = State::TreeBuilt;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn run_units(&mut self) -> Result<()> {
        self.expect(State::TreeBuilt)?;
        self.state = State::UnitsRunning;

        let mut resolver = Resolver::new(&mut self.registry);
        let mut result = Ok(());
        for unit in &self.manifest.units {
            log::debug!("Running registration unit '{}'", unit.name());
            result = unit
                .register(&mut resolver)
                .wrap_err_with(|| format!("Registration unit '{}' failed", unit.name()));
            if result.is_err() {
                break;
            }
        }

        match result {
            Ok(()) => {
                log::info!(
                    "Namespace registry is ready: {} namespaces, {} registration units",
                    self.registry.paths().count(),
                    self.manifest.units.len()
                );
                self.state = State::Ready;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub fn finish(self) -> Result<Registry<H>> {
        self.expect(State::Ready)?;
        Ok(self.registry)
    }
}
