use std::fmt::{self, Display, Formatter};

use ahash::AHashMap;
use derive_getters::{Dissolve, Getters};
use eyre::Result;

use crate::error::{DuplicateNamespaceError, MissingNamespaceError};
use crate::handle::ModuleHandle;
use crate::path::{self, ROOT, SEPARATOR};

#[derive(Debug)]
struct Entry<H> {
    path: String,
    handle: Box<H>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Owned namespace tree: every handle together with the handles of its children.
#[derive(Debug, Getters, Dissolve)]
pub struct Tree<H> {
    path: String,
    handle: H,
    children: Vec<Tree<H>>,
}

impl<H> Tree<H> {
    /// Find the subtree for a fully-qualified path.
    pub fn get(&self, path: &str) -> Option<&Tree<H>> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|x| x.get(path))
    }
}

/// Namespace tree keyed by fully-qualified namespace paths.
///
/// Handles live in an arena that only ever grows: slot 0 is the root, every other slot records its
/// parent and children, and the path index points into the arena. Handles are boxed, so a path
/// resolves to the same handle (at the same address) for the whole lifetime of the registry.
#[derive(Debug)]
pub struct Registry<H> {
    entries: Vec<Entry<H>>,
    index: AHashMap<String, usize>,
}

impl<H> Registry<H> {
    pub fn new(root: H) -> Self {
        let mut index = AHashMap::new();
        index.insert(ROOT.to_string(), 0);
        Self {
            entries: vec![Entry {
                path: ROOT.to_string(),
                handle: Box::new(root),
                parent: None,
                children: Vec::new(),
            }],
            index,
        }
    }

    fn slot(&self, path: &str) -> Result<usize> {
        self.index
            .get(path)
            .copied()
            .ok_or_else(|| MissingNamespaceError::new(path).into())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn resolve(&self, path: &str) -> Result<&H> {
        let slot = self.slot(path)?;
        Ok(&*self.entries[slot].handle)
    }

    pub fn root(&self) -> &H {
        &*self.entries[0].handle
    }

    /// Consume the registry and hand every namespace over to its parent.
    pub fn into_tree(self) -> Tree<H> {
        let mut pending: Vec<Vec<Tree<H>>> = self.entries.iter().map(|_| Vec::new()).collect();
        let mut entries = self.entries;

        // Children always live in later slots than their parents
        while let Some(entry) = entries.pop() {
            let mut children = std::mem::take(&mut pending[entries.len()]);
            children.reverse();

            let tree = Tree {
                path: entry.path,
                handle: *entry.handle,
                children,
            };
            match entry.parent {
                Some(parent) => pending[parent].push(tree),
                None => return tree,
            }
        }
        unreachable!("registry always holds the root namespace")
    }

    /// All declared paths in declaration order, starting with the root.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|x| x.path.as_str())
    }

    /// Direct children of the namespace in declaration order.
    pub fn children(&self, path: &str) -> Result<impl Iterator<Item = &str>> {
        let slot = self.slot(path)?;
        Ok(self.entries[slot]
            .children
            .iter()
            .map(|&x| self.entries[x].path.as_str()))
    }

    pub fn parent(&self, path: &str) -> Result<Option<&str>> {
        let slot = self.slot(path)?;
        Ok(self.entries[slot]
            .parent
            .map(|x| self.entries[x].path.as_str()))
    }

    fn render(&self, f: &mut Formatter<'_>, slot: usize, depth: usize) -> fmt::Result {
        let entry = &self.entries[slot];
        let name = path::split(&entry.path).map_or("<root>", |(_, name)| name);
        writeln!(f, "{:indent$}{}", "", name, indent = depth * 2)?;
        for &child in &entry.children {
            self.render(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<H: ModuleHandle> Registry<H> {
    /// Create `child` beneath the namespace at `parent` and index it under the joined path.
    pub fn declare(&mut self, parent: &str, child: &str) -> Result<&H> {
        let pslot = self.slot(parent)?;
        path::validate_segment(child)?;

        let path = path::join(parent, child);
        if self.index.contains_key(&path) {
            return Err(DuplicateNamespaceError::new(path).into());
        }

        let doc = format!("Bindings for {parent}{SEPARATOR}{child} namespace");
        let handle = self.entries[pslot].handle.submodule(child, &doc)?;

        let slot = self.entries.len();
        self.entries.push(Entry {
            path: path.clone(),
            handle: Box::new(handle),
            parent: Some(pslot),
            children: Vec::new(),
        });
        self.entries[pslot].children.push(slot);
        log::debug!("Declared namespace '{path}'");
        self.index.insert(path, slot);

        Ok(&*self.entries[slot].handle)
    }

    /// Attach a declaration to the namespace at `path`. Handles are never lent out mutably, so the
    /// tree can only grow through `declare`.
    pub fn attach(&mut self, path: &str, declaration: H::Declaration) -> Result<()> {
        let slot = self.slot(path)?;
        self.entries[slot].handle.attach(declaration)
    }
}

impl<H> Display for Registry<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 0, 0)
    }
}
