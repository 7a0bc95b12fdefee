use eyre::Result;

use crate::declaration::{Declaration, DeclarationKind};
use crate::handle::ModuleHandle;
use crate::manifest::Manifest;
use crate::unit::{RegistrationUnit, Resolver};

use crate::declaration::DeclarationKind::{Class, Function};

pub const ROOT_DOC: &str = "bdsg module";

/// Namespaces of the wrapped libraries, parents first.
pub const NAMESPACES: &[(&str, &str)] = &[
    ("", "bdsg"),
    ("bdsg", "algorithms"),
    ("", "handlegraph"),
    ("", "std"),
];

/// Registration unit for a single wrapped header: a fixed list of documented declarations placed
/// into one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingUnit {
    pub name: &'static str,
    pub namespace: &'static str,
    pub declarations: &'static [(&'static str, DeclarationKind, &'static str)],
}

impl<H> RegistrationUnit<H> for BindingUnit
where
    H: ModuleHandle,
    H::Declaration: From<Declaration>,
{
    fn name(&self) -> &str {
        self.name
    }

    fn register(&self, resolver: &mut Resolver<'_, H>) -> Result<()> {
        for &(name, kind, doc) in self.declarations {
            let declaration = Declaration::new(name, kind).with_doc(doc);
            resolver.attach(self.namespace, declaration.into())?;
        }
        Ok(())
    }
}

// Types must be registered before the graph interfaces that use them, and interfaces before
// the implementations deriving from them.
pub const UNITS: &[BindingUnit] = &[
    BindingUnit {
        name: "bind_handlegraph_types",
        namespace: "handlegraph",
        declarations: &[
            ("handle_t", Class, "Opaque reference to a strand of a node"),
            ("path_handle_t", Class, "Opaque reference to a path"),
            ("step_handle_t", Class, "Opaque reference to a step along a path"),
        ],
    },
    BindingUnit {
        name: "bind_std_bdsg_binder_hook_bind",
        namespace: "std",
        declarations: &[
            ("vector_handlegraph_handle_t", Class, "List of handles"),
            ("vector_handlegraph_path_handle_t", Class, "List of path handles"),
        ],
    },
    BindingUnit {
        name: "bind_handlegraph_handle_graph",
        namespace: "handlegraph",
        declarations: &[
            ("HandleGraph", Class, "Read-only interface of a bidirected sequence graph"),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_is_single_stranded",
        namespace: "bdsg::algorithms",
        declarations: &[
            (
                "is_single_stranded",
                Function,
                "Check whether every edge of the graph keeps the strand of its nodes",
            ),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_eades_algorithm",
        namespace: "bdsg::algorithms",
        declarations: &[
            (
                "eades_algorithm",
                Function,
                "Order the handles of the graph to minimise feedback arcs",
            ),
        ],
    },
    BindingUnit {
        name: "bind_handlegraph_path_handle_graph",
        namespace: "handlegraph",
        declarations: &[("PathHandleGraph", Class, "Handle graph with embedded paths")],
    },
    BindingUnit {
        name: "bind_handlegraph_mutable_handle_graph",
        namespace: "handlegraph",
        declarations: &[
            ("MutableHandleGraph", Class, "Handle graph that supports adding nodes and edges"),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_wang_hash",
        namespace: "bdsg",
        declarations: &[("wang_hash_64", Function, "64-bit integer hash")],
    },
    BindingUnit {
        name: "bind_bdsg_packed_structs",
        namespace: "bdsg",
        declarations: &[
            ("PackedVector", Class, "Bit-packed vector of integers"),
            ("PagedVector", Class, "Bit-packed vector split into independently sized pages"),
            ("RobustPagedVector", Class, "Paged vector tolerant to values far from its anchors"),
            ("PackedDeque", Class, "Bit-packed double-ended queue"),
            ("PackedSet", Class, "Bit-packed hash set"),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_utility",
        namespace: "bdsg",
        declarations: &[("is_little_endian", Function, "Check the byte order of the host")],
    },
    BindingUnit {
        name: "bind_bdsg_odgi",
        namespace: "bdsg",
        declarations: &[("ODGI", Class, "Dynamic succinct variation graph")],
    },
    BindingUnit {
        name: "bind_handlegraph_expanding_overlay_graph",
        namespace: "handlegraph",
        declarations: &[
            (
                "ExpandingOverlayGraph",
                Class,
                "Overlay graph that maps its handles back to an underlying graph",
            ),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_split_strand_graph",
        namespace: "bdsg",
        declarations: &[
            (
                "StrandSplitGraph",
                Class,
                "Overlay presenting each strand of a graph as a separate node",
            ),
        ],
    },
    BindingUnit {
        name: "bind_handlegraph_path_position_handle_graph",
        namespace: "handlegraph",
        declarations: &[
            (
                "PathPositionHandleGraph",
                Class,
                "Path handle graph with offset queries along its paths",
            ),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_packed_path_position_overlays",
        namespace: "bdsg",
        declarations: &[
            ("PackedPositionOverlay", Class, "Compact overlay adding path position queries"),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_path_position_overlays",
        namespace: "bdsg",
        declarations: &[
            ("PositionOverlay", Class, "Overlay adding path position queries"),
            (
                "MutablePositionOverlay",
                Class,
                "Position overlay that follows edits of the underlying graph",
            ),
        ],
    },
    BindingUnit {
        name: "bind_bdsg_vectorizable_overlays",
        namespace: "bdsg",
        declarations: &[
            ("VectorizableOverlay", Class, "Overlay assigning every node a rank in a linear order"),
            ("PathVectorizableOverlay", Class, "Vectorizable overlay over a path graph"),
            (
                "PathPositionVectorizableOverlay",
                Class,
                "Vectorizable overlay over a path position graph",
            ),
        ],
    },
];

/// The complete bdsg binding manifest for any handle that accepts plain declarations.
pub fn manifest<H>() -> Manifest<H>
where
    H: ModuleHandle,
    H::Declaration: From<Declaration>,
{
    Manifest::new()
        .add_namespaces(NAMESPACES.iter().copied())
        .add_units(
            UNITS
                .iter()
                .map(|unit| Box::new(*unit) as Box<dyn RegistrationUnit<H>>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use ahash::AHashSet;
    use itertools::Itertools;

    #[test]
    fn test_units_target_declared_namespaces() {
        let declared: AHashSet<String> = NAMESPACES
            .iter()
            .map(|(parent, child)| crate::path::join(parent, child))
            .collect();
        for unit in UNITS {
            assert!(
                declared.contains(unit.namespace),
                "{} targets undeclared namespace {}",
                unit.name,
                unit.namespace
            );
        }
    }

    #[test]
    fn test_unit_names_are_unique() {
        assert_eq!(UNITS.iter().map(|x| x.name).unique().count(), UNITS.len());
    }

    #[test]
    fn test_manifest_order() {
        let manifest = manifest::<Module>();
        assert_eq!(
            manifest.units().collect_vec(),
            UNITS.iter().map(|x| x.name).collect_vec()
        );
        assert_eq!(manifest.table().len(), NAMESPACES.len());
    }

    #[test]
    fn test_declarations_are_documented() {
        for unit in UNITS {
            assert!(!unit.declarations.is_empty(), "{} is empty", unit.name);
            for (name, _, doc) in unit.declarations {
                assert!(!doc.is_empty(), "{name} has no doc");
            }
        }
    }
}
