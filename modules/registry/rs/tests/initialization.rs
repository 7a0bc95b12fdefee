use bdsg_registry_rs::{
    bdsg, path, unit, Declaration, DeclarationKind, Manifest, MissingNamespaceError, Module,
};
use eyre::Result;
use itertools::Itertools;

const NAMESPACES: &[(&str, &str)] = &[
    ("", "bdsg"),
    ("bdsg", "algorithms"),
    ("", "handlegraph"),
    ("", "std"),
];

#[test]
fn noop_units() -> Result<()> {
    let mut manifest = Manifest::<Module>::new().add_namespaces(NAMESPACES.iter().copied());
    for ind in 0..4 {
        manifest = manifest.add_unit(unit::<Module, _>(format!("noop_{ind}"), |_| Ok(())));
    }
    let registry = manifest.initialize(Module::new("bdsg", bdsg::ROOT_DOC))?;

    for path in ["", "bdsg", "bdsg::algorithms", "handlegraph", "std"] {
        assert!(registry.resolve(path).is_ok(), "Failed to resolve {path}");
    }

    let err = registry.resolve("bdsg::missing").unwrap_err();
    assert_eq!(
        err.downcast_ref::<MissingNamespaceError>().unwrap().path(),
        "bdsg::missing"
    );
    assert!(err.to_string().contains("bdsg::missing"));
    Ok(())
}

#[test]
fn reversed_table() {
    let err = Manifest::<Module>::new()
        .add_namespaces([("x", "y"), ("", "x")])
        .initialize(Module::default())
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<MissingNamespaceError>().unwrap().path(),
        "x"
    );
}

#[test]
fn bdsg_manifest() -> Result<()> {
    let registry = bdsg::manifest::<Module>().initialize(Module::new("bdsg", bdsg::ROOT_DOC))?;

    assert_eq!(
        registry.paths().collect_vec(),
        vec!["", "bdsg", "bdsg::algorithms", "handlegraph", "std"]
    );
    assert_eq!(registry.root().doc(), "bdsg module");
    assert_eq!(
        registry.root().submodules(),
        &vec![
            "bdsg".to_string(),
            "handlegraph".to_string(),
            "std".to_string()
        ]
    );
    assert_eq!(
        registry.resolve("bdsg::algorithms")?.doc(),
        "Bindings for bdsg::algorithms namespace"
    );

    let algorithms = registry.resolve("bdsg::algorithms")?;
    assert_eq!(
        algorithms
            .declarations()
            .iter()
            .map(|x| x.name().as_str())
            .collect_vec(),
        vec!["is_single_stranded", "eades_algorithm"]
    );
    assert!(algorithms
        .declarations()
        .iter()
        .all(|x| *x.kind() == DeclarationKind::Function));

    let handlegraph = registry.resolve("handlegraph")?;
    assert_eq!(
        handlegraph.declarations()[0],
        Declaration::class("handle_t").with_doc("Opaque reference to a strand of a node")
    );
    assert!(handlegraph.declaration("PathPositionHandleGraph").is_some());

    let bdsg = registry.resolve("bdsg")?;
    for name in ["ODGI", "PackedVector", "StrandSplitGraph", "VectorizableOverlay"] {
        assert!(bdsg.declaration(name).is_some(), "Missing declaration {name}");
    }
    assert!(bdsg.declaration("HandleGraph").is_none());

    // Nothing is attached to the root namespace
    assert!(registry.root().declarations().is_empty());
    Ok(())
}

#[test]
fn bdsg_manifest_runs_once_per_registry() -> Result<()> {
    // Each initialization builds an independent tree
    let first = bdsg::manifest::<Module>().initialize(Module::default())?;
    let second = bdsg::manifest::<Module>().initialize(Module::default())?;
    assert_eq!(first.resolve("std")?, second.resolve("std")?);
    assert!(!std::ptr::eq(first.resolve("std")?, second.resolve("std")?));
    Ok(())
}

#[test]
fn bdsg_tree_owns_declarations() -> Result<()> {
    let registry = bdsg::manifest::<Module>().initialize(Module::new("bdsg", bdsg::ROOT_DOC))?;

    // Handles and the path index describe the same tree
    for path in registry.paths().collect_vec() {
        let expected = registry
            .children(path)?
            .map(|x| path::split(x).map_or(x, |(_, name)| name).to_string())
            .collect_vec();
        assert_eq!(registry.resolve(path)?.submodules(), &expected, "{path}");
    }

    let tree = registry.into_tree();
    for (path, expected) in [
        ("bdsg", 15),
        ("bdsg::algorithms", 2),
        ("handlegraph", 8),
        ("std", 2),
    ] {
        let namespace = tree.get(path).unwrap();
        assert_eq!(namespace.handle().declarations().len(), expected, "{path}");
    }

    let bdsg = tree.get("bdsg").unwrap().handle();
    let odgi = bdsg.declaration("ODGI").unwrap();
    assert_eq!(odgi.doc().as_deref(), Some("Dynamic succinct variation graph"));
    Ok(())
}
