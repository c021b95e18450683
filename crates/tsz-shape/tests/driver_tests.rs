use super::*;
use crate::error::ResolveError;
use crate::graph::{DeclarationId, DeclarationKind, GraphFrontend, Property, TypeGraph};
use crate::test_utils::{RecordingBuilder, object, prop};
use crate::tree::{Shape, TreeBuilder};

/// `models.ts` declares `User` (referring to `Role`), a variable and `Role`;
/// `ids.ts` declares `Id`.
fn project() -> GraphFrontend {
    let mut graph = TypeGraph::new();
    let string = graph.string();
    let role = graph.object("Role");
    graph.add_property(role, Property::new("title", string));
    let user = graph.object("User");
    graph.add_property(user, Property::new("name", string));
    graph.add_property(user, Property::new("role", role));

    graph.declare("models.ts", "User", DeclarationKind::Interface, user);
    graph.declare("models.ts", "admin", DeclarationKind::Variable, user);
    graph.declare("models.ts", "Role", DeclarationKind::Class, role);
    graph.declare("ids.ts", "Id", DeclarationKind::TypeAlias, string);
    GraphFrontend::new(graph)
}

fn files(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn role_shape() -> Shape {
    object("Role", vec![prop("title", Shape::primitive("string"))])
}

#[test]
fn test_default_selection_skips_variables() {
    let frontend = project();
    let mut builder = TreeBuilder::inline();

    let resolved = ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["models.ts"]), &(), &mut builder, None)
        .unwrap();

    let roots: Vec<_> = resolved.iter().map(|decl| decl.root.clone()).collect();
    assert_eq!(
        roots,
        vec![
            object(
                "User",
                vec![
                    prop("name", Shape::primitive("string")),
                    prop("role", role_shape()),
                ]
            ),
            role_shape(),
        ]
    );
    assert!(resolved.iter().all(|decl| decl.definitions.is_none()));
}

#[test]
fn test_results_follow_file_order() {
    let frontend = project();
    let mut builder = TreeBuilder::inline();

    let resolved = ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["ids.ts", "models.ts"]), &(), &mut builder, None)
        .unwrap();

    let order: Vec<_> = resolved
        .iter()
        .map(|decl| decl.file.to_string_lossy().into_owned())
        .collect();
    assert_eq!(order, ["ids.ts", "models.ts", "models.ts"]);
    assert_eq!(resolved[0].root, Shape::primitive("string"));
}

#[test]
fn test_custom_selection_predicate() {
    let frontend = project();
    let mut builder = TreeBuilder::inline();
    let variables_only: &LocationFilter<'_, TypeGraph> =
        &|graph: &TypeGraph, location: &DeclarationId| {
            !graph.is_named_type_declaration(location)
        };

    let resolved = ResolutionDriver::new(&frontend)
        .resolve_files(
            &files(&["models.ts"]),
            &(),
            &mut builder,
            Some(variables_only),
        )
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert!(matches!(&resolved[0].root, Shape::Object { name, .. } if name == "User"));
}

#[test]
fn test_lifecycle_wraps_every_pass() {
    let frontend = project();
    let mut builder = RecordingBuilder::default();

    ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["ids.ts"]), &(), &mut builder, None)
        .unwrap();

    assert_eq!(builder.calls, ["start", "primitive:string", "end"]);
}

#[test]
fn test_separate_definitions_mode() {
    let frontend = project();
    let options = DriverOptions {
        output_mode: OutputMode::SeparateDefinitions,
        ..DriverOptions::default()
    };
    let mut builder = RecordingBuilder::hoisting();

    let resolved = ResolutionDriver::with_options(&frontend, options)
        .resolve_files(&files(&["models.ts"]), &(), &mut builder, None)
        .unwrap();

    assert_eq!(
        builder
            .calls
            .iter()
            .filter(|call| *call == "end_with_definitions")
            .count(),
        2
    );
    assert_eq!(resolved[0].root, Shape::reference("User"));

    let user_definitions = resolved[0].definitions.as_ref().unwrap();
    let names: Vec<_> = user_definitions.keys().map(String::as_str).collect();
    assert_eq!(names, ["Role", "User"]);

    let merged = merge_definitions(&resolved);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["Role"], role_shape());
}

#[test]
fn test_inline_mode_embeds_definitions() {
    let frontend = project();
    let mut builder = TreeBuilder::hoisting();

    let resolved = ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["models.ts"]), &(), &mut builder, None)
        .unwrap();

    match &resolved[1].root {
        Shape::Document { root, definitions } => {
            assert_eq!(**root, Shape::reference("Role"));
            assert_eq!(definitions.len(), 1);
        }
        other => panic!("expected a document, got {other:?}"),
    }
}

#[test]
fn test_merge_definitions_keeps_first() {
    let first = ResolvedDeclaration {
        file: PathBuf::from("a.ts"),
        root: 1,
        definitions: Some(IndexMap::from([("A".to_string(), 10), ("B".to_string(), 20)])),
    };
    let second = ResolvedDeclaration {
        file: PathBuf::from("b.ts"),
        root: 2,
        definitions: Some(IndexMap::from([("B".to_string(), 99), ("C".to_string(), 30)])),
    };
    let inline = ResolvedDeclaration {
        file: PathBuf::from("c.ts"),
        root: 3,
        definitions: None,
    };

    let merged = merge_definitions(&[first, inline, second]);
    assert_eq!(
        merged.into_iter().collect::<Vec<_>>(),
        [
            ("A".to_string(), 10),
            ("B".to_string(), 20),
            ("C".to_string(), 30)
        ]
    );
}

#[test]
fn test_first_error_aborts_the_run() {
    let mut graph = TypeGraph::new();
    let string = graph.string();
    let symbol = graph.opaque("unique symbol");
    graph.declare("ok.ts", "Name", DeclarationKind::TypeAlias, string);
    graph.declare("bad.ts", "Key", DeclarationKind::TypeAlias, symbol);
    let frontend = GraphFrontend::new(graph);
    let mut builder = TreeBuilder::inline();

    let err = ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["ok.ts", "bad.ts"]), &(), &mut builder, None)
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnsupportedTypeShape { name } if name == "unique symbol"));
}

#[test]
fn test_unknown_file_fails_before_resolving() {
    let frontend = project();
    let mut builder = RecordingBuilder::default();

    let err = ResolutionDriver::new(&frontend)
        .resolve_files(&files(&["nope.ts"]), &(), &mut builder, None)
        .unwrap_err();
    assert!(matches!(err, ResolveError::Frontend(_)));
    assert!(builder.calls.is_empty());
}

#[test]
fn test_driver_options_from_json() {
    let json = r#"{ "outputMode": "separateDefinitions", "resolver": { "maxDepth": 200 } }"#;
    let options = DriverOptions::from_json(json).unwrap();
    assert_eq!(options.output_mode, OutputMode::SeparateDefinitions);
    assert_eq!(options.resolver.max_depth, 200);

    let defaults = DriverOptions::from_json("{}").unwrap();
    assert_eq!(defaults, DriverOptions::default());
    assert_eq!(defaults.output_mode, OutputMode::Inline);

    assert!(DriverOptions::from_json(r#"{ "outputMode": "sideways" }"#).is_err());
}
