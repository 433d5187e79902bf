use std::collections::HashMap;

use ftreg::builtin::BINDINGS;
use ftreg::{FileIcon, FileItem, FileTypeKind, FileTypeRegistry, Pattern, BROWSER_TYPE_ID, TEXT_TYPE_ID};

/// Final binding per pattern after folding the table in order.
fn effective_bindings() -> HashMap<Pattern, &'static str> {
    let mut bindings = HashMap::new();
    for (spec, type_id, _) in BINDINGS {
        let pattern = Pattern::parse(spec).expect("built-in spec must parse");
        bindings.insert(pattern, *type_id);
    }
    bindings
}

#[test]
fn test_filename_bindings_ignore_case() {
    let registry = FileTypeRegistry::builtin();

    for (pattern, type_id) in effective_bindings() {
        if let Pattern::Filename(name) = pattern {
            for candidate in [name.clone(), name.to_uppercase()] {
                let resolved = registry
                    .resolve(&candidate)
                    .unwrap_or_else(|| panic!("{} did not resolve", candidate));
                assert_eq!(resolved.id(), type_id, "filename {}", candidate);
            }
        }
    }

    assert_eq!(
        registry.resolve("Makefile").map(|t| t.id()),
        registry.resolve("makefile").map(|t| t.id())
    );
}

#[test]
fn test_extension_bindings_resolve_any_stem() {
    let registry = FileTypeRegistry::builtin();

    for (pattern, type_id) in effective_bindings() {
        if let Pattern::Extension(ext) = pattern {
            let name = format!("anything.{}", ext);
            assert_eq!(registry.resolve(&name).map(|t| t.id()), Some(type_id), "{}", name);
            let upper = format!("ANYTHING.{}", ext.to_uppercase());
            assert_eq!(registry.resolve(&upper).map(|t| t.id()), Some(type_id), "{}", upper);
        }
    }
}

#[test]
fn test_filename_wins_over_extension() {
    let registry = FileTypeRegistry::builtin();

    // "configure" has no extension, which maps to plain text.
    assert_eq!(registry.resolve("configure").unwrap().id(), "sh");
    assert_eq!(registry.resolve("some_script").unwrap().id(), TEXT_TYPE_ID);

    // "renv.lock" would otherwise fall through to an unknown extension.
    assert_eq!(registry.resolve("renv.lock").unwrap().id(), "json");
    assert!(registry.resolve("other.lock").is_none());

    // ".Rprofile" is bound by name.
    assert_eq!(registry.resolve(".Rprofile").unwrap().id(), "r_source");
}

#[test]
fn test_unknown_extension_and_mime_fallback() {
    let registry = FileTypeRegistry::builtin();

    assert!(registry.resolve("unknown.xyz123").is_none());
    assert_eq!(
        registry.resolve_with_fallback("unknown.xyz123", Some("text/plain")).unwrap().id(),
        TEXT_TYPE_ID
    );
    assert!(registry.resolve_with_fallback("unknown.xyz123", Some("application/octet-stream")).is_none());
    assert!(registry.resolve_with_fallback("unknown.xyz123", None).is_none());

    // A registration always beats the hint.
    assert_eq!(
        registry.resolve_with_fallback("analysis.Rmd", Some("text/plain")).unwrap().id(),
        "r_markdown"
    );
}

#[test]
fn test_type_for_file_uses_guessed_mime() {
    let registry = FileTypeRegistry::builtin();

    let unknown = FileItem::file("/tmp/notes.xyz123");
    assert_eq!(registry.type_for_file(&unknown).unwrap().id(), TEXT_TYPE_ID);

    let image = FileItem::file("/tmp/plot.png");
    assert!(registry.type_for_file(&image).is_none());
    assert_eq!(registry.text_type_for_file(&image).id(), TEXT_TYPE_ID);

    let data = FileItem::file("/tmp/session.RData");
    assert_eq!(registry.type_for_file(&data).unwrap().id(), "r_data");
    assert_eq!(registry.text_type_for_file(&data).id(), TEXT_TYPE_ID);

    let script = FileItem::file("/tmp/run.sh");
    assert_eq!(registry.text_type_for_file(&script).id(), "sh");
}

#[test]
fn test_directory_icons_ignore_names() {
    let registry = FileTypeRegistry::builtin();

    assert_eq!(registry.resolve_icon(&FileItem::directory("/home/user/src")), FileIcon::FOLDER);
    assert_eq!(registry.resolve_icon(&FileItem::directory("/home/user/Makefile")), FileIcon::FOLDER);
    assert_eq!(registry.resolve_icon(&FileItem::directory("/srv/notes.Rmd")), FileIcon::FOLDER);
    assert_eq!(
        registry.resolve_icon(&FileItem::public_folder("/home/user/anything.R")),
        FileIcon::PUBLIC_FOLDER
    );
}

#[test]
fn test_file_icons() {
    let registry = FileTypeRegistry::builtin();

    let icon = registry.resolve_icon(&FileItem::file("/pkg/DESCRIPTION"));
    assert_eq!(icon.name(), "text-x-dcf");
    assert_eq!(icon.description(), "DCF");

    // Icon-only extensions.
    assert_eq!(registry.icon_for_filename("figure.JPEG").description(), "JPEG");
    assert_eq!(registry.icon_for_filename("paper.pdf"), FileIcon::PDF);
    assert_eq!(registry.icon_for_filename("table.csv"), FileIcon::CSV);

    // Nothing matches: plain text icon.
    assert_eq!(registry.icon_for_filename("mystery.xyz123"), *registry.text().default_icon());
}

#[test]
fn test_every_resolvable_type_has_an_icon() {
    let registry = FileTypeRegistry::builtin();

    // Step 1: every bound name resolves to its type and has some icon
    let mut names_by_type: HashMap<&str, Vec<String>> = HashMap::new();
    for (pattern, type_id) in effective_bindings() {
        let name = match pattern {
            Pattern::Filename(name) => name,
            Pattern::Extension(ext) => format!("file.{}", ext),
            Pattern::Extensionless => "file".to_string(),
        };
        let descriptor = registry.resolve(&name).expect("bound name must resolve");
        assert_eq!(descriptor.id(), type_id);

        let icon = registry.resolve_icon(&FileItem::file(&name));
        assert!(!icon.name().is_empty(), "{} has no icon", name);
        names_by_type.entry(type_id).or_default().push(name);
    }

    // Step 2: every declared type except the browser is reachable by name,
    // and at least one of its names shows the type's default icon
    for descriptor in registry.descriptors() {
        if descriptor.id() == BROWSER_TYPE_ID {
            continue;
        }
        let names = names_by_type
            .get(descriptor.id())
            .unwrap_or_else(|| panic!("{} is not reachable by any file name", descriptor.id()));
        assert!(
            names
                .iter()
                .any(|name| registry.resolve_icon(&FileItem::file(name)) == *descriptor.default_icon()),
            "{} never shows its default icon {}",
            descriptor.id(),
            descriptor.default_icon().name()
        );
    }
}

#[test]
fn test_profiler_output_shows_profiler_icon() {
    let registry = FileTypeRegistry::builtin();
    let item = FileItem::file("/proj/profile.Rprofvis");

    let descriptor = registry.resolve(item.name()).expect("profiler output must resolve");
    assert_eq!(descriptor.id(), "profiler");
    assert_eq!(registry.resolve_icon(&item), *descriptor.default_icon());
    assert_eq!(registry.resolve_icon(&item).name(), "application-x-rprofvis");
}

#[test]
fn test_fortran_f_is_rebound_to_text() {
    let registry = FileTypeRegistry::builtin();

    assert_eq!(registry.resolve("solver.f").unwrap().id(), TEXT_TYPE_ID);
    assert_eq!(registry.resolve("solver.f90").unwrap().id(), "fortran");
}

#[test]
fn test_type_ids_are_unique_and_reachable_by_id() {
    let registry = FileTypeRegistry::builtin();

    let mut seen = std::collections::HashSet::new();
    for descriptor in registry.descriptors() {
        assert!(seen.insert(descriptor.id()), "duplicate id {}", descriptor.id());
        assert_eq!(registry.type_by_id(descriptor.id()), Some(descriptor));
    }
    assert!(registry.type_by_id("no_such_type").is_none());
}

#[test]
fn test_kinds_of_special_types() {
    let registry = FileTypeRegistry::builtin();

    assert_eq!(*registry.resolve("a.rds").unwrap().kind(), FileTypeKind::Data);
    assert_eq!(*registry.resolve("a.Rproj").unwrap().kind(), FileTypeKind::Project);
    assert_eq!(*registry.resolve("a.Rprofvis").unwrap().kind(), FileTypeKind::Profiler);
    assert!(matches!(registry.resolve("a.md").unwrap().kind(), FileTypeKind::WebContent(_)));
    assert_eq!(registry.resolve("a.py").unwrap().language(), Some("python"));
}
