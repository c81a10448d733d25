//! `cargo metadata --format-version=1 --no-deps` documents

use serde_json::{Value, json};

/// One declared dependency: name, requirement, kind (`None` for normal) and
/// local path
pub type Dep<'a> = (&'a str, &'a str, Option<&'a str>, Option<&'a str>);

fn dependency((name, req, kind, path): Dep<'_>) -> Value {
    let source = match path {
        Some(_) => Value::Null,
        None => json!("registry+https://github.com/rust-lang/crates.io-index"),
    };
    json!({
        "name": name,
        "source": source,
        "req": req,
        "kind": kind,
        "rename": null,
        "optional": false,
        "uses_default_features": true,
        "features": [],
        "target": null,
        "registry": null,
        "path": path,
    })
}

/// A document holding a single package with the given dependencies
pub fn metadata_json(package: &str, dependencies: &[Dep<'_>]) -> String {
    let dependencies: Vec<Value> = dependencies.iter().copied().map(dependency).collect();
    json!({
        "packages": [{
            "name": package,
            "version": "0.1.0",
            "id": format!("path+file:///src/{package}#0.1.0"),
            "license": null,
            "license_file": null,
            "description": null,
            "source": null,
            "dependencies": dependencies,
            "targets": [],
            "features": {},
            "manifest_path": format!("/src/{package}/Cargo.toml"),
            "metadata": null,
            "publish": null,
            "authors": [],
            "categories": [],
            "keywords": [],
            "readme": null,
            "repository": null,
            "homepage": null,
            "documentation": null,
            "links": null,
            "default_run": null,
        }],
        "workspace_members": [],
        "workspace_default_members": [],
        "resolve": null,
        "target_directory": "/src/target",
        "version": 1,
        "workspace_root": "/src",
        "metadata": null,
    })
    .to_string()
}
