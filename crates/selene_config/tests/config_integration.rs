//! Settings and catalog files read from disk.

use std::fs;
use std::path::PathBuf;

use selene_config::*;
use selene_geo::{DistanceMethod, SurfaceBody};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("selene_config_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn settings_with_relative_catalog() {
    let dir = scratch_dir("relative");
    fs::write(
        dir.join("places.toml"),
        r#"
[[place]]
name = "Hadley Rille"
body = "moon"
lat = 26.13
lon = 3.63
description = "Apollo 15 landing site."

[[place]]
name = "Copernicus"
body = "moon"
lat = 9.62
lon = -20.01
diameter_km = 93.0
"#,
    )
    .unwrap();
    fs::write(
        dir.join("selene.toml"),
        r#"
[observer]
name = "Reykjavík"
lat = 64.1466
lon = -21.9426
height_m = 20.0

[distance]
method = "planar"

[catalog]
path = "places.toml"
"#,
    )
    .unwrap();

    let settings = load_settings(Some(dir.join("selene.toml").as_path())).unwrap();
    assert_eq!(settings.observer.name, "Reykjavík");
    assert_eq!(settings.distance_method, DistanceMethod::PlanarApprox);
    assert_eq!(settings.source, Some(dir.join("selene.toml")));
    assert_eq!(settings.catalog_path, Some(dir.join("places.toml")));

    let catalog = settings.catalog().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.on_body(SurfaceBody::Earth).count(), 0);
    let d = catalog
        .distance_between("hadley-rille", "copernicus", settings.distance_method)
        .unwrap();
    assert!(d > 0.0);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_settings_file() {
    let dir = scratch_dir("malformed");
    let path = dir.join("selene.toml");
    fs::write(&path, "[observer\nlat = 1").unwrap();
    let err = load_settings_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
    assert!(err.to_string().starts_with("malformed TOML"));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_catalog_file_reported_on_use() {
    let settings = parse_settings("[catalog]\npath = \"/nonexistent/places.toml\"\n", None).unwrap();
    assert!(matches!(settings.catalog(), Err(ConfigError::Io { .. })));
}

#[test]
fn builtin_catalog_text_is_exposed() {
    assert!(BUILTIN_CATALOG_TOML.contains("Tranquility Base"));
    let catalog = builtin_catalog().unwrap();
    let names: Vec<_> = catalog.on_body(SurfaceBody::Moon).map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Tranquility Base", "Tycho", "Copernicus", "Oceanus Procellarum", "Montes Apenninus"]
    );
}
