use hostcat_kernel::config::load_config;
use hostcat_kernel::id::is_public_id;
use hostcat_static::prelude::*;
use hostcat_static::{HOST_CATALOG_PREFIX, HOST_PREFIX, HOST_SET_PREFIX};
use serde::Deserialize;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

const SCOPE_ID: &str = "o_23456789AB";

#[test]
fn catalog_generates_public_id_when_absent() {
    let catalog = HostCatalog::new(SCOPE_ID, [with_name("lab")]).expect("catalog");

    assert!(is_public_id(HOST_CATALOG_PREFIX, &catalog.public_id));
    assert_eq!(catalog.scope_id, SCOPE_ID);
    assert_eq!(catalog.name, "lab");
    assert_eq!(catalog.description, "");
}

#[test]
fn host_and_set_keep_given_public_ids() {
    let catalog = HostCatalog::new(SCOPE_ID, []).expect("catalog");

    let host = Host::new(
        &catalog.public_id,
        [with_public_id("hst_23456789AB"), with_name("db-1"), with_description("primary")],
    )
    .expect("host");
    assert_eq!(host.public_id, "hst_23456789AB");
    assert_eq!(host.catalog_id, catalog.public_id);
    assert_eq!(host.name, "db-1");
    assert_eq!(host.description, "primary");

    let set = HostSet::new(&catalog.public_id, [with_public_id("hsst_23456789AB")]).expect("set");
    assert_eq!(set.public_id, "hsst_23456789AB");
    assert_eq!(set.name, "");
}

#[test]
fn generated_ids_are_unique_per_resource() {
    let first = Host::new("hcst_23456789AB", []).expect("host");
    let second = Host::new("hcst_23456789AB", []).expect("host");

    assert_ne!(first.public_id, second.public_id);
    assert!(is_public_id(HOST_PREFIX, &first.public_id));
    assert!(is_public_id(HOST_SET_PREFIX, &HostSet::new("hcst_23456789AB", []).unwrap().public_id));
}

#[test]
fn blank_parent_ids_are_rejected() {
    let err = HostCatalog::new("", [with_name("lab")]).unwrap_err();
    assert!(matches!(err, StaticError::InvalidParameter { .. }));
    assert!(err.to_string().contains("no scope id"));

    let err = Host::new(" ", []).unwrap_err();
    assert!(err.to_string().contains("no catalog id"));

    let err = HostSet::new("", []).unwrap_err();
    assert!(matches!(err, StaticError::InvalidParameter { .. }));
}

#[test]
fn foreign_public_id_is_rejected() {
    let err = Host::new("hcst_23456789AB", [with_public_id("hsst_23456789AB")]).unwrap_err();
    assert!(matches!(err, StaticError::InvalidPublicId { .. }));

    let err = HostCatalog::new(SCOPE_ID, [with_public_id("id-1")]).unwrap_err();
    assert!(matches!(err, StaticError::InvalidPublicId { .. }));
}

#[test]
fn error_context_is_rendered() {
    let err = Host::new("", []).context("importing inventory").unwrap_err();
    assert_eq!(err.to_string(), "Invalid parameter (importing inventory): no catalog id");
}

#[test]
fn resources_serialize_with_snake_case_fields() {
    let host = Host::new("hcst_23456789AB", [with_public_id("hst_23456789AB"), with_name("db-1")])
        .expect("host");

    let json = serde_json::to_value(&host).expect("serialize");
    assert_eq!(json["public_id"], "hst_23456789AB");
    assert_eq!(json["catalog_id"], "hcst_23456789AB");

    let back: Host = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, host);
}

#[derive(Debug, Deserialize)]
struct Inventory {
    catalog: Options,
    hosts: Vec<Options>,
}

#[test]
#[serial]
fn resources_from_config_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("inventory.toml");
    fs::write(
        &path,
        r#"
[catalog]
name = "lab"
description = "bench hardware"

[[hosts]]
name = "db-1"

[[hosts]]
public_id = "hst_23456789AB"
name = "db-2"
"#,
    )
    .expect("write config");

    let inventory: Inventory = load_config(Some(&path)).expect("load config");

    let catalog = HostCatalog::new(SCOPE_ID, inventory.catalog.into_opts()).expect("catalog");
    assert_eq!(catalog.name, "lab");
    assert_eq!(catalog.description, "bench hardware");

    let hosts = inventory
        .hosts
        .into_iter()
        .map(|opts| Host::new(&catalog.public_id, opts.into_opts()))
        .collect::<Result<Vec<_>, _>>()
        .expect("hosts");

    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[0].name, "db-1");
    assert!(is_public_id(HOST_PREFIX, &hosts[0].public_id));
    assert_eq!(hosts[1].public_id, "hst_23456789AB");
}
