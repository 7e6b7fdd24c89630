use assert_cmd::Command;
use predicates::prelude::*;

fn vantage(store: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vantage").unwrap();
    cmd.arg("--store").arg(store);
    cmd
}

#[test]
fn config_init_seeds_defaults_into_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("vantage.json");

    vantage(&store).arg("config").arg("init").assert().success();

    let doc = std::fs::read_to_string(&store).unwrap();
    assert!(doc.contains("vantage_elements"));
    assert!(doc.contains("L1, public, Details;"));

    vantage(&store)
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("Identifier: Item;"));
}

#[test]
fn resolve_empty_query_prints_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("vantage.json");

    vantage(&store)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicates::str::contains("limit"))
        .stdout(predicates::str::contains("10"))
        .stdout(predicates::str::contains("Details"));
}

#[test]
fn resolve_json_reflects_query_parameters() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("vantage.json");

    vantage(&store)
        .arg("config")
        .arg("set")
        .arg("vantage_elements")
        .arg("Identifier: Item;\nTitle: Title;\nDate: Date;")
        .assert()
        .success();

    let output = vantage(&store)
        .arg("resolve")
        .arg("sort=Date&order=d&limit=25")
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["sort_field_name"], "Date");
    assert_eq!(view["sort_order"], "Descending");
    assert_eq!(view["limit"], 25);
    assert_eq!(view["layout_id"], 1);
}

#[test]
fn admin_layouts_require_the_authenticated_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("vantage.json");

    vantage(&store)
        .arg("config")
        .arg("set")
        .arg("vantage_layouts")
        .arg("L1, public, Details;\nL2, admin, Internal, Notes;")
        .assert()
        .success();

    vantage(&store)
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicates::str::contains("Internal").not());

    vantage(&store)
        .arg("--authenticated")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicates::str::contains("Internal"));
}

#[test]
fn url_command_builds_an_index_entry_url() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_dir.path().join("vantage.json");

    vantage(&store)
        .arg("url")
        .arg("--entry")
        .arg("Dublin")
        .arg("--field")
        .arg("44")
        .arg("keywords=barn&index=Place")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("find?"))
        .stdout(predicates::str::contains("view=1"))
        .stdout(predicates::str::contains("Dublin"))
        .stdout(predicates::str::contains("index=Place").not());
}
