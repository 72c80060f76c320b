//! Writing documents to disk.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tfpkg_hcl::{
    Document, Error, HclBlock, Module, OUTPUTS_FILE, Output, Provider, VARIABLES_FILE, Variable,
};

fn list_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn sample_document() -> Document {
    let net = Module::new("net", "terraform-google-modules/network/google")
        .with_version("~> 9.0")
        .with_attribute("project_id", "my-project")
        .with_attribute("network_name", "vpc");
    let subnets = Module::new("subnets", "terraform-google-modules/network/google//modules/subnets")
        .with_attribute("network_name", net.output_ref("network_name").escaped())
        .with_attribute("subnets", vec!["a", "b"]);
    let network = Output::new("network", net.output_ref("network_name"));

    Document::new()
        .with_file(
            "main.tf",
            [
                HclBlock::from(Provider::new("google")),
                net.into(),
                subnets.into(),
            ],
        )
        .with_variables([Variable::new("project_id").with_description("Project to use")])
        .with_outputs([network])
}

#[test]
fn empty_document_writes_two_empty_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("root");

    let summary = Document::new().write(&dir).unwrap();

    assert_eq!(summary.written.len(), 2);
    assert_eq!(list_files(&dir), vec![OUTPUTS_FILE, VARIABLES_FILE]);
    assert_eq!(fs::read_to_string(dir.join(VARIABLES_FILE)).unwrap(), "");
    assert_eq!(fs::read_to_string(dir.join(OUTPUTS_FILE)).unwrap(), "");
}

#[test]
fn writing_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let doc = sample_document();

    doc.write(temp.path()).unwrap();
    let first: Vec<_> = ["main.tf", VARIABLES_FILE, OUTPUTS_FILE]
        .iter()
        .map(|f| fs::read(temp.path().join(f)).unwrap())
        .collect();

    doc.write(temp.path()).unwrap();
    let second: Vec<_> = ["main.tf", VARIABLES_FILE, OUTPUTS_FILE]
        .iter()
        .map(|f| fs::read(temp.path().join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn escaped_reference_is_written_as_bare_expression() {
    let temp = TempDir::new().unwrap();
    sample_document().write(temp.path()).unwrap();

    let main = fs::read_to_string(temp.path().join("main.tf")).unwrap();
    let line = main
        .lines()
        .find(|l| l.trim_start().starts_with("network_name") && l.contains("module."))
        .expect("reference attribute");

    assert_eq!(line.split_whitespace().collect::<Vec<_>>(), vec!["network_name", "=", "module.net.network_name"]);
    assert!(!main.contains("$$"));
    assert!(!main.contains("\"module.net.network_name\""));

    let outputs = fs::read_to_string(temp.path().join(OUTPUTS_FILE)).unwrap();
    assert!(outputs.contains("module.net.network_name"));
    assert!(!outputs.contains("\"module.net.network_name\""));
}

#[test]
fn variables_and_outputs_land_in_their_files() {
    let temp = TempDir::new().unwrap();
    sample_document().write(temp.path()).unwrap();

    let variables = fs::read_to_string(temp.path().join(VARIABLES_FILE)).unwrap();
    assert!(variables.starts_with("variable \"project_id\" {"));

    let main = fs::read_to_string(temp.path().join("main.tf")).unwrap();
    assert!(main.starts_with("provider \"google\""));
    assert!(!main.contains("variable \""));
}

#[test]
fn failed_file_write_does_not_stop_other_files() {
    let temp = TempDir::new().unwrap();
    // A directory in place of main.tf makes that one write fail.
    fs::create_dir(temp.path().join("main.tf")).unwrap();

    let err = sample_document().write(temp.path()).unwrap_err();

    assert!(matches!(err, Error::FileWrite { ref path, .. } if path.ends_with("main.tf")));
    assert!(temp.path().join(VARIABLES_FILE).is_file());
    assert!(temp.path().join(OUTPUTS_FILE).is_file());
}
