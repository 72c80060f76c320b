//! Rendering a complete Rust module from a module description.

use tfpkg_codegen::{PackageSpec, PackageWriter};
use tfpkg_codegen_rust::{Generator, RUST_NAMING};
use tfpkg_manifest::{ModuleDescription, OutputDescription, VariableDescription};

fn variable(name: &str, ty: &str, description: Option<&str>, required: bool) -> VariableDescription {
    VariableDescription {
        name: name.to_string(),
        type_descriptor: ty.to_string(),
        description: description.map(str::to_string),
        required,
    }
}

fn network_package() -> PackageSpec {
    let module = ModuleDescription {
        variables: vec![
            variable(
                "network_name",
                "string",
                Some("The name of the network being created"),
                true,
            ),
            variable("routing_mode", "string", None, false),
            variable("subnets", "list(map(string))", None, true),
        ],
        outputs: vec![
            OutputDescription {
                name: "network_name".to_string(),
                description: None,
            },
            OutputDescription {
                name: "network_self_link".to_string(),
                description: None,
            },
        ],
        ..Default::default()
    };

    PackageSpec::build(
        "network",
        "registry.terraform.io/terraform-google-modules/network/google",
        Some("9.1.0"),
        &module,
        &RUST_NAMING,
    )
    .unwrap()
}

#[test]
fn renders_network_module() {
    let generator = Generator::new();
    let file = PackageWriter::new(&generator, "gen").preview(&network_package());

    assert_eq!(file.path(), std::path::Path::new("network/network.rs"));
    insta::assert_snapshot!(file.content(), @r##"
// Code generated by tfpkg. DO NOT EDIT.

/// Module source address this package was generated from.
pub const SOURCE: &str = "registry.terraform.io/terraform-google-modules/network/google";

/// Resolved module version, `None` when unversioned.
pub const VERSION: Option<&str> = Some("9.1.0");

/// Names of the outputs the module exposes.
pub const OUTPUTS: &[&str] = &["network_name", "network_self_link"];

/// Input variables of the module.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Network {
    /// The name of the network being created
    pub network_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_mode: Option<String>,
    pub subnets: Vec<std::collections::HashMap<String, String>>,
}
"##);
}
