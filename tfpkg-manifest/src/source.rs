//! Package identifiers derived from module sources.

use tfpkg_core::to_snake_case;

/// Sources starting with this prefix were resolved through a registry.
pub const REGISTRY_PREFIX: &str = "registry";

/// Provider names registry modules end their source address with.
pub const KNOWN_PROVIDERS: &[&str] = &["google", "google-beta", "aws", "azurerm", "kubernetes"];

/// Derive a package identifier from a module source address.
///
/// A trailing provider segment is dropped, then the last remaining path
/// segment is converted to snake case.
///
/// ```
/// use tfpkg_manifest::package_name;
///
/// assert_eq!(
///     package_name("registry.terraform.io/terraform-google-modules/network/google"),
///     "network"
/// );
/// assert_eq!(
///     package_name("registry.terraform.io/terraform-google-modules/network/google//modules/subnets"),
///     "subnets"
/// );
/// ```
pub fn package_name(source: &str) -> String {
    let source = source.trim_end_matches('/');
    let trimmed = KNOWN_PROVIDERS
        .iter()
        .find_map(|provider| {
            source
                .strip_suffix(provider)
                .and_then(|rest| rest.strip_suffix('/'))
        })
        .map(|rest| rest.trim_end_matches('/'))
        .unwrap_or(source);
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    to_snake_case(last)
}
