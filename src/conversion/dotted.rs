//! Dotted decimal rendering.

/// Join octets with `.`, e.g. `[10, 0, 0, 1]` becomes `"10.0.0.1"`.
///
/// Works for any number of octets, an empty slice gives an empty string.
pub fn decimal_to_dotted(octets: &[u8]) -> String {
    octets
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<String>>()
        .join(".")
}
