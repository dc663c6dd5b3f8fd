use addr::parse_domain_name;

use crate::DomainError;

/// Splits a domain name into the second-level and top-level parts the API
/// commands take, using the public suffix list.
///
/// Any prefix is dropped, so `www.example.co.uk` gives `("example", "co.uk")`.
///
/// # Errors
/// - `Parse` if the name isn't a valid domain name
/// - `MissingRoot` if the name is only a public suffix
pub fn split_sld_tld(name: &str) -> Result<(String, String), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let domain = parse_domain_name(trimmed).map_err(|_| DomainError::Parse(name.to_string()))?;
    let root = domain
        .root()
        .ok_or_else(|| DomainError::MissingRoot(name.to_string()))?;
    let suffix = domain.suffix();
    let sld = root
        .strip_suffix(suffix)
        .and_then(|s| s.strip_suffix('.'))
        .ok_or_else(|| DomainError::MissingRoot(name.to_string()))?;

    Ok((sld.to_string(), suffix.to_string()))
}
