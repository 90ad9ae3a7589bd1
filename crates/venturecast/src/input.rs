use std::collections::HashMap;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use venturecast_core::params::ParamKey;

/// Load parameter overrides from a YAML map of kebab-case keys to numbers.
///
/// ```yaml
/// marketing-spend: 250000
/// conversion-rate: 6.5
/// dcf-discount-rate: 14
/// ```
pub fn load_overrides(path: &Path) -> color_eyre::Result<HashMap<ParamKey, f64>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read parameter file {}", path.display()))?;
    let overrides: HashMap<ParamKey, f64> = serde_saphyr::from_str(&content)
        .wrap_err_with(|| format!("failed to parse parameter file {}", path.display()))?;
    Ok(overrides)
}
