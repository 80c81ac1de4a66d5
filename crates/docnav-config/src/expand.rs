//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}`, `$VAR` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error messages.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a referenced variable is unset (or not
/// valid unicode) and has no default.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }

    let mut unset = Vec::new();
    let expanded = shellexpand::env_with_context(value, |name: &str| {
        match std::env::var(name) {
            Ok(v) => Ok(Some(v)),
            Err(std::env::VarError::NotPresent) => {
                unset.push(name.to_owned());
                Ok(None)
            }
            Err(std::env::VarError::NotUnicode(_)) => Err("value is not valid unicode"),
        }
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}}: {}", e.var_name, e.cause),
    })?;

    // Unset variables without a default are left verbatim by shellexpand.
    if let Some(name) = unset.iter().find(|name| {
        expanded.contains(&format!("${{{name}}}")) || expanded.contains(&format!("${name}"))
    }) {
        return Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        });
    }

    Ok(expanded.into_owned())
}
