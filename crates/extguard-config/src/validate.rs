//! Parsing helpers for host option values.

use crate::error::{ConfigError, ConfigResult};

/// Parse a TCP port, rejecting zero and out-of-range values.
///
/// # Errors
///
/// Returns `ConfigError::InvalidField` when the value is not a port in `1..=65535`.
pub fn parse_port(field: &'static str, value: &str) -> ConfigResult<u16> {
    let port = value
        .trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidField {
            field,
            reason: "not_a_port",
            value: Some(value.to_string()),
        })?;
    if port == 0 {
        return Err(ConfigError::InvalidField {
            field,
            reason: "zero",
            value: Some(value.to_string()),
        });
    }
    Ok(port)
}

/// Parse a yes/no style option; an absent or empty value is `false`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidField` for values that are neither truthy nor falsey.
pub fn parse_flag(field: &'static str, value: Option<&str>) -> ConfigResult<bool> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" | "on" => Ok(true),
        "no" | "false" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidField {
            field,
            reason: "not_a_flag",
            value: Some(raw.to_string()),
        }),
    }
}

/// Split a comma separated extension list into bare, dot-less suffixes.
///
/// Whitespace is dropped, empty entries are skipped and a leading dot is optional.
#[must_use]
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| {
            entry
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect::<String>()
        })
        .filter_map(|entry| {
            let bare = entry.strip_prefix('.').unwrap_or(&entry);
            (!bare.is_empty()).then(|| bare.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_port_accepts_valid_range() -> ConfigResult<()> {
        assert_eq!(parse_port("port", "6789")?, 6789);
        assert_eq!(parse_port("port", " 1 ")?, 1);
        assert!(matches!(
            parse_port("port", "0"),
            Err(ConfigError::InvalidField { reason: "zero", .. })
        ));
        assert!(matches!(
            parse_port("port", "70000"),
            Err(ConfigError::InvalidField {
                reason: "not_a_port",
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn parse_flag_handles_truthy_and_falsey() -> ConfigResult<()> {
        assert!(parse_flag("flag", Some("YeS"))?);
        assert!(parse_flag("flag", Some("true"))?);
        assert!(!parse_flag("flag", Some("no"))?);
        assert!(!parse_flag("flag", Some("  "))?);
        assert!(!parse_flag("flag", None)?);
        assert!(parse_flag("flag", Some("maybe")).is_err());
        Ok(())
    }

    #[test]
    fn extension_list_normalises_entries() {
        assert_eq!(
            parse_extension_list(" .wmv, divx ,,. ,.EXE"),
            vec!["wmv".to_string(), "divx".to_string(), "EXE".to_string()]
        );
        assert!(parse_extension_list("").is_empty());
    }
}
