//! Translate the host environment into an invocation context and hook options.

use std::path::PathBuf;

use extguard_core::{DownloadId, HookPhase, InvocationContext, QueueEvent};
use tracing::warn;

use crate::env::HostEnv;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{BannedExtensions, ControlEndpoint, HookConfig, MARKER_DIR_NAME};
use crate::validate::{parse_extension_list, parse_flag, parse_port};

/// Queue event marker.
pub const VAR_EVENT: &str = "NZBNA_EVENT";
/// Post-processing directory; its presence marks the post-processing phase.
pub const VAR_PP_DIRECTORY: &str = "NZBPP_DIRECTORY";
/// Option only exported by supported host versions.
pub const VAR_ARTICLE_CACHE: &str = "NZBOP_ARTICLECACHE";
/// Post-processing status of the download.
pub const VAR_PP_STATUS: &str = "NZBPP_STATUS";
/// Aggregated post-processing status of the download.
pub const VAR_PP_TOTAL_STATUS: &str = "NZBPP_TOTALSTATUS";
/// Host temp directory.
pub const VAR_TEMP_DIR: &str = "NZBOP_TEMPDIR";
/// Control server address.
pub const VAR_CONTROL_IP: &str = "NZBOP_CONTROLIP";
/// Control server port.
pub const VAR_CONTROL_PORT: &str = "NZBOP_CONTROLPORT";
/// Control server username.
pub const VAR_CONTROL_USERNAME: &str = "NZBOP_CONTROLUSERNAME";
/// Control server password.
pub const VAR_CONTROL_PASSWORD: &str = "NZBOP_CONTROLPASSWORD";
/// Comma separated banned extensions.
pub const VAR_BANNED_EXTENSIONS: &str = "NZBPO_BANNEDEXTENSIONS";
/// Whether extension matching respects case.
pub const VAR_CASE_SENSITIVE: &str = "NZBPO_CASESENSITIVE";

const WILDCARD_ADDR: &str = "0.0.0.0";
const LOOPBACK_ADDR: &str = "127.0.0.1";

/// Build the invocation context.
///
/// Never fails: incomplete contexts are judged by the gatekeeper, which must be able to
/// ignore unknown events whatever the other variables contain.
#[must_use]
pub fn load_context(env: &HostEnv) -> InvocationContext {
    let phase = env.get(VAR_EVENT).map_or_else(
        || {
            env.contains(VAR_PP_DIRECTORY)
                .then_some(HookPhase::PostProcess)
        },
        |event| Some(HookPhase::Queue(QueueEvent::parse(event))),
    );

    let prefix = phase.as_ref().map_or("NZBPP_", HookPhase::prefix);
    let field = |name: &str| env.get(&format!("{prefix}{name}")).map(str::to_string);

    let nzb_id = field("NZBID").and_then(|raw| match raw.parse::<DownloadId>() {
        Ok(id) => Some(id),
        Err(err) => {
            warn!(value = %raw, error = %err, "ignoring non-numeric download id");
            None
        }
    });

    InvocationContext {
        phase,
        host_supported: env.contains(VAR_ARTICLE_CACHE),
        directory: field("DIRECTORY").map(PathBuf::from),
        nzb_name: field("NZBNAME"),
        nzb_id,
        status: env.get(VAR_PP_STATUS).map(str::to_string),
        total_status: env.get(VAR_PP_TOTAL_STATUS).map(str::to_string),
    }
}

/// Build the hook options from host options and script options.
///
/// # Errors
///
/// Returns an error when a required host option is missing or malformed.
pub fn load_config(env: &HostEnv) -> ConfigResult<HookConfig> {
    let case_sensitive = parse_flag(VAR_CASE_SENSITIVE, env.get(VAR_CASE_SENSITIVE))?;
    let banned = BannedExtensions::new(
        parse_extension_list(env.get(VAR_BANNED_EXTENSIONS).unwrap_or_default()),
        case_sensitive,
    );

    let temp_dir = require(env, VAR_TEMP_DIR)?;
    if temp_dir.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: VAR_TEMP_DIR,
            reason: "empty",
            value: None,
        });
    }

    Ok(HookConfig {
        banned,
        marker_dir: PathBuf::from(temp_dir).join(MARKER_DIR_NAME),
        control: load_control(env)?,
    })
}

fn load_control(env: &HostEnv) -> ConfigResult<ControlEndpoint> {
    let host = match require(env, VAR_CONTROL_IP)?.trim() {
        WILDCARD_ADDR => LOOPBACK_ADDR.to_string(),
        other => other.to_string(),
    };
    Ok(ControlEndpoint {
        host,
        port: parse_port(VAR_CONTROL_PORT, require(env, VAR_CONTROL_PORT)?)?,
        username: require(env, VAR_CONTROL_USERNAME)?.to_string(),
        password: require(env, VAR_CONTROL_PASSWORD)?.to_string(),
    })
}

fn require<'a>(env: &'a HostEnv, name: &'static str) -> ConfigResult<&'a str> {
    env.get(name).ok_or(ConfigError::MissingVar { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn host_options() -> Vec<(&'static str, &'static str)> {
        vec![
            (VAR_ARTICLE_CACHE, "0"),
            (VAR_TEMP_DIR, "/var/tmp/nzbget"),
            (VAR_CONTROL_IP, "0.0.0.0"),
            (VAR_CONTROL_PORT, "6789"),
            (VAR_CONTROL_USERNAME, "nzbget"),
            (VAR_CONTROL_PASSWORD, "secret"),
        ]
    }

    #[test]
    fn queue_context_reads_prefixed_fields() {
        let mut vars = host_options();
        vars.extend([
            (VAR_EVENT, "FILE_DOWNLOADED"),
            ("NZBNA_DIRECTORY", "/downloads/inter/show"),
            ("NZBNA_NZBNAME", "show"),
            ("NZBNA_NZBID", "17"),
        ]);
        let context = load_context(&HostEnv::from_pairs(vars));
        assert_eq!(
            context.phase,
            Some(HookPhase::Queue(QueueEvent::FileDownloaded))
        );
        assert!(context.host_supported);
        assert_eq!(context.nzb_id, Some(DownloadId::new(17)));
        assert_eq!(context.nzb_name.as_deref(), Some("show"));
        assert_eq!(
            context.directory.as_deref(),
            Some(Path::new("/downloads/inter/show"))
        );
    }

    #[test]
    fn post_process_context_reads_statuses() {
        let context = load_context(&HostEnv::from_pairs([
            (VAR_PP_DIRECTORY, "/downloads/done/show"),
            ("NZBPP_NZBNAME", "show"),
            ("NZBPP_NZBID", "x"),
            (VAR_PP_STATUS, "FAILURE/BAD"),
            (VAR_PP_TOTAL_STATUS, "FAILURE"),
        ]));
        assert_eq!(context.phase, Some(HookPhase::PostProcess));
        assert!(!context.host_supported);
        assert!(context.nzb_id.is_none());
        assert!(context.is_marked_bad());
        assert!(context.is_failed());
    }

    #[test]
    fn missing_markers_leave_phase_empty() {
        let context = load_context(&HostEnv::from_pairs(host_options()));
        assert!(context.phase.is_none());
    }

    #[test]
    fn config_maps_wildcard_and_marker_dir() -> ConfigResult<()> {
        let mut vars = host_options();
        vars.push((VAR_BANNED_EXTENSIONS, ".wmv, .divx"));
        let config = load_config(&HostEnv::from_pairs(vars))?;
        assert_eq!(config.control.host, "127.0.0.1");
        assert_eq!(config.control.port, 6789);
        assert_eq!(
            config.marker_dir,
            Path::new("/var/tmp/nzbget").join(MARKER_DIR_NAME)
        );
        assert!(config.banned.matches("CLIP.WMV"));
        assert!(!config.banned.case_sensitive());
        Ok(())
    }

    #[test]
    fn config_reports_missing_and_invalid_options() {
        let mut vars = host_options();
        vars.retain(|(name, _)| *name != VAR_CONTROL_PASSWORD);
        assert!(matches!(
            load_config(&HostEnv::from_pairs(vars)),
            Err(ConfigError::MissingVar {
                name: VAR_CONTROL_PASSWORD
            })
        ));

        let mut vars = host_options();
        vars.push((VAR_CASE_SENSITIVE, "sometimes"));
        assert!(matches!(
            load_config(&HostEnv::from_pairs(vars)),
            Err(ConfigError::InvalidField {
                field: VAR_CASE_SENSITIVE,
                ..
            })
        ));
    }

    #[test]
    fn empty_extension_option_bans_nothing() -> ConfigResult<()> {
        let config = load_config(&HostEnv::from_pairs(host_options()))?;
        assert!(config.banned.is_empty());
        Ok(())
    }
}
