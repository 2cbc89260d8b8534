//! Process entrypoint wiring: command line, logging, host environment, control client.

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use extguard_config::{HostEnv, load_config, load_context};
use extguard_core::{GateDecision, HostChannel, InvocationContext, SentinelHost, evaluate};
use extguard_fsops::MarkerStore;
use extguard_rpc::ControlClient;
use extguard_telemetry::{DEFAULT_LOG_DIRECTIVE, LogFormat, LoggingConfig, init_logging};
use tracing::error;

use crate::error::{AppError, AppResult};
use crate::exit::ExitDisposition;
use crate::workflow::{Hook, early_exit};

/// Command-line options. The host passes none; these exist for operators.
#[derive(Debug, Parser)]
#[command(
    name = "extguard",
    about = "Reject downloads carrying banned file extensions",
    version
)]
pub struct Cli {
    /// Output format for log lines.
    #[arg(long, env = "EXTGUARD_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Host)]
    pub log_format: LogFormatArg,
    /// Log filter directive; `RUST_LOG` takes precedence.
    #[arg(long, env = "EXTGUARD_LOG_LEVEL", default_value = DEFAULT_LOG_DIRECTIVE)]
    pub log_level: String,
    /// Timeout for calls to the control endpoint; unset means no timeout.
    #[arg(long, env = "EXTGUARD_HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,
}

/// Log formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Host log-line prefixes.
    Host,
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Host => Self::Host,
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Parse the command line, install logging and run one invocation against the process
/// environment. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.into(),
    };
    if let Err(err) = init_logging(&logging).map_err(|err| AppError::telemetry("init_logging", err))
    {
        eprintln!("error: {err}: {}", cause_chain(&err));
        return ExitDisposition::Error.code();
    }

    let env = HostEnv::from_process();
    let timeout = cli.http_timeout_secs.map(Duration::from_secs);
    run_invocation(&env, timeout, io::stdout()).await.code()
}

/// Run one invocation, writing host directives to `out`.
pub async fn run_invocation<W: Write + Send>(
    env: &HostEnv,
    http_timeout: Option<Duration>,
    out: W,
) -> ExitDisposition {
    let context = load_context(env);
    let mut host = SentinelHost::new(env.parameters(), out);
    let decision = evaluate(&context, &host, Path::is_dir);
    if let Some(exit) = early_exit(&decision) {
        return exit;
    }

    match execute(env, &context, decision, http_timeout, &mut host).await {
        Ok(exit) => exit,
        Err(err) => {
            error!(operation = %err.operation(), cause = %cause_chain(&err), "{err}");
            ExitDisposition::Error
        }
    }
}

async fn execute(
    env: &HostEnv,
    context: &InvocationContext,
    decision: GateDecision,
    http_timeout: Option<Duration>,
    host: &mut (dyn HostChannel + Send),
) -> AppResult<ExitDisposition> {
    let config = load_config(env).map_err(|err| AppError::config("load_config", err))?;
    let control = ControlClient::from_endpoint(&config.control, http_timeout)
        .map_err(|err| AppError::rpc("control_client", err))?;
    let markers = MarkerStore::new(config.marker_dir.clone());
    Hook::new(context, &config.banned, &markers, &control)
        .run(decision, host)
        .await
}

fn cause_chain(err: &dyn Error) -> String {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        causes.push(source.to_string());
        current = source.source();
    }
    causes.join(": ")
}
