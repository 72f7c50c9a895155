use clap::{Parser, ValueEnum};
use snip_gateway::config::DEFAULT_BASE_URL;
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SNIP_GATEWAY_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "SNIP_GATEWAY_LOG_FORMAT";
pub const STORE_CAPACITY_ENV: &str = "SNIP_GATEWAY_STORE_CAPACITY";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Pretty => write!(f, "pretty"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public base URL that short codes are appended to.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,

    /// Number of mappings to pre-allocate in the store.
    #[arg(long, env = STORE_CAPACITY_ENV, default_value_t = 0)]
    pub store_capacity: usize,
}
