use nn_core::{Error, Result};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub const DEFAULT_DIRECTIVE: &str = "info";

/// Prefixes every line with the page it belongs to.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: Vec<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_page(emoji: &str, page: &str) -> Self {
        Self::new().with_prefix(format!("{} {}", emoji, page))
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefixes.push(prefix);
        self
    }

    fn prefix(&self) -> String {
        self.prefixes.iter().map(|p| format!("{} ", p)).collect()
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}{}", self.prefix(), message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!("{}{}", self.prefix(), message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}{}", self.prefix(), message);
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}{}", self.prefix(), message);
    }
}

/// Installs the fmt subscriber once. An already installed dispatcher is
/// left alone.
pub fn init_logging(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| Error::Config(format!("invalid log directive {:?}: {}", directive, e)))?;
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
    Ok(())
}
