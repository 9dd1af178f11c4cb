use std::{net::SocketAddr, path::PathBuf, str::FromStr};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server. Env: `BIND_ADDR`, default `0.0.0.0:8000`.
    pub bind_addr: SocketAddr,
    /// Root directory of the precomputed dataset files. Env: `DATA_DIR`, default `data`.
    pub data_dir: PathBuf,
    /// Number of uniform bins for benchmark histograms. Env: `HISTOGRAM_BINS`, default 10.
    pub histogram_bins: usize,
}

impl Config {
    /// Load configuration from environment variables, applying sensible defaults.
    ///
    /// # Errors
    /// Returns an error if `BIND_ADDR` is set but not a valid socket address,
    /// or if numeric env vars cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let data_dir = PathBuf::from(data_dir);

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let bind_addr = SocketAddr::from_str(&bind_addr)
            .map_err(|e| anyhow::anyhow!("Invalid BIND_ADDR '{}': {}", bind_addr, e))?;

        let histogram_bins = parse_env_usize("HISTOGRAM_BINS", 10)?;
        if histogram_bins == 0 {
            anyhow::bail!("HISTOGRAM_BINS must be > 0");
        }

        Ok(Config {
            bind_addr,
            data_dir,
            histogram_bins,
        })
    }

    /// Validate that the data directory exists and is a directory, then
    /// canonicalize it.
    ///
    /// Canonicalization makes the stored path absolute so later reads are
    /// unaffected by working-directory changes. Call this after the
    /// filesystem is ready (e.g., after volume mount).
    pub async fn validate_data_dir(&mut self) -> anyhow::Result<()> {
        let meta = tokio::fs::metadata(&self.data_dir).await.map_err(|e| {
            anyhow::anyhow!(
                "Cannot access data dir '{}': {}",
                self.data_dir.display(),
                e
            )
        })?;

        if !meta.is_dir() {
            anyhow::bail!("Data dir is not a directory: {}", self.data_dir.display());
        }

        self.data_dir = tokio::fs::canonicalize(&self.data_dir).await.map_err(|e| {
            anyhow::anyhow!(
                "Cannot canonicalize data dir '{}': {}",
                self.data_dir.display(),
                e
            )
        })?;

        Ok(())
    }
}

fn parse_env_usize(name: &str, default: usize) -> anyhow::Result<usize> {
    match std::env::var(name) {
        Ok(val) => val
            .parse::<usize>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
