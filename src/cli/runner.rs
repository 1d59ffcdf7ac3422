//! CLI runner - executes one extraction

use crate::cli::commands::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RetryPolicy};
use crate::output::write_csv;
use crate::pager::Pager;
use crate::resource::Resource;
use crate::types::JsonValue;
use serde::Serialize;

/// Summary object printed when `--stdout` is not set
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Always true; failures never reach the summary path
    pub ok: bool,
    /// Resource that was extracted
    pub resource: Resource,
    /// Number of records fetched
    pub count: usize,
    /// CSV path, or empty when no file was written
    pub out: String,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve settings from the environment and run
    pub async fn run(&self) -> Result<()> {
        let settings = Settings::from_env()?;
        self.run_with(&settings).await
    }

    /// Run against already-resolved settings
    pub async fn run_with(&self, settings: &Settings) -> Result<()> {
        let records = self.collect(settings).await?;

        if let Some(path) = &self.cli.out {
            write_csv(&records, path)?;
        }

        if self.cli.stdout {
            println!("{}", serde_json::to_string(&records)?);
        } else {
            println!("{}", serde_json::to_string(&self.summary(records.len()))?);
        }

        Ok(())
    }

    /// Fetch the full result set for the selected resource
    pub async fn collect(&self, settings: &Settings) -> Result<Vec<JsonValue>> {
        let sleep = self.cli.sleep_duration();
        let config = HttpClientConfig::new(&settings.base_url)
            .retry(RetryPolicy::fixed(sleep))
            .headers(settings.headers());
        let client = HttpClient::with_config(config);
        let pager = Pager::new(self.cli.limit, sleep);

        self.cli
            .resource
            .fetch(&client, &pager, self.cli.query.as_deref())
            .await
    }

    fn summary(&self, count: usize) -> RunSummary {
        RunSummary {
            ok: true,
            resource: self.cli.resource,
            count,
            out: self
                .cli
                .out
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}
