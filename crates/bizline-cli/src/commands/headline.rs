use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, Format};

#[derive(Debug, Serialize)]
struct HeadlineQuery<'a> {
    name: &'a str,
    location: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct HeadlineResponse {
    headline: String,
}

/// Asks the server for a fresh headline; nothing is stored.
pub async fn run(name: &str, location: &str, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);
    let resp: HeadlineResponse = client
        .get_with_query("/regenerate-headline", &HeadlineQuery { name, location })
        .await?;

    match format {
        Format::Json => output::print_json(&resp)?,
        Format::Table => println!("{}", resp.headline),
    }

    Ok(())
}
