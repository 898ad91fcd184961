use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, Format};

#[derive(Subcommand)]
pub enum Commands {
    /// List all businesses, newest first
    List,
    /// Create a business with a generated rating, review count and headline
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },
    /// Delete a business
    Delete {
        #[arg(help = "Business ID")]
        id: i64,
    },
}

#[derive(Debug, Serialize)]
struct CreateRequest {
    name: String,
    location: String,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: f64,
    pub reviews: i64,
    pub headline: String,
    #[tabled(display_with = "display_timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

fn display_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub async fn run(cmd: Commands, config: &Config, format: Format) -> Result<()> {
    let client = ApiClient::new(config);

    match cmd {
        Commands::List => {
            let businesses: Vec<Business> = client.get("/api/businesses").await?;
            output::print_items(businesses, format)?;
        }
        Commands::Create { name, location } => {
            let req = CreateRequest { name, location };
            let business: Business = client.post("/business-data", &req).await?;
            output::print_created(business, format)?;
        }
        Commands::Delete { id } => {
            let resp: MessageResponse = client.delete(&format!("/api/businesses/{}", id)).await?;
            match format {
                Format::Json => output::print_json(&serde_json::json!({ "message": resp.message }))?,
                Format::Table => output::print_success(&resp.message),
            }
        }
    }

    Ok(())
}
