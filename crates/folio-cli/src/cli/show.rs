use anyhow::Result;
use folio_client::PortfolioClient;
use folio_core::{render, ProfileVars};

use crate::cli::ShowArgs;

pub async fn run(args: ShowArgs, vars: &ProfileVars<PortfolioClient>) -> Result<()> {
    let record = vars.store().get_or_refresh().await?;
    let value = render::format_section(&args.field, &record.document);

    match args.format.as_str() {
        "json" => {
            println!(
                "{}",
                serde_json::json!({
                    "field": args.field,
                    "value": value,
                    "fetched_at": record.fetched_wall.to_rfc3339(),
                })
            );
        }
        _ => println!("{}", value),
    }

    Ok(())
}

pub fn run_fields() {
    for name in ProfileVars::<PortfolioClient>::names() {
        println!("{}", name);
    }
}
