pub mod links;
pub mod shell;
pub mod show;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "Portfolio REPL - a developer profile you can read from a shell")]
pub struct Cli {
    /// Portfolio API endpoint
    #[arg(
        long,
        global = true,
        env = "FOLIO_ENDPOINT",
        default_value = folio_client::DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Seconds a fetched profile stays fresh before an access re-fetches it
    #[arg(long, global = true, env = "FOLIO_STALE_AFTER", default_value = "300")]
    pub stale_after: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive REPL (the default when no command is given)
    Shell,
    /// Print one profile section
    Show(ShowArgs),
    /// List the pre-loaded profile variables
    Fields,
    /// List the external links
    Links,
    /// Open an external link in the browser
    Open(OpenArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Section name, e.g. ABOUT or skills
    pub field: String,

    /// Output format: text (default) | json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Link name: blog, gallery or source
    pub target: String,
}
