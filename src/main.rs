//! url-generator
//!
//! Generates paths and URLs for named routes from a server route dump.
//!
//! ```text
//!   routes.json ──▶ loader ──▶ RouterSettings ──▶ Router ──▶ path / url / absolute
//!   settings.toml ─┘                               ▲
//!   --page-url ──────────────▶ StaticPageContext ──┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use url_generator::config::{load_route_data, load_settings};
use url_generator::observability::init_logging;
use url_generator::{PageContext, Parameters, Router, RouterSettings, StaticPageContext, UrlGenerator};

#[derive(Parser)]
#[command(name = "url-generator")]
#[command(about = "Generate paths and URLs from a server route dump", long_about = None)]
struct Cli {
    /// JSON route dump
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL of the page the links are generated for
    #[arg(long)]
    page_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of a route
    Path {
        name: String,
        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print the absolute URL of a route
    Url {
        name: String,
        #[command(flatten)]
        params: ParamArgs,
        #[arg(long)]
        scheme_relative: bool,
    },
    /// Qualify a path against the page URL
    Absolute {
        path: String,
        #[arg(long)]
        scheme_relative: bool,
    },
    /// Print the logout URL and path
    Logout,
    /// Print the parsed route collection as JSON
    Dump,
}

#[derive(Args)]
struct ParamArgs {
    /// Parameter as name=value, repeatable
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Parameters as a JSON object, applied before --param
    #[arg(long)]
    json: Option<String>,
}

impl ParamArgs {
    fn into_parameters(self) -> Result<Parameters, Box<dyn std::error::Error>> {
        let mut parameters = match self.json {
            Some(json) => Parameters::from_json(serde_json::from_str(&json)?)
                .ok_or("--json must be a JSON object")?,
            None => Parameters::new(),
        };

        for (name, value) in self.params {
            parameters.insert(name, value);
        }
        Ok(parameters)
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => RouterSettings::default(),
    };
    if let Some(path) = &cli.routes {
        settings.data = load_route_data(path)?;
    }

    init_logging(&settings);

    let page: Arc<dyn PageContext> = match &cli.page_url {
        Some(url) => Arc::new(StaticPageContext::parse(url)?),
        None => Arc::new(StaticPageContext::default()),
    };

    let router = Router::with_context(settings, page)?;

    match cli.command {
        Commands::Path { name, params } => {
            println!("{}", router.path(&name, &params.into_parameters()?)?);
        }
        Commands::Url { name, params, scheme_relative } => {
            println!("{}", router.url(&name, &params.into_parameters()?, scheme_relative)?);
        }
        Commands::Absolute { path, scheme_relative } => {
            println!("{}", router.absolute_url(&path, scheme_relative));
        }
        Commands::Logout => {
            println!("url:  {}", router.logout_url()?.unwrap_or_default());
            println!("path: {}", router.logout_path()?.unwrap_or_default());
        }
        Commands::Dump => {
            println!("{}", serde_json::to_string_pretty(router.collection()?)?);
        }
    }

    Ok(())
}
