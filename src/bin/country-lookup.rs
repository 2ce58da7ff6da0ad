use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use country_lookup::normalize::normalize;
use country_lookup::render::render_country;
use country_lookup::{Client, ClientConfig, OptionFilter, Phase, QueryParams, Session};
use serde_json::json;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "country-lookup",
    version,
    about = "Look up country profiles (flag, capital, population, currency, ...) from REST Countries"
)]
struct Cli {
    /// Base URL of the REST Countries API.
    #[arg(long, global = true, default_value = country_lookup::api::DEFAULT_BASE_URL)]
    base_url: String,
    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the profile of a country (defaults to India).
    Show(ShowArgs),
    /// List country names, optionally filtered by a case-insensitive substring.
    List(ListArgs),
    /// Print the share link for a country name.
    Share(ShareArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Exact country name, e.g. "Costa Rica".
    name: Option<String>,
    /// Share link or query string to start from (e.g. "country=Japan").
    #[arg(long, conflicts_with = "name")]
    link: Option<String>,
    /// Print the display fields as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only names containing this text (case-insensitive).
    filter: Option<String>,
}

#[derive(Args, Debug)]
struct ShareArgs {
    name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ClientConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout));
    match cli.cmd {
        Command::Show(args) => cmd_show(config, args),
        Command::List(args) => cmd_list(config, args),
        Command::Share(args) => {
            println!("{}", QueryParams::with_country(args.name).share_link());
            Ok(())
        }
    }
}

fn cmd_show(config: ClientConfig, args: ShowArgs) -> Result<()> {
    let params = match (&args.name, &args.link) {
        (Some(name), _) => QueryParams::with_country(name.as_str()),
        (None, Some(link)) => QueryParams::parse(link).context("invalid --link")?,
        (None, None) => QueryParams::new(),
    };
    let client = Client::new(config)?;

    let mut session = Session::new(client, params).without_suggestions();
    session.start();
    session.wait_idle();

    match session.controller().phase() {
        Phase::Loaded(countries) => {
            if args.json {
                let out: Vec<_> = countries
                    .iter()
                    .map(|c| json!({ "name": c.display_name(), "fields": normalize(Some(c)) }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (i, country) in countries.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", country.display_name());
                    for line in render_country(country) {
                        println!("  {line}");
                    }
                }
            }
        }
        Phase::NotFound(message) => {
            println!("{message}");
            std::process::exit(1);
        }
        Phase::Failed(err) => anyhow::bail!("lookup failed: {err}"),
        Phase::Idle | Phase::Loading => anyhow::bail!("lookup did not complete"),
    }

    eprintln!("Share: {}", session.params().share_link());
    Ok(())
}

fn cmd_list(config: ClientConfig, args: ListArgs) -> Result<()> {
    let client = Client::new(config)?;
    let names = client
        .country_names()
        .context("fetching the country list")?;

    let mut filter = OptionFilter::new();
    filter.initialize(names);
    for name in filter.filter(args.filter.as_deref().unwrap_or_default()) {
        println!("{name}");
    }
    Ok(())
}
