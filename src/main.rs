use clap::Parser;
use mov_cli_test::{
    Config, DEFAULT_SCRAPER, EpisodeSelector, HttpClient, Media, Metadata, MovCliTestError,
    PromptError, RESOLVE_STREAMS_OPTION, plugin,
};
use std::process;
use tracing_subscriber::EnvFilter;

/// Search and play the films bundled with the mov-cli test plugin
#[derive(Debug, Parser)]
#[command(name = "mov-cli-test", version, about)]
struct Cli {
    /// What to search for (asked interactively if omitted)
    query: Option<String>,

    /// Scraper to use
    #[arg(short, long)]
    scraper: Option<String>,

    /// Maximum number of search results
    #[arg(short, long)]
    limit: Option<usize>,

    /// Pick the n-th result (1-based) instead of asking
    #[arg(short, long)]
    choice: Option<usize>,

    /// Episode to play for multi-part items
    #[arg(short, long, default_value_t = 1)]
    episode: u32,

    /// Season to play for multi-part items
    #[arg(long, default_value_t = 1)]
    season: u32,

    /// Resolve hosted videos to direct stream URLs (requires yt-dlp)
    #[arg(long)]
    resolve: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Label shown for a search result in the selection list
fn result_label(metadata: &Metadata) -> String {
    match &metadata.year {
        Some(year) => format!("{} ({})", metadata.title, year),
        None => metadata.title.clone(),
    }
}

/// Maps a 1-based choice onto an index into the results
fn choice_index(choice: usize, result_count: usize) -> Result<usize, MovCliTestError> {
    choice
        .checked_sub(1)
        .filter(|index| *index < result_count)
        .ok_or(MovCliTestError::InvalidChoice {
            choice,
            available: result_count,
        })
}

fn print_media(media: &Media) {
    println!("\n=== Ready to play ===\n");

    match media {
        Media::Single(movie) => {
            println!("  Title: {}", movie.title);
            if let Some(year) = &movie.year {
                println!("  Year: {}", year);
            }
        }
        Media::Multi(series) => {
            println!("  Title: {}", series.title);
            println!(
                "  Episode: S{:02}E{:02}",
                series.episode.season, series.episode.episode
            );
        }
    }

    println!("  URL: {}", media.url());
    println!("  Referrer: {}", media.referrer());
}

fn run(cli: Cli) -> Result<(), MovCliTestError> {
    let config = Config::load()?;
    let http_client = HttpClient::new(&config)?;

    let plugin = plugin();
    let scraper_name = cli.scraper.as_deref().unwrap_or(DEFAULT_SCRAPER);
    let factory = plugin
        .scraper(Some(scraper_name))
        .ok_or_else(|| MovCliTestError::UnknownScraper(scraper_name.to_string()))?;

    let mut options = config.scraper_options(scraper_name);
    if cli.resolve {
        options = options.with(RESOLVE_STREAMS_OPTION, true);
    }

    tracing::debug!(
        package = plugin.package_name,
        scraper = scraper_name,
        "Instantiating scraper"
    );
    let scraper = factory(config, http_client, options);

    let query = match cli.query {
        Some(query) => query,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Search")
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::from)?,
    };

    let results: Vec<Metadata> = scraper.search(&query, cli.limit).collect();

    if results.is_empty() {
        println!("No results found for '{}'.", query);
        return Ok(());
    }

    let index = match cli.choice {
        Some(choice) => choice_index(choice, results.len())?,
        None => {
            let labels: Vec<String> = results.iter().map(result_label).collect();
            dialoguer::Select::new()
                .with_prompt("Choose a title")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(PromptError::from)?
        }
    };

    let metadata = &results[index];
    let episode = EpisodeSelector {
        episode: cli.episode,
        season: cli.season,
    };

    let media = scraper.scrape(metadata, episode)?;
    print_media(&media);

    let episodes = scraper.scrape_episodes(metadata);
    tracing::debug!(?episodes, "Episode counts");

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
