//! tmdbkit - command-line client for The Movie Database (TMDB).

/// Application configuration (TOML).
mod config;
/// Log-based output of TMDB models.
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tmdbkit_api::{ExternalSource, LocalTmdbApi, SearchParams, TmdbClient};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{API_KEY_ENV, AppConfig, TmdbConfig};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Response language (overrides `tmdb.language`).
    #[arg(long, global = true)]
    language: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Manage local and server configuration.
    Config(ConfigCommand),
    /// Commands that query the TMDB API.
    #[command(flatten)]
    Query(QueryCommands),
}

/// Subcommands that need an initialized client.
#[derive(Subcommand)]
enum QueryCommands {
    /// Get movie details.
    Movie(MovieArgs),
    /// Get TV show details.
    Tv(TvArgs),
    /// Get TV season details.
    Season(SeasonArgs),
    /// Get TV episode details.
    Episode(EpisodeArgs),
    /// Get person details and acting roles.
    Person(IdArgs),
    /// Get collection details.
    Collection(IdArgs),
    /// Get company details and its movies.
    Company(IdArgs),
    /// Search by title or name.
    Search(SearchArgs),
    /// Fetch a list endpoint (popular, top rated, ...).
    List(ListArgs),
    /// Look up objects by a third-party ID.
    Find(FindArgs),
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show the TMDB server configuration.
    Show,
    /// Write a config file.
    Init(ConfigInitArgs),
}

/// Arguments for the `config init` subcommand.
#[derive(clap::Args)]
struct ConfigInitArgs {
    /// API key to store.
    #[arg(long)]
    api_key: Option<String>,
    /// Switch to the plain HTTP endpoints.
    #[arg(long)]
    insecure: bool,
    /// Switch back to the HTTPS endpoints.
    #[arg(long, conflicts_with = "insecure")]
    secure: bool,
}

/// Arguments taking a single ID.
#[derive(clap::Args)]
struct IdArgs {
    /// TMDB ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID (e.g. 550).
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated `append_to_response` parts (default: full set).
    #[arg(long, value_delimiter = ',')]
    append: Option<Vec<String>>,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvArgs {
    /// TMDB TV show ID (e.g. 1399).
    #[arg(long, required = true)]
    id: u64,
    /// Comma-separated `append_to_response` parts (default: full set).
    #[arg(long, value_delimiter = ',')]
    append: Option<Vec<String>>,
}

/// Arguments for the `season` subcommand.
#[derive(clap::Args)]
struct SeasonArgs {
    /// TMDB TV show ID.
    #[arg(long, required = true)]
    tv_id: u64,
    /// Season number.
    #[arg(long, required = true)]
    season: u32,
}

/// Arguments for the `episode` subcommand.
#[derive(clap::Args)]
struct EpisodeArgs {
    /// TMDB TV show ID.
    #[arg(long, required = true)]
    tv_id: u64,
    /// Season number.
    #[arg(long, required = true)]
    season: u32,
    /// Episode number.
    #[arg(long, required = true)]
    episode: u32,
}

/// What to search for.
#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    /// Movies.
    Movie,
    /// TV shows.
    Tv,
    /// People.
    Person,
    /// Collections.
    Collection,
    /// Companies.
    Company,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// What to search for.
    #[arg(value_enum)]
    kind: SearchKind,
    /// Search query (e.g. "The Matrix").
    #[arg(long, required = true)]
    query: String,
    /// Result page (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Filter by release or first air year (movie and tv only).
    #[arg(long)]
    year: Option<u32>,
    /// Include adult results.
    #[arg(long)]
    include_adult: bool,
}

/// Which list endpoint to fetch.
#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    /// Most recently added movie.
    LatestMovie,
    /// Upcoming movies.
    Upcoming,
    /// Movies in theatres.
    NowPlaying,
    /// Popular movies.
    PopularMovies,
    /// Top rated movies.
    TopRatedMovies,
    /// Most recently added TV show.
    LatestTv,
    /// Popular TV shows.
    PopularTv,
    /// TV shows airing in the next 7 days.
    OnTheAir,
    /// TV shows airing today.
    AiringToday,
    /// Top rated TV shows.
    TopRatedTv,
    /// Most recently added person.
    LatestPerson,
    /// Popular people.
    PopularPersons,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Which list to fetch.
    #[arg(value_enum)]
    kind: ListKind,
    /// Result page (1-based, ignored by `latest-*`).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
struct FindArgs {
    /// Third-party ID (e.g. "tt0137523").
    #[arg(long, required = true)]
    external_id: String,
    /// ID family: imdb, tvdb, freebase_mid, freebase, tvrage, facebook,
    /// twitter, instagram, wikidata.
    #[arg(long, default_value = "imdb_id")]
    source: ExternalSource,
}

/// Loads the config file for `dir`.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&Path>) -> Result<AppConfig> {
    let path = AppConfig::path(dir)?;
    AppConfig::load(&path)
}

/// Builds a `TmdbClient` from config and the `TMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if no API key is set or the client fails to initialize.
#[instrument(skip_all)]
async fn build_client(config: &TmdbConfig, language: Option<&str>) -> Result<TmdbClient> {
    let api_key = config.api_key(std::env::var(API_KEY_ENV).ok())?;

    TmdbClient::builder()
        .api_key(api_key)
        .language(language.unwrap_or(config.language.as_str()))
        .secure(config.secure)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .await
        .context("failed to initialize TMDB client")
}

/// Converts `--append` values into the library's slice form.
fn append_parts(append: Option<&[String]>) -> Option<Vec<&str>> {
    append.map(|parts| parts.iter().map(String::as_str).collect())
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to initialize.
#[instrument(skip_all)]
async fn run_config_show(config: &TmdbConfig, language: Option<&str>) -> Result<()> {
    let client = build_client(config, language).await?;
    report::report_configuration(client.configuration(), client.is_secure());
    Ok(())
}

/// Overwrites only the settings given on the command line.
fn apply_init_args(config: &mut TmdbConfig, args: &ConfigInitArgs, language: Option<&str>) {
    if let Some(key) = &args.api_key {
        config.api_key = Some(key.clone());
    }
    if let Some(lang) = language {
        config.language = String::from(lang);
    }
    if args.insecure {
        config.secure = false;
    } else if args.secure {
        config.secure = true;
    }
}

/// Runs the `config init` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
#[instrument(skip_all)]
fn run_config_init(
    args: &ConfigInitArgs,
    dir: Option<&Path>,
    language: Option<&str>,
) -> Result<()> {
    let path = AppConfig::path(dir)?;
    let mut config = AppConfig::load(&path)?;
    apply_init_args(&mut config.tmdb, args, language);
    config.save(&path)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_movie(client: &TmdbClient, args: &MovieArgs) -> Result<()> {
    let append = append_parts(args.append.as_deref());
    let movie = client
        .get_movie(args.id, append.as_deref())
        .await
        .context("TMDB movie request failed")?;
    report::report_movie(&movie);
    Ok(())
}

/// Runs the `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_tv(client: &TmdbClient, args: &TvArgs) -> Result<()> {
    let append = append_parts(args.append.as_deref());
    let show = client
        .get_tv_show(args.id, append.as_deref())
        .await
        .context("TMDB tv request failed")?;
    report::report_tv_show(&show);
    Ok(())
}

/// Runs the `season` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_season(client: &TmdbClient, args: &SeasonArgs) -> Result<()> {
    let season = client
        .get_season(args.tv_id, args.season, None)
        .await
        .context("TMDB tv season request failed")?;
    report::report_season(&season);
    Ok(())
}

/// Runs the `episode` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_episode(client: &TmdbClient, args: &EpisodeArgs) -> Result<()> {
    let episode = client
        .get_episode(args.tv_id, args.season, args.episode, None)
        .await
        .context("TMDB tv episode request failed")?;
    report::report_episode(&episode);
    Ok(())
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if an API request fails.
#[instrument(skip_all)]
async fn run_person(client: &TmdbClient, id: u64) -> Result<()> {
    let person = client
        .get_person(id, None)
        .await
        .context("TMDB person request failed")?;
    report::report_person(&person);
    let roles = person
        .roles()
        .await
        .context("TMDB person credits request failed")?;
    report::report_roles(&roles);
    Ok(())
}

/// Runs the `collection` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_collection(client: &TmdbClient, id: u64) -> Result<()> {
    let collection = client
        .get_collection(id, None)
        .await
        .context("TMDB collection request failed")?;
    report::report_collection(&collection);
    Ok(())
}

/// Runs the `company` subcommand.
///
/// # Errors
///
/// Returns an error if an API request fails.
#[instrument(skip_all)]
async fn run_company(client: &TmdbClient, id: u64) -> Result<()> {
    let company = client
        .get_company(id, None)
        .await
        .context("TMDB company request failed")?;
    report::report_company(&company);
    let movies = company
        .movies()
        .await
        .context("TMDB company movies request failed")?;
    report::report_movies(movies);
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_search(client: &TmdbClient, args: &SearchArgs) -> Result<()> {
    let mut params = SearchParams::new(&args.query)
        .page(args.page)
        .include_adult(args.include_adult);
    if let Some(year) = args.year {
        params = params.year(year);
    }

    match args.kind {
        SearchKind::Movie => {
            let movies = client
                .search_movie(&params)
                .await
                .context("TMDB search/movie request failed")?;
            report::report_movies(&movies);
        }
        SearchKind::Tv => {
            let shows = client
                .search_tv_show(&params)
                .await
                .context("TMDB search/tv request failed")?;
            report::report_tv_shows(&shows);
        }
        SearchKind::Person => {
            let persons = client
                .search_person(&params)
                .await
                .context("TMDB search/person request failed")?;
            report::report_persons(&persons);
        }
        SearchKind::Collection => {
            let collections = client
                .search_collection(&params)
                .await
                .context("TMDB search/collection request failed")?;
            report::report_collections(&collections);
        }
        SearchKind::Company => {
            let companies = client
                .search_company(&params)
                .await
                .context("TMDB search/company request failed")?;
            report::report_companies(&companies);
        }
    }
    Ok(())
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_list(client: &TmdbClient, args: &ListArgs) -> Result<()> {
    let page = args.page;
    match args.kind {
        ListKind::LatestMovie => report::report_movie(&client.latest_movie().await?),
        ListKind::Upcoming => report::report_movies(&client.upcoming_movies(page).await?),
        ListKind::NowPlaying => report::report_movies(&client.now_playing_movies(page).await?),
        ListKind::PopularMovies => report::report_movies(&client.popular_movies(page).await?),
        ListKind::TopRatedMovies => report::report_movies(&client.top_rated_movies(page).await?),
        ListKind::LatestTv => report::report_tv_show(&client.latest_tv_show().await?),
        ListKind::PopularTv => report::report_tv_shows(&client.popular_tv_shows(page).await?),
        ListKind::OnTheAir => report::report_tv_shows(&client.on_the_air_tv_shows(page).await?),
        ListKind::AiringToday => {
            report::report_tv_shows(&client.airing_today_tv_shows(page).await?);
        }
        ListKind::TopRatedTv => report::report_tv_shows(&client.top_rated_tv_shows(page).await?),
        ListKind::LatestPerson => report::report_person(&client.latest_person().await?),
        ListKind::PopularPersons => report::report_persons(&client.popular_persons(page).await?),
    }
    Ok(())
}

/// Runs the `find` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_find(client: &TmdbClient, args: &FindArgs) -> Result<()> {
    let found = client
        .find(&args.external_id, args.source)
        .await
        .context("TMDB find request failed")?;
    report::report_find(&found);
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_deref();
    let language = cli.language.as_deref();
    match cli.command {
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => {
                run_config_show(&load_config(dir)?.tmdb, language).await
            }
            ConfigSubcommands::Init(args) => run_config_init(&args, dir, language),
        },
        Commands::Query(query) => {
            let config = load_config(dir)?;
            let client = build_client(&config.tmdb, language).await?;
            match query {
                QueryCommands::Movie(args) => run_movie(&client, &args).await,
                QueryCommands::Tv(args) => run_tv(&client, &args).await,
                QueryCommands::Season(args) => run_season(&client, &args).await,
                QueryCommands::Episode(args) => run_episode(&client, &args).await,
                QueryCommands::Person(args) => run_person(&client, args.id).await,
                QueryCommands::Collection(args) => run_collection(&client, args.id).await,
                QueryCommands::Company(args) => run_company(&client, args.id).await,
                QueryCommands::Search(args) => run_search(&client, &args).await,
                QueryCommands::List(args) => run_list(&client, &args).await,
                QueryCommands::Find(args) => run_find(&client, &args).await,
            }
        }
    }
}
