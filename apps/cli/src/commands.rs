//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use postseries_core::host::{PostAccessor, TaxonomyQuery};
use postseries_core::taxonomy::taxonomy_definition;
use postseries_core::{Catalog, MemoryHost, SeriesManager};
use postseries_shared::{
    AppConfig, PostId, SortOrder, ViewContext, init_config, load_config, load_config_from,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Post Series: group posts into series and render their navigation.
#[derive(Parser)]
#[command(
    name = "postseries",
    version,
    about = "Render series summaries and continue-reading links for blog posts.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.postseries/postseries.toml).
    #[arg(long, global = true, env = "POSTSERIES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print a post's content wrapped with its series block and navigation.
    Render {
        /// Site snapshot (JSON).
        #[arg(long)]
        site: PathBuf,

        /// Post to render.
        #[arg(long)]
        post: PostId,

        /// Post body; read from this file instead of using an empty body.
        #[arg(long)]
        content: Option<PathBuf>,

        /// Render as part of a listing instead of a single-post view.
        #[arg(long)]
        listing: bool,
    },

    /// Print the series summary block for a post.
    Block {
        /// Site snapshot (JSON).
        #[arg(long)]
        site: PathBuf,

        /// Post to render.
        #[arg(long)]
        post: PostId,

        /// Render as part of a listing (series link only, no list).
        #[arg(long)]
        listing: bool,
    },

    /// Print the continue-reading link for a post.
    Nav {
        /// Site snapshot (JSON).
        #[arg(long)]
        site: PathBuf,

        /// Post to render.
        #[arg(long)]
        post: PostId,
    },

    /// List the posts of a series, oldest first.
    Series {
        /// Site snapshot (JSON).
        #[arg(long)]
        site: PathBuf,

        /// Series name.
        #[arg(long)]
        name: String,
    },

    /// Print the taxonomy registration descriptor as JSON.
    Taxonomy,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "postseries=info,postseries_core=info",
        1 => "postseries=debug,postseries_core=debug",
        _ => "postseries=trace,postseries_core=trace,postseries_shared=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Rendered markup goes to stdout; keep logs on stderr.
    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            site,
            post,
            content,
            listing,
        } => cmd_render(config, &site, post, content.as_deref(), listing),
        Command::Block {
            site,
            post,
            listing,
        } => cmd_block(config, &site, post, listing),
        Command::Nav { site, post } => cmd_nav(config, &site, post),
        Command::Series { site, name } => cmd_series(config, &site, &name),
        Command::Taxonomy => cmd_taxonomy(config),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

fn open_site(config: AppConfig, site: &Path) -> Result<SeriesManager<MemoryHost>> {
    let host = MemoryHost::load(config.taxonomy.name.clone(), site)
        .wrap_err_with(|| format!("failed to load site snapshot {}", site.display()))?;
    info!(posts = host.posts().len(), "site loaded");
    Ok(SeriesManager::new(host, config))
}

fn view_for(manager: &SeriesManager<MemoryHost>, post: PostId, listing: bool) -> Result<ViewContext> {
    if manager.host().post(post).is_none() {
        return Err(eyre!("post {post} not found in site snapshot"));
    }
    Ok(if listing {
        ViewContext::listing(post)
    } else {
        ViewContext::single(post)
    })
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_render(
    config: AppConfig,
    site: &Path,
    post: PostId,
    content: Option<&Path>,
    listing: bool,
) -> Result<()> {
    let manager = open_site(config, site)?;
    let view = view_for(&manager, post, listing)?;

    let body = match content {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read content {}", path.display()))?,
        None => String::new(),
    };

    let body = manager.expand_shortcodes(&body, &view);
    let html = manager.filter_content(&body, &view);
    info!(post = %post, bytes = html.len(), "rendered content");
    println!("{html}");
    Ok(())
}

fn cmd_block(config: AppConfig, site: &Path, post: PostId, listing: bool) -> Result<()> {
    let manager = open_site(config, site)?;
    let view = view_for(&manager, post, listing)?;
    let html = manager.series_block(&view);
    if html.is_empty() {
        info!(post = %post, "post is not part of a series");
    }
    println!("{html}");
    Ok(())
}

fn cmd_nav(config: AppConfig, site: &Path, post: PostId) -> Result<()> {
    let manager = open_site(config, site)?;
    let view = view_for(&manager, post, false)?;
    let html = manager.series_nav(&view);
    if html.is_empty() {
        info!(post = %post, "no next post in series");
    }
    println!("{html}");
    Ok(())
}

fn cmd_series(config: AppConfig, site: &Path, name: &str) -> Result<()> {
    let manager = open_site(config, site)?;
    let posts = manager
        .host()
        .series_posts(manager.taxonomy(), name, SortOrder::Asc);
    if posts.is_empty() {
        return Err(eyre!("series '{name}' has no posts"));
    }

    for (n, post) in posts.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} ({})  {}",
            n + 1,
            post.id,
            post.title,
            post.published_at.format("%Y-%m-%d"),
            post.permalink
        );
    }
    Ok(())
}

fn cmd_taxonomy(config: AppConfig) -> Result<()> {
    let definition = taxonomy_definition(&config, &Catalog::from_config(&config));
    let json = serde_json::to_string_pretty(&definition)?;
    println!("{json}");
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{toml_str}");
    Ok(())
}
