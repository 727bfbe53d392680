use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    BasePath, OnError, Template, io,
    site::generate_pages_recursive,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a directory of markdown files")]
struct Args {
    /// Base path the site is served from, e.g. /my-project/
    base_path: Option<String>,

    /// Config file to read
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static", value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(long, value_name = "DIR")]
    public: Option<PathBuf>,

    /// HTML template file
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Log failing pages and continue instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Log every file copied and generated
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    fn on_error(&self) -> OnError {
        if self.keep_going {
            OnError::Skip
        } else {
            OnError::Abort
        }
    }

    /// Reads the config file and lets command-line flags override it.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(config_path) => match Config::load_from_path(config_path)? {
                Some(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                None => bail!("Config file not found: {}", config_path.display()),
            },
            None => Config::load()?,
        };

        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(public) = &self.public {
            config.public_dir = public.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        Ok(config)
    }
}

fn build(config: &Config, on_error: OnError) -> Result<()> {
    io::validate_content_dir(&config.content_dir)?;
    let template = Template::load(&config.template_path)
        .with_context(|| format!("Failed to load template {}", config.template_path.display()))?;
    let base_path = BasePath::new(&config.base_path);

    io::copy_static(&config.static_dir, &config.public_dir).with_context(|| {
        format!(
            "Failed to copy static files from {} to {}",
            config.static_dir.display(),
            config.public_dir.display()
        )
    })?;

    let report = generate_pages_recursive(
        &config.content_dir,
        &template,
        &config.public_dir,
        &base_path,
        on_error,
    )
    .context("Failed to generate pages")?;

    log::info!(
        "Generated {} pages into {}",
        report.generated.len(),
        config.public_dir.display()
    );
    if !report.is_success() {
        bail!("{} pages failed to generate", report.failed.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    let config = args.resolve_config()?;
    log::debug!("Using config: {config:?}");

    build(&config, args.on_error())
}
