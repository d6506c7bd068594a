use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use feedbox::{FeedWidget, WidgetConfig};
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Read the widget configuration from this file instead of the
    /// default location
    #[clap(long, short, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the feed and print the rendered feed box
    Render {
        /// Override the configured feed url
        #[clap(long, short)]
        url: Option<Url>,
        #[clap(long, short, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Html,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<(), feedbox::Error> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => feedbox::load_config(path).await?,
        None => feedbox::get_config().await?,
    };
    match args.command {
        Command::Render { url, format } => run_render(config, url, format).await?,
        Command::Config => print!("{config}"),
    }
    Ok(())
}

async fn run_render(
    mut config: WidgetConfig,
    url: Option<Url>,
    format: Format,
) -> Result<(), feedbox::Error> {
    if let Some(url) = url {
        config.feed_url = url;
    }
    let widget = FeedWidget::new(config);
    log::info!("Rendering feed box for {}", widget.config().feed_url);
    let mut container = widget.container();
    widget.initialize(&mut container).await?;
    match format {
        Format::Html => println!("{container}"),
        Format::Markdown => println!("{}", container.to_markdown()?),
    }
    Ok(())
}
