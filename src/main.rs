//! Replays scripted interactions against the demo landing page and reports
//! what the page behaviors did.

mod landing;
mod script;

use std::io::stderr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use page::{Page, SiteConfig};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::script::Step;

#[derive(Debug, Parser)]
#[command(name = "site_behaviors", version, about)]
struct Cli {
    /// Site configuration (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial viewport width.
    #[arg(long, default_value_t = 375)]
    width: u32,

    /// Viewport height used for every resize.
    #[arg(long, default_value_t = 812)]
    height: u32,

    /// Year written into the footer. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// Interaction to replay, in order: `click:<id>`, `set:<id>=<value>`,
    /// `resize:<width>`.
    #[arg(long = "event", value_name = "STEP")]
    events: Vec<Step>,
}

fn init_log() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("site_behaviors=info,nav=info,page=info"));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_writer(stderr.with_max_level(Level::DEBUG));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_log();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::default(),
    };
    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());

    let mut page = Page::new(landing::build(), config);
    page.content_loaded(year);
    page.resize(cli.width, cli.height);

    for step in &cli.events {
        script::apply(&mut page, step, cli.height).with_context(|| format!("step `{step}`"))?;
        let nav = page
            .nav()
            .map(|n| format!("{:?}", n.state()))
            .unwrap_or_else(|| "absent".to_string());
        println!("{:<28} nav: {nav}", step.to_string());
        for effect in page.take_effects() {
            println!("    -> {effect:?}");
        }
    }

    if let Some(nav) = page.nav() {
        anyhow::ensure!(
            nav.is_mirrored(page.dom()),
            "navigation panel markup disagrees with its state"
        );
    }
    Ok(())
}
