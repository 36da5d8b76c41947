use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use contact_core::{tracing_setup, FormClient, WidgetConfig};
use contact_tui::runtime::run_app;
use contact_tui::ui::{self, App, NetEvent};

/// Terminal contact-form widget
#[derive(Debug, Parser)]
#[command(name = "contact-form")]
struct Args {
    /// Endpoint the CSRF token is fetched from (GET)
    #[arg(long)]
    csrf_url: Option<String>,

    /// Endpoint the filled form is posted to (POST)
    #[arg(long)]
    submit_url: Option<String>,

    /// Header carrying the CSRF token (header mode)
    #[arg(long)]
    csrf_header_name: Option<String>,

    /// JSON body field carrying the CSRF token (field mode)
    #[arg(long)]
    csrf_field_name: Option<String>,

    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_setup::init_tracing();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    };
    if args.csrf_url.is_some() {
        config.csrf_url = args.csrf_url;
    }
    if args.submit_url.is_some() {
        config.submit_url = args.submit_url;
    }
    if args.csrf_header_name.is_some() {
        config.csrf_header_name = args.csrf_header_name;
    }
    if args.csrf_field_name.is_some() {
        config.csrf_field_name = args.csrf_field_name;
    }

    // Misconfiguration is fatal here, before the terminal is touched.
    let client = Arc::new(FormClient::new(&config)?);

    // Restore the terminal on panic so the error stays readable.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        original_hook(panic_info);
    }));

    let (net_tx, mut net_rx) = tokio::sync::mpsc::channel::<NetEvent>(8);
    let mut app = App::new(client, net_tx);
    let mut terminal = ui::init_terminal()?;

    let result = run_app(&mut terminal, &mut app, &mut net_rx).await;

    // Restore first so a run error prints to a usable terminal, then
    // propagate it for a non-zero exit.
    ui::restore_terminal()?;
    result
}
