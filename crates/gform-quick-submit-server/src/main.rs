//! gform-quick-submit: entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use gform_quick_submit::{FormItem, UnsetValue};
use gform_quick_submit_server::cli::parse_cmd::{self, OutputFormat};
use gform_quick_submit_server::cli::submit_cmd::{self, parse_entry_arg, parse_entry_key};
use gform_quick_submit_server::{rest, ServerConfig};

#[derive(Parser)]
#[command(
    name = "gform-quick-submit",
    about = "Submit Google Form responses and discover their entry IDs",
    version,
    after_help = "The default form URL is read from GFORM_QUICK_SUBMIT_FORM_URL."
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web service (demo page, parse-form API, sample contact form)
    Serve {
        /// Listen address (host:port). Also reads GFORM_QUICK_SUBMIT_ADDR.
        #[arg(long)]
        addr: Option<String>,
        /// Default form URL for the sample contact form
        #[arg(long)]
        form_url: Option<String>,
    },
    /// List the entry IDs and labels of a public Google Form
    Parse {
        /// Form URL (https://docs.google.com/forms/d/e/.../viewform)
        url: String,
        /// Skip the viewform URL check
        #[arg(long)]
        any_url: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Submit one response
    Submit {
        /// Form URL (defaults to GFORM_QUICK_SUBMIT_FORM_URL)
        #[arg(long)]
        form_url: Option<String>,
        /// Field value as ENTRY_ID=VALUE. Can be repeated.
        #[arg(long = "entry", short, value_parser = parse_entry_arg)]
        entries: Vec<FormItem>,
        /// Entry ID to send without a value. Can be repeated.
        #[arg(long, value_parser = parse_entry_key)]
        unset: Vec<String>,
        /// How valueless entries are sent (undefined, empty, skip)
        #[arg(long, default_value = "undefined")]
        unset_as: UnsetValue,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: Shell,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    let result = match cli.command {
        Commands::Serve { addr, form_url } => rest::start(ServerConfig::resolve(addr, form_url)).await,
        Commands::Parse {
            url,
            any_url,
            format,
        } => parse_cmd::run(&url, any_url, format).await,
        Commands::Submit {
            form_url,
            entries,
            unset,
            unset_as,
        } => match submit_cmd::run(form_url, entries, unset, unset_as).await {
            Ok(resp) => {
                println!("{}", serde_json::to_string(&resp)?);
                if !resp.success {
                    std::process::exit(1);
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gform-quick-submit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
