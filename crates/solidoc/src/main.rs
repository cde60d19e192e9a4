use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use solidoc::{
    Settings,
    config::LoggingSettings,
    docs::{load_template, write_docs},
    project::load_contracts,
};

#[derive(Parser, Debug)]
#[command(name = "solidoc", version, about)]
struct Args {
    /// Root of the project whose build artifacts are documented.
    project_root: PathBuf,

    /// Directory the markdown pages are written to.
    output: PathBuf,

    /// Config file; defaults to `solidoc.toml` in the project root.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Artifact directory, overriding `output.buildDir` from the config.
    #[arg(long)]
    build_dir: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(
    args: &Args,
    logging: &LoggingSettings,
) {
    let directive = logging.filter_directive(args.verbose);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(&directive));

    let file_layer = logging.log_file(args.log_file.as_deref(), &args.project_root).map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("solidoc.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(&directive))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

async fn run(
    args: &Args,
    settings: Settings,
) -> solidoc::Result<usize> {
    if !tokio::fs::metadata(&args.project_root).await.is_ok_and(|meta| meta.is_dir()) {
        return Err(solidoc::Error::MissingDirectory(args.project_root.clone()));
    }

    let build_dir = match &args.build_dir {
        Some(dir) => dir.clone(),
        None => settings.build_dir(&args.project_root),
    };
    let template_path = settings.output.template.as_ref().map(|path| args.project_root.join(path));

    let contracts = load_contracts(&build_dir).await?;
    let template = load_template(template_path.as_deref()).await?;
    write_docs(&contracts, &settings, &template, &args.output).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is configured by the settings file, so it is installed only
    // after loading; load diagnostics are reported once it is up.
    let loaded = Settings::load(&args.project_root, args.config.as_deref()).await;
    let logging = loaded.as_ref().map(|loaded| loaded.settings.logging.clone()).unwrap_or_default();
    init_logging(&args, &logging);

    info!("Starting solidoc v{}", env!("CARGO_PKG_VERSION"));

    let settings = match loaded {
        Ok(loaded) => {
            loaded.log_diagnostics();
            loaded.settings
        },
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        },
    };

    match run(&args, settings).await {
        Ok(pages) => {
            info!("Documentation generated ({pages} files) in {}", args.output.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
