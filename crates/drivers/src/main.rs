mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use config::AppConfig;
use showcase_adapters::{
    present_artist_row, present_intro_images, present_navigation, ImageFileProbe,
    MonotonicClock, RngSource, ShowcaseManifest, ThreadedAssetLoader, WalkdirArtistDirectory,
};
use showcase_application::{resolve_roster, ResolveRosterCommand, ShowcaseService};
use showcase_domain::{Gallery, SceneModel};
use ui::SiteCopy;

#[derive(Debug, Parser)]
#[command(name = "showcase", version, about = "Gallery showcase viewer")]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding `images/` and `showcase.json`.
    #[arg(long, global = true)]
    asset_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the viewer window (default).
    Ui,
    /// Resolve intro and artist images once and print the result.
    Assets,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = resolve_config(&cli)?;
    let (copy, gallery) = load_site(&config)?;

    let mut service = build_showcase_service(&config, gallery);
    service
        .start()
        .map_err(|error| CommandError::Runtime(format!("failed to start discovery: {error}")))?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => ui::launch_window(&mut service, &copy, &config).map_err(CommandError::Runtime),
        Command::Assets => {
            service
                .finish_discovery()
                .map_err(|error| CommandError::Runtime(format!("discovery failed: {error}")))?;
            for line in present_intro_images(service.rotation()) {
                println!("{line}");
            }
            if service.gallery().is_empty() {
                println!("no artist sections");
            }
            for section in service.gallery().sections() {
                println!("{}", present_artist_row(section));
            }
            println!(
                "{}",
                present_navigation(service.navigation(), service.gallery().len())
            );
            Ok(())
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, CommandError> {
    let mut config = AppConfig::load(cli.config.as_deref()).map_err(CommandError::Usage)?;
    if let Some(root) = &cli.asset_root {
        config.asset_root = root.clone();
    }
    Ok(config)
}

fn load_site(config: &AppConfig) -> Result<(SiteCopy, Gallery), CommandError> {
    let manifest_path = config.manifest_path();
    let manifest = ShowcaseManifest::load(&manifest_path)
        .map_err(|error| CommandError::Usage(format!("failed to load manifest: {error}")))?
        .unwrap_or_default();
    let declared = manifest
        .profiles()
        .map_err(|error| CommandError::Usage(format!("invalid manifest roster: {error}")))?;

    let gallery = resolve_roster(
        ResolveRosterCommand {
            asset_root: config.asset_root.clone(),
            declared,
        },
        &WalkdirArtistDirectory,
    )
    .map_err(|error| CommandError::Runtime(format!("failed to build gallery: {error}")))?;
    tracing::info!(
        sections = gallery.len(),
        root = %config.asset_root.display(),
        "gallery ready"
    );

    let copy = SiteCopy {
        title: manifest.title,
        intro_text: manifest.intro_text,
    };
    Ok((copy, gallery))
}

fn build_showcase_service(config: &AppConfig, gallery: Gallery) -> ShowcaseService<SceneModel> {
    let scene = SceneModel::new(gallery.len());
    ShowcaseService::new(
        config.settings(),
        gallery,
        scene,
        Box::new(ThreadedAssetLoader::new(Arc::new(ImageFileProbe))),
        Box::new(RngSource::thread()),
        Box::new(MonotonicClock::default()),
    )
}
