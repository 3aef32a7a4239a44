use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use ytplaylists::{Res, cli, config, error, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with YouTube Music
    Auth,

    /// Report duplicate, long, unliked, unavailable and low quality tracks
    Problems(ProblemsOptions),

    /// Sort a playlist by title, archiving the previous order
    Sort(SortOptions),

    /// Copy a playlist, replacing explicit tracks with clean versions
    Clean(CleanOptions),

    /// Show the tracks only one of two playlists contains
    Compare(CompareOptions),

    /// Rename a playlist, replacing any playlist with the new title
    Rename(RenameOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ProblemsOptions {
    playlist_title: String,
    /// Tracks longer than this are reported
    max_minutes: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    target_playlist_title: String,
    archive_playlist_title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CleanOptions {
    explicit_playlist_title: String,
    clean_playlist_title: String,
    archive_playlist_title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompareOptions {
    first_playlist_title: String,
    second_playlist_title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RenameOptions {
    from_playlist_title: String,
    to_playlist_title: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

async fn run(command: Command, config: config::Config) -> Res<()> {
    if let Command::Auth = command {
        return cli::auth(&config).await;
    }

    let api = cli::connect(config).await?;
    match command {
        Command::Problems(opt) => cli::problems(&api, &opt.playlist_title, opt.max_minutes).await,
        Command::Sort(opt) => {
            cli::sort(&api, &opt.target_playlist_title, &opt.archive_playlist_title).await
        }
        Command::Clean(opt) => {
            cli::clean(
                &api,
                &opt.explicit_playlist_title,
                &opt.clean_playlist_title,
                &opt.archive_playlist_title,
            )
            .await
        }
        Command::Compare(opt) => {
            cli::compare(&api, &opt.first_playlist_title, &opt.second_playlist_title).await
        }
        Command::Rename(opt) => {
            cli::rename(&api, &opt.from_playlist_title, &opt.to_playlist_title).await
        }
        Command::Auth | Command::Completions(_) => Ok(()),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("No .env loaded ({}), using the process environment.", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    if let Err(e) = run(cli.command, config).await {
        error!("{}", e);
    }
}
