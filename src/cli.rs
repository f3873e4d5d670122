use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chronicles",
    about = "Content server for The Chronicles of Max — point it at a content directory and it serves comics, stories, and artwork",
    long_about = None,
    version = env!("GIT_VERSION"),
)]
pub struct Args {
    /// Content root containing comics/, literature/, artwork/, thumbnails/
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// HTTP port to listen on [default: $PORT or 3000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./chronicles.toml, ~/.config/chronicles/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,
}
