use std::path::{Path, PathBuf};

use chronicles::cli::Args;
use chronicles::config::{load_config, Config, ConfigError, FileConfig};

fn make_args(port: Option<u16>, root: &str) -> Args {
    Args {
        root: PathBuf::from(root),
        port,
        config: None,
        localhost: false,
    }
}

#[test]
fn defaults_when_nothing_set() {
    let args = make_args(None, "/srv/max");
    let config = Config::resolve(None, &args, None);
    assert_eq!(config.port, 3000);
    assert_eq!(config.comics_dir, PathBuf::from("/srv/max/comics"));
    assert_eq!(config.stories_dir, PathBuf::from("/srv/max/literature"));
    assert_eq!(config.artwork_dir, PathBuf::from("/srv/max/artwork"));
    assert_eq!(config.thumbnails_dir, PathBuf::from("/srv/max/thumbnails"));
    assert!(!config.localhost);
}

#[test]
fn env_port_overrides_default() {
    let args = make_args(None, ".");
    let config = Config::resolve(None, &args, Some(8080));
    assert_eq!(config.port, 8080);
}

#[test]
fn toml_port_overrides_default() {
    let file = FileConfig {
        port: Some(7777),
        ..Default::default()
    };
    let args = make_args(None, ".");
    let config = Config::resolve(Some(file), &args, None);
    assert_eq!(config.port, 7777);
}

#[test]
fn env_overrides_toml() {
    let file = FileConfig {
        port: Some(7777),
        ..Default::default()
    };
    let args = make_args(None, ".");
    let config = Config::resolve(Some(file), &args, Some(8080));
    assert_eq!(config.port, 8080);
}

#[test]
fn cli_overrides_everything() {
    let file = FileConfig {
        port: Some(7777),
        ..Default::default()
    };
    let args = make_args(Some(9000), ".");
    let config = Config::resolve(Some(file), &args, Some(8080));
    assert_eq!(config.port, 9000);
}

#[test]
fn toml_directory_overrides_win_over_root() {
    let file = FileConfig {
        stories_dir: Some(PathBuf::from("/elsewhere/tales")),
        ..Default::default()
    };
    let args = make_args(None, "/srv/max");
    let config = Config::resolve(Some(file), &args, None);
    assert_eq!(config.stories_dir, PathBuf::from("/elsewhere/tales"));
    assert_eq!(config.comics_dir, PathBuf::from("/srv/max/comics"));
}

#[test]
fn toml_parse() {
    let toml_str = "port = 9000\ncomics_dir = \"/data/comics\"\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.comics_dir, Some(PathBuf::from("/data/comics")));
}

#[test]
fn toml_unknown_fields_ignored() {
    // Future keys must not break parsing
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn load_config_missing_file_is_io_error() {
    let err = load_config(Path::new("/nonexistent/chronicles.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_config_bad_toml_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chronicles.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
