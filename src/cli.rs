use clap::Parser;
use std::path;

/// Edit a forest of labeled nodes in the terminal
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about)]
pub struct Options {
    /// TOML file with the initial forest, the built-in forest is used when absent
    #[arg(short, long)]
    pub seed: Option<path::PathBuf>,

    /// Config file, defaults to `<config dir>/arbor/config.toml`
    #[arg(short, long)]
    pub config: Option<path::PathBuf>,

    /// Log level, e.g. `info` or `debug`
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the forest and exit
    #[arg(short, long)]
    pub print: bool,
}

impl Options {
    pub fn parse_from_cli() -> Options {
        Options::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let options = Options::parse_from(["arbor", "--seed", "tree.toml", "-l", "debug", "-p"]);
        assert_eq!(options.seed, Some(path::PathBuf::from("tree.toml")));
        assert_eq!(options.log_level.as_deref(), Some("debug"));
        assert!(options.print);
        assert!(options.config.is_none());
    }

    #[test]
    fn test_defaults() {
        let options = Options::parse_from(["arbor"]);
        assert!(options.seed.is_none());
        assert!(!options.print);
    }
}
