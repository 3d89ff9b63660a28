use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  filetree                          # ./ -> filetree.html
  filetree src tree.html            # render src/ into tree.html
  filetree -I target -I .log .      # extra substring ignore rules
  filetree --ascii . /tmp/out.html  # also print the tree to stdout";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "filetree",
    version,
    about = "Render a directory tree as a collapsible HTML page",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// HTML file to write
    #[arg(default_value = "filetree.html")]
    pub output: PathBuf,

    /// Extra ignore rules, matched as substrings of the path (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Name of the rules file looked up in the input directory
    #[arg(long = "ignore-file", default_value = ".gitignore")]
    pub ignore_file: String,

    /// Page title and heading
    #[arg(long = "title", default_value = "File Tree")]
    pub title: String,

    /// List symbolic links as files instead of following them
    #[arg(short = 'P', long = "no-follow-symlinks")]
    pub no_follow_symlinks: bool,

    /// Also print the ASCII tree to stdout
    #[arg(long = "ascii")]
    pub print_ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long = "completions", value_name = "SHELL", conflicts_with = "man")]
    pub completions: Option<Shell>,

    /// Print a roff man page and exit
    #[arg(long = "man")]
    pub man: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
