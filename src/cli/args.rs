//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::Sex;

/// Ahnentafel - genealogical name derivation and pedigree numbering
#[derive(Parser, Debug)]
#[command(name = "ahn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive a child's name fields from its parents' names
    #[command(
        name = "child",
        long_about = "Derive a child's name fields from its parents' names.\n\n\
            Applies the selected surname tradition to the parents' GEDCOM names \
            and prints the derived NAME/SURN (and related) fields. The child's \
            given name is left for you to fill in.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Spanish double surnames
    ahn child --father 'Gabriel /Garcia/ /Iglesias/' \\
              --mother 'Maria /Ruiz/ /Lorca/' \\
              --sex m --tradition spanish

    # Use the configured default tradition
    ahn child --father 'Jan /Kowalski/' --mother 'Anna /Nowak/' --sex f"
    )]
    Child {
        /// The father's GEDCOM name
        #[arg(long, value_name = "NAME", default_value = "")]
        father: String,

        /// The mother's GEDCOM name
        #[arg(long, value_name = "NAME", default_value = "")]
        mother: String,

        /// The child's sex
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Surname tradition (overrides configuration)
        #[arg(long, value_name = "TAG")]
        tradition: Option<String>,
    },

    /// Derive a parent's name fields from a child's name
    #[command(name = "parent")]
    Parent {
        /// The child's GEDCOM name
        #[arg(long, value_name = "NAME", default_value = "")]
        child: String,

        /// The parent's sex
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Surname tradition (overrides configuration)
        #[arg(long, value_name = "TAG")]
        tradition: Option<String>,
    },

    /// Derive a spouse's name fields from the other spouse's name
    #[command(name = "spouse")]
    Spouse {
        /// The other spouse's GEDCOM name
        #[arg(long, value_name = "NAME", default_value = "")]
        partner: String,

        /// The new spouse's sex
        #[arg(long, value_enum)]
        sex: SexArg,

        /// Surname tradition (overrides configuration)
        #[arg(long, value_name = "TAG")]
        tradition: Option<String>,
    },

    /// Sosa-Stradonitz ancestor numbering
    #[command(
        name = "sosa",
        long_about = "Sosa-Stradonitz ancestor numbering.\n\n\
            The root individual is 1; the father of N is 2N and the mother is \
            2N + 1. Subcommands compute relatives' numbers, the father/mother \
            walk from the root, and the localized kinship term.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Who is ancestor 6?
    ahn sosa name 6          # maternal grandfather
    ahn sosa path 6          # mother father

    # Chart layout arithmetic
    ahn sosa father 3        # 6
    ahn sosa mother 3        # 7
    ahn sosa generation 6    # 3"
    )]
    Sosa {
        #[command(subcommand)]
        action: SosaAction,
    },

    /// d'Aboville descendant numbering
    #[command(name = "daboville")]
    Daboville {
        #[command(subcommand)]
        action: DabovilleAction,
    },

    /// List surname traditions and their capabilities
    #[command(name = "traditions")]
    Traditions,

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    ahn completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    ahn completion zsh >> ~/.zshrc

    # Fish
    ahn completion fish > ~/.config/fish/completions/ahn.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sosa numbering subcommands.
#[derive(Subcommand, Debug)]
pub enum SosaAction {
    /// The father's number (2N)
    Father {
        /// Sosa number of the individual
        number: u64,
    },
    /// The mother's number (2N + 1)
    Mother {
        /// Sosa number of the individual
        number: u64,
    },
    /// The number of the child this ancestor belongs to (N/2)
    Child {
        /// Sosa number of the ancestor
        number: u64,
    },
    /// The father/mother walk from the root to this ancestor
    Path {
        /// Sosa number of the ancestor
        number: u64,
    },
    /// The localized kinship term for this ancestor
    Name {
        /// Sosa number of the ancestor
        number: u64,

        /// Locale for the kinship term (overrides configuration)
        #[arg(long, value_name = "TAG")]
        locale: Option<String>,
    },
    /// The generation depth (root = 1)
    Generation {
        /// Sosa number of the individual
        number: u64,
    },
}

/// d'Aboville numbering subcommands.
#[derive(Subcommand, Debug)]
pub enum DabovilleAction {
    /// The ancestor's path (last segment stripped)
    Parent {
        /// d'Aboville path, e.g. "1.2.1."
        path: String,
    },
    /// Extend the path with a child at a birth-order position
    Child {
        /// d'Aboville path, e.g. "1.2."
        path: String,

        /// Birth-order position of the child (starting at 1)
        position: u32,
    },
    /// The generation depth (number of segments)
    Generation {
        /// d'Aboville path, e.g. "1.2.1."
        path: String,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Key to read (tradition, locale)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Key to write (tradition, locale)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Sex argument, as GEDCOM letters.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum SexArg {
    /// Male
    #[value(name = "m", alias = "male")]
    Male,
    /// Female
    #[value(name = "f", alias = "female")]
    Female,
    /// Unknown
    #[value(name = "u", alias = "unknown")]
    Unknown,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
            SexArg::Unknown => Sex::Unknown,
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn sex_arg_converts() {
        assert_eq!(Sex::from(SexArg::Male), Sex::Male);
        assert_eq!(Sex::from(SexArg::Female), Sex::Female);
        assert_eq!(Sex::from(SexArg::Unknown), Sex::Unknown);
    }
}
