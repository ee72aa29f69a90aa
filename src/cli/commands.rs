// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a single password
    Generate {
        /// Password length in characters (8-1024)
        #[arg(long, short, env = "PASSGEN_LENGTH", default_value_t = 16)]
        length: usize,

        /// Complexity tier: LOW, MEDIUM or HIGH
        #[arg(long, short, env = "PASSGEN_COMPLEXITY", default_value = "MEDIUM")]
        complexity: String,
    },

    /// Generate a list of passwords
    GenerateList {
        /// Number of passwords to generate (1-10000)
        #[arg(long, short = 'n', env = "PASSGEN_COUNT", default_value_t = 10)]
        count: usize,

        /// Password length in characters (8-1024)
        #[arg(long, short, env = "PASSGEN_LENGTH", default_value_t = 16)]
        length: usize,

        /// Complexity tier: LOW, MEDIUM or HIGH
        #[arg(long, short, env = "PASSGEN_COMPLEXITY", default_value = "MEDIUM")]
        complexity: String,
    },
}
