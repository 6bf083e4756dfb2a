// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Two flags; anything else on the command line is dropped before parsing.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "dockip")]
#[command(about = "Show the public IP address and location of your containers")]
#[command(disable_version_flag = true, disable_help_flag = true, args_override_self = true)]
pub struct Cli {
    /// Print the version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// List published port mappings of all containers
    #[arg(short = 'p', long)]
    pub ports: bool,
}

impl Cli {
    /// Parse the process arguments, ignoring anything that is not one of our flags.
    pub fn from_env_args() -> Self {
        Self::from_tokens(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    /// Parse `args` (program name first) wherever unknown tokens appear.
    pub fn from_tokens<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "dockip".to_string());
        let known = std::iter::once(program).chain(args.filter(|a| is_known_flag(a)));
        // Only recognized flags remain, so parsing cannot fail on input.
        Self::try_parse_from(known).unwrap_or_default()
    }
}

/// `--version`, `--ports`, or a short bundle made only of `v` and `p`.
fn is_known_flag(arg: &str) -> bool {
    match arg {
        "--version" | "--ports" => true,
        _ => match arg.strip_prefix('-') {
            Some(shorts) if !shorts.is_empty() && !shorts.starts_with('-') => {
                shorts.chars().all(|c| c == 'v' || c == 'p')
            }
            _ => false,
        },
    }
}
