use super::enums::WaterAction;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the live humidity dashboard (default)")]
    Dashboard,

    #[command(about = "Print the humidity history, newest first")]
    History {
        #[arg(
            long,
            help = "Show at most N records",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,
    },

    #[command(about = "Show current humidity and whether watering is permitted")]
    Status,

    #[command(about = "Start or stop the watering relay")]
    Water {
        #[arg(value_enum)]
        action: WaterAction,

        #[arg(long, help = "Skip the humidity check before starting")]
        force: bool,
    },

    #[command(about = "Manage config.toml")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write config.toml in the data directory")]
    Init {
        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        records_code: Option<String>,

        #[arg(long)]
        activation_code: Option<String>,

        #[arg(long, help = "Sensor full-scale value; 0 shows raw readings")]
        scale_max: Option<u32>,
    },

    #[command(about = "Show the effective configuration (codes masked)")]
    Show,
}
