use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogSink};
use anyhow::Result;
use plantbender_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let sink = match command {
        Commands::Dashboard => LogSink::File(&data_dir),
        _ => LogSink::Stderr,
    };
    if let Err(err) = logging::init(cli.log_level, sink) {
        eprintln!("warning: logging disabled: {:#}", err);
    }

    let ctx = HandlerContext::new(cli.format, data_dir);

    match command {
        Commands::Config { command } => match command {
            ConfigCommand::Init {
                base_url,
                records_code,
                activation_code,
                scale_max,
            } => handlers::config::init(
                &ctx,
                handlers::config::ConfigInitArgs {
                    base_url,
                    records_code,
                    activation_code,
                    scale_max,
                },
            ),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },

        Commands::Dashboard => {
            let config = ctx.load_config()?;
            let runtime = tokio::runtime::Runtime::new()?;
            handlers::dashboard::handle(&config, runtime.handle().clone())
        }

        Commands::History { limit } => {
            let config = ctx.load_config()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::history::handle(&ctx, &config, limit))
        }

        Commands::Status => {
            let config = ctx.load_config()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::status::handle(&ctx, &config))
        }

        Commands::Water { action, force } => {
            let config = ctx.load_config()?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(handlers::water::handle(&ctx, &config, action, force))
        }
    }
}
