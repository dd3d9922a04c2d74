use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use contactui::{
    infrastructure::{
        cli::Cli,
        config::Config,
        mail_handler::{DeferredMailHandler, MailHandler, SystemMailHandler},
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let deferred = args.print.then(DeferredMailHandler::new);
    let mail_handler: Arc<dyn MailHandler> = match &deferred {
        Some(handler) => Arc::new(handler.clone()),
        None if config.mail_handler.is_empty() => Arc::new(SystemMailHandler::platform_default()),
        None => Arc::new(SystemMailHandler::new(&config.mail_handler)?),
    };

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(config, tui, mail_handler)?;
    runner.run().await?;

    if let Some(handler) = deferred {
        for link in handler.take() {
            println!("{link}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
