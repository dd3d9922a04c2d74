use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::mail_handler::MailHandler,
};

/// Command executor that bridges Elm commands to the mail handler and the TUI host
#[derive(Clone)]
pub struct CmdExecutor {
    mail_handler: Arc<dyn MailHandler>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(mail_handler: Arc<dyn MailHandler>) -> Self {
        Self {
            mail_handler,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::OpenMailto { uri } => {
                // Fire-and-forget: a missing mail client is logged, never reported back
                match self.mail_handler.open(uri) {
                    Ok(()) => log::info!("Handed mailto link to mail handler"),
                    Err(e) => log::warn!("Mail handler failed to open link: {e:#}"),
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(tui_cmd.clone())?;
                } else {
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands, returning an execution log
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    error_msg
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::mail_handler::DeferredMailHandler;

    struct FailingMailHandler;

    impl MailHandler for FailingMailHandler {
        fn open(&self, _uri: &str) -> Result<()> {
            Err(eyre!("no mail client"))
        }
    }

    #[test]
    fn test_open_mailto_reaches_handler() {
        let handler = DeferredMailHandler::new();
        let executor = CmdExecutor::new(Arc::new(handler.clone()));

        executor
            .execute_command(&Cmd::OpenMailto {
                uri: "mailto:a@b.com?subject=x&body=y".to_string(),
            })
            .unwrap();

        assert_eq!(handler.take(), vec!["mailto:a@b.com?subject=x&body=y"]);
    }

    #[test]
    fn test_handler_failure_is_swallowed() {
        let executor = CmdExecutor::new(Arc::new(FailingMailHandler));

        let result = executor.execute_command(&Cmd::OpenMailto {
            uri: "mailto:a@b.com".to_string(),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_tui_command_forwarded() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(Arc::new(DeferredMailHandler::new()));
        executor.set_tui_sender(tx);

        let resize = TuiCommand::Resize {
            width: 100,
            height: 40,
        };
        executor.execute_command(&Cmd::Tui(resize.clone())).unwrap();

        assert_eq!(rx.try_recv().unwrap(), resize);
    }

    #[test]
    fn test_tui_command_without_sender_is_dropped() {
        let executor = CmdExecutor::new(Arc::new(DeferredMailHandler::new()));

        let result = executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 1,
            height: 1,
        }));

        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_commands_log() {
        let handler = DeferredMailHandler::new();
        let executor = CmdExecutor::new(Arc::new(handler.clone()));

        let log = executor.execute_commands(&[
            Cmd::OpenMailto {
                uri: "mailto:a@b.com".to_string(),
            },
            Cmd::LogInfo {
                message: "sent".to_string(),
            },
            Cmd::None,
        ]);

        assert_eq!(
            log,
            vec![
                "✓ Executed: OpenMailto",
                "✓ Executed: LogInfo",
                "✓ Executed: None"
            ]
        );
        assert_eq!(handler.take().len(), 1);
    }
}
