use std::{
    process::{Command, Stdio},
    sync::{Arc, Mutex},
    thread,
};

use color_eyre::eyre::{eyre, Result, WrapErr};

/// Something that can take a `mailto:` URI off our hands.
///
/// Implementations must not wait for the mail client: once `open` returns,
/// the hand-off is considered complete.
pub trait MailHandler: Send + Sync {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Launches the platform's URL opener, which forwards to the registered mail client
#[derive(Debug, Clone)]
pub struct SystemMailHandler {
    program: String,
    args: Vec<String>,
}

impl SystemMailHandler {
    /// Use an explicit launcher command, e.g. `["xdg-open"]`.
    /// The URI is appended as the last argument.
    pub fn new(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| eyre!("mail handler command is empty"))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn platform_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("rundll32", &["url.dll,FileProtocolHandler"])
        } else {
            ("xdg-open", &[])
        };
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl MailHandler for SystemMailHandler {
    fn open(&self, uri: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .wrap_err_with(|| format!("failed to launch {}", self.program))?;

        // Reap the launcher in the background so it does not linger as a zombie
        thread::spawn(move || {
            if let Err(e) = child.wait() {
                log::warn!("Mail handler did not exit cleanly: {e}");
            }
        });
        Ok(())
    }
}

/// Keeps composed links in memory instead of launching anything.
///
/// Clones share the same buffer, so the host can hand one clone to the
/// executor and drain the other after the UI exits.
#[derive(Debug, Clone, Default)]
pub struct DeferredMailHandler {
    links: Arc<Mutex<Vec<String>>>,
}

impl DeferredMailHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain collected links in submission order
    pub fn take(&self) -> Vec<String> {
        match self.links.lock() {
            Ok(mut links) => std::mem::take(&mut *links),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl MailHandler for DeferredMailHandler {
    fn open(&self, uri: &str) -> Result<()> {
        self.links
            .lock()
            .map_err(|_| eyre!("deferred mail handler lock poisoned"))?
            .push(uri.to_string());
        Ok(())
    }
}
