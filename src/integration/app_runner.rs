use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        mail_handler::MailHandler,
        tui::{Event, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Owns the event loop: terminal events in, frames and side effects out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike>>,
        mail_handler: Arc<dyn MailHandler>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new_with_executor(initial_state, mail_handler);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_tx).map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_rx,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        loop {
            let event = self.tui.lock().await.next().await;
            let saw_visible_change = self.dispatch_event(event);

            self.run_update_cycle();

            let mut resizes = Vec::new();
            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => resizes.push((width, height)),
                }
            }
            if let Some((width, height)) = Coalescer::decide_resize(None, &resizes) {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }

            if self.runtime.state().system.should_suspend {
                {
                    let mut tui = self.tui.lock().await;
                    tui.suspend()?;
                    tui.resume()?;
                }
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.run_update_cycle();
            }

            if Coalescer::decide_render(resizes.len(), saw_visible_change) {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Queue the raw message for a terminal event.
    /// Returns whether the event may change what is on screen.
    fn dispatch_event(&mut self, event: Option<Event>) -> bool {
        let raw = match event {
            // Exhausted event source ends the session
            None | Some(Event::Quit) | Some(Event::Closed) => RawMsg::Quit,
            Some(Event::Tick) => RawMsg::Tick,
            Some(Event::Render) => RawMsg::Render,
            Some(Event::Resize(width, height)) => RawMsg::Resize(width, height),
            Some(Event::Key(key)) => RawMsg::Key(key),
            Some(Event::Paste(text)) => RawMsg::Paste(text),
            Some(Event::Error) => RawMsg::Error("Terminal event stream failed".to_string()),
            Some(Event::Init | Event::FocusGained | Event::FocusLost | Event::Mouse(_)) => {
                return false;
            }
        };

        let visible = !matches!(raw, RawMsg::Tick);
        if !raw.is_frequent() {
            log::debug!("Received {raw:?}");
        }
        self.runtime.send_raw_msg(raw);
        visible
    }

    fn run_update_cycle(&mut self) {
        match self.runtime.run_update_cycle() {
            Ok(log) => {
                for entry in log {
                    log::debug!("{entry}");
                }
            }
            Err(e) => log::error!("Runtime error: {e}"),
        }
    }

    async fn render(&self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::time::timeout;

    use super::*;
    use crate::infrastructure::{mail_handler::DeferredMailHandler, tui::test::TestTui};

    fn runner_with(events: Vec<Event>) -> (AppRunner, Arc<Mutex<TestTui>>, DeferredMailHandler) {
        let tui = Arc::new(Mutex::new(TestTui::with_events(60, 24, events).unwrap()));
        let handler = DeferredMailHandler::new();
        let runner = AppRunner::new(
            Config::bundled().unwrap(),
            Arc::<Mutex<TestTui>>::clone(&tui),
            Arc::new(handler.clone()),
        )
        .unwrap();
        (runner, tui, handler)
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[tokio::test]
    async fn test_run_exits_when_events_are_exhausted() {
        let (mut runner, _tui, _handler) = runner_with(vec![]);

        let res = timeout(Duration::from_millis(100), runner.run()).await;

        assert!(res.is_ok(), "run() should return once the event source is empty");
        assert!(runner.runtime().state().system.should_quit);
    }

    #[tokio::test]
    async fn test_ticks_do_not_render() {
        let (mut runner, tui, _handler) = runner_with(vec![Event::Tick, Event::Tick]);

        runner.run().await.unwrap();

        // Only the final quit is drawn
        assert_eq!(tui.lock().await.draw_count(), 1);
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() {
        let (mut runner, tui, _handler) = runner_with(vec![Event::Resize(40, 12)]);

        runner.run().await.unwrap();

        assert_eq!(tui.lock().await.screen().len(), 12);
    }

    #[tokio::test]
    async fn test_paste_fills_focused_field_on_screen() {
        let (mut runner, tui, _handler) = runner_with(vec![Event::Paste("Jane Doe".into())]);

        runner.run().await.unwrap();

        assert_eq!(runner.runtime().state().form.form().name, "Jane Doe");
        assert!(tui
            .lock()
            .await
            .screen()
            .iter()
            .any(|row| row.contains("Jane Doe")));
    }

    #[tokio::test]
    async fn test_suspend_is_cleared_after_resume() {
        let (mut runner, _tui, _handler) =
            runner_with(vec![key(KeyCode::Char('z'), KeyModifiers::CONTROL)]);

        runner.run().await.unwrap();

        assert!(!runner.runtime().state().system.should_suspend);
    }

    #[tokio::test]
    async fn test_submit_hands_link_to_mail_handler() {
        let (mut runner, _tui, handler) = runner_with(vec![
            Event::Paste("Jane Doe".into()),
            key(KeyCode::Tab, KeyModifiers::NONE),
            Event::Paste("jane@x.com".into()),
            key(KeyCode::Tab, KeyModifiers::NONE),
            Event::Paste("Hi there".into()),
            key(KeyCode::Char('s'), KeyModifiers::CONTROL),
        ]);

        runner.run().await.unwrap();

        let links = handler.take();
        assert_eq!(links.len(), 1);
        assert!(links[0].starts_with("mailto:a.masnavi1382@gmail.com?subject="));
        assert!(runner.runtime().state().form.form().is_empty());
        assert_eq!(
            runner.runtime().state().system.status_message.as_deref(),
            Some("Opening your mail client...")
        );
    }
}
