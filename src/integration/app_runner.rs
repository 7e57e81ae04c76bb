use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{config::Config, tui::Event, tui::TuiLike},
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
    trace_dbg,
};

/// Drives the dashboard: terminal events in, state updates, commands and
/// frames out
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn TuiLike>>,
    size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn TuiLike>>) -> Self {
        Self {
            runtime: Runtime::new(AppState::new_with_config(config)),
            renderer: Renderer::new(),
            tui,
            size: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Runs until a quit is requested or the event source is exhausted
    pub async fn run(&mut self) -> Result<()> {
        let area = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            let area = trace_dbg!(tui.size()?);
            area
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));

        let result = self.event_loop().await;

        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        // First frame before any input arrives
        let commands = self.runtime.process_all_messages();
        let render_requests = self.execute_commands(commands).await?;
        if Coalescer::decide_render(render_requests, true) {
            self.render().await?;
        }

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                let event = tui.next().await;
                event
            };
            let Some(event) = event else {
                log::info!("event source closed");
                break;
            };

            let saw_tui_render = self.dispatch(event);
            let commands = self.runtime.process_all_messages();
            let render_requests = self.execute_commands(commands).await?;

            if self.runtime.state().system.should_quit {
                break;
            }
            if Coalescer::decide_render(render_requests, saw_tui_render) {
                self.render().await?;
            }
        }

        Ok(())
    }

    /// Queues the raw message for `event`; returns whether it was a render tick
    fn dispatch(&mut self, event: Event) -> bool {
        let raw = match event {
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Error => RawMsg::Error("terminal event stream failed".into()),
            Event::Tick => RawMsg::Tick,
            Event::Render => return true,
            Event::Resize(width, height) => RawMsg::Resize(width, height),
            Event::Key(key) => RawMsg::Key(key),
            Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            Event::Init | Event::FocusGained | Event::FocusLost => return false,
        };
        self.runtime.send_raw_msg(raw);
        false
    }

    /// Runs commands until none are left; returns the number of render requests
    async fn execute_commands(&mut self, mut commands: Vec<Cmd>) -> Result<usize> {
        let mut render_requests = 0;
        let mut resizes = Vec::new();

        while !commands.is_empty() {
            for cmd in commands.drain(..) {
                match cmd {
                    Cmd::RequestRender => render_requests += 1,
                    Cmd::Tui(TuiCommand::Resize { width, height }) => {
                        resizes.push((width, height))
                    }
                    Cmd::Tui(TuiCommand::Suspend) => {
                        let mut tui = self.tui.lock().await;
                        tui.suspend()?;
                        tui.resume()?;
                        drop(tui);
                        self.runtime.send_raw_msg(RawMsg::Resume);
                    }
                }
            }
            commands = self.runtime.process_all_messages();
        }

        if let Some((width, height)) = Coalescer::decide_resize(self.size, &resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.size = Some((width, height));
            render_requests += 1;
        }

        Ok(render_requests)
    }

    async fn render(&self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
