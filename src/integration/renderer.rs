use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::DashboardComponent,
};

#[derive(Debug, Default)]
pub struct Renderer {
    dashboard: DashboardComponent,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn render(&self, tui: &Arc<Mutex<dyn TuiLike>>, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| self.dashboard.view(state, f);
        guard.draw(&mut draw)?;
        Ok(())
    }
}
