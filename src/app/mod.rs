pub mod logging;

use color_eyre::Result;
use std::sync::Arc;

use crate::config::Settings;
use crate::request::{ApiClient, HttpTransport, Transport};
use crate::ui::{HomePage, ThemeContext, TuiApp};

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(self) -> Result<()> {
        let plan = self.settings.refresh_plan();
        log::info!(
            "backend {} ({:?} preset, timeout {:?})",
            self.settings.api_url(),
            self.settings.preset,
            self.settings.timeout()
        );

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(self.settings.timeout())?);
        let api = ApiClient::new(self.settings.api_url(), transport);
        let theme = ThemeContext::init(Some(self.settings.state_file.clone()));

        // The draw loop blocks on terminal events; the views' fetch tasks keep
        // running on the worker threads.
        let ui_task = tokio::task::spawn_blocking(move || {
            let terminal = ratatui::init();
            let home = HomePage::new(&api, &plan);
            let app_result = TuiApp::new(home, theme).run(terminal);
            ratatui::restore();
            app_result
        });

        let result = ui_task.await?;
        log::info!("ui exited");
        result
    }
}
