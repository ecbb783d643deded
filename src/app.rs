//! Application state and core logic

use crate::api::{ApiError, HttpApiClient, InvoiceApi};
use crate::config::TuiConfig;
use crate::download::Downloader;
use crate::state::{
    AppState, Dealer, Form, InvoiceRequest, Vehicle, DEALER_FIELD, GENERATION_ERROR_MESSAGE,
    VALIDATION_ERROR_MESSAGE, VEHICLE_FIELD,
};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

/// Completion of a background request, applied on the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// Both lookup lists, or the first error hit while fetching them
    ReferenceDataLoaded(Result<(Vec<Dealer>, Vec<Vehicle>), ApiError>),
    /// Path the generated invoice was saved to, or why generation failed
    InvoiceSaved(Result<PathBuf>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client shared with background tasks
    api: Arc<dyn InvoiceApi>,
    /// Where generated invoices are written
    downloader: Downloader,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to `api` and saving into `downloader`'s folder
    pub fn new(api: Arc<dyn InvoiceApi>, downloader: Downloader) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            downloader,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Create an App for the backend and downloads folder named by `config`
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        let api = HttpApiClient::new(&config.resolve_api_base_url())?;
        let download_dir = config.resolve_download_dir();
        info!(
            "Using backend {} and downloads folder {}",
            api.base_url(),
            download_dir.display()
        );

        Ok(Self::new(Arc::new(api), Downloader::new(download_dir)))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the submit control accepts input
    pub fn can_submit(&self) -> bool {
        !self.state.generating
    }

    /// Fetch dealers and vehicles concurrently in the background
    pub fn start_loading(&mut self) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = tokio::try_join!(api.list_dealers(), api.list_vehicles());
            let _ = tx.send(AppEvent::ReferenceDataLoaded(result));
        });
    }

    /// Validate the form and, if complete, request the invoice in the background
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        let Some(request) = self.state.build_request() else {
            self.state.error = Some(VALIDATION_ERROR_MESSAGE.to_string());
            return;
        };

        self.state.error = None;
        self.state.status_message = None;
        self.state.generating = true;

        let api = Arc::clone(&self.api);
        let downloader = self.downloader.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = generate_and_save(api.as_ref(), &downloader, &request).await;
            let _ = tx.send(AppEvent::InvoiceSaved(result));
        });
    }

    /// Apply every completion that has arrived since the last tick
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background completion
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    /// Apply a background completion to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReferenceDataLoaded(Ok((dealers, vehicles))) => {
                info!(
                    "Loaded {} dealers and {} vehicles",
                    dealers.len(),
                    vehicles.len()
                );
                self.state.set_reference_data(dealers, vehicles);
            }
            AppEvent::ReferenceDataLoaded(Err(err)) => {
                error!("Error fetching dropdown data: {}", err);
                self.state.set_load_failed();
            }
            AppEvent::InvoiceSaved(Ok(path)) => {
                info!("Invoice saved to {}", path.display());
                self.state.status_message = Some(format!("Saved {}", path.display()));
                self.state.generating = false;
            }
            AppEvent::InvoiceSaved(Err(err)) => {
                error!("Error generating invoice: {:#}", err);
                self.state.error = Some(GENERATION_ERROR_MESSAGE.to_string());
                self.state.generating = false;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();
        let active = self.state.form.active_field();
        let on_selection = matches!(active, DEALER_FIELD | VEHICLE_FIELD);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Right if on_selection => self.state.select_next_option(),
            KeyCode::Left if on_selection => self.state.select_prev_option(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !ctrl => {
                // Selection fields ignore typed characters
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }
}

/// Request the invoice and write it into the downloads folder
async fn generate_and_save(
    api: &dyn InvoiceApi,
    downloader: &Downloader,
    request: &InvoiceRequest,
) -> Result<PathBuf> {
    let bytes = api.generate_invoice(request).await?;
    downloader.save(&bytes, Utc::now()).await
}
