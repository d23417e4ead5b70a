//! Main egui application — wires the controller, gateway, and storage
//! together and drives the panels.

use std::cell::RefCell;
use std::rc::Rc;

use docchat_core::controller::SessionController;
use docchat_core::event_bus::EventBus;
use docchat_core::store::SessionStore;
use docchat_platform::api::BackendGateway;
use docchat_platform::storage::detect_storage;
use docchat_types::config::{ApiEndpoint, ChatConfig};
use docchat_types::document::DocumentFile;
use docchat_ui::panels::{chat_panel, toolbar_panel, ToolbarAction};
use docchat_ui::state::UiState;
use docchat_ui::theme;

pub struct DocChatApp {
    ui_state: UiState,
    config: ChatConfig,
    event_bus: EventBus,
    /// Session state machine. Shared with in-flight dispatch futures;
    /// `dispatch` guarantees at most one borrows it across an await.
    controller: Rc<RefCell<SessionController>>,
    gateway: Rc<BackendGateway>,
    store: Rc<SessionStore>,
    first_frame: bool,
}

impl DocChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ChatConfig::default();

        let event_bus = EventBus::new();
        let controller = Rc::new(RefCell::new(SessionController::new(event_bus.clone())));
        let gateway = Rc::new(BackendGateway::new(config.backend.clone()));
        let store = Rc::new(SessionStore::new(detect_storage(&config.storage.backend)));
        log::info!(
            "docchat app initialized (backend: {}, storage: {})",
            config.backend.base_url(),
            store.backend_name()
        );

        // Rebuild the persisted session before the first query can happen
        {
            let controller = controller.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.borrow_mut().restore(&store).await;
            });
        }

        Self {
            ui_state: UiState::new(),
            config,
            event_bus,
            controller,
            gateway,
            store,
            first_frame: true,
        }
    }

    fn rebuild_gateway(&mut self) {
        self.gateway = Rc::new(BackendGateway::new(self.config.backend.clone()));
        log::info!("Backend switched to {}", self.config.backend.base_url());
    }

    /// At most one gateway request runs at a time. A dispatch while one
    /// is in flight is dropped here, before the controller is borrowed,
    /// because the borrow is held across the await inside the future.
    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        if self.ui_state.is_busy() {
            log::warn!("Query dropped: a request is already in flight");
            return;
        }
        let controller = self.controller.clone();
        let gateway = self.gateway.clone();
        let store = self.store.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller
                .borrow_mut()
                .send(&text, gateway.as_ref(), &store)
                .await;
            ctx.request_repaint();
        });
    }

    fn dispatch_upload(&self, files: Vec<DocumentFile>, ctx: &egui::Context) {
        if self.ui_state.is_busy() {
            log::warn!("Upload dropped: a request is already in flight");
            return;
        }
        let controller = self.controller.clone();
        let gateway = self.gateway.clone();
        let store = self.store.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller
                .borrow_mut()
                .upload(&files, gateway.as_ref(), &store)
                .await;
            ctx.request_repaint();
        });
    }

    fn dispatch_clear(&self, ctx: &egui::Context) {
        if self.ui_state.is_busy() {
            return;
        }
        let controller = self.controller.clone();
        let store = self.store.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.borrow_mut().clear(&store).await;
            ctx.request_repaint();
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let files: Vec<DocumentFile> = dropped
            .iter()
            .filter_map(|f| {
                f.bytes
                    .as_ref()
                    .map(|bytes| DocumentFile::new(f.name.clone(), bytes.to_vec()))
            })
            .collect();

        if files.is_empty() {
            log::warn!("Dropped files carried no byte data, ignoring");
            return;
        }

        log::info!("Received {} dropped file(s)", files.len());
        self.dispatch_upload(files, ctx);
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("📄 docchat")
                        .color(theme::TEXT_PRIMARY)
                        .size(18.0),
                );

                ui.with_layout(
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        let mut selected = self.config.backend.endpoint.clone();
                        egui::ComboBox::from_id_salt("endpoint_select")
                            .selected_text(selected.label())
                            .show_ui(ui, |ui| {
                                for endpoint in ApiEndpoint::all() {
                                    ui.selectable_value(
                                        &mut selected,
                                        endpoint.clone(),
                                        endpoint.label(),
                                    );
                                }
                            });
                        if selected != self.config.backend.endpoint {
                            self.config.backend.endpoint = selected;
                            self.rebuild_gateway();
                        }

                        ui.label(
                            egui::RichText::new(self.config.backend.base_url())
                                .color(theme::TEXT_SECONDARY)
                                .small(),
                        );
                    },
                );
            });
        });
    }
}

impl eframe::App for DocChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Project controller events into the view state
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // Keep painting while a request is in flight so its completion
        // is picked up promptly
        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        self.handle_dropped_files(ctx);

        self.top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            match toolbar_panel(ui, &self.ui_state) {
                ToolbarAction::ClearChat => self.dispatch_clear(ctx),
                ToolbarAction::None => {}
            }

            ui.add_space(6.0);

            if let Some(text) = chat_panel(ui, &mut self.ui_state) {
                self.dispatch_send(text, ctx);
            }
        });
    }
}
