#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::{egui, App, Frame};
use pellet_savings::{
    app, config,
    cost_fetch::{CostClient, FetchError},
    fuel::CostTable,
    logging,
    report::{self, ResultView, FETCH_FAILED_NOTICE},
    session::{clamp_usage, CostState, Session},
};

type CostReply = Result<CostTable, FetchError>;

fn main() -> Result<(), eframe::Error> {
    let app_cfg = config::load_or_default().unwrap_or_default();
    logging::init(&app_cfg.log_filter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pellet Savings Calculator",
        options,
        Box::new(move |cc| Box::new(GuiApp::new(&app_cfg, &cc.egui_ctx))),
    )
}

/// 백그라운드 스레드에서 단가를 한 번 조회하고 결과를 채널로 보낸다.
/// 카탈로그 반영은 UI 스레드가 수신 후 직접 한다.
fn spawn_cost_fetch(cfg: &config::Config, ctx: egui::Context) -> Receiver<CostReply> {
    let (tx, rx) = mpsc::channel();
    let client = CostClient::from_config(cfg);
    thread::spawn(move || {
        let reply = client.and_then(|client| {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(client.fetch_costs())
        });
        // 창이 먼저 닫혔으면 수신자가 없다.
        let _ = tx.send(reply);
        ctx.request_repaint();
    });
    rx
}

struct GuiApp {
    session: Session,
    fuel_choice: Option<&'static str>,
    usage_input: String,
    view: ResultView,
    notice: Option<String>,
    cost_rx: Option<Receiver<CostReply>>,
}

impl GuiApp {
    fn new(cfg: &config::Config, ctx: &egui::Context) -> Self {
        let mut session = Session::new(cfg.currency_label.clone());
        let cost_rx = if cfg.fetch_on_startup {
            Some(spawn_cost_fetch(cfg, ctx.clone()))
        } else {
            session.mark_costs_unavailable();
            None
        };
        Self {
            session,
            fuel_choice: None,
            usage_input: String::new(),
            view: ResultView::reset(),
            notice: None,
            cost_rx,
        }
    }

    fn poll_costs(&mut self) {
        let Some(rx) = &self.cost_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(reply) => {
                self.cost_rx = None;
                self.notice = app::settle_fetch(&mut self.session, reply);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.cost_rx = None;
                self.session.mark_costs_unavailable();
                self.notice = Some(FETCH_FAILED_NOTICE.to_string());
            }
        }
    }

    fn calculate(&mut self) {
        let fuel_id = self.fuel_choice.unwrap_or("");
        let usage = self.usage_input.trim().parse::<f64>().unwrap_or(f64::NAN);
        match self.session.evaluate(fuel_id, usage) {
            Ok(view) => self.view = view,
            Err(err) => {
                tracing::warn!(error = %err, "invalid calculation input");
                self.view = ResultView::reset();
                self.notice = Some(report::validation_notice(&err));
            }
        }
    }

    fn input_panel(&mut self, ui: &mut egui::Ui) {
        let selected = self
            .fuel_choice
            .and_then(|id| self.session.fuels().lookup(id))
            .map(|p| p.name)
            .unwrap_or("Select fuel");
        egui::Grid::new("inputs").num_columns(2).show(ui, |ui| {
            ui.label("Current fuel");
            egui::ComboBox::from_id_source("fuel")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for profile in self.session.fuels().profiles() {
                        ui.selectable_value(&mut self.fuel_choice, Some(profile.id), profile.name);
                    }
                });
            ui.end_row();

            ui.label("Usage per hour");
            let response = ui.text_edit_singleline(&mut self.usage_input);
            if response.changed() {
                if let Ok(value) = self.usage_input.trim().parse::<f64>() {
                    if clamp_usage(value) != value {
                        self.usage_input = "0".to_string();
                    }
                }
            }
            ui.end_row();
        });
        if ui.button("Calculate").clicked() {
            self.calculate();
        }
    }

    fn result_panel(&self, ui: &mut egui::Ui) {
        egui::Grid::new("results")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in self.view.rows() {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        let text = match self.session.cost_state() {
            CostState::Pending => "Fetching live fuel costs...".to_string(),
            CostState::Loaded { updated } => format!("Live costs loaded ({updated} fuels)"),
            CostState::Unavailable => "Live costs unavailable; savings use current costs".to_string(),
        };
        ui.small(text);
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_costs();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pellet Savings Calculator");
            self.status_line(ui);
            ui.separator();
            self.input_panel(ui);
            ui.separator();
            self.result_panel(ui);
        });
        self.notice_window(ctx);
    }
}
