//! Mirror Drawing.
//!
//! Links eine Linie zeichnen, rechts nachzeichnen, dann die gespiegelte
//! linke Linie über die rechte legen und die Symmetrie vergleichen.

use eframe::egui;
use mirror_drawing::{render, ui, AppController, AppIntent, AppState, DrawingOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Mirror Drawing v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DrawingOptions::config_path();
        let options = DrawingOptions::load_from_file(&config_path);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(options.window_size)
                .with_title("Mirror Drawing"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Mirror Drawing",
            native_options,
            Box::new(move |_cc| Ok(Box::new(MirrorDrawingApp::new(options, config_path)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MirrorDrawingApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl MirrorDrawingApp {
    fn new(options: DrawingOptions, config_path: std::path::PathBuf) -> Self {
        let mut app = Self {
            state: AppState::with_options(options, config_path),
            controller: AppController::new(),
            input: ui::InputState::new(),
        };
        // Init → LeftReady
        app.process_events(vec![AppIntent::ResetRequested]);
        app
    }
}

impl eframe::App for MirrorDrawingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::SurfaceResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MirrorDrawingApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let background = render::to_color32(self.state.options.background_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                let mut surface = render::EguiSurface::new(&painter, rect);
                render::render_frame(&scene, &mut surface);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.input.is_pressed()
            || self.state.session.phase().is_drawing()
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
