use crossbeam_channel::{Receiver, Sender, unbounded};
use devconvert::converter::geoip;
use devconvert::{Conversion, convert, convert_from_path};
use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use rfd::FileDialog;
use std::time::Duration;

#[derive(Debug, Default, PartialEq)]
enum OutputPanelMode {
    #[default]
    Source,
    Preview,
}

pub struct UIFramework {
    show_help_panel: bool,

    selected: Conversion,
    input_content: String,
    output_content: String,
    error_message: Option<String>,
    output_panel_mode: OutputPanelMode,
    markdown_cache: CommonMarkCache,

    // geolocation lookups run off the frame loop
    geo_tx: Sender<Result<String, String>>,
    geo_rx: Receiver<Result<String, String>>,
    geo_pending: bool,
}

impl Default for UIFramework {
    fn default() -> Self {
        let (geo_tx, geo_rx) = unbounded();
        Self {
            show_help_panel: false,
            selected: Conversion::HtmlToMarkdown,
            input_content: String::new(),
            output_content: String::new(),
            error_message: None,
            output_panel_mode: OutputPanelMode::default(),
            markdown_cache: CommonMarkCache::default(),
            geo_tx,
            geo_rx,
            geo_pending: false,
        }
    }
}

impl eframe::App for UIFramework {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_geo_lookup();
        if self.geo_pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
                    ui.menu_button("file", |ui_file_menu| {
                        if ui_file_menu.button("Open input...").clicked() {
                            self.open_input_dialog();
                            ui_file_menu.close_menu();
                        }
                        if ui_file_menu.button("Save output...").clicked() {
                            self.save_output_content();
                            ui_file_menu.close_menu();
                        }
                    });

                    if ui.button("help").clicked() {
                        self.show_help_panel = !self.show_help_panel;
                    }
                }); //left_to_right end
            }); //horizontal end
        }); //topbottom end

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::SidePanel::left("converter_list")
                .exact_width(200.0)
                .show_inside(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(10.0);
                        ui.heading("converters");
                        ui.separator();

                        egui::ScrollArea::vertical().show(ui, |ui| {
                            for conversion in Conversion::ALL {
                                let response = ui.selectable_value(
                                    &mut self.selected,
                                    conversion,
                                    conversion.label(),
                                );
                                if response.clicked() {
                                    self.output_content.clear();
                                    self.error_message = None;
                                }
                            }
                        }); // end scroll area
                    }); //end vertical_centered
                }); //end left side panel

            egui::CentralPanel::default().show_inside(ui, |ui| {
                ui.vertical(|ui| {
                    ui.heading(self.selected.label());
                    ui.add_space(5.0);

                    ui.horizontal(|ui| {
                        if ui.button(self.convert_button_label()).clicked() {
                            self.run_conversion();
                        }
                        if self.selected.produces_markdown() {
                            ui.add_space(10.0);
                            if ui
                                .button(match self.output_panel_mode {
                                    OutputPanelMode::Source => "Change to Preview Mode",
                                    OutputPanelMode::Preview => "Change to Source Mode",
                                })
                                .clicked()
                            {
                                self.output_panel_mode = match self.output_panel_mode {
                                    OutputPanelMode::Source => OutputPanelMode::Preview,
                                    OutputPanelMode::Preview => OutputPanelMode::Source,
                                };
                            }
                        }
                    }); //end horizontal
                    ui.separator();

                    if self.selected != Conversion::ImageToDataUri {
                        ui.label("Input");
                        ui.add(
                            egui::TextEdit::multiline(&mut self.input_content)
                                .code_editor()
                                .desired_width(f32::INFINITY)
                                .desired_rows(8),
                        );
                        ui.add_space(10.0);
                    }

                    if let Some(error) = &self.error_message {
                        ui.colored_label(egui::Color32::RED, error);
                        ui.add_space(5.0);
                    }
                    if self.geo_pending {
                        ui.label("Looking up address...");
                    }

                    ui.label("Output");
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        match self.output_panel_mode {
                            OutputPanelMode::Preview if self.selected.produces_markdown() => {
                                let viewer = CommonMarkViewer::new("output_preview");
                                viewer.show(ui, &mut self.markdown_cache, &self.output_content);
                            }
                            _ => {
                                ui.add(
                                    egui::TextEdit::multiline(&mut self.output_content)
                                        .code_editor()
                                        .desired_width(f32::INFINITY)
                                        .desired_rows(14),
                                );
                            }
                        }
                    }); //end scrollarea
                }); //end vertical
            }); //end central panel
        }); //end central panel

        if self.show_help_panel {
            egui::Window::new("help")
                .open(&mut self.show_help_panel)
                .show(ctx, |ui| {
                    ui.label("Pick a converter, paste or open your input, then press Convert.");
                    ui.label("Image -> data URI reads its input from a file dialog.");
                    ui.add_space(10.0);
                });
        }
    }
}

pub fn create_frame() -> eframe::Result<()> {
    let app_name = "devconvert";

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([300.0, 200.0])
            .with_title(app_name),
        vsync: true,
        multisampling: 4,
        ..Default::default()
    };
    eframe::run_native(
        app_name,
        native_options,
        Box::new(|cc| Box::new(UIFramework::new(cc))),
    )
}

impl UIFramework {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn convert_button_label(&self) -> &'static str {
        match self.selected {
            Conversion::ImageToDataUri => "Pick image...",
            Conversion::GeoIp => "Look up",
            _ => "Convert",
        }
    }

    fn run_conversion(&mut self) {
        self.error_message = None;
        match self.selected {
            Conversion::ImageToDataUri => self.convert_picked_image(),
            Conversion::GeoIp => self.spawn_geo_lookup(),
            kind => match convert(kind, &self.input_content) {
                Ok(output) => self.output_content = output,
                Err(err) => self.error_message = Some(err.to_string()),
            },
        }
    }

    fn convert_picked_image(&mut self) {
        let result = FileDialog::new()
            .set_title("Select an image")
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file(); // This call is blocking

        if let Some(path) = result {
            match path.to_str() {
                Some(path) => match convert_from_path(Conversion::ImageToDataUri, path) {
                    Ok(output) => self.output_content = output,
                    Err(err) => self.error_message = Some(err.to_string()),
                },
                None => self.error_message = Some(format!("invalid file path: {}", path.display())),
            }
        }
    }

    fn spawn_geo_lookup(&mut self) {
        if self.geo_pending {
            return;
        }
        let ip = self.input_content.trim().to_string();
        let tx = self.geo_tx.clone();
        self.geo_pending = true;
        std::thread::spawn(move || {
            let result = geoip::lookup_text(&ip).map_err(|err| err.to_string());
            let _ = tx.send(result);
        });
    }

    fn poll_geo_lookup(&mut self) {
        while let Ok(result) = self.geo_rx.try_recv() {
            self.geo_pending = false;
            match result {
                Ok(output) => self.output_content = output,
                Err(err) => self.error_message = Some(err),
            }
        }
    }

    fn open_input_dialog(&mut self) {
        let result = FileDialog::new()
            .set_title("Select input file")
            .add_filter("All Files", &["*"])
            .pick_file(); // This call is blocking

        if let Some(path) = result {
            match std::fs::read_to_string(&path) {
                Ok(content) => self.input_content = content,
                Err(err) => {
                    self.error_message =
                        Some(format!("failed to read {}: {}", path.display(), err));
                }
            }
        }
    }

    fn save_output_content(&mut self) {
        if self.output_content.is_empty() {
            self.error_message = Some("Nothing to save yet.".to_string());
            return;
        }
        let file_dialog_result = FileDialog::new()
            .set_title("Save output as...")
            .save_file(); // This blocks until the user picks or cancels

        if let Some(save_path) = file_dialog_result {
            if let Err(err) = std::fs::write(&save_path, &self.output_content) {
                self.error_message = Some(format!("failed to save output: {}", err));
            }
        }
    }
}

fn main() -> eframe::Result<()> {
    create_frame()
}
