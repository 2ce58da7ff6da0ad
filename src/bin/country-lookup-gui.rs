/*!
 * GUI application for country-lookup
 *
 * A desktop window providing:
 * - A search box with autocomplete over all country names
 * - A country profile (flag image, capital, population, currency, languages, ...)
 * - A share link mirroring the current search (`country=<name>`)
 *
 * The optional first argument is a share link or query string and plays the
 * role of the page URL: `country-lookup-gui "country=Costa%20Rica"`.
 */

use clap::Parser;
use country_lookup::render::render_country;
use country_lookup::{Client, ClientConfig, Phase, QueryParams, Rendered, Session};
use eframe::egui;

#[derive(Parser, Debug)]
#[command(name = "country-lookup-gui", version, about = "Country lookup desktop app")]
struct GuiArgs {
    /// Share link or query string to start from, e.g. "country=Japan".
    link: Option<String>,
    /// Base URL of the REST Countries API.
    #[arg(long, default_value = country_lookup::api::DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let args = GuiArgs::parse();
    let params = match args.link.as_deref().map(QueryParams::parse) {
        Some(Ok(params)) => params,
        Some(Err(err)) => {
            log::warn!("ignoring start link: {err}");
            QueryParams::new()
        }
        None => QueryParams::new(),
    };
    let client = match Client::new(ClientConfig::default().with_base_url(args.base_url)) {
        Ok(client) => client,
        Err(err) => {
            log::warn!("{err}; using default client");
            Client::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 720.0])
            .with_min_inner_size([360.0, 400.0])
            .with_title("Country Lookup"),
        ..Default::default()
    };

    eframe::run_native(
        "Country Lookup",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(LookupApp::new(client, params)))
        }),
    )
}

/// Main application state. Everything shown is derived from the session.
struct LookupApp {
    session: Session<Client>,
    /// Text buffer bound to the search box.
    input: String,
}

impl LookupApp {
    fn new(client: Client, params: QueryParams) -> Self {
        let mut session = Session::new(client, params);
        session.start();
        let input = session.controller().query().to_string();
        Self { session, input }
    }

    fn submit(&mut self) {
        self.session.submit(&self.input);
        self.input = self.session.controller().query().to_string();
    }

    fn pick(&mut self, name: &str) {
        self.session.pick_suggestion(name);
        self.input = self.session.controller().query().to_string();
    }

    fn search_bar(&mut self, ui: &mut egui::Ui) {
        let mut picked: Option<String> = None;

        ui.horizontal(|ui| {
            let width = ui.available_width() - 80.0;
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Search")
                    .desired_width(width),
            );
            if response.changed() {
                self.session.type_input(&self.input);
            }
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(!self.input.trim().is_empty(), egui::Button::new("Search"))
                .clicked();
            if enter || clicked {
                self.submit();
            }
        });

        let state = self.session.controller().state();
        if state.is_suggestion_list_open && !state.suggestion_options.is_empty() {
            ui.group(|ui| {
                egui::ScrollArea::vertical()
                    .max_height(180.0)
                    .show(ui, |ui| {
                        for name in &state.suggestion_options {
                            if ui.selectable_label(false, name).clicked() {
                                picked = Some(name.clone());
                            }
                        }
                    });
            });
        }

        if let Some(error) = self.session.controller().suggestion_error() {
            ui.colored_label(egui::Color32::DARK_RED, error);
        }

        if let Some(name) = picked {
            self.pick(&name);
        }
    }

    fn results(&self, ui: &mut egui::Ui) {
        match self.session.controller().phase() {
            Phase::Idle => {}
            Phase::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            Phase::NotFound(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(message);
                });
            }
            Phase::Failed(error) => {
                ui.colored_label(egui::Color32::RED, format!("Could not load country: {error}"));
            }
            Phase::Loaded(countries) => {
                for country in countries {
                    ui.group(|ui| {
                        ui.heading(country.display_name());
                        for item in render_country(country) {
                            match item {
                                Rendered::Image { url } => {
                                    ui.add(egui::Image::new(url.clone()).max_width(160.0));
                                    ui.hyperlink_to("Open flag image", url);
                                }
                                Rendered::Labeled { label, text } => {
                                    ui.label(egui::RichText::new(format!("{label}:")).strong());
                                    ui.label(text);
                                }
                            }
                            ui.add_space(4.0);
                        }
                    });
                    ui.add_space(8.0);
                }
            }
        }
    }
}

impl eframe::App for LookupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background requests
        self.session.poll();

        // Keep polling while requests are out
        if self.session.in_flight() > 0 {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.search_bar(ui);

                ui.horizontal(|ui| {
                    ui.label("Share:");
                    let link = self.session.params().share_link();
                    ui.add(egui::Label::new(egui::RichText::new(link).monospace()).selectable(true));
                });
                ui.separator();

                self.results(ui);
            });
        });
    }
}
