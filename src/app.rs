use crate::annotator::Annotator;
use crate::config::AnnotatorConfig;
use crate::event::LoggingHandler;
use crate::input::InputHandler;
use crate::surface::PainterSurface;

const CONFIG_KEY: &str = "canvas_annotate_config";

pub struct AnnotateApp {
    config: AnnotatorConfig,
    // Holds the start-up error when the annotator could not be built
    annotator: Result<Annotator, String>,
    input: InputHandler,
}

impl AnnotateApp {
    /// Called once before the first frame.
    ///
    /// An explicit config wins over the one persisted by a previous run.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Option<AnnotatorConfig>) -> Self {
        let config = config
            .or_else(|| {
                cc.storage
                    .and_then(|storage| eframe::get_value(storage, CONFIG_KEY))
            })
            .unwrap_or_default();
        Self::with_config(config)
    }

    /// Build the app without an eframe context (used by `new` and in tests)
    pub fn with_config(config: AnnotatorConfig) -> Self {
        let input = InputHandler::new(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(config.surface_width, config.surface_height),
        ));

        let annotator = match Annotator::new(config.clone()) {
            Ok(mut annotator) => {
                annotator.event_bus().subscribe(Box::new(LoggingHandler));
                if let Err(err) = annotator.load_background() {
                    log::error!("{}", err);
                }
                Ok(annotator)
            }
            Err(err) => {
                log::error!("{}", err);
                Err(err.to_string())
            }
        };

        Self {
            config,
            annotator,
            input,
        }
    }

    pub fn annotator(&self) -> Option<&Annotator> {
        self.annotator.as_ref().ok()
    }

    pub fn annotator_mut(&mut self) -> Option<&mut Annotator> {
        self.annotator.as_mut().ok()
    }

    /// Why the annotator failed to start, if it did
    pub fn startup_error(&self) -> Option<&str> {
        self.annotator.as_ref().err().map(String::as_str)
    }
}

impl eframe::App for AnnotateApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let annotator = match &mut self.annotator {
                Ok(annotator) => annotator,
                Err(err) => {
                    ui.colored_label(ui.visuals().error_fg_color, err.as_str());
                    return;
                }
            };

            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click());
            let canvas_rect = response.rect;

            self.input.set_canvas_rect(canvas_rect);

            if let Some(pos) = self.input.take_click(&response) {
                annotator.handle_click(pos);
            }

            annotator.prepare(ctx);
            let mut surface = PainterSurface::new(&painter, canvas_rect, self.config.clear_color());
            annotator.redraw(&mut surface);

            if annotator.needs_redraw() {
                ctx.request_repaint();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_surface_aborts_construction() {
        let app = AnnotateApp::with_config(AnnotatorConfig {
            image_path: None,
            surface_height: f32::NAN,
            ..AnnotatorConfig::default()
        });
        assert!(app.annotator().is_none());
        assert!(app.startup_error().unwrap().contains("Drawing surface unavailable"));
    }

    #[test]
    fn test_bad_shape_reports_invalid_shape() {
        let app = AnnotateApp::with_config(AnnotatorConfig {
            image_path: None,
            shapes: vec![crate::config::ShapeSpec::Circle {
                x: 10.0,
                y: 10.0,
                radius: -2.0,
            }],
            ..AnnotatorConfig::default()
        });
        assert!(app.annotator().is_none());
        let err = app.startup_error().unwrap();
        assert!(err.contains("Invalid shape"));
        assert!(!err.contains("Drawing surface"));
    }

    #[test]
    fn test_missing_image_is_logged_not_fatal() {
        let app = AnnotateApp::with_config(AnnotatorConfig {
            image_path: Some("no/such/image.png".into()),
            ..AnnotatorConfig::default()
        });
        assert!(app.startup_error().is_none());
        let annotator = app.annotator().unwrap();
        assert!(annotator.background().is_none());
        assert_eq!(annotator.shapes().len(), 3);
    }
}
