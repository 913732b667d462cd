use egui::Context;
use egui_winit::State as EguiWinitState;
use log::debug;
use std::sync::Arc;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::interaction::{EventResponse, InputEvent, InteractionController};
use crate::controllers::interactive::InteractiveController;
use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::input::gui::app::input_translation::InputTranslator;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::GuiAppState;
use crate::input::gui::events::GuiEvent;

/// Wires the window to the interaction controller, the render worker and a presenter.
pub struct GuiApp<T: GuiPresenterPort> {
    size: Option<ViewportSize>,
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    pub interaction: InteractionController,
    translator: InputTranslator,
    ui_state: GuiAppState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        interaction: InteractionController,
    ) -> Self {
        let inner = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        Self {
            size: ViewportSize::new(inner.width, inner.height).ok(),
            scale_factor,
            presenter,
            controller,
            interaction,
            translator: InputTranslator::default(),
            ui_state: GuiAppState::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        if self.size.is_none() {
            return Ok(());
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Applies a new window size. Zero sizes (minimised) are skipped and the
    /// last valid size is kept for the controller.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        let Ok(size) = ViewportSize::new(width, height) else {
            debug!("skipping resize to {}x{}", width, height);
            self.size = None;
            return Ok(());
        };

        self.size = Some(size);
        self.presenter.resize(size)?;
        // The presenter drops its frame on resize, so even an unchanged request must be sent.
        self.ui_state.invalidate_submission();
        self.interaction.handle(InputEvent::Resized(size));

        Ok(())
    }

    /// Forwards pointer, touch and wheel events the overlay did not take.
    pub fn handle_input(&mut self, event: &WindowEvent) -> EventResponse {
        match self.translator.translate(event) {
            Some(input) => self.interaction.handle(input),
            None => EventResponse::IGNORED,
        }
    }

    pub fn poll_render_events(&mut self) {
        self.presenter.poll();
    }

    pub fn submit_render_request_if_needed(&mut self) {
        let Some(size) = self.size else {
            return;
        };

        let request = self
            .ui_state
            .build_render_request(size, self.interaction.transform());

        if self.ui_state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.ui_state.record_submission(request, generation);
        }
    }

    pub fn reset_view(&mut self) {
        self.interaction.reset_view();
        self.ui_state.reset_view();
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Debug Panel")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 240.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(egui::Slider::new(
                            &mut self.ui_state.mandelbrot.max_iterations,
                            1..=1000,
                        ));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(self.ui_state.mandelbrot.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.ui_state.mandelbrot.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    let transform = self.interaction.transform();
                    ui.label(format!(
                        "Offset: ({:.6}, {:.6})",
                        transform.offset().real,
                        transform.offset().imag
                    ));
                    ui.label(format!("Zoom: {:.4}", transform.zoom()));
                    ui.label(format!("Zoom history: {}", self.interaction.history_depth()));

                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }

                    ui.separator();
                    let size = self.interaction.viewport_size();
                    ui.label(format!("Window size: {}x{}", size.width(), size.height()));
                    ui.label(format!(
                        "Latest generation: {} (shown {})",
                        self.ui_state.latest_submitted_generation,
                        self.presenter.last_presented_generation()
                    ));
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        if reset_clicked {
            self.reset_view();
        }

        output
    }

    /// Returns egui's `(consumed, repaint)` for the event.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    pub fn shutdown(&mut self) {
        self.interaction.detach();
        self.controller.shutdown();
    }
}
