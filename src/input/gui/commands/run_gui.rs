use log::{error, info};
use std::error::Error;
use std::marker::PhantomData;

use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interaction::{InteractionConfig, InteractionController};
use crate::controllers::interactive::InteractiveController;
use crate::core::data::viewport_size::ViewportSize;
use crate::input::gui::{
    app::{gui_app::GuiApp, input_translation::is_release, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    events::GuiEvent,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    interaction_config: InteractionConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self::with_config(presenter_factory, InteractionConfig::default())
    }

    pub fn with_config(presenter_factory: F, interaction_config: InteractionConfig) -> Self {
        Self {
            presenter_factory,
            interaction_config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs the event loop until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let inner = window.inner_size();
        let initial_size = ViewportSize::new(inner.width.max(1), inner.height.max(1))?;

        let presenter: P = self.presenter_factory.build(window, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let interaction = InteractionController::new(self.interaction_config, initial_size)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller, interaction);
        let mut redraw_pending = true;

        app.interaction.attach();
        info!("gui started at {}x{}", initial_size.width(), initial_size.height());

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        app.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        app.poll_render_events();
                        let egui_output = app.update_ui(window);
                        app.submit_render_request_if_needed();

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(e) = app.render(egui_output) {
                            error!("render error: {e}");
                            app.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            app.shutdown();
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            app.shutdown();
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {
                        if !egui_consumed || is_release(event) {
                            let response = app.handle_input(event);
                            if response.changed {
                                redraw_pending = true;
                            }
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        info!("gui stopped");

        Ok(())
    }
}
