//! Brick Breaker entry point
//!
//! Native: headless host rendering into a software surface on a render thread.
//! Web: canvas + WebGPU, one frame per animation frame callback.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent, TouchEvent};

    use brick_breaker::platform::PointerLatch;
    use brick_breaker::renderer::GpuSurface;
    use brick_breaker::{GameLoop, Settings};

    /// Game instance holding all state
    struct Game {
        game: GameLoop,
        surface: GpuSurface,
        /// CSS pixels to surface pixels
        dpr: f32,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Brick Breaker starting...");
        let settings = Settings::load();
        if settings.max_fps.is_some() {
            log::info!("max_fps is ignored on the web; frames follow requestAnimationFrame");
        }

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(canvas) = window
            .document()
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        // Surface size in device pixels
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let surface = match GpuSurface::new(surface, &adapter, width, height).await {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        };

        // Surface is ready: one-time layout
        let pointer = PointerLatch::new();
        let game = Rc::new(RefCell::new(Game {
            game: GameLoop::new(width, height, pointer.clone()),
            surface,
            dpr: dpr as f32,
        }));
        log::info!("Game laid out for {}x{}", width, height);

        setup_input_handlers(&canvas, pointer, game.borrow().dpr);
        request_animation_frame(game);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, pointer: PointerLatch, dpr: f32) {
        // Mouse and pen
        {
            let pointer = pointer.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                pointer.store(event.offset_x() as f32 * dpr);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    pointer.store(x * dpr);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { game, surface, .. } = &mut *g;
            game.frame(surface);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use brick_breaker::platform::SoftwareSurface;
    use brick_breaker::{GameHost, Settings};

    env_logger::init();
    log::info!("Brick Breaker (native, headless) starting...");

    let settings = Settings::load();
    let run_for = Duration::from_millis(settings.run_millis);
    let surface = SoftwareSurface::new(settings.surface_width, settings.surface_height);

    let mut host = GameHost::new(settings);
    if !host.on_surface_ready(surface) {
        log::error!("Game loop did not start");
        std::process::exit(1);
    }

    std::thread::sleep(run_for);

    let surface = host.surface();
    let state = host.on_surface_teardown();
    let presented = match surface.as_ref().map(|s| s.lock()) {
        Some(Ok(surface)) => surface.presented(),
        _ => 0,
    };

    match state {
        Some(state) => {
            log::info!(
                "Ran {} frames ({} presented), {} of {} bricks left",
                state.frame,
                presented,
                state.playfield.visible_count(),
                state.playfield.len()
            );
            println!(
                "frames={} bricks_left={}",
                state.frame,
                state.playfield.visible_count()
            );
        }
        None => {
            log::error!("Render thread did not exit cleanly");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
