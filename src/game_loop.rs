//! Frame driver and render thread
//!
//! [`GameLoop`] runs one frame at a time against any [`SurfaceProvider`]:
//! lock, update, draw, present. [`GameHost`] wires it to the platform
//! lifecycle: it lays the game out when the surface appears, spins a render
//! thread that loops frames while the running flag is set, and joins that
//! thread when the surface goes away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crate::platform::{FrameGuard, PointerLatch, SurfaceProvider};
use crate::renderer::{self, DrawTarget};
use crate::settings::Settings;
use crate::sim::{GameState, TickReport, tick};

/// Lifecycle of the host. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// No surface yet, nothing laid out
    Uninitialized,
    /// Render thread looping frames
    Running,
    /// Surface torn down, render thread joined
    Stopped,
}

/// Owns the game entities and steps them one frame at a time
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    pointer: PointerLatch,
}

impl GameLoop {
    /// Lay out paddle, ball and bricks for a surface of the given size
    pub fn new(surface_width: u32, surface_height: u32, pointer: PointerLatch) -> Self {
        Self {
            state: GameState::new(surface_width, surface_height),
            pointer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Move the paddle to the newest pointer sample, if one arrived
    pub fn apply_input(&mut self) {
        if let Some(x) = self.pointer.take() {
            self.state.paddle.set_x(x);
        }
    }

    /// Physics and collisions for one frame
    pub fn update(&mut self) -> TickReport {
        tick(&mut self.state)
    }

    pub fn draw<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        renderer::draw(&self.state, target);
    }

    /// One full frame: lock, update, draw, present.
    ///
    /// When the surface has no buffer to give, the simulation still advances
    /// and nothing is drawn or presented.
    pub fn frame<S: SurfaceProvider + ?Sized>(&mut self, surface: &mut S) -> TickReport {
        self.apply_input();
        let frame = FrameGuard::acquire(surface);
        let report = self.update();

        match frame {
            Some(mut target) => self.draw(&mut *target),
            None => log::trace!("Frame {}: no drawable buffer", self.state.frame),
        }

        report
    }
}

/// Frames-per-second counter for the render thread
struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    const WINDOW: Duration = Duration::from_secs(1);

    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn record(&mut self, state: &GameState) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Self::WINDOW {
            let fps = self.frames as f64 / elapsed.as_secs_f64();
            log::debug!(
                "{:.0} fps, {} bricks left",
                fps,
                state.playfield.visible_count()
            );
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

/// Platform lifecycle glue around a render thread
pub struct GameHost<S: SurfaceProvider + Send + 'static> {
    settings: Settings,
    phase: LoopPhase,
    running: Arc<AtomicBool>,
    pointer: PointerLatch,
    surface: Option<Arc<Mutex<S>>>,
    handle: Option<thread::JoinHandle<GameLoop>>,
}

impl<S: SurfaceProvider + Send + 'static> GameHost<S> {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            phase: LoopPhase::Uninitialized,
            running: Arc::new(AtomicBool::new(false)),
            pointer: PointerLatch::new(),
            surface: None,
            handle: None,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Shared handle to the surface while it exists. Holding its lock
    /// stalls the render thread between frames.
    pub fn surface(&self) -> Option<Arc<Mutex<S>>> {
        self.surface.clone()
    }

    /// Latch clone for an input thread
    pub fn pointer(&self) -> PointerLatch {
        self.pointer.clone()
    }

    /// Input hook: pointer moved to `x` (desired paddle center)
    pub fn on_pointer_move(&self, x: f32) {
        self.pointer.store(x);
    }

    /// Surface hook: lay the game out and start the render thread.
    ///
    /// Only honoured once; returns whether the loop started.
    pub fn on_surface_ready(&mut self, surface: S) -> bool {
        if self.phase != LoopPhase::Uninitialized {
            log::warn!("Surface ready while {:?}, ignoring", self.phase);
            return false;
        }

        let (width, height) = surface.size();
        let mut game = GameLoop::new(width, height, self.pointer.clone());
        let surface = Arc::new(Mutex::new(surface));

        let running = Arc::clone(&self.running);
        let shared = Arc::clone(&surface);
        let min_frame_time = self.settings.min_frame_time();
        let log_stats = self.settings.log_frame_stats;

        running.store(true, Ordering::SeqCst);
        let spawned = thread::Builder::new()
            .name("render".into())
            .spawn(move || {
                log::info!("Render thread started ({}x{})", width, height);
                let mut stats = FrameStats::new();

                // The flag is only checked between frames
                while running.load(Ordering::Acquire) {
                    let started = Instant::now();
                    {
                        let mut surface = shared.lock().unwrap_or_else(PoisonError::into_inner);
                        game.frame(&mut *surface);
                    }

                    if log_stats {
                        stats.record(game.state());
                    }
                    if let Some(min) = min_frame_time {
                        let elapsed = started.elapsed();
                        if elapsed < min {
                            thread::sleep(min - elapsed);
                        }
                    }
                }

                log::info!(
                    "Render thread stopped after {} frames",
                    game.state().frame
                );
                game
            });

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                self.surface = Some(surface);
                self.phase = LoopPhase::Running;
                log::info!("Game loop running");
                true
            }
            Err(e) => {
                log::error!("Failed to spawn render thread: {}", e);
                self.running.store(false, Ordering::SeqCst);
                self.phase = LoopPhase::Stopped;
                false
            }
        }
    }

    /// Surface hook: stop the loop and wait for the render thread to exit.
    ///
    /// The in-flight frame is always finished and presented first. Returns
    /// the final game state, or `None` if the loop never ran or panicked.
    pub fn on_surface_teardown(&mut self) -> Option<GameState> {
        if self.phase != LoopPhase::Running {
            return None;
        }

        self.running.store(false, Ordering::Release);

        // join only returns once the thread is gone, panicked or not
        let state = self.handle.take().and_then(|handle| match handle.join() {
            Ok(game) => Some(game.into_state()),
            Err(_) => {
                log::error!("Render thread panicked");
                None
            }
        });

        self.surface = None;
        self.phase = LoopPhase::Stopped;
        log::info!("Game loop stopped");
        state
    }
}

impl<S: SurfaceProvider + Send + 'static> Drop for GameHost<S> {
    fn drop(&mut self) {
        if self.phase == LoopPhase::Running {
            self.on_surface_teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::SoftwareSurface;
    use crate::renderer::{PixelBuffer, colors};
    use crate::sim::Ball;

    /// Surface that never has a buffer available
    struct NoBuffer {
        presented: u32,
    }

    impl SurfaceProvider for NoBuffer {
        type Target = PixelBuffer;

        fn size(&self) -> (u32, u32) {
            (1080, 1920)
        }

        fn lock(&mut self) -> Option<PixelBuffer> {
            None
        }

        fn unlock_and_present(&mut self, _target: PixelBuffer) {
            self.presented += 1;
        }
    }

    fn wait_for_frames(host: &GameHost<SoftwareSurface>, frames: u64) {
        let surface = host.surface().unwrap();
        let deadline = Instant::now() + Duration::from_secs(10);
        while surface.lock().unwrap().presented() < frames {
            assert!(Instant::now() < deadline, "render thread stalled");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_frame_presents_once() {
        let mut surface = SoftwareSurface::new(1080, 1920);
        let mut game = GameLoop::new(1080, 1920, PointerLatch::new());

        game.frame(&mut surface);
        assert_eq!(surface.presented(), 1);
        assert_eq!(game.state().frame, 1);

        let front = surface.front().unwrap();
        assert_eq!(front.pixel(0, 0), Some([0, 0, 255, 255]));
        assert!(front.count_color(colors::BALL) > 0);
    }

    #[test]
    fn test_frame_without_buffer_still_updates() {
        let mut surface = NoBuffer { presented: 0 };
        let mut game = GameLoop::new(1080, 1920, PointerLatch::new());

        game.frame(&mut surface);
        game.frame(&mut surface);
        assert_eq!(surface.presented, 0);
        assert_eq!(game.state().frame, 2);
    }

    #[test]
    fn test_pointer_applied_before_update() {
        let pointer = PointerLatch::new();
        let mut game = GameLoop::new(1080, 1920, pointer.clone());
        let mut surface = SoftwareSurface::new(1080, 1920);

        pointer.store(500.0);
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x(), 400.0);

        // No new sample: paddle stays put
        game.frame(&mut surface);
        assert_eq!(game.state().paddle.x(), 400.0);
    }

    #[test]
    fn test_bricks_destroyed_match_frames_inside_bricks() {
        let mut game = GameLoop::new(1080, 1920, PointerLatch::new());
        let mut surface = SoftwareSurface::new(1080, 1920);
        let mut frames_inside = 0;

        for _ in 0..600 {
            let visible_before: Vec<bool> =
                game.state().playfield.iter().map(|b| b.is_visible()).collect();

            game.frame(&mut surface);

            let center = game.state().ball.pos;
            let entered = game
                .state()
                .playfield
                .iter()
                .zip(&visible_before)
                .any(|(brick, &was_visible)| was_visible && brick.rect().contains_point(center));
            if entered {
                frames_inside += 1;
            }
        }

        let destroyed = 30 - game.state().playfield.visible_count();
        assert!(destroyed > 0);
        assert_eq!(destroyed, frames_inside);
        assert_eq!(surface.presented(), 600);
    }

    #[test]
    fn test_host_lifecycle() {
        let mut idle: GameHost<SoftwareSurface> = GameHost::new(Settings::default());
        assert_eq!(idle.phase(), LoopPhase::Uninitialized);
        assert!(idle.on_surface_teardown().is_none());
        assert_eq!(idle.phase(), LoopPhase::Uninitialized);

        let mut host: GameHost<SoftwareSurface> = GameHost::new(Settings::default());
        assert!(host.on_surface_ready(SoftwareSurface::new(1080, 1920)));
        assert_eq!(host.phase(), LoopPhase::Running);

        // A second surface is ignored
        assert!(!host.on_surface_ready(SoftwareSurface::new(10, 10)));

        wait_for_frames(&host, 5);
        let surface = host.surface().unwrap();
        let state = host.on_surface_teardown().unwrap();
        assert_eq!(host.phase(), LoopPhase::Stopped);
        assert!(host.surface().is_none());

        // Every simulated frame was presented in full
        let surface = surface.lock().unwrap();
        assert!(state.frame >= 5);
        assert_eq!(surface.presented(), state.frame);
        assert!(surface.front().is_some());

        // Stopped is terminal
        assert!(!host.on_surface_ready(SoftwareSurface::new(1080, 1920)));
        assert_eq!(host.on_surface_teardown().map(|s| s.frame), None);
    }

    #[test]
    fn test_host_pointer_reaches_paddle() {
        let mut host: GameHost<SoftwareSurface> = GameHost::new(Settings::default());
        host.on_surface_ready(SoftwareSurface::new(1080, 1920));

        let input = host.pointer();
        thread::spawn(move || input.store(500.0)).join().unwrap();
        host.on_pointer_move(500.0);

        let already = host.surface().unwrap().lock().unwrap().presented();
        wait_for_frames(&host, already + 2);
        let state = host.on_surface_teardown().unwrap();
        assert_eq!(state.paddle.x(), 400.0);
    }

    #[test]
    fn test_host_frame_cap() {
        let settings = Settings {
            max_fps: Some(100),
            log_frame_stats: false,
            ..Default::default()
        };
        let mut host: GameHost<SoftwareSurface> = GameHost::new(settings);
        let started = Instant::now();
        host.on_surface_ready(SoftwareSurface::new(64, 64));
        thread::sleep(Duration::from_millis(200));
        let state = host.on_surface_teardown().unwrap();
        let budget = started.elapsed().as_millis() as u64 / 10 + 2;

        // 10ms per frame at most
        assert!(state.frame >= 1);
        assert!(state.frame <= budget, "ran {} frames, budget {}", state.frame, budget);
    }

    #[test]
    fn test_drop_joins_render_thread() {
        let running;
        {
            let mut host: GameHost<SoftwareSurface> = GameHost::new(Settings::default());
            host.on_surface_ready(SoftwareSurface::new(32, 32));
            running = Arc::clone(&host.running);
            assert!(running.load(Ordering::SeqCst));
        }
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_ball_spawn_heads_up_right() {
        let game = GameLoop::new(1080, 1920, PointerLatch::new());
        let ball: &Ball = &game.state().ball;
        assert!(ball.vel.x > 0.0 && ball.vel.y < 0.0);
    }
}
