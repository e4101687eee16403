//! Drawable surface seam
//!
//! A surface hands out one draw target per frame and takes it back to present.
//! [`FrameGuard`] ties the two together so every acquired target is presented
//! exactly once, including when a frame unwinds.

use std::ops::{Deref, DerefMut};

use crate::renderer::{DrawTarget, PixelBuffer};

/// Host-provided drawable surface
pub trait SurfaceProvider {
    type Target: DrawTarget;

    /// Size in pixels; stable for the lifetime of the surface
    fn size(&self) -> (u32, u32);

    /// Acquire this frame's draw target. May block briefly; `None` when the
    /// platform has no buffer to give (the frame is then not drawn).
    fn lock(&mut self) -> Option<Self::Target>;

    /// Hand the target back and show it
    fn unlock_and_present(&mut self, target: Self::Target);
}

/// A locked surface for the duration of one frame. Presents on drop.
pub struct FrameGuard<'a, S: SurfaceProvider + ?Sized> {
    surface: &'a mut S,
    target: Option<S::Target>,
}

impl<'a, S: SurfaceProvider + ?Sized> FrameGuard<'a, S> {
    pub fn acquire(surface: &'a mut S) -> Option<Self> {
        let target = surface.lock()?;
        Some(Self {
            surface,
            target: Some(target),
        })
    }

    /// Present now instead of at end of scope
    pub fn present(self) {}
}

impl<S: SurfaceProvider + ?Sized> Deref for FrameGuard<'_, S> {
    type Target = S::Target;

    fn deref(&self) -> &Self::Target {
        // Only `drop` empties the slot
        self.target.as_ref().unwrap_or_else(|| unreachable!())
    }
}

impl<S: SurfaceProvider + ?Sized> DerefMut for FrameGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.target.as_mut().unwrap_or_else(|| unreachable!())
    }
}

impl<S: SurfaceProvider + ?Sized> Drop for FrameGuard<'_, S> {
    fn drop(&mut self) {
        if let Some(target) = self.target.take() {
            self.surface.unlock_and_present(target);
        }
    }
}

/// In-memory surface backed by a [`PixelBuffer`].
///
/// Locking moves the buffer out; presenting moves it back, so the most recent
/// frame is readable between frames.
#[derive(Debug)]
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    buffer: Option<PixelBuffer>,
    presented: u64,
}

impl SoftwareSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: Some(PixelBuffer::new(width, height)),
            presented: 0,
        }
    }

    /// Frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Last presented frame; `None` while a frame is in flight
    pub fn front(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

impl SurfaceProvider for SoftwareSurface {
    type Target = PixelBuffer;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn lock(&mut self) -> Option<PixelBuffer> {
        self.buffer.take()
    }

    fn unlock_and_present(&mut self, target: PixelBuffer) {
        self.buffer = Some(target);
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_guard_presents_on_drop() {
        let mut surface = SoftwareSurface::new(4, 4);
        {
            let mut frame = FrameGuard::acquire(&mut surface).unwrap();
            frame.clear(colors::BRICK);
        }
        assert_eq!(surface.presented(), 1);
        assert_eq!(surface.front().unwrap().count_color(colors::BRICK), 16);
    }

    #[test]
    fn test_explicit_present() {
        let mut surface = SoftwareSurface::new(2, 2);
        let frame = FrameGuard::acquire(&mut surface).unwrap();
        frame.present();
        assert_eq!(surface.presented(), 1);
    }

    #[test]
    fn test_lock_unavailable_while_in_flight() {
        let mut surface = SoftwareSurface::new(2, 2);
        let target = surface.lock().unwrap();
        assert!(surface.lock().is_none());
        assert!(surface.front().is_none());
        surface.unlock_and_present(target);
        assert!(surface.front().is_some());
    }

    #[test]
    fn test_guard_presents_when_frame_panics() {
        let mut surface = SoftwareSurface::new(2, 2);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _frame = FrameGuard::acquire(&mut surface).unwrap();
            panic!("frame failed");
        }));
        assert!(result.is_err());
        assert_eq!(surface.presented(), 1);
        assert!(surface.front().is_some());
    }
}
