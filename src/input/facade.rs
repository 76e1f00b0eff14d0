//! The unified pointer query surface.

use glam::{Vec2, Vec3};

use super::event::PointerEvent;
use super::keyboard::{KeyboardHost, KeyboardSession};
use super::source::{source_for_backend, PointerSource};
use crate::camera::Camera;
use crate::geometry::{Collider, Plane, Ray, Rect};
use crate::options::InputOptions;

/// Platform-uniform view of the current pointer plus derived geometric
/// queries.
///
/// Owned by the application loop and passed by reference to whatever needs
/// pointer input. Feed events in with [`handle_event`](Self::handle_event),
/// call [`begin_frame`](Self::begin_frame) once per frame before
/// dispatching that frame's events, then query freely: every query is a
/// pure read of the current frame's state.
///
/// Queries never fail. With no active pointer they return `false` or the
/// last known cursor position; the plane projection degrades to a
/// non-finite point when the ray is parallel to the plane.
pub struct InputFacade {
    source: Box<dyn PointerSource>,
    screen_size: Vec2,
    keyboard_active: bool,
}

impl InputFacade {
    /// Create a facade with the pointer source selected by `options`.
    #[must_use]
    pub fn new(options: &InputOptions) -> Self {
        Self::with_source(source_for_backend(options.backend))
    }

    /// Create a facade over an explicit pointer source.
    ///
    /// Lets tests (and embedders with their own platform detection) drive
    /// either source variant on any build.
    #[must_use]
    pub fn with_source(source: Box<dyn PointerSource>) -> Self {
        Self {
            source,
            screen_size: Vec2::new(1.0, 1.0),
            keyboard_active: false,
        }
    }

    /// Update the screen dimensions used by coordinate-space conversions.
    pub fn set_screen_size(&mut self, size: Vec2) {
        self.screen_size = size;
    }

    /// Current screen dimensions in physical pixels.
    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Forward a raw pointer event to the active source.
    pub fn handle_event(&mut self, event: PointerEvent) {
        self.source.handle_event(event);
    }

    /// Mark a frame boundary; edge queries refer to events seen after this.
    pub fn begin_frame(&mut self) {
        self.source.begin_frame();
    }

    /// Whether the touch (or primary mouse button) began this frame.
    ///
    /// On the touch source this is true only for exactly one active
    /// contact; simultaneous contacts never count.
    #[must_use]
    pub fn touch_began(&self) -> bool {
        self.source.began()
    }

    /// Whether the touch (or primary mouse button) ended this frame.
    #[must_use]
    pub fn touch_ended(&self) -> bool {
        self.source.ended()
    }

    /// Current pointer position in screen space (bottom-left origin).
    ///
    /// The first touch's position when any contact is active, otherwise
    /// the cursor position.
    #[must_use]
    pub fn touch_position(&self) -> Vec2 {
        self.source.position()
    }

    /// Project the pointer onto a world-space plane.
    ///
    /// Casts a ray from `camera` through the pointer position shifted by
    /// `ray_shift` (screen-space pixels) and intersects it with the
    /// infinite plane through `plane_position` with normal `plane_normal`.
    ///
    /// If the ray is parallel to the plane the returned point is
    /// non-finite; callers that can encounter that case must check
    /// `is_finite()` on the result.
    #[must_use]
    pub fn world_touch_position(
        &self,
        camera: &Camera,
        plane_normal: Vec3,
        plane_position: Vec3,
        ray_shift: Vec2,
    ) -> Vec3 {
        let ray = self.pointer_ray(camera, ray_shift);
        let plane = Plane::new(plane_normal, plane_position);
        ray.point_at(plane.raycast(&ray))
    }

    /// Whether the touch began this frame on `collider`.
    ///
    /// Short-circuits on [`touch_began`](Self::touch_began): false for any
    /// collider when no touch began.
    #[must_use]
    pub fn touch_began_on_collider(
        &self,
        camera: &Camera,
        collider: &dyn Collider,
    ) -> bool {
        self.touch_began()
            && collider.raycast(&self.pointer_ray(camera, Vec2::ZERO)).is_some()
    }

    /// Whether the pointer is currently over `collider`, independent of
    /// touch phase.
    #[must_use]
    pub fn touch_position_on_collider(
        &self,
        camera: &Camera,
        collider: &dyn Collider,
    ) -> bool {
        collider.raycast(&self.pointer_ray(camera, Vec2::ZERO)).is_some()
    }

    /// Whether `rect` (UI space, top-left origin) contains `touch_pos`
    /// (screen space, bottom-left origin).
    ///
    /// The Y coordinate is flipped against the screen height to reconcile
    /// the two conventions.
    #[must_use]
    pub fn rect_contains(&self, rect: Rect, touch_pos: Vec2) -> bool {
        rect.contains(Vec2::new(touch_pos.x, self.screen_size.y - touch_pos.y))
    }

    /// Whether an on-screen keyboard session is in progress.
    #[must_use]
    pub fn is_keyboard_active(&self) -> bool {
        self.keyboard_active
    }

    /// Advance a keyboard session by one frame and record its activity.
    pub fn poll_keyboard(
        &mut self,
        session: &mut KeyboardSession,
        host: &mut dyn KeyboardHost,
    ) {
        self.keyboard_active = session.poll(host);
    }

    /// Ray from the camera through the current pointer position.
    fn pointer_ray(&self, camera: &Camera, ray_shift: Vec2) -> Ray {
        camera.screen_point_to_ray(
            self.screen_size,
            self.touch_position() + ray_shift,
        )
    }
}
