use rapier2d::prelude::*;

use super::{BodyHandle, PhysicsWorld};

/// Collision shape of a body, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// Read-only snapshot of one body, for rendering
#[derive(Clone, Copy, Debug)]
pub struct BodyView {
    pub shape: BodyShape,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl PhysicsWorld {
    /// Spawn a static axis-aligned rectangle centered at (x, y)
    pub fn spawn_static_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> BodyHandle {
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .restitution(0.1)
            .friction(0.5)
            .build();
        self.spawn_fixed(x, y, collider)
    }

    /// Spawn a static circle centered at (x, y)
    pub fn spawn_static_circle(&mut self, x: f32, y: f32, radius: f32) -> BodyHandle {
        let collider = ColliderBuilder::ball(radius)
            .restitution(0.1)
            .friction(0.5)
            .build();
        self.spawn_fixed(x, y, collider)
    }

    fn spawn_fixed(&mut self, x: f32, y: f32, collider: Collider) -> BodyHandle {
        let body = RigidBodyBuilder::fixed().translation(vector![x, y]).build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        BodyHandle(handle)
    }

    /// Remove a body and its colliders. Returns false if it was already gone.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        self.bodies
            .remove(
                handle.0,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    /// Static bodies never move; dynamic ones integrate gravity and contacts.
    ///
    /// Going static also drops any velocity the body picked up.
    pub fn set_static(&mut self, handle: BodyHandle, is_static: bool) {
        let Some(body) = self.bodies.get_mut(handle.0) else {
            return;
        };
        if is_static {
            body.set_body_type(RigidBodyType::Fixed, true);
            body.set_linvel(vector![0.0, 0.0], true);
            body.set_angvel(0.0, true);
        } else {
            body.set_body_type(RigidBodyType::Dynamic, true);
        }
    }

    /// Teleport a body's center to (x, y). Rotation is kept.
    pub fn set_position(&mut self, handle: BodyHandle, x: f32, y: f32) {
        if let Some(body) = self.bodies.get_mut(handle.0) {
            body.set_translation(vector![x, y], true);
        }
    }

    pub fn position(&self, handle: BodyHandle) -> Option<(f32, f32)> {
        self.bodies.get(handle.0).map(|b| {
            let t = b.translation();
            (t.x, t.y)
        })
    }

    pub fn is_static(&self, handle: BodyHandle) -> Option<bool> {
        self.bodies.get(handle.0).map(|b| b.is_fixed())
    }

    pub fn shape(&self, handle: BodyHandle) -> Option<BodyShape> {
        let body = self.bodies.get(handle.0)?;
        let collider = self.colliders.get(*body.colliders().first()?)?;
        let shape = collider.shape();
        if let Some(ball) = shape.as_ball() {
            return Some(BodyShape::Circle { radius: ball.radius });
        }
        shape.as_cuboid().map(|c| BodyShape::Rect {
            width: c.half_extents.x * 2.0,
            height: c.half_extents.y * 2.0,
        })
    }

    pub fn view(&self, handle: BodyHandle) -> Option<BodyView> {
        let body = self.bodies.get(handle.0)?;
        let t = body.translation();
        Some(BodyView {
            shape: self.shape(handle)?,
            x: t.x,
            y: t.y,
            angle: body.rotation().angle(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(1.0 / 60.0)
    }

    #[test]
    fn spawned_bodies_are_static_and_centered() {
        let mut w = world();
        let rect = w.spawn_static_rect(45.0, 15.0, 30.0, 30.0);
        let ball = w.spawn_static_circle(75.0, 15.0, 15.0);

        assert_eq!(w.body_count(), 2);
        assert_eq!(w.position(rect), Some((45.0, 15.0)));
        assert_eq!(w.is_static(rect), Some(true));
        assert_eq!(w.is_static(ball), Some(true));
        assert_eq!(w.shape(rect), Some(BodyShape::Rect { width: 30.0, height: 30.0 }));
        assert_eq!(w.shape(ball), Some(BodyShape::Circle { radius: 15.0 }));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut w = world();
        let h = w.spawn_static_rect(0.0, 0.0, 30.0, 30.0);
        assert!(w.remove_body(h));
        assert!(!w.contains(h));
        assert!(!w.remove_body(h));
        assert_eq!(w.body_count(), 0);
    }

    #[test]
    fn dynamic_body_falls_and_static_stays() {
        let mut w = world();
        let falling = w.spawn_static_circle(100.0, 15.0, 15.0);
        let fixed = w.spawn_static_rect(300.0, 15.0, 30.0, 30.0);
        w.set_static(falling, false);

        for _ in 0..30 {
            w.step();
        }

        let (_, y) = w.position(falling).unwrap();
        assert!(y > 15.0 + 50.0, "dynamic body should fall, y = {y}");
        assert_eq!(w.position(fixed), Some((300.0, 15.0)));
        assert_eq!(w.steps(), 30);
    }

    #[test]
    fn going_static_freezes_the_body() {
        let mut w = world();
        let h = w.spawn_static_circle(100.0, 15.0, 15.0);
        w.set_static(h, false);
        for _ in 0..10 {
            w.step();
        }
        w.set_static(h, true);
        w.set_position(h, 90.0, 0.0);
        for _ in 0..10 {
            w.step();
        }
        assert_eq!(w.is_static(h), Some(true));
        assert_eq!(w.position(h), Some((90.0, 0.0)));
    }

    #[test]
    fn stale_handles_are_ignored() {
        let mut w = world();
        let h = w.spawn_static_rect(0.0, 0.0, 30.0, 30.0);
        w.remove_body(h);
        w.set_static(h, false);
        w.set_position(h, 5.0, 5.0);
        assert_eq!(w.position(h), None);
        assert_eq!(w.is_static(h), None);
        assert!(w.view(h).is_none());
    }
}
