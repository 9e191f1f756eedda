use log::{debug, info};

use super::body::RigidBody;
use super::boundary::apply_boundary;
use super::collision::{detect_collision, resolve_collision, CollisionEvent};
use super::params::{SimulationParams, DEFAULT_PARAMS};
use super::PhysicsError;
use crate::core::math::{vec2, Vector2};

/// What happened during one step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Contacts found and resolved, in ascending `(body_a, body_b)` order
    pub events: Vec<CollisionEvent>,
    /// Number of wall contacts across all bodies
    pub wall_hits: usize,
}

/// Advance every body by `dt` under gravity only.
///
/// Order per step: gravity + integration, boundary clamp, then one pass
/// over all unordered pairs `(i, j)` with `i < j` in ascending order,
/// resolving each contact as soon as it is found. There is no iterative
/// solver, so with several simultaneous overlaps the outcome depends on
/// that fixed order.
pub fn step(bodies: &mut [RigidBody], dt: f32, params: &SimulationParams) -> StepReport {
    run_step(bodies, dt, params, None)
}

/// Like [`step`], with one extra external force per body added to gravity
pub fn step_with_forces(
    bodies: &mut [RigidBody],
    dt: f32,
    params: &SimulationParams,
    forces: &[Vector2],
) -> Result<StepReport, PhysicsError> {
    if forces.len() != bodies.len() {
        return Err(PhysicsError::ForceCountMismatch {
            bodies: bodies.len(),
            forces: forces.len(),
        });
    }
    Ok(run_step(bodies, dt, params, Some(forces)))
}

fn run_step(
    bodies: &mut [RigidBody],
    dt: f32,
    params: &SimulationParams,
    forces: Option<&[Vector2]>,
) -> StepReport {
    // Forces and integration
    for (i, body) in bodies.iter_mut().enumerate() {
        let mut force = vec2(0.0, -params.gravity * body.mass());
        if let Some(extra) = forces {
            force += extra[i];
        }
        body.integrate(force, dt);
    }

    // Walls
    let mut wall_hits = 0;
    for body in bodies.iter_mut() {
        wall_hits += apply_boundary(body, &params.bounds, params.wall_restitution).len();
    }

    // Pairwise contacts, single pass
    let mut events = Vec::new();
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);
            let Some(contact) = detect_collision(a, b) else {
                continue;
            };

            if contact.is_degenerate() {
                debug!("bodies {} and {} are concentric, no separation direction", i, j);
            }

            resolve_collision(
                a,
                b,
                &contact,
                params.restitution,
                params.correction_percent,
            );
            debug!(
                "resolved contact {}-{} depth {:.4} normal ({:.3}, {:.3})",
                i, j, contact.penetration, contact.normal.x, contact.normal.y
            );

            events.push(CollisionEvent {
                body_a: i,
                body_b: j,
                normal: contact.normal,
                penetration: contact.penetration,
            });
        }
    }

    StepReport { events, wall_hits }
}

/// Two distinct mutable bodies out of one slice, `i < j`
fn pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Physics world that owns the bodies and the constants they share
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    /// Bodies in insertion order; the index is the body's id
    bodies: Vec<RigidBody>,

    /// Gravity, restitution, correction and bounds
    params: SimulationParams,

    /// Number of completed steps
    step_count: u64,

    /// Simulated time in seconds
    elapsed: f32,

    /// Contacts resolved during the last step
    collision_events: Vec<CollisionEvent>,

    /// Contacts resolved since creation
    total_collisions: u64,
}

impl PhysicsWorld {
    /// Create an empty world with the default constants
    pub fn new() -> Self {
        Self::from_params_unchecked(DEFAULT_PARAMS)
    }

    /// Create an empty world with custom constants
    pub fn with_params(params: SimulationParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self::from_params_unchecked(params))
    }

    fn from_params_unchecked(params: SimulationParams) -> Self {
        info!(
            "Physics world created: gravity {}, bounds {}x{}",
            params.gravity, params.bounds.width, params.bounds.height
        );
        Self {
            bodies: Vec::new(),
            params,
            step_count: 0,
            elapsed: 0.0,
            collision_events: Vec::new(),
            total_collisions: 0,
        }
    }

    /// Step the simulation forward by `dt`
    pub fn step(&mut self, dt: f32) {
        let report = step(&mut self.bodies, dt, &self.params);
        self.finish_step(dt, report);
    }

    /// Step with an extra external force per body (same order as `bodies()`)
    pub fn step_with_forces(&mut self, dt: f32, forces: &[Vector2]) -> Result<(), PhysicsError> {
        let report = step_with_forces(&mut self.bodies, dt, &self.params, forces)?;
        self.finish_step(dt, report);
        Ok(())
    }

    fn finish_step(&mut self, dt: f32, report: StepReport) {
        self.step_count += 1;
        self.elapsed += dt;
        self.total_collisions += report.events.len() as u64;
        self.collision_events = report.events;
    }

    /// Add a body, returning its index
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Remove a body. Later bodies shift down by one index.
    pub fn remove_body(&mut self, index: usize) -> Result<RigidBody, PhysicsError> {
        if index >= self.bodies.len() {
            return Err(PhysicsError::BodyNotFound(index));
        }
        Ok(self.bodies.remove(index))
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&RigidBody> {
        self.bodies.get(index)
    }

    /// Mutable access for scene setup between steps
    pub fn body_mut(&mut self, index: usize) -> Option<&mut RigidBody> {
        self.bodies.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Contacts resolved during the last step
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.collision_events
    }

    pub fn total_collisions(&self) -> u64 {
        self.total_collisions
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated seconds since creation
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Replace all constants at once
    pub fn set_params(&mut self, params: SimulationParams) -> Result<(), PhysicsError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn gravity(&self) -> f32 {
        self.params.gravity
    }

    /// Change gravity; rejected values leave the world unchanged
    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), PhysicsError> {
        let params = self.params.with_gravity(gravity);
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Sum of `m * v` over all bodies
    pub fn total_momentum(&self) -> Vector2 {
        self.bodies.iter().map(RigidBody::momentum).sum()
    }

    /// Sum of kinetic energy over all bodies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(RigidBody::kinetic_energy).sum()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::body::BodyBuilder;
    use crate::engine::physics::params::Bounds;
    use approx::assert_abs_diff_eq;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> RigidBody {
        BodyBuilder::new()
            .position(x, y)
            .velocity(vx, vy)
            .build()
            .unwrap()
    }

    fn two_ball_world() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        world.add_body(ball(10.0, 10.0, 1.0, 0.0));
        world.add_body(ball(30.0, 10.0, -1.0, 0.0));
        world
    }

    #[test]
    fn test_two_balls_meet_and_settle() {
        let mut world = two_ball_world();
        let mut first_collision = None;
        let mut window_peaks = [f32::MIN; 3];

        for frame in 0..300 {
            world.step(0.1);
            if first_collision.is_none() && !world.collision_events().is_empty() {
                first_collision = Some(frame);
                let event = world.collision_events()[0];
                assert_eq!((event.body_a, event.body_b), (0, 1));
            }
            for body in world.bodies() {
                assert!(body.position().y >= body.radius());
                let peak = &mut window_peaks[frame / 100];
                *peak = peak.max(body.position().y);
            }
        }

        let first = first_collision.expect("the balls never met");
        assert!(first < 150, "first collision at step {}", first);

        // Bounce amplitude only shrinks
        assert!(window_peaks[1] <= window_peaks[0]);
        assert!(window_peaks[2] <= window_peaks[1]);

        for body in world.bodies() {
            let y = body.position().y;
            assert!((1.0..1.5).contains(&y), "y = {}", y);
        }
        assert!(world.total_collisions() >= 1);
        assert_eq!(world.step_count(), 300);
        assert_abs_diff_eq!(world.elapsed(), 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_left_wall_bounce_through_step() {
        let params = SimulationParams::default().with_gravity(0.0);
        let mut world = PhysicsWorld::with_params(params).unwrap();
        world.add_body(ball(0.0, 10.0, -2.0, 0.0));

        world.step(0.1);

        let body = world.body(0).unwrap();
        assert_abs_diff_eq!(body.velocity().x, 1.6, epsilon = 1e-6);
        assert_abs_diff_eq!(body.position().x, 1.0);
    }

    #[test]
    fn test_gravity_only() {
        let mut world = PhysicsWorld::new();
        world.add_body(ball(20.0, 15.0, 0.0, 0.0));

        world.step(0.1);

        let body = world.body(0).unwrap();
        assert_abs_diff_eq!(body.velocity().y, -0.98, epsilon = 1e-6);
        assert_abs_diff_eq!(body.position().y, 15.0 - 0.098, epsilon = 1e-5);
    }

    #[test]
    fn test_gravity_independent_of_mass() {
        let mut world = PhysicsWorld::new();
        for (x, mass) in [(10.0, 0.5), (30.0, 50.0)] {
            let body = BodyBuilder::new().position(x, 15.0).mass(mass).build();
            world.add_body(body.unwrap());
        }

        for _ in 0..5 {
            world.step(0.1);
        }

        let (a, b) = (world.body(0).unwrap(), world.body(1).unwrap());
        assert_abs_diff_eq!(a.position().y, b.position().y, epsilon = 1e-4);
    }

    #[test]
    fn test_momentum_conserved_without_gravity_or_walls() {
        let params = SimulationParams::default()
            .with_gravity(0.0)
            .with_bounds(Bounds::new(1000.0, 1000.0));
        let mut world = PhysicsWorld::with_params(params).unwrap();
        world.add_body(
            BodyBuilder::new()
                .position(500.0, 500.0)
                .velocity(2.0, 0.5)
                .mass(1.0)
                .build()
                .unwrap(),
        );
        world.add_body(
            BodyBuilder::new()
                .position(504.0, 500.5)
                .velocity(-1.0, 0.0)
                .mass(3.0)
                .build()
                .unwrap(),
        );

        let before = world.total_momentum();
        let energy_before = world.kinetic_energy();
        for _ in 0..30 {
            world.step(0.1);
        }
        let after = world.total_momentum();

        assert!(world.total_collisions() >= 1);
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-3);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-3);
        assert!(world.kinetic_energy() < energy_before);
    }

    #[test]
    fn test_external_forces() {
        let params = SimulationParams::default().with_gravity(0.0);
        let mut world = PhysicsWorld::with_params(params).unwrap();
        world.add_body(ball(10.0, 10.0, 0.0, 0.0));
        world.add_body(ball(30.0, 10.0, 0.0, 0.0));

        world
            .step_with_forces(0.5, &[vec2(2.0, 0.0), Vector2::ZERO])
            .unwrap();

        assert_abs_diff_eq!(world.body(0).unwrap().velocity().x, 1.0);
        assert_eq!(world.body(1).unwrap().velocity(), Vector2::ZERO);
    }

    #[test]
    fn test_force_count_mismatch() {
        let mut world = two_ball_world();
        let err = world.step_with_forces(0.1, &[Vector2::ZERO]);
        assert!(matches!(
            err,
            Err(PhysicsError::ForceCountMismatch { bodies: 2, forces: 1 })
        ));
        assert_eq!(world.step_count(), 0);
    }

    #[test]
    fn test_pairs_processed_in_index_order() {
        let params = SimulationParams::default().with_gravity(0.0);
        let mut bodies = vec![
            ball(10.0, 10.0, 0.0, 0.0),
            ball(11.5, 10.0, 0.0, 0.0),
            ball(13.0, 10.0, 0.0, 0.0),
        ];

        let report = step(&mut bodies, 0.1, &params);

        let pairs: Vec<_> = report.events.iter().map(|e| (e.body_a, e.body_b)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_many_bodies_deterministic() {
        let scene = || {
            let mut bodies = Vec::new();
            for i in 0..12 {
                let x = 3.0 + (i % 6) as f32 * 6.0;
                let y = 4.0 + (i / 6) as f32 * 5.0;
                let vx = if i % 2 == 0 { 3.0 } else { -2.0 };
                bodies.push(ball(x, y, vx, 0.5 * i as f32));
            }
            bodies
        };
        let params = SimulationParams::default();

        let mut first = scene();
        let mut second = scene();
        for _ in 0..200 {
            step(&mut first, 0.05, &params);
            step(&mut second, 0.05, &params);
        }

        assert_eq!(first, second);
        for body in &first {
            assert!(body.position().is_finite());
            assert!(body.velocity().is_finite());
        }
    }

    #[test]
    fn test_concentric_bodies_do_not_blow_up() {
        let params = SimulationParams::default().with_gravity(0.0);
        let mut bodies = vec![ball(20.0, 10.0, 0.0, 0.0), ball(20.0, 10.0, 0.0, 0.0)];

        let report = step(&mut bodies, 0.1, &params);

        assert_eq!(report.events.len(), 1);
        assert!(report.events[0].normal == Vector2::ZERO);
        assert_eq!(bodies[0].position(), vec2(20.0, 10.0));
        assert!(bodies.iter().all(|b| b.velocity().is_finite()));
    }

    #[test]
    fn test_add_and_remove_bodies() {
        let mut world = two_ball_world();
        assert_eq!(world.len(), 2);

        let idx = world.add_body(ball(20.0, 5.0, 0.0, 0.0));
        assert_eq!(idx, 2);

        let removed = world.remove_body(0).unwrap();
        assert_eq!(removed.position(), vec2(10.0, 10.0));
        assert_eq!(world.len(), 2);
        assert_eq!(world.body(0).unwrap().position(), vec2(30.0, 10.0));

        assert!(matches!(world.remove_body(7), Err(PhysicsError::BodyNotFound(7))));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let params = SimulationParams::default().with_restitution(2.0);
        assert!(PhysicsWorld::with_params(params).is_err());

        let mut world = PhysicsWorld::new();
        assert!(world.set_params(params).is_err());
        assert_eq!(world.params().restitution, 0.8);
    }

    #[test]
    fn test_set_gravity_validates() {
        let mut world = two_ball_world();

        assert!(matches!(
            world.set_gravity(f32::NAN),
            Err(PhysicsError::InvalidParameter { name: "gravity", .. })
        ));
        assert!(world.set_gravity(f32::INFINITY).is_err());
        assert_eq!(world.gravity(), 9.8);

        world.step(0.1);
        assert!(world.bodies().iter().all(|b| b.position().is_finite()));

        world.set_gravity(1.6).unwrap();
        assert_eq!(world.gravity(), 1.6);
    }

    #[test]
    fn test_empty_world_steps() {
        let mut world = PhysicsWorld::default();
        assert!(world.is_empty());
        world.step(0.1);
        assert_eq!(world.step_count(), 1);
        assert!(world.collision_events().is_empty());
    }
}
