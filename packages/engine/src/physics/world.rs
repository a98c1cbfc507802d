use rapier2d::prelude::*;

use super::BodyHandle;

/// Downward pull in px/s² (screen space, y down)
pub const DEFAULT_GRAVITY: (f32, f32) = (0.0, 1000.0);

/// Owns every rapier set plus the pipeline that steps them
pub struct PhysicsWorld {
    pub(super) bodies: RigidBodySet,
    pub(super) colliders: ColliderSet,
    pub(super) islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    pub(super) impulse_joints: ImpulseJointSet,
    pub(super) multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    gravity: Vector<Real>,
    steps: u64,
}

impl PhysicsWorld {
    /// Empty world stepped at a fixed timestep in seconds
    pub fn new(timestep: f32) -> Self {
        let mut params = IntegrationParameters::default();
        params.dt = timestep;
        // Scene is authored in pixels; one tile is the natural length unit.
        params.length_unit = crate::domain::TILE_SIZE;

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            params,
            gravity: vector![DEFAULT_GRAVITY.0, DEFAULT_GRAVITY.1],
            steps: 0,
        }
    }

    /// Number of steps taken since creation
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.0)
    }

    /// Advance one fixed timestep
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
        self.steps += 1;
    }
}
