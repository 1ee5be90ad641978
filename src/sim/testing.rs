//! Scripted backend for unit tests
//!
//! Records every call and replays queued collision lists on `step`.

use std::collections::{BTreeSet, VecDeque};

use glam::{Quat, Vec3};

use super::action::Control;
use super::backend::{
    AgentTelemetry, Backend, BoxDesc, CameraDesc, CameraId, EntityId, Frame, ModelDesc,
    Observation, SphereDesc,
};
use crate::error::BackendError;
use crate::settings::LightConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetLight,
    AddBox(EntityId, BoxDesc),
    AddSphere(EntityId, SphereDesc),
    AddModel(EntityId, ModelDesc),
    Impulse(EntityId, Vec3),
    Remove(EntityId),
    LocateAgent(Vec3, f32),
    AddCamera(CameraId),
    Step(Control),
    Render(CameraId, Vec3, Quat),
}

#[derive(Debug)]
pub struct ScriptedBackend {
    pub calls: Vec<Call>,
    pub resident: BTreeSet<EntityId>,
    pub collisions: VecDeque<Vec<EntityId>>,
    pub telemetry: AgentTelemetry,
    /// Fail the n-th `add_*` call (0-based) when set
    pub fail_create_at: Option<usize>,
    width: u32,
    height: u32,
    next_id: u32,
    creates: usize,
}

impl ScriptedBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            resident: BTreeSet::new(),
            collisions: VecDeque::new(),
            telemetry: AgentTelemetry::default(),
            fail_create_at: None,
            width,
            height,
            next_id: 100,
            creates: 0,
        }
    }

    /// Report `ids` as collided on the next step
    pub fn queue_collisions(&mut self, ids: &[EntityId]) {
        self.collisions.push_back(ids.to_vec());
    }

    pub fn spheres(&self) -> Vec<(EntityId, &SphereDesc)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::AddSphere(id, d) => Some((*id, d)),
                _ => None,
            })
            .collect()
    }

    pub fn boxes(&self) -> Vec<(EntityId, &BoxDesc)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::AddBox(id, d) => Some((*id, d)),
                _ => None,
            })
            .collect()
    }

    pub fn models(&self) -> Vec<(EntityId, &ModelDesc)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::AddModel(id, d) => Some((*id, d)),
                _ => None,
            })
            .collect()
    }

    pub fn impulses(&self) -> Vec<(EntityId, Vec3)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Impulse(id, v) => Some((*id, *v)),
                _ => None,
            })
            .collect()
    }

    pub fn removed(&self) -> Vec<EntityId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Remove(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn steps(&self) -> Vec<Control> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Step(control) => Some(*control),
                _ => None,
            })
            .collect()
    }

    /// Number of `add_*` calls attempted so far
    pub fn creates(&self) -> usize {
        self.creates
    }

    fn create(&mut self, kind: &'static str) -> Result<EntityId, BackendError> {
        let n = self.creates;
        self.creates += 1;
        if self.fail_create_at == Some(n) {
            return Err(BackendError::Create {
                kind,
                reason: "scripted failure".into(),
            });
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.resident.insert(id);
        Ok(id)
    }
}

impl Backend for ScriptedBackend {
    fn set_light(&mut self, _light: &LightConfig) -> Result<(), BackendError> {
        self.calls.push(Call::SetLight);
        Ok(())
    }

    fn add_box(&mut self, desc: BoxDesc) -> Result<EntityId, BackendError> {
        let id = self.create("box")?;
        self.calls.push(Call::AddBox(id, desc));
        Ok(id)
    }

    fn add_sphere(&mut self, desc: SphereDesc) -> Result<EntityId, BackendError> {
        let id = self.create("sphere")?;
        self.calls.push(Call::AddSphere(id, desc));
        Ok(id)
    }

    fn add_model(&mut self, desc: ModelDesc) -> Result<EntityId, BackendError> {
        let id = self.create("model")?;
        self.calls.push(Call::AddModel(id, desc));
        Ok(id)
    }

    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3) -> Result<(), BackendError> {
        self.calls.push(Call::Impulse(id, impulse));
        Ok(())
    }

    fn remove_entity(&mut self, id: EntityId) -> Result<(), BackendError> {
        self.calls.push(Call::Remove(id));
        self.resident.remove(&id);
        Ok(())
    }

    fn locate_agent(&mut self, pos: Vec3, rot_y: f32) -> Result<(), BackendError> {
        self.calls.push(Call::LocateAgent(pos, rot_y));
        Ok(())
    }

    fn add_camera_view(&mut self, _desc: CameraDesc) -> Result<CameraId, BackendError> {
        let id = CameraId(1);
        self.calls.push(Call::AddCamera(id));
        Ok(id)
    }

    fn step(&mut self, control: Control) -> Result<Observation, BackendError> {
        self.calls.push(Call::Step(control));
        let collided = self.collisions.pop_front().unwrap_or_default();
        Ok(Observation {
            frame: Frame::filled(self.width, self.height, Vec3::new(0.2, 0.4, 0.6)),
            collided,
        })
    }

    fn render(&mut self, camera: CameraId, pos: Vec3, rot: Quat) -> Result<Frame, BackendError> {
        self.calls.push(Call::Render(camera, pos, rot));
        Ok(Frame::filled(8, 8, Vec3::ONE))
    }

    fn agent_telemetry(&self) -> AgentTelemetry {
        self.telemetry
    }
}
