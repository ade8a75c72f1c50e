use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use tableau::bridge::ShaderBridge;
use tableau::data_structures::layout::{BoxSide, CylinderParts, Primitive};
use tableau::data_structures::texture::{DecodedImage, TextureHandle};
use tableau::meshes::MeshLibrary;
use tableau::resources::codec::ImageCodec;
use tableau::resources::registry::TextureStorage;

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything the fakes observe, in one ordered log so tests can assert
/// push-before-draw sequencing across objects.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Bool(String, bool),
    Int(String, i32),
    Float(String, f32),
    Vec2(String, [f32; 2]),
    Vec3(String, [f32; 3]),
    Vec4(String, [f32; 4]),
    Mat4(String, [[f32; 4]; 4]),
    Sampler(String, u32),
    Draw(Primitive),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Shader bridge fake that records every push.
pub struct RecordingBridge {
    pub log: EventLog,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_log(log: EventLog) -> Self {
        Self { log }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }

    /// Most recent value pushed to a bool uniform.
    pub fn last_bool(&self, name: &str) -> Option<bool> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Bool(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_sampler(&self, name: &str) -> Option<u32> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Sampler(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_float(&self, name: &str) -> Option<f32> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Float(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec2(&self, name: &str) -> Option<[f32; 2]> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Vec2(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec3(&self, name: &str) -> Option<[f32; 3]> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Vec3(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_vec4(&self, name: &str) -> Option<[f32; 4]> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Vec4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }

    pub fn last_mat4(&self, name: &str) -> Option<[[f32; 4]; 4]> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            Event::Mat4(n, v) if n == name => Some(*v),
            _ => None,
        })
    }
}

impl Default for RecordingBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderBridge for RecordingBridge {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.push(Event::Bool(name.to_string(), value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.push(Event::Int(name.to_string(), value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.push(Event::Float(name.to_string(), value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.push(Event::Vec2(name.to_string(), value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.push(Event::Vec3(name.to_string(), value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.push(Event::Vec4(name.to_string(), value.into()));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.push(Event::Mat4(name.to_string(), value.into()));
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        self.push(Event::Sampler(name.to_string(), slot));
    }
}

/// Texture storage fake: mints sequential handles and records uploads,
/// binds and releases.
#[derive(Default)]
pub struct StubStorage {
    next_handle: u64,
    pub uploads: Vec<String>,
    pub binds: Vec<(u32, TextureHandle)>,
    pub released: Vec<TextureHandle>,
}

impl StubStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextureStorage for StubStorage {
    fn upload(&mut self, _image: &DecodedImage, label: &str) -> TextureHandle {
        let handle = TextureHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.uploads.push(label.to_string());
        handle
    }

    fn bind(&mut self, slot: u32, handle: TextureHandle) {
        self.binds.push((slot, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}

/// Codec fake serving decoded images from memory. Unknown paths fail the
/// way a missing file would.
#[derive(Default)]
pub struct StubCodec {
    images: HashMap<PathBuf, DecodedImage>,
}

impl StubCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, image: DecodedImage) {
        self.images.insert(path.into(), image);
    }

    /// A codec already holding `count` distinct 3-channel images named
    /// `img0.png` .. `img{count-1}.png`.
    pub fn with_images(count: usize) -> Self {
        let mut codec = Self::new();
        for index in 0..count {
            codec.insert(format!("img{index}.png"), decoded(2, 2, 3));
        }
        codec
    }
}

impl ImageCodec for StubCodec {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("could not load image {}", path.display()))
    }
}

/// A flat gray image with the requested channel count.
pub fn decoded(width: u32, height: u32, channels: u8) -> DecodedImage {
    DecodedImage {
        pixels: vec![127; (width * height) as usize * channels as usize],
        width,
        height,
        channels,
    }
}

/// Combined bridge + storage fake, mirroring how the real wgpu backend
/// implements both seams on one object.
pub struct FakeBackend {
    pub bridge: RecordingBridge,
    pub storage: StubStorage,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            bridge: RecordingBridge::new(),
            storage: StubStorage::new(),
        }
    }

    pub fn with_log(log: EventLog) -> Self {
        Self {
            bridge: RecordingBridge::with_log(log),
            storage: StubStorage::new(),
        }
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderBridge for FakeBackend {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bridge.set_bool(name, value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.bridge.set_int(name, value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.bridge.set_float(name, value);
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.bridge.set_vec2(name, value);
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.bridge.set_vec3(name, value);
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.bridge.set_vec4(name, value);
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.bridge.set_mat4(name, value);
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        self.bridge.set_sampler(name, slot);
    }
}

impl TextureStorage for FakeBackend {
    fn upload(&mut self, image: &DecodedImage, label: &str) -> TextureHandle {
        self.storage.upload(image, label)
    }

    fn bind(&mut self, slot: u32, handle: TextureHandle) {
        self.storage.bind(slot, handle)
    }

    fn release(&mut self, handle: TextureHandle) {
        self.storage.release(handle)
    }
}

/// Mesh library fake logging draws into the shared event log.
pub struct RecordingMeshes {
    pub log: EventLog,
}

impl RecordingMeshes {
    pub fn with_log(log: EventLog) -> Self {
        Self { log }
    }
}

impl MeshLibrary for RecordingMeshes {
    fn draw_plane(&mut self) {
        self.log.borrow_mut().push(Event::Draw(Primitive::Plane));
    }

    fn draw_box(&mut self) {
        self.log.borrow_mut().push(Event::Draw(Primitive::Box));
    }

    fn draw_box_side(&mut self, side: BoxSide) {
        self.log
            .borrow_mut()
            .push(Event::Draw(Primitive::BoxSide(side)));
    }

    fn draw_sphere(&mut self) {
        self.log.borrow_mut().push(Event::Draw(Primitive::Sphere));
    }

    fn draw_cylinder(&mut self, parts: CylinderParts) {
        self.log
            .borrow_mut()
            .push(Event::Draw(Primitive::Cylinder(parts)));
    }

    fn draw_torus(&mut self) {
        self.log.borrow_mut().push(Event::Draw(Primitive::Torus));
    }

    fn draw_tapered_cylinder(&mut self) {
        self.log
            .borrow_mut()
            .push(Event::Draw(Primitive::TaperedCylinder));
    }
}
