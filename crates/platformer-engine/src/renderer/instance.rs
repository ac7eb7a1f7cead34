use bytemuck::{Pod, Zeroable};

/// Per-sprite draw data read by the host page straight out of wasm memory.
/// Must match the JS reader: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Top-left X in world pixels.
    pub x: f32,
    /// Top-left Y in world pixels.
    pub y: f32,
    /// Texture id from the registry.
    pub texture: f32,
    /// Frame within a horizontal strip (0 for static sprites).
    pub frame: f32,
    /// Frames in the strip; the host divides the image width by this.
    pub frame_count: f32,
    /// Multiplier on the frame's natural size.
    pub scale: f32,
    /// 1.0 to mirror horizontally.
    pub flip_x: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// A single-frame, unscaled, opaque sprite.
    pub fn sprite(x: f32, y: f32, texture: u32) -> Self {
        Self {
            x,
            y,
            texture: texture as f32,
            frame: 0.0,
            frame_count: 1.0,
            scale: 1.0,
            flip_x: 0.0,
            alpha: 1.0,
        }
    }
}

/// Draw buffer for one frame.
#[derive(Debug)]
pub struct DrawBuffer {
    /// Static sprites first, animated sprites from `static_split` on.
    pub instances: Vec<DrawInstance>,
    /// Index where animated sprites begin.
    pub static_split: u32,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            static_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.static_split = 0;
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn set_static_split(&mut self, split: u32) {
        self.static_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<DrawInstance>(), DrawInstance::STRIDE_BYTES);
        assert_eq!(DrawInstance::FLOATS, 8);
    }

    #[test]
    fn floats_follow_field_order() {
        let mut buf = DrawBuffer::new();
        buf.push(DrawInstance::sprite(10.0, 20.0, 3));
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.as_floats(), &[10.0, 20.0, 3.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn clear_resets_split() {
        let mut buf = DrawBuffer::new();
        buf.push(DrawInstance::default());
        buf.set_static_split(1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.static_split, 0);
    }
}
