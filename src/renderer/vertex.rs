//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (linear, ready for an sRGB surface)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub ground: [f32; 4],
    pub player: [f32; 4],
    pub obstacle: [f32; 4],
    pub overlay: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: srgb(0xff, 0xff, 0xff, 1.0),
            ground: srgb(0x22, 0x8b, 0x22, 1.0),
            player: srgb(0x00, 0x7b, 0xff, 1.0),
            obstacle: srgb(0xff, 0x2e, 0x2e, 1.0),
            overlay: [0.0, 0.0, 0.0, 0.55],
        }
    }
}

/// 8-bit sRGB channels to linear floats
pub fn srgb(r: u8, g: u8, b: u8, alpha: f32) -> [f32; 4] {
    fn channel(c: u8) -> f32 {
        let c = c as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    [channel(r), channel(g), channel(b), alpha]
}
