//! Shared mesh fixtures for integration tests.

#![allow(dead_code)]

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Raw mesh arrays as handed to the pipeline.
pub struct Fixture {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

/// Installs a test subscriber filtered by `RUST_LOG`, warnings by default.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn radial_normals(positions: &[Vec3]) -> Vec<Vec3> {
    positions.iter().map(|p| p.normalize_or_zero()).collect()
}

/// Unit cube centered at the origin, outward winding, 8 shared vertices.
pub fn unit_cube() -> Fixture {
    let positions: Vec<Vec3> = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z) - Vec3::splat(0.5))
    .collect();

    let indices = vec![
        0, 2, 1, 0, 3, 2, // bottom
        4, 5, 6, 4, 6, 7, // top
        0, 1, 5, 0, 5, 4, // front
        2, 3, 7, 2, 7, 6, // back
        3, 0, 4, 3, 4, 7, // left
        1, 2, 6, 1, 6, 5, // right
    ];

    Fixture {
        normals: radial_normals(&positions),
        positions,
        indices,
    }
}

/// Flat unit square in the XZ plane, two triangles sharing the 0-2 diagonal.
pub fn flat_square() -> Fixture {
    Fixture {
        positions: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ],
        normals: vec![Vec3::Y; 4],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Open dome: a pole at `(0, 1, 0)` fanned to a unit rim of `rim` vertices
/// at `y = 0`. Vertex 0 is the pole.
pub fn dome(rim: u32) -> Fixture {
    let mut positions = vec![Vec3::Y];
    for i in 0..rim {
        let angle = TAU * i as f32 / rim as f32;
        positions.push(Vec3::new(angle.cos(), 0.0, angle.sin()));
    }

    let mut indices = Vec::with_capacity(rim as usize * 3);
    for i in 0..rim {
        let current = 1 + i;
        let next = 1 + (i + 1) % rim;
        indices.extend_from_slice(&[0, next, current]);
    }

    Fixture {
        normals: radial_normals(&positions),
        positions,
        indices,
    }
}

/// Closed UV sphere of radius 1 with single pole vertices and no seam duplicates.
pub fn uv_sphere(stacks: u32, slices: u32) -> Fixture {
    let mut positions = vec![Vec3::Y];
    for stack in 1..stacks {
        let phi = PI * stack as f32 / stacks as f32;
        for slice in 0..slices {
            let theta = TAU * slice as f32 / slices as f32;
            positions.push(Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()));
        }
    }
    positions.push(Vec3::NEG_Y);

    let bottom = positions.len() as u32 - 1;
    let ring = |stack: u32, slice: u32| 1 + (stack - 1) * slices + slice % slices;

    let mut indices = Vec::new();
    for slice in 0..slices {
        indices.extend_from_slice(&[0, ring(1, slice + 1), ring(1, slice)]);
    }
    for stack in 1..stacks - 1 {
        for slice in 0..slices {
            let a = ring(stack, slice);
            let b = ring(stack, slice + 1);
            let c = ring(stack + 1, slice);
            let d = ring(stack + 1, slice + 1);
            indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }
    for slice in 0..slices {
        indices.extend_from_slice(&[bottom, ring(stacks - 1, slice), ring(stacks - 1, slice + 1)]);
    }

    Fixture {
        normals: radial_normals(&positions),
        positions,
        indices,
    }
}
