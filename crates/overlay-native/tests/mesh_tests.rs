// Host-side tests for the triangle builder.
// The front-end is a binary crate, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}

use glam::Vec2;
use mesh::*;
use overlay_core::{ribbon, DrawList, Quad};

#[test]
fn vertex_layout_matches_pipeline() {
    // position at offset 0, colour at offset 8
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
}

#[test]
fn quad_becomes_two_triangles() {
    let list = DrawList {
        quads: vec![Quad {
            min: Vec2::new(10.0, 20.0),
            max: Vec2::new(30.0, 60.0),
            color: [1.0, 0.0, 0.0, 1.0],
        }],
        ..DrawList::default()
    };
    let mut out = Vec::new();
    build_vertices(&list, &mut out);
    assert_eq!(out.len(), 6);
    assert_eq!(out[0].pos, [10.0, 20.0]);
    assert_eq!(out[2].pos, [30.0, 60.0]);
    assert!(out.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
}

#[test]
fn ribbon_segments_follow_quads() {
    let points: Vec<Vec2> = (0..5).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect();
    let list = DrawList {
        quads: vec![Quad {
            min: Vec2::ZERO,
            max: Vec2::ONE,
            color: [0.0; 4],
        }],
        ribbon: ribbon(&points, 8.0),
        ribbon_color: [0.5, 0.5, 1.0],
    };
    let mut out = vec![Vertex {
        pos: [9.0, 9.0],
        color: [9.0; 4],
    }];
    build_vertices(&list, &mut out);
    // stale contents cleared; 1 quad + 4 segments
    assert_eq!(out.len(), 6 + 4 * 6);
    let head = &out[6];
    assert_eq!(head.color, [0.5, 0.5, 1.0, 1.0]);
    assert_eq!(out.last().map(|v| v.color[3]), Some(0.0));
}

#[test]
fn empty_list_draws_nothing() {
    let mut out = Vec::new();
    build_vertices(&DrawList::default(), &mut out);
    assert!(out.is_empty());
}
