//! Primitive solid builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder/sphere — everything is successive
//! sweeps. Parameters are handed to the kernel as-is: zero or negative
//! extents produce whatever degenerate shape the kernel defines.

use std::f64::consts::PI;

use tracing::{info, instrument};
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::solid::Solid;

/// Spherical solid of the given radius, centered at the origin.
#[instrument]
pub fn sphere(radius: f64) -> Solid {
    info!(radius, "creating sphere primitive");

    // Semicircle arc in the XZ plane: rotate (r,0,0) around Y by π,
    // passing through (0,0,r) to (-r,0,0).
    let v_right = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let arc_wire = builder::rsweep(&v_right, Point3::origin(), Vector3::unit_y(), Rad(PI));

    // Close with the diameter edge from (-r,0,0) back to (r,0,0).
    let v_left = builder::vertex(Point3::new(-radius, 0.0, 0.0));
    let diameter: Edge = builder::tsweep(&v_left, Vector3::new(2.0 * radius, 0.0, 0.0));

    let mut edges: Vec<Edge> = Vec::new();
    for edge in arc_wire.edge_iter() {
        edges.push(edge.clone());
    }
    edges.push(diameter);
    let closed_wire = Wire::from_iter(edges);

    let face =
        builder::try_attach_plane(&[closed_wire]).expect("Failed to create semicircle face");

    // Revolve the half-disc around Z by 2π.
    Solid::from_kernel(builder::rsweep(
        &face,
        Point3::origin(),
        Vector3::unit_z(),
        Rad(2.0 * PI),
    ))
}

/// Axis-aligned box with one corner at the origin, extending to `(x, y, z)`.
/// Extents are full side lengths.
#[instrument]
pub fn cube(x: f64, y: f64, z: f64) -> Solid {
    info!(x, y, z, "creating cube primitive");

    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(x, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, y, 0.0));
    Solid::from_kernel(builder::tsweep(&face, Vector3::new(0.0, 0.0, z)))
}

/// Cylinder along +Z: base circle centered at the origin, swept to `height`.
#[instrument]
pub fn cylinder(radius: f64, height: f64) -> Solid {
    info!(radius, height, "creating cylinder primitive");

    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).expect("Failed to create circular face");
    Solid::from_kernel(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}
