// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstructed volumes compared against analytic integrals.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use surfvol_geometry::{build_surface, volume_under_surface, Point3, PointSet};

/// Uniform random samples of `f` over `[x0, x1] x [y0, y1]`.
fn random_samples(
    f: impl Fn(f64, f64) -> f64,
    count: usize,
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
    seed: u64,
) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(x0..x1);
            let y = rng.gen_range(y0..y1);
            Point3::new(x, y, f(x, y))
        })
        .collect()
}

/// Samples of `f` on a regular 101 x 101 grid over the unit square.
fn grid_samples(f: impl Fn(f64, f64) -> f64) -> PointSet {
    (0..=100)
        .flat_map(|i| (0..=100).map(move |j| (i as f64 * 0.01, j as f64 * 0.01)))
        .map(|(x, y)| Point3::new(x, y, f(x, y)))
        .collect()
}

fn relative_error(result: f64, expected: f64) -> f64 {
    ((result - expected) / expected).abs()
}

#[test]
fn plane_over_unit_square_converges_to_one() {
    let points = random_samples(|x, y| x + y, 10_000, (0.0, 1.0), (0.0, 1.0), 2018);
    let mesh = build_surface(points).unwrap();
    let volume = volume_under_surface(&mesh);

    println!("x + y over [0,1]^2: {volume:.6}");
    assert!(
        relative_error(volume, 1.0) < 0.01,
        "volume {volume} not within 1% of 1.0"
    );
}

#[test]
fn error_shrinks_with_sample_density() {
    let coarse = random_samples(|x, y| x + y, 500, (0.0, 1.0), (0.0, 1.0), 3);
    let fine = random_samples(|x, y| x + y, 20_000, (0.0, 1.0), (0.0, 1.0), 3);

    let coarse_err = relative_error(volume_under_surface(&build_surface(coarse).unwrap()), 1.0);
    let fine_err = relative_error(volume_under_surface(&build_surface(fine).unwrap()), 1.0);

    assert!(
        fine_err < coarse_err,
        "fine error {fine_err} should be below coarse error {coarse_err}"
    );
}

#[test]
fn paraboloid_over_symmetric_square() {
    let points = random_samples(
        |x, y| x * x + y * y,
        10_000,
        (-1.0, 1.0),
        (-1.0, 1.0),
        77,
    );
    let volume = volume_under_surface(&build_surface(points).unwrap());
    assert!(
        relative_error(volume, 8.0 / 3.0) < 0.02,
        "volume {volume} not within 2% of 8/3"
    );
}

#[test]
fn grid_samples_match_known_integrals() {
    let cases: [(&str, fn(f64, f64) -> f64, f64); 5] = [
        ("x + y", |x, y| x + y, 1.0),
        ("x * y", |x, y| x * y, 0.25),
        ("x^2", |x, _| x * x, 1.0 / 3.0),
        ("sqrt(x^2 + y^2)", |x, y| (x * x + y * y).sqrt(), 0.765196),
        ("exp(x^2 + y^2)", |x, y| (x * x + y * y).exp(), 2.13935),
    ];

    for (name, f, expected) in cases {
        let volume = volume_under_surface(&build_surface(grid_samples(f)).unwrap());
        assert!(
            (volume - expected).abs() < 0.01,
            "{name}: got {volume}, expected {expected}"
        );
    }
}

#[test]
fn negative_surface_integrates_negative() {
    let points = random_samples(|x, y| -(x + y), 2_000, (0.0, 1.0), (0.0, 1.0), 5);
    let volume = volume_under_surface(&build_surface(points).unwrap());
    assert!(volume < 0.0);
    assert!(relative_error(volume, -1.0) < 0.05);
}

#[test]
fn scaling_heights_scales_reconstructed_volume() {
    let points = random_samples(|x, y| (x * 3.0).sin() + y, 1_000, (0.0, 2.0), (0.0, 1.0), 9);
    let mut mesh = build_surface(points).unwrap();
    let base = volume_under_surface(&mesh);

    mesh.map_points(|p| p.z *= 2.5);
    let scaled = volume_under_surface(&mesh);
    assert!((scaled - 2.5 * base).abs() <= 1e-9 * base.abs().max(1.0));
}
