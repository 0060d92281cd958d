use approx::assert_relative_eq;
use galva::{
    Config, DimensionlessPoint, EquilibriumPotential, Error, Geometry, ProfileRequest, run_profile,
};
use integration_tests::{
    cell_with_cutoff, coarse, ideal_solution, linear_isotherm, reference_cell,
};

#[test]
fn ideal_sphere_discharges_to_cutoff() {
    let cell = reference_cell(Geometry::Spherical);
    let request = ProfileRequest {
        model: ideal_solution(&cell),
        cell,
        point: DimensionlessPoint::new(-1.0, 1.0),
        // Fine enough in time that the mean SOC cannot step over the snapshot band.
        config: Config::new(30, 8000).expect("valid config"),
        sample_count: 100,
        target_soc: 0.3,
    };

    let result = run_profile(&request).expect("sphere discharges");

    assert!(result.steps > 0 && result.steps <= request.config.max_steps());
    assert!(result.max_soc > 0.5 && result.max_soc < 1.0);
    assert!(result.trajectory.len() <= 100);

    let first = result.trajectory.first().expect("non-empty trajectory");
    let last = result.trajectory.last().expect("non-empty trajectory");
    assert!(first.voltage > -0.15);
    assert!(last.voltage <= -0.15);
    assert!(first.voltage > last.voltage);
    assert_relative_eq!(last.soc, result.max_soc);

    let snapshot = result.snapshot.expect("run passes through 0.3");
    assert_eq!(snapshot.concentration.len(), request.config.grid_size());
    // Insertion through the surface leaves the center least filled.
    let center = snapshot.concentration[0];
    let surface = snapshot.concentration[snapshot.concentration.len() - 1];
    assert!(center < 0.3 && surface > 0.3);
}

#[test]
fn tabulated_isotherm_stops_near_its_cutoff() {
    let cell = cell_with_cutoff(Geometry::Spherical, 0.2);
    let model = linear_isotherm();
    assert_relative_eq!(model.potential(0.8), 0.2, epsilon = 1e-12);

    let request = ProfileRequest {
        model,
        cell,
        point: DimensionlessPoint::new(0.0, 1.0),
        config: coarse(),
        sample_count: 20,
        target_soc: 2.0,
    };

    let result = run_profile(&request).expect("sphere discharges");

    // The surface crosses 0.8 first, so the mean stays below it.
    assert!(result.max_soc > 0.0 && result.max_soc < 0.8);
    assert!(result.snapshot.is_none());

    let last = result.trajectory.last().expect("non-empty trajectory");
    assert!(last.voltage <= 0.2 && last.voltage > 0.1);
}

#[test]
fn step_budget_is_reported() {
    let cell = reference_cell(Geometry::Spherical);
    let request = ProfileRequest {
        model: ideal_solution(&cell),
        cell,
        point: DimensionlessPoint::new(-1.0, 1.0),
        config: coarse().with_max_steps(100).expect("valid budget"),
        sample_count: 10,
        target_soc: 0.3,
    };

    assert!(matches!(
        run_profile(&request),
        Err(Error::ExceededBudget { steps: 100 })
    ));
}

#[test]
fn derived_quantities_follow_geometry() {
    let point = DimensionlessPoint::new(-1.0, 1.0);
    let plane = point.derive(&reference_cell(Geometry::Planar));
    let cylinder = point.derive(&reference_cell(Geometry::Cylindrical));
    let sphere = point.derive(&reference_cell(Geometry::Spherical));

    // Same Ξ means the same rate and the same nominal discharge time.
    for derived in [plane, cylinder, sphere] {
        assert_relative_eq!(derived.c_rate, 36.0, max_relative = 1e-12);
        assert_relative_eq!(derived.discharge_time, 100.0, max_relative = 1e-12);
        assert_relative_eq!(derived.max_concentration, plane.max_concentration);
    }

    // A cylinder shares the plate's size factor; a sphere doubles it.
    assert_relative_eq!(cylinder.particle_size, plane.particle_size);
    assert_relative_eq!(cylinder.surface_area, plane.surface_area);
    assert_relative_eq!(
        sphere.particle_size / plane.particle_size,
        2_f64.sqrt(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        sphere.surface_area / plane.surface_area,
        2_f64.sqrt(),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        sphere.current_density / plane.current_density,
        1.0 / 2_f64.sqrt(),
        max_relative = 1e-12
    );
    assert!(sphere.current_density < 0.0);
}
