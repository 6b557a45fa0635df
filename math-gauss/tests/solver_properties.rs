//! Integration tests for the complete-solution solver
//!
//! Every solution returned by `evaluate` is checked against the original
//! system, on hand-built and on seeded random systems.

use approx::assert_abs_diff_eq;
use math_audio_gauss::blas_helpers::max_abs_residual;
use math_audio_gauss::{
    GaussConfig, GaussConfigBuilder, Solution, solve, solve_augmented, solve_with_config,
};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(-10.0..10.0))
}

fn random_vector(rng: &mut StdRng, len: usize) -> Array1<f64> {
    Array1::from_shape_fn(len, |_| rng.random_range(-10.0..10.0))
}

fn assert_solves(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>, tol: f64) {
    let residual = max_abs_residual(a, x, b);
    assert!(
        residual < tol,
        "residual {:e} exceeds {:e} for x = {}",
        residual,
        tol,
        x
    );
}

#[test]
fn test_random_nonsingular_square_systems() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=12 {
        // Diagonal dominance keeps the matrix nonsingular
        let mut a = random_matrix(&mut rng, n, n);
        for i in 0..n {
            a[[i, i]] += 100.0;
        }
        let b = random_vector(&mut rng, n);

        let space = solve(&a, &b).unwrap().unwrap_space();
        assert!(space.is_unique());
        assert_eq!(space.rank(), n);
        let x = space.evaluate(&Array1::zeros(0)).unwrap();
        for i in 0..n {
            assert_abs_diff_eq!(a.row(i).dot(&x), b[i], epsilon = 1e-8);
        }
    }
}

#[test]
fn test_uniform_random_system_from_demo() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Array2::from_shape_fn((20, 20), |_| rng.random_range(1.0..50.0));
    let b = Array1::from_shape_fn(20, |_| rng.random_range(1.0..50.0));

    let space = solve(&a, &b).unwrap().unwrap_space();
    assert!(space.is_unique());
    let x = space.evaluate(&Array1::zeros(0)).unwrap();
    assert_solves(&a, &x, &b, 1e-8);
}

#[test]
fn test_identity_returns_rhs() {
    for k in 1..=6 {
        let a = Array2::<f64>::eye(k);
        let b = Array1::from_iter((1..=k).map(|i| i as f64 * -1.5));

        let space = solve(&a, &b).unwrap().unwrap_space();
        assert!(space.is_unique());
        let x = space.evaluate(&Array1::zeros(0)).unwrap();
        for i in 0..k {
            assert_abs_diff_eq!(x[i], b[i], epsilon = 1e-15);
        }
    }
}

#[test]
fn test_zero_row_makes_system_inconsistent() {
    let a = array![[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]];
    let b = array![1.0, 0.5, 2.0];

    assert_eq!(solve(&a, &b).unwrap(), Solution::NoSolution);
}

#[test]
fn test_rank_two_three_by_four() {
    // Third row = first + second, so the rank is 2 and the system is consistent
    let a = array![
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 3.0, 4.0, 5.0],
    ];
    let b = array![1.0, 2.0, 3.0];

    let space = solve(&a, &b).unwrap().unwrap_space();
    assert!(!space.is_unique());
    assert_eq!(space.degrees_of_freedom(), 2);
    assert_eq!(space.rank(), 2);
    assert_eq!(space.num_unknowns(), 4);

    let mask = space.free_variable_mask().unwrap();
    assert_eq!(mask.free_count(), 2);
    assert_eq!(space.basis_matrix().unwrap().dim(), (4, 2));
    assert_eq!(mask.free_indices(), vec![2, 3]);
    assert_eq!(space.particular_solution(), &array![0.0, 1.0, 0.0, 0.0]);

    for c1 in [-3.0, 0.0, 0.5, 10.0] {
        for c2 in [-7.25, 0.0, 1.0, 4.0] {
            let x = space.evaluate(&array![c1, c2]).unwrap();
            assert_solves(&a, &x, &b, 1e-10);
            let free = mask.free_indices();
            assert_eq!(x[free[0]], c1);
            assert_eq!(x[free[1]], c2);
        }
    }
}

#[test]
fn test_all_ones_underdetermined_example() {
    let a = array![[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
    let b = array![3.0, 6.0];

    let space = solve(&a, &b).unwrap().unwrap_space();
    assert_eq!(space.degrees_of_freedom(), 2);
    assert_solves(&a, &space.evaluate(&array![0.0, 0.0]).unwrap(), &b, 1e-12);
    assert_solves(&a, &space.evaluate(&array![1.0, 1.0]).unwrap(), &b, 1e-12);
}

#[test]
fn test_random_rank_deficient_systems() {
    // Rounding leaves residuals far above the default consistency threshold
    let config = GaussConfigBuilder::new()
        .consistency_tolerance(1e-8)
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for (rows, cols, rank) in [(3, 4, 2), (5, 5, 3), (6, 3, 2), (4, 8, 1), (8, 6, 4)] {
        let a = random_matrix(&mut rng, rows, rank).dot(&random_matrix(&mut rng, rank, cols));
        let x0 = random_vector(&mut rng, cols);
        let b = a.dot(&x0);

        let space = solve_with_config(&a, &b, &config).unwrap().unwrap_space();
        assert_eq!(space.rank(), rank, "{rows}x{cols} rank {rank}");
        assert_eq!(space.degrees_of_freedom(), cols - rank);

        let coefficients = random_matrix(&mut rng, 5, cols - rank);
        let batch = space.evaluate_batch(&coefficients).unwrap();
        for x in batch.outer_iter() {
            assert_solves(&a, &x.to_owned(), &b, 1e-8);
        }

        let kernel = space.null_space().unwrap();
        for v in a.dot(&kernel).iter() {
            assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-8);
        }
    }
}

#[test]
fn test_random_rank_deficient_inconsistent() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_matrix(&mut rng, 4, 2).dot(&random_matrix(&mut rng, 2, 4));
    // A generic right-hand side lies outside the rank-2 column space
    let b = array![1.0, -2.0, 3.0, 0.5];

    assert!(!solve(&a, &b).unwrap().is_solvable());
}

#[test]
fn test_unique_evaluate_is_idempotent() {
    let a = array![[3.0, 1.0], [1.0, 2.0]];
    let b = array![9.0, 8.0];

    let space = solve(&a, &b).unwrap().unwrap_space();
    let first = space.evaluate(&Array1::zeros(0)).unwrap();
    for _ in 0..3 {
        assert_eq!(space.evaluate(&Array1::zeros(0)).unwrap(), first);
        assert_eq!(space.evaluate(&array![1.0, 2.0, 3.0]).unwrap(), first);
    }
    assert_abs_diff_eq!(first[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(first[1], 3.0, epsilon = 1e-12);
}

#[test]
fn test_pivot_tie_break_is_deterministic() {
    // Column 0 has |2| in rows 0 and 1. Picking row 1 would give a pivot row
    // of [1, -1.5] and leave [0, 2.5] in the last row.
    let original = array![[2.0, 1.0], [-2.0, 3.0], [1.0, 1.0]];

    for _ in 0..5 {
        let mut m = original.clone();
        let info = math_audio_gauss::row_reduce(&mut m, 1e-10);

        assert_eq!(info.rank, 1);
        assert_eq!(m, array![[1.0, 0.5], [0.0, 4.0], [0.0, 0.5]]);
    }
}

#[test]
fn test_overdetermined_consistent_system() {
    let a = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, -1.0]];
    let x_true = array![1.5, -2.0];
    let b = a.dot(&x_true);

    let space = solve(&a, &b).unwrap().unwrap_space();
    assert!(space.is_unique());
    let x = space.evaluate(&Array1::zeros(0)).unwrap();
    assert_abs_diff_eq!(x[0], 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(x[1], -2.0, epsilon = 1e-12);
}

#[test]
fn test_augmented_entry_point() {
    let augmented = array![[1.0, 1.0, 1.0, 3.0], [2.0, 2.0, 2.0, 6.0]];
    let solution = solve_augmented(&augmented, &GaussConfig::default()).unwrap();
    assert_eq!(solution.space().map(|s| s.degrees_of_freedom()), Some(2));
}

#[test]
fn test_concurrent_solves_on_distinct_inputs() {
    let handles: Vec<_> = (1..=4)
        .map(|k| {
            std::thread::spawn(move || {
                let a = Array2::<f64>::eye(k) * 2.0;
                let b = Array1::from_elem(k, 4.0);
                solve(&a, &b)
                    .unwrap()
                    .unwrap_space()
                    .evaluate(&Array1::zeros(0))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let x = handle.join().unwrap();
        assert!(x.iter().all(|&v| (v - 2.0).abs() < 1e-15));
    }
}
