use approx::assert_abs_diff_eq;
use fastVoronoi::prelude::*;
#[cfg(feature = "cpu")]
use ndarray::Array2;

fn cross_seeds() -> Vec<[f32; 2]> {
    vec![[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0]]
}

#[test]
fn test_cross_seeds_cover_cloud() {
    let result = PartitionBuilder::<f32, 2>::new()
        .seed_points(&cross_seeds())
        .samples(1000)
        .workers(4)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.len(), 4);
    assert_eq!(result.total_points(), 1000);
    assert_eq!(result.dropped_samples(), 0);

    // Every point sits in the partition of its nearest seed, so no point can
    // appear in two partitions.
    for partition in result.partitions() {
        for p in partition.points() {
            assert!(p.norm() <= 1.0);
            assert_eq!(result.seeds().nearest_index(p), partition.seed_index());
        }
    }
    // A uniform square cloud reaches all four cross cells.
    assert!(result.partitions().iter().all(|p| !p.is_empty()));
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_seed_input() {
    let flat: Vec<f32> = cross_seeds().into_iter().flatten().collect();
    let seeds = Array2::from_shape_vec((4, 2), flat).unwrap();

    let engine = PartitionBuilder::<f32, 2>::new()
        .seed_points(&seeds)
        .samples(64)
        .workers(2)
        .build()
        .unwrap();
    assert_eq!(engine.seeds().len(), 4);
    assert_eq!(engine.seeds().points()[3], Point::from_array([0.0, -1.0]));
}

#[test]
fn test_total_points_for_worker_counts() {
    for workers in [1usize, 2, 3, 5, 7, 16] {
        let samples = 10_007;
        let result = PartitionBuilder::<f32, 3>::new()
            .seeds(10)
            .samples(samples)
            .workers(workers)
            .build()
            .unwrap()
            .run()
            .unwrap();
        let sizes: usize = result.partitions().iter().map(Partition::len).sum();
        assert_eq!(sizes, workers * (samples / workers));
        assert_eq!(result.total_points(), sizes);
        assert_eq!(result.workers(), workers);
    }
}

#[test]
fn test_experiment_report_shape() {
    let engine = PartitionBuilder::<f32, 8>::new()
        .seeds(16)
        .samples(20_000)
        .workers(4)
        .build()
        .unwrap();
    let report = Experiment::new(engine).run().unwrap();

    assert_eq!(report.stddevs.len(), 16);
    assert_eq!(report.medians.len(), 16);
    for series in [&report.stddevs, &report.medians] {
        assert!(series.values().windows(2).all(|w| w[0] <= w[1]));
        assert!(series.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    }
    // Points live in the unit ball, centroids too, so distances stay below 2.
    assert!(report.stddevs.values().iter().all(|&v| v < 2.0));

    let text = report.medians.to_string();
    assert!(text.starts_with('{') && text.ends_with('}'));
    assert_eq!(text.matches(", ").count(), 15);
}

#[test]
fn test_single_seed_holds_everything() {
    let result = PartitionBuilder::<f64, 4>::new()
        .seeds(1)
        .samples(999)
        .workers(3)
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(result.partitions()[0].len(), 999);

    let centroid = result.partitions()[0].centroid();
    // The mean of a uniform cube sample sits near the origin.
    assert!(centroid.norm() < 0.2);
}

#[test]
fn test_statistics_on_handmade_partitions() {
    let empty = Partition::<f32, 2>::new(0);
    assert_eq!(median(&empty), 0.0);
    assert_eq!(stddev(&empty), 0.0);

    let single = Partition::from_points(1, vec![Point::from_array([0.3f32, 0.4])]);
    assert_eq!(median(&single), 0.0);

    let same = Partition::from_points(2, vec![Point::from_array([-0.5f32, 0.25]); 7]);
    assert_abs_diff_eq!(stddev(&same), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(diameter(&same), 0.0);
}

#[test]
fn test_error_handling() {
    let err = PartitionBuilder::<f32, 3>::new()
        .seed_points(&vec![1.0f32, 2.0])
        .build()
        .unwrap_err();
    assert_eq!(err, VoronoiError::DimensionMismatch { expected: 3, got: 2 });

    let err = PartitionBuilder::<f32, 3>::new()
        .seed_points(&Vec::<[f32; 3]>::new())
        .build()
        .unwrap_err();
    assert_eq!(err, VoronoiError::EmptySeedSet);
}
