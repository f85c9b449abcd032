use approx::assert_abs_diff_eq;
use fastVoronoi::prelude::*;

fn builder() -> PartitionBuilder<f32, 5> {
    PartitionBuilder::new()
        .seeds(12)
        .samples(30_001)
        .workers(6)
        .master_seed(7)
}

#[test]
fn test_parallel_reduce_matches_sequential_sizes() {
    let partitions = builder().build().unwrap().run().unwrap().into_partitions();
    let expected = sequential_reduce(&partitions, Partition::len);

    // 12 partitions, none of these counts divide it evenly.
    for workers in [5usize, 7, 8, 13, 32] {
        let got = parallel_reduce(&partitions, workers, Partition::len).unwrap();
        assert_eq!(got, expected, "workers = {}", workers);
    }
}

#[test]
fn test_parallel_and_sequential_partitions_agree() {
    let par = builder().parallel(true).build().unwrap().run().unwrap();
    let seq = builder().parallel(false).build().unwrap().run().unwrap();
    assert_eq!(par.partitions(), seq.partitions());
}

#[test]
fn test_parallel_and_sequential_reports_agree() {
    let par = Experiment::new(builder().parallel(true).build().unwrap())
        .run()
        .unwrap();
    let seq = Experiment::new(builder().parallel(false).build().unwrap())
        .run()
        .unwrap();

    for (a, b) in par.stddevs.values().iter().zip(seq.stddevs.values()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-10);
    }
    assert_eq!(par.medians, seq.medians);
}

#[test]
fn test_evaluate_each_statistic_in_partition_order() {
    let result = builder().build().unwrap().run().unwrap();
    for statistic in [Statistic::StdDev, Statistic::Median, Statistic::Diameter] {
        let values = evaluate(result.partitions(), statistic, 4, true).unwrap();
        assert_eq!(values.len(), 12);
        for (value, partition) in values.iter().zip(result.partitions()) {
            assert_eq!(*value, statistic.apply(partition));
        }
    }
}
