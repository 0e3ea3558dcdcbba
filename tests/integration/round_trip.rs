// tests/integration/round_trip.rs
use sift_lines_engine::{
    classify::classify,
    config::ConfigBuilder,
    options::Category,
    run,
};

#[path = "../common/mod.rs"]
mod common;
use common::Workspace;

#[test]
fn output_files_reclassify_into_the_same_categories() {
    let ws = Workspace::new();
    let input = ws.write_file(
        "mixed.txt",
        "12\n1.0\n-0.0\n9223372036854775808\nabc\n3e-9\n+5\n1.2.3\n1e300\n",
    );
    let out = ws.path().join("out");
    let config = ConfigBuilder::default()
        .inputs(vec![input])
        .output_dir(&out)
        .build()
        .unwrap();

    let result = run(&config).unwrap();
    let summary = result.stats.summary();

    let files = [
        (Category::Integer, "out/integers.txt", summary.integers.count),
        (Category::Float, "out/floats.txt", summary.floats.count),
        (Category::String, "out/strings.txt", summary.strings.count),
    ];
    let mut total = 0;
    for (category, file, count) in files {
        let lines = ws.read_lines(file);
        assert_eq!(lines.len() as u64, count, "{file}");
        for line in &lines {
            assert_eq!(classify(line).category(), category, "{file}: {line:?}");
        }
        total += lines.len();
    }
    assert_eq!(total, 9);
}
