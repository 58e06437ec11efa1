//! Benchmark fixtures, generated at runtime.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use gitlab_codeowners_core::generate::{GeneratorConfig, generate};
use std::sync::LazyLock;

static SMALL: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::small()));
static MEDIUM: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::medium()));
static LARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::large()));
static XLARGE: LazyLock<String> = LazyLock::new(|| generate(&GeneratorConfig::xlarge()));
static MAX_SIZE: LazyLock<String> =
    LazyLock::new(|| generate(&GeneratorConfig::target_bytes(3_000_000)));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("small", SMALL.as_str()),
            ("medium", MEDIUM.as_str()),
            ("large", LARGE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Extended fixtures including stress tests up to ~3MB.
pub fn fixtures_extended() -> &'static [(&'static str, &'static str)] {
    static FIXTURES: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
        vec![
            ("xlarge", XLARGE.as_str()),
            ("max_size", MAX_SIZE.as_str()),
        ]
    });
    FIXTURES.as_slice()
}

/// Query paths shaped like the ones the generator's patterns target.
pub fn query_paths() -> &'static [String] {
    static PATHS: LazyLock<Vec<String>> = LazyLock::new(|| {
        let extensions = ["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
        let directories = [
            "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
        ];

        let mut paths = Vec::new();
        for dir in directories {
            for ext in extensions {
                paths.push(format!("/{dir}/file.{ext}"));
                paths.push(format!("/{dir}/sub/test_example.{ext}"));
                paths.push(format!("/src/{dir}/nested/mod.{ext}"));
            }
        }
        paths.push("/README.md".to_string());
        paths.push("/docs/guide/README.md".to_string());
        paths
    });
    PATHS.as_slice()
}
