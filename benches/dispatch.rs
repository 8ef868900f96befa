//! Benchmarks for the per-command dispatch path.
//!
//! Measures target parsing for large batches and the cost of evaluating a
//! manager script and extracting its bindings, which happens once per manager
//! per command.

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pacx::manager::ManagerConfig;
use pacx::target::parse_targets;
use pacx::verb::Verb;

const SCRIPT: &str = r#"
local function run(...)
  return table.concat({...}, " ")
end

return {
  Info = function(pkg) return run("apt-cache", "show", pkg) end,
  Install = function(pkg, flags) return run("apt-get", "install", pkg, flags) end,
  Uninstall = function(pkg) return run("apt-get", "remove", pkg) end,
  List = function() return run("apt", "list", "--installed") end,
  Outdated = function() return run("apt", "list", "--upgradable") end,
  Upgrade = function(pkg) return run("apt-get", "upgrade", pkg) end,
  Why = function(pkg) return run("aptitude", "why", pkg) end,
}
"#;

fn package_tokens(count: usize) -> Vec<String> {
    let managers = ["apt", "brew", "cargo", "npm", "pip"];
    (0..count)
        .map(|i| format!("{}:package-{i}", managers[i % managers.len()]))
        .collect()
}

fn bench_parse_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_targets");

    let packages = package_tokens(500);
    group.bench_function("install_500_packages", |b| {
        b.iter(|| parse_targets(Verb::Install, black_box(&packages)))
    });

    let managers: Vec<String> = package_tokens(500)
        .into_iter()
        .map(|token| token.split(':').next().unwrap_or_default().to_string())
        .collect();
    group.bench_function("outdated_500_managers", |b| {
        b.iter(|| parse_targets(Verb::Outdated, black_box(&managers)))
    });

    group.finish();
}

fn bench_load_manager(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager_config");

    group.bench_function("from_source", |b| {
        b.iter(|| {
            ManagerConfig::from_source(
                "apt",
                PathBuf::from("apt.lua"),
                black_box(SCRIPT.to_string()),
            )
        })
    });

    let config = ManagerConfig::from_source("apt", PathBuf::from("apt.lua"), SCRIPT.to_string())
        .unwrap();
    let args = vec![Some("curl".to_string()), Some("--yes".to_string())];
    group.bench_function("invoke_install", |b| {
        b.iter(|| config.invoke(Verb::Install, black_box(&args)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_targets, bench_load_manager);
criterion_main!(benches);
