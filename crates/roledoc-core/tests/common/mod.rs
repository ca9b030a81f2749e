#![allow(dead_code)]

use std::path::PathBuf;

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .join(relative)
}

pub fn fixture_text(relative: &str) -> String {
    std::fs::read_to_string(fixture(relative)).unwrap()
}

pub const OPERATOR_TABLE: &str = "\
| API Groups | Resources | Resource Names | Verbs | Comment |
|------------|-----------|----------------|-------|---------|
|  | `configmaps`, `pods`, `secrets` |  | `get`, `list`, `watch` | The operator reads and updates the resources it manages. Secrets hold generated credentials. |
| `coordination.k8s.io` | `leases` | `operator-leader` | `get`, `update` | Leader election. |
| `apps` | `deployments`, `statefulsets` |  | `*` |  |
";

pub const METRICS_TABLE: &str = "\
| API Groups | Resources | Non-Resource URLs | Verbs | Comment |
|------------|-----------|-------------------|-------|---------|
|  |  | `/metrics`, `/metrics/cadvisor` | `get` | Scrape the metrics endpoint. |
";
