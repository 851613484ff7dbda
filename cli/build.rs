/// Pin the container image references into the binary.
///
/// Release builds set `QUAY_IMAGE`, `REDIS_IMAGE` and `POSTGRES_IMAGE` in the
/// environment; local builds fall back to the upstream images below.
fn main() {
    for (name, default) in [
        ("QUAY_IMAGE", "quay.io/projectquay/quay:latest"),
        ("REDIS_IMAGE", "docker.io/library/redis:6.2"),
        ("POSTGRES_IMAGE", "docker.io/library/postgres:10"),
    ] {
        let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
        println!("cargo::rustc-env={name}={value}");
        println!("cargo::rerun-if-env-changed={name}");
    }
}
