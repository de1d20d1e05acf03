use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Scoped tracing subscriber for tests.
///
/// Installs a thread-default fmt subscriber for the lifetime of the guard
/// so router log output shows up under `--nocapture` / `RUST_LOG` without
/// leaking into other tests.
pub struct TestTracing {
    _guard: DefaultGuard,
}

impl TestTracing {
    pub fn init() -> Self {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();

        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}
