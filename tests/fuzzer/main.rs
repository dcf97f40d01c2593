mod lzo;

use rayon::prelude::*;
use std::{
    cmp, env, fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Once,
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Runs `func` once for every seed in `0..LZOO_FUZZER_ITERATION` (default
/// 10000) and panics with the first error any of them returns.
pub fn run<R>(name: &str, func: fn(u64) -> Result<(), R>)
where
    R: Send + fmt::Debug,
{
    init_tracing();
    let count = env::var_os("LZOO_FUZZER_ITERATION")
        .and_then(|s| s.into_string().ok())
        .and_then(|n| n.parse().ok())
        .unwrap_or(10000u64);

    let step = 100;
    let done = AtomicU64::new(0);

    let err = (0..step)
        .into_par_iter()
        .map(|s| ((count / step) * s)..cmp::min((count / step) * (s + 1), count))
        .map(|range| {
            let len = range.end - range.start;
            let err = range
                .into_par_iter()
                .map(func)
                .find_map_any(|result| result.err());
            let total = done.fetch_add(len, Ordering::Relaxed) + len;
            info!(target: "fuzzer", test = name, total, count, "progress");
            err
        })
        .find_map_any(|err| err);
    if let Some(err) = err {
        panic!("{}: {:?}", name, err);
    }
}
