/*! Integration tests for recmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - convert: to_map / from_map on flat records (naming, exclusion, omission, round-trips)
 * - mapping: inlining, lazy allocation and the catch-all map
 * - tagged: naming and filtering under explicit tag schemes
 * - strict: error reporting in strict mode versus lenient mode
 * - value: the dynamic Value type and its JSON form
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("recmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod convert;
mod helpers;
