//! Integration tests for the `generate` command.
//!
//! Real service calls are never made here: mock mode covers the success path
//! and the credential precondition covers the failure path.

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_mock_succeeds_offline() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .args(TestContext::selection_args())
        .arg("--mock")
        .env_remove("OPENAI_API_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("MOCK MODE"))
        .stdout(predicate::str::contains("Image: mock://image-"));
}

#[test]
fn generate_without_credential_is_a_precondition_failure() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .args(TestContext::selection_args())
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn generate_mock_reads_defaults_from_config() {
    let ctx = TestContext::new();
    fs::write(
        ctx.work_dir().join("hairfit.toml"),
        "[image]\nimage_count = 2\nimage_size = \"256x256\"\n",
    )
    .unwrap();

    ctx.cli()
        .arg("generate")
        .args(TestContext::selection_args())
        .arg("--mock")
        .assert()
        .success()
        .stdout(predicate::str::contains("Count: 2"))
        .stdout(predicate::str::contains("Size: 256x256"));
}

#[test]
fn generate_flag_overrides_config_count() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .args(TestContext::selection_args())
        .args(["--mock", "--count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Count: 4"));
}

#[test]
fn generate_rejects_malformed_config() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("hairfit.toml"), "not = [valid").unwrap();

    ctx.cli()
        .arg("generate")
        .args(TestContext::selection_args())
        .arg("--mock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
