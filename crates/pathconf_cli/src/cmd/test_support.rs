use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use pathconf_testkit::{fixture_path as shared_fixture_path, stdout_json, target_dir as workspace_target_dir};

static PATHCONF_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_pathconf(args: &[&str]) -> Output {
	Command::new(pathconf_bin())
		.args(args)
		.env_remove("PATHCONF_LOG")
		.output()
		.expect("pathconf command executes")
}

pub(crate) fn run_pathconf_json(args: &[&str]) -> serde_json::Value {
	let output = run_pathconf(args);
	assert!(
		output.status.success(),
		"pathconf command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	stdout_json(&output.stdout)
}

pub(crate) fn run_pathconf_failing(args: &[&str]) -> Output {
	let output = run_pathconf(args);
	assert_eq!(output.status.code(), Some(1), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	output
}

fn pathconf_bin() -> &'static PathBuf {
	PATHCONF_BIN.get_or_init(resolve_pathconf_bin)
}

fn resolve_pathconf_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_pathconf") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "pathconf.exe" } else { "pathconf" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "pathconf"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build pathconf binary at {}", bin.display());

	bin
}
