use crate::cmd::test_support::{fixture_arg, run_pathconf, run_pathconf_failing, run_pathconf_json};

#[test]
fn check_json_counts_sections() {
	let fixture = fixture_arg("service.conf");
	let json = run_pathconf_json(&["check", &fixture, "--json"]);

	assert_eq!(json["ok"], true);
	assert_eq!(json["assignments"], 13);
	assert!(json["error"].is_null());

	let sections = json["sections"].as_array().expect("sections array");
	let paths: Vec<_> = sections.iter().filter_map(|item| item["path"].as_str()).collect();
	assert_eq!(paths, ["net", "web", "web/tls", "audio"]);
	assert_eq!(sections[1]["assignments"], 3);
}

#[test]
fn check_reports_failing_line() {
	let fixture = fixture_arg("broken.conf");
	let output = run_pathconf_failing(&["check", &fixture, "--json"]);

	let json = pathconf_testkit::stdout_json(&output.stdout);
	assert_eq!(json["ok"], false);
	assert_eq!(json["error"]["line"], 5);
	assert_eq!(json["error"]["expected"], "]");

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: line 5: expecting ]"), "stderr: {stderr}");
}

#[test]
fn check_text_lists_sections() {
	let fixture = fixture_arg("service.conf");
	let output = run_pathconf(&["check", &fixture]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("status: ok"));
	assert!(stdout.contains("  [web/tls]: 2\n"));
	assert!(stdout.contains("  [audio]: 3\n"));
}

#[test]
fn check_reads_every_section_body() {
	// Without a schema no section is skipped, so malformed lines anywhere fail.
	let fixture = fixture_arg("unknown.conf");
	let output = run_pathconf_failing(&["check", &fixture]);

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("status: line 6: expecting alphabetic character"), "stdout: {stdout}");
}

#[test]
fn check_missing_file_fails() {
	let output = run_pathconf_failing(&["check", "/nonexistent/pathconf.conf"]);
	assert!(output.stdout.is_empty());
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: io:"));
}
