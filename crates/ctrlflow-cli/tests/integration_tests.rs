use std::process::{Command, Output};

fn ctrlflow(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_ctrlflow"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("Failed to execute command")
}

#[test]
fn test_no_arguments_prints_full_transcript() {
	let output = ctrlflow(&[]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.starts_with("C语言switch和for循环完整代码示例\n"));
	assert!(stdout.ends_with("所有示例执行完成！\n"));
	for ordinal in 1..=20 {
		assert!(stdout.contains(&format!("=== {}. ", ordinal)));
	}
	assert!(output.stderr.is_empty());
}

#[test]
fn test_run_without_names_matches_no_arguments() {
	let plain = ctrlflow(&[]);
	let run = ctrlflow(&["run"]);

	assert!(run.status.success());
	assert_eq!(plain.stdout, run.stdout);
}

#[test]
fn test_run_named_scenario() {
	let output = ctrlflow(&["run", "sum"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert_eq!(stdout, "=== 13. 累加求和示例 ===\n1+2+...+100=5050\n输出：5050\n\n");
}

#[test]
fn test_run_unknown_scenario() {
	let output = ctrlflow(&["run", "goto"]);

	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error: unknown scenario 'goto'"));
}

#[test]
fn test_list() {
	let output = ctrlflow(&["list"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert_eq!(stdout.lines().count(), 20);
	assert!(stdout.lines().next().unwrap().contains("switch_basic"));
}

#[test]
fn test_verify() {
	let output = ctrlflow(&["verify"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Q17: compare=match"));
	assert!(stdout.contains("11 matched, 0 mismatched, 9 without expected output"));
}
