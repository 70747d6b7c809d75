use ctrlflow_catalog::Catalog;

fn body(name: &str) -> String {
	let scenario = Catalog::standard().lookup(name).unwrap().run().into_string();
	let (_, body) = scenario.split_once(" ===\n").unwrap();
	body.to_string()
}

#[test]
fn has_twenty_scenarios_in_order() {
	let catalog = Catalog::standard();

	assert_eq!(catalog.len(), 20);
	for (position, scenario) in catalog.iter().enumerate() {
		assert_eq!(scenario.ordinal, position + 1);
	}
	assert_eq!(catalog.names().next(), Some("switch_basic"));
	assert_eq!(catalog.names().last(), Some("comprehensive"));
}

#[test]
fn every_scenario_is_deterministic() {
	for scenario in Catalog::standard().iter() {
		assert_eq!(
			scenario.run().into_string(),
			scenario.run().into_string(),
			"{} printed different output on a second run",
			scenario.name
		);
	}
}

#[test]
fn every_scenario_ends_with_blank_line() {
	for scenario in Catalog::standard().iter() {
		assert!(scenario.run().as_str().ends_with("\n\n"), "{}", scenario.name);
	}
}

#[test]
fn fallthrough_prints_bc() {
	assert!(body("switch_fallthrough").starts_with("BC\n"));
}

#[test]
fn sum_of_one_to_hundred() {
	assert!(body("sum").starts_with("1+2+...+100=5050\n"));
}

#[test]
fn break_and_continue_sequences() {
	let body = body("break_continue");
	let lines: Vec<_> = body.lines().collect();

	assert_eq!(lines[0], "使用break：1 2 ");
	assert_eq!(lines[2], "使用continue：1 2 4 5 ");
}

#[test]
fn nested_loop_prints_nine_pairs_in_three_rows() {
	let body = body("nested_loop");
	let rows: Vec<_> = body.lines().filter(|l| !l.is_empty()).collect();

	assert_eq!(
		rows,
		[
			"(1,1) (1,2) (1,3) ",
			"(2,1) (2,2) (2,3) ",
			"(3,1) (3,2) (3,3) ",
		]
	);
	assert_eq!(body.matches('(').count(), 9);
}

#[test]
fn loop_counter_survives_loop_exit() {
	assert!(body("loop_expression").contains("循环结束，i=3\n"));
}

#[test]
fn comprehensive_prints_squares() {
	let body = body("comprehensive");
	let squares: Vec<String> = (1..=10).map(|i| format!("{}^2={}", i, i * i)).collect();

	assert!(body.contains(&squares.join(" ")));
}

#[test]
fn for_count_reports_exit_value() {
	let body = body("for_count");

	for i in 1..=5 {
		assert!(body.contains(&format!("i={} → 输出{}\n", i, i)));
	}
	assert!(body.contains("i=6 → 退出循环\n"));
}
