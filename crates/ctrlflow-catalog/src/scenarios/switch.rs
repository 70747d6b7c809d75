//! Selection scenarios: multi-way branches, grouped labels, defaults and
//! nesting. Every selector is a fixed literal.

use crate::transcript::Transcript;

/// Prints the letters reached from `a` when case 2 has no exit and so runs
/// on into case 3.
pub(crate) fn fallthrough_letters(a: i32, out: &mut Transcript) {
	match a {
		1 => out.print("A"),
		2 | 3 => {
			if a == 2 {
				out.print("B");
			}
			out.print("C");
		}
		_ => out.print("D"),
	}
}

pub(crate) fn switch_basic(out: &mut Transcript) {
	fallthrough_letters(2, out);
	out.expect("BC");
	out.print("\n");
}

pub(crate) fn switch_fallthrough(out: &mut Transcript) {
	let a = 2;
	fallthrough_letters(a, out);
	out.expect("BC");
	out.print("\n");
}

pub(crate) fn switch_default(out: &mut Transcript) {
	let x = 5;
	match x {
		1 => out.print("一"),
		2 => out.print("二"),
		_ => out.print("其他"),
	}
	out.expect("其他");
	out.print("\n");
}

pub(crate) fn switch_constant_expr(out: &mut Transcript) {
	const ONE_PLUS_ONE: i32 = 1 + 1;

	match 2 {
		ONE_PLUS_ONE => out.print("等于2"),
		_ => {}
	}
	out.expect("等于2");
	out.print("\n");
}

pub(crate) fn switch_char(out: &mut Transcript) {
	let ch = 'B';
	match ch {
		'A' | 'a' => out.print("优秀"),
		'B' | 'b' => out.print("良好"),
		_ => out.print("及格"),
	}
	out.expect("良好");
	out.print("\n");
}

pub(crate) fn switch_vs_if_else(out: &mut Transcript) {
	let score = 85;

	// exact values only
	out.print("switch方式：");
	match score {
		90 => out.print("A"),
		85 => out.print("B"),
		_ => {}
	}

	out.print("\nif方式：");
	if score >= 90 {
		out.print("A");
	} else if score >= 80 {
		out.print("B");
	}

	out.print("\n\n");
}

// A floating-point value cannot select a multi-way branch on exact labels,
// so the comparison is written as a plain equality test.
#[allow(clippy::approx_constant, clippy::float_cmp)]
pub(crate) fn switch_float_selector(out: &mut Transcript) {
	out.print("switch表达式不能是浮点型，应该用if语句：\n");
	let d = 3.14_f64;
	if d == 3.14 {
		out.print("π");
	}
	out.print("\n\n");
}

pub(crate) fn grade_judgment(out: &mut Transcript) {
	let score = 85;
	match score / 10 {
		10 | 9 => out.print("A"),
		8 => out.print("B"),
		7 => out.print("C"),
		_ => out.print("D"),
	}
	out.expect("B");
	out.print("\n");
}

pub(crate) fn nested_selection(out: &mut Transcript) {
	let (x, y) = (5, 10);

	out.print("在switch中嵌套if：");
	match x {
		5 => {
			if y > 5 {
				out.print("x=5且y>5");
			} else {
				out.print("x=5但y<=5");
			}
		}
		_ => {}
	}

	out.print("\n在if中嵌套switch：");
	if x > 0 {
		match y {
			10 => out.print("y=10"),
			_ => {}
		}
	}
	out.print("\n\n");
}

pub(crate) fn complex_nested(out: &mut Transcript) {
	let (x, y) = (3, 5);
	if x > 2 {
		match y {
			5 => out.print("Y=5"),
			6 => out.print("Y=6"),
			_ => {}
		}
	} else {
		out.print("X<=2");
	}
	out.expect("Y=5");
	out.print("\n");
}
