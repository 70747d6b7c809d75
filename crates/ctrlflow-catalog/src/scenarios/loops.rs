//! Counted-loop scenarios.

use crate::transcript::{emit, Transcript};

pub(crate) fn for_basic(out: &mut Transcript) {
	for i in 1..=5 {
		emit!(out, "{} ", i);
	}
	out.expect("1 2 3 4 5");
	out.print("\n");
}

pub(crate) fn for_count(out: &mut Transcript) {
	out.print("执行过程：\n");

	let mut runs = 0;
	let mut i = 1;
	while i <= 5 {
		emit!(out, "i={} → 输出{}\n", i, i);
		runs += 1;
		i += 1;
	}
	// the counter is 6 here, the first value that fails the condition
	emit!(out, "i={} → 退出循环\n", i);
	emit!(out, "共执行{}次\n\n", runs);
}

pub(crate) fn sum(out: &mut Transcript) {
	let mut sum = 0;
	for i in 1..=100 {
		sum += i;
	}
	out.label("1+2+...+100=");
	emit!(out, "{}", sum);
	out.expect("5050");
	out.print("\n");
}

/// Only describes a loop whose counter moves away from its bound. Nothing
/// here iterates.
pub(crate) fn infinite_loop(out: &mut Transcript) {
	out.print("注意：这个示例会无限循环，实际运行时应避免\n");
	// let mut i = 1;
	// while i <= 5 {
	//     print!("{} ", i);
	//     i -= 1;
	// }
	out.print("无限循环示例（已注释）\n\n");
}

pub(crate) fn multiplication(out: &mut Transcript) {
	let n = 5;
	for i in 1..=n {
		emit!(out, "{} ", i * 2);
	}
	out.expect("2 4 6 8 10");
	out.print("\n");
}

pub(crate) fn loop_expression(out: &mut Transcript) {
	// declared outside the loop so it is still readable afterwards
	let mut i = 0;
	while i < 3 {
		emit!(out, "循环体执行，i={}\n", i);
		i += 1;
	}
	emit!(out, "循环结束，i={}\n", i);
	out.print("\n");
}

pub(crate) fn break_continue(out: &mut Transcript) {
	out.label("使用break：");
	for i in 1..=5 {
		if i == 3 {
			break;
		}
		emit!(out, "{} ", i);
	}
	out.expect("1 2");

	out.label("使用continue：");
	for i in 1..=5 {
		if i == 3 {
			continue;
		}
		emit!(out, "{} ", i);
	}
	out.expect("1 2 4 5");
	out.print("\n");
}

pub(crate) fn nested_loop(out: &mut Transcript) {
	for i in 1..=3 {
		for j in 1..=3 {
			emit!(out, "({},{}) ", i, j);
		}
		out.print("\n");
	}
	out.print("\n");
}

pub(crate) fn loop_scope(out: &mut Transcript) {
	// `i` only exists inside the loop
	for i in 0..3 {
		emit!(out, "i={} ", i);
	}
	out.print("\n\n");
}

/// Menu dispatch used by the comprehensive scenario. Only choice 2 is part
/// of the fixed run.
pub(crate) fn menu(choice: i32, out: &mut Transcript) {
	match choice {
		1 => {
			out.print("执行选项1：打印1-5\n");
			for i in 1..=5 {
				emit!(out, "{} ", i);
			}
		}
		2 => {
			out.print("执行选项2：计算1-10的平方\n");
			for i in 1..=10 {
				emit!(out, "{}^2={} ", i, i * i);
			}
		}
		_ => out.print("无效选项\n"),
	}
}

pub(crate) fn comprehensive(out: &mut Transcript) {
	let choice = 2;
	menu(choice, out);
	out.print("\n\n");
}
