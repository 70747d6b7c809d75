mod loops;
mod switch;

use crate::scenario::Scenario;

pub(crate) const SCENARIO_COUNT: usize = 20;

pub(crate) static ALL: [Scenario; SCENARIO_COUNT] = [
	Scenario::new(1, "switch_basic", "switch语句基础示例", switch::switch_basic),
	Scenario::new(2, "switch_fallthrough", "switch贯穿现象示例", switch::switch_fallthrough),
	Scenario::new(3, "switch_default", "default分支示例", switch::switch_default),
	Scenario::new(4, "switch_constant_expr", "switch常量表达式示例", switch::switch_constant_expr),
	Scenario::new(5, "switch_char", "字符switch示例", switch::switch_char),
	Scenario::new(6, "switch_vs_if_else", "switch与if-else对比示例", switch::switch_vs_if_else),
	Scenario::new(7, "switch_float_selector", "switch错误用法示例", switch::switch_float_selector),
	Scenario::new(8, "grade_judgment", "成绩等级判断示例", switch::grade_judgment),
	Scenario::new(9, "nested_selection", "选择结构嵌套示例", switch::nested_selection),
	Scenario::new(10, "complex_nested", "复杂嵌套选择结构示例", switch::complex_nested),
	Scenario::new(11, "for_basic", "for循环基础示例", loops::for_basic),
	Scenario::new(12, "for_count", "for循环执行次数分析", loops::for_count),
	Scenario::new(13, "sum", "累加求和示例", loops::sum),
	Scenario::new(14, "infinite_loop", "死循环示例", loops::infinite_loop),
	Scenario::new(15, "multiplication", "乘法表示例", loops::multiplication),
	Scenario::new(16, "loop_expression", "for循环表达式详解", loops::loop_expression),
	Scenario::new(17, "break_continue", "break和continue示例", loops::break_continue),
	Scenario::new(18, "nested_loop", "嵌套循环示例", loops::nested_loop),
	Scenario::new(19, "loop_scope", "循环控制变量作用域示例", loops::loop_scope),
	Scenario::new(20, "comprehensive", "综合应用示例", loops::comprehensive),
];
