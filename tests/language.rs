use std::fs;

fn interpret(source: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = minipy::run(source, &mut output) {
        panic!("Script failed: {e}\nSource:\n{source}");
    }
    String::from_utf8(output).expect("program output was not UTF-8")
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(interpret(source), expected, "for source:\n{source}");
}

fn assert_failure(source: &str) {
    let mut output = Vec::new();
    assert!(minipy::run(source, &mut output).is_err(),
            "Script succeeded but was expected to fail:\n{source}");
}

#[test]
fn print_arithmetic() {
    assert_output("print 1+2", "3\n");
    assert_output("print 2 + 3 * 4 - 6 / 2", "11\n");
    assert_output("print (2 + 3) * 4", "20\n");
}

#[test]
fn print_multiple_values() {
    assert_output("print 'hello', 'world'", "hello world\n");
    assert_output("print 1, 'two', True, None", "1 two True None\n");
}

#[test]
fn print_without_arguments_prints_a_bare_newline() {
    assert_output("print", "\n");
}

#[test]
fn string_escapes_reach_the_output() {
    assert_output(r"print 'a\nb'", "a\nb\n");
    assert_output(r"print 'a\tb'", "a\tb\n");
}

#[test]
fn string_concatenation() {
    assert_output("print 'ab' + 'cd'", "abcd\n");
}

#[test]
fn unary_minus_and_truncating_division() {
    assert_output("print -5 + 10", "5\n");
    assert_output("a = 0 - 7\nprint a / 2", "-3\n");
    assert_output("print 7 / 2", "3\n");
}

#[test]
fn comparisons_print_booleans() {
    assert_output("print 1 < 2, 2 <= 2, 3 > 1, 1 >= 2, 1 == 1, 1 != 1",
                  "True True True False True False\n");
    assert_output("print 'abc' < 'abd'", "True\n");
    assert_output("print False < True", "True\n");
}

#[test]
fn none_compares_equal_to_none() {
    assert_output("print None == None", "True\n");
    assert_output("print None != None", "False\n");
}

#[test]
fn mixed_type_comparison_is_an_error() {
    assert_failure("print 1 == True");
    assert_failure("print 0 == ''");
}

#[test]
fn or_short_circuits() {
    assert_output("print 1 or (1/0)", "True\n");
    assert_output("print 0 or 2", "True\n");
    assert_output("print 0 or 0", "False\n");
}

#[test]
fn and_short_circuits() {
    assert_output("print 0 and (1/0)", "False\n");
    assert_output("print 1 and 2", "True\n");
    assert_output("print 1 and 0", "False\n");
}

#[test]
fn not_operator() {
    assert_output("print not 0, not 'x', not None", "True False True\n");
}

#[test]
fn if_else_blocks() {
    let source = "x = 0\n\
                  if x:\n  \
                  print 'y'\n\
                  else:\n  \
                  print 'n'\n";
    assert_output(source, "n\n");
    assert_output("x = 3\nif x:\n  print 'y'\nelse:\n  print 'n'\n", "y\n");
    assert_output("if 0:\n  print 'skipped'\nprint 'after'\n", "after\n");
}

#[test]
fn nested_ifs() {
    let source = "a = 1\n\
                  b = 0\n\
                  if a:\n  \
                  if b:\n    \
                  print 'both'\n  \
                  else:\n    \
                  print 'only a'\n";
    assert_output(source, "only a\n");
}

#[test]
fn str_method_controls_printing() {
    let source = "class X:\n  \
                  def __str__():\n    \
                  return 'xx'\n\
                  x = X()\n\
                  print x\n";
    assert_output(source, "xx\n");
}

#[test]
fn inherited_method_resolution() {
    let source = "class A:\n  \
                  def f():\n    \
                  return 1\n\
                  class B(A):\n  \
                  def g():\n    \
                  return self.f()+2\n\
                  print B().g()\n";
    assert_output(source, "3\n");
}

#[test]
fn overriding_dispatches_through_self() {
    let source = "class A:\n  \
                  def name():\n    \
                  return 'A'\n  \
                  def describe():\n    \
                  return 'I am ' + self.name()\n\
                  class B(A):\n  \
                  def name():\n    \
                  return 'B'\n\
                  print B().describe()\n";
    assert_output(source, "I am B\n");
}

#[test]
fn init_constructor_binds_fields() {
    let source = "class Point:\n  \
                  def __init__(x, y):\n    \
                  self.x = x\n    \
                  self.y = y\n\
                  p = Point(3, 4)\n\
                  print p.x + p.y\n";
    assert_output(source, "7\n");
}

#[test]
fn fields_can_be_assigned_from_outside() {
    let source = "class Bag:\n  \
                  def f():\n    \
                  return 0\n\
                  b = Bag()\n\
                  b.value = 9\n\
                  print b.value\n";
    assert_output(source, "9\n");
}

#[test]
fn methods_mutate_their_instance() {
    let source = "class Counter:\n  \
                  def __init__():\n    \
                  self.count = 0\n  \
                  def bump():\n    \
                  self.count = self.count + 1\n\
                  c = Counter()\n\
                  c.bump()\n\
                  c.bump()\n\
                  print c.count\n";
    assert_output(source, "2\n");
}

#[test]
fn assignment_shares_the_instance() {
    let source = "class Counter:\n  \
                  def __init__():\n    \
                  self.count = 0\n  \
                  def bump():\n    \
                  self.count = self.count + 1\n\
                  a = Counter()\n\
                  b = a\n\
                  b.bump()\n\
                  print a.count\n";
    assert_output(source, "1\n");
}

#[test]
fn each_evaluation_creates_a_fresh_instance() {
    let source = "class Box:\n  \
                  def __init__():\n    \
                  self.v = 0\n\
                  class Factory:\n  \
                  def make():\n    \
                  return Box()\n\
                  f = Factory()\n\
                  a = f.make()\n\
                  b = f.make()\n\
                  a.v = 1\n\
                  print b.v\n";
    assert_output(source, "0\n");
}

#[test]
fn early_return_skips_the_rest_of_the_method() {
    let source = "class A:\n  \
                  def f(x):\n    \
                  if x:\n      \
                  return 1\n    \
                  return 2\n\
                  a = A()\n\
                  print a.f(0), a.f(5)\n";
    assert_output(source, "2 1\n");
}

#[test]
fn method_without_return_prints_none() {
    let source = "class A:\n  \
                  def f(): x = 1\n\
                  print A().f()\n";
    assert_output(source, "None\n");
}

#[test]
fn recursion_through_self() {
    let source = "class Math:\n  \
                  def fact(n):\n    \
                  if n < 2:\n      \
                  return 1\n    \
                  return n * self.fact(n - 1)\n\
                  print Math().fact(5)\n";
    assert_output(source, "120\n");
}

#[test]
fn add_method_delegation() {
    let source = "class Acc:\n  \
                  def __init__(v):\n    \
                  self.v = v\n  \
                  def __add__(other):\n    \
                  return self.v + other\n\
                  print Acc(4) + 3\n";
    assert_output(source, "7\n");
}

#[test]
fn eq_method_compares_fields() {
    let source = "class Acc:\n  \
                  def __init__(v):\n    \
                  self.v = v\n  \
                  def __eq__(other):\n    \
                  return self.v == other.v\n\
                  print Acc(2) == Acc(2), Acc(2) == Acc(3)\n";
    assert_output(source, "True False\n");
}

#[test]
fn lt_method_and_derived_comparators() {
    let source = "class Acc:\n  \
                  def __init__(v):\n    \
                  self.v = v\n  \
                  def __lt__(other):\n    \
                  return self.v < other.v\n\
                  print Acc(1) < Acc(2), Acc(2) >= Acc(1)\n";
    assert_output(source, "True True\n");
}

#[test]
fn classes_print_by_name() {
    let source = "class X:\n  \
                  def f():\n    \
                  return 1\n\
                  print X\n";
    assert_output(source, "Class X\n");
}

#[test]
fn stringify_builtin() {
    assert_output("print str(42) + '!'", "42!\n");
    assert_output("print str(None)", "None\n");
    assert_output("print str(1 < 2)", "True\n");
    assert_output("x = str(5)\nprint x == '5'", "True\n");
}

#[test]
fn field_assignment_on_a_non_instance_is_a_silent_noop() {
    assert_output("x = 5\nx.y = 1\nprint x", "5\n");
}

#[test]
fn zero_division_is_an_error() {
    assert_failure("print 1 / 0");
    assert_failure("x = 10\ny = 0\nprint x / y");
}

#[test]
fn arithmetic_overflow_is_an_error() {
    assert_failure("print 9223372036854775807 + 1");
    assert_failure("x = 0 - 9223372036854775807\nprint x - 2");
}

#[test]
fn type_mismatches_in_operators_are_errors() {
    assert_failure("print 1 + 'x'");
    assert_failure("print 'a' - 'b'");
    assert_failure("print None * 2");
    assert_failure("print 'a' / 2");
}

#[test]
fn unknown_variable_is_an_error() {
    assert_failure("print x");
    assert_failure("x = y + 1");
}

#[test]
fn unknown_field_is_an_error() {
    let source = "class A:\n  \
                  def f():\n    \
                  return 1\n\
                  a = A()\n\
                  print a.missing\n";
    assert_failure(source);
}

#[test]
fn calling_methods_on_non_instances_is_an_error() {
    assert_failure("x = 5\nprint x.f()");
}

#[test]
fn arity_mismatch_is_an_error() {
    let source = "class A:\n  \
                  def f(x):\n    \
                  return x\n\
                  print A().f()\n";
    assert_failure(source);
}

#[test]
fn instantiating_an_unknown_class_is_an_error() {
    assert_failure("x = Missing()");
}

#[test]
fn return_outside_a_method_is_an_error() {
    assert_failure("return 1");
}

#[test]
fn malformed_indentation_is_an_error() {
    assert_failure("if 1:\n   print 1\n");
    assert_failure("if 1:\n    print 1\n  print 2\n");
}

#[test]
fn example_script_works() {
    let source = fs::read_to_string("tests/example.mpy").expect("missing file");
    let expected = "Hello, world!\n\
                    HELLO, world!!\n\
                    2 38\n\
                    x wins\n\
                    10!\n";
    assert_output(&source, expected);
}
