//! # UI Tests for Spec Errors
#![cfg(not(miri))]

use assert_cmd::Command;
use indoc::indoc;

fn run_stderr(args: &[&str], file: &str) -> String {
  let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
    .unwrap()
    .args(args)
    .write_stdin(file)
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(2));
  assert!(output.stdout.is_empty());
  String::from_utf8(output.stderr).unwrap()
}

#[test]
fn missing_separator() {
  let file = indoc! {"
    [Expr]
    Binary Expr* left
  "};
  let output = run_stderr(&["check", "-"], file);
  let expected = indoc! {"
    ✕ Error: Missing Separator
    expected `:` between the variant name and its fields

        ╭─[STDIN:2]
      2 │ Binary Expr* left
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn pointer_attached_to_name() {
  let file = indoc! {"
    Binary : Expr *left, Token oper
  "};
  let output = run_stderr(&["check", "-", "--base", "Expr"], file);
  let expected = indoc! {"
    ✕ Error: Invalid Identifier
    `*left` is not a valid identifier
    hint: attach `*` and `&` to the type, e.g. `Expr* left` rather than `Expr *left`

        ╭─[STDIN:1]
      1 │ Binary : Expr *left, Token oper
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn duplicate_variant() {
  let file = indoc! {"
    # Statements
    [Stmt]
    Print : Expr* expression
    # a comment
    Print : Expr* value
  "};
  let output = run_stderr(&["generate", "-", "--dryrun"], file);
  let expected = indoc! {"
    ✕ Error: Duplicate Variant `Print`
    first defined on line 3

        ╭─[STDIN:5]
      5 │ Print : Expr* value
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn comma_in_template_arguments() {
  let file = indoc! {"
    Table : Map<Token, Expr*> entries
  "};
  let output = run_stderr(&["print", "model", "-", "--base", "Expr"], file);
  let expected = indoc! {"
    ✕ Error: Unbalanced Brackets
    brackets are not balanced in `Map<Token`
    hint: commas inside template arguments are not supported, use a type alias

        ╭─[STDIN:1]
      1 │ Table : Map<Token, Expr*> entries
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn empty_field() {
  let file = indoc! {"
    [Expr]

    Binary : Expr* left,, Expr* right
  "};
  let output = run_stderr(&["check", "-"], file);
  let expected = indoc! {"
    ✕ Error: Empty Field
    field 2 is empty
    hint: remove the extra comma

        ╭─[STDIN:3]
      3 │ Binary : Expr* left,, Expr* right
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn variant_outside_hierarchy() {
  let file = indoc! {"
    Literal : Object value
    [Expr]
  "};
  let output = run_stderr(&["check", "-"], file);
  let expected = indoc! {"
    ✕ Error: Variant Outside Hierarchy
    expected a `[Base]` header before the first variant

        ╭─[STDIN:1]
      1 │ Literal : Object value
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn empty_hierarchy() {
  let file = indoc! {"
    [Expr]
    Literal : Object value

    [Stmt]
    # nothing yet
  "};
  let output = run_stderr(&["check", "-"], file);
  assert_eq!(output, "✕ Error: Empty Hierarchy\n`Stmt` has no variants\n\n");
}

#[test]
fn no_hierarchies() {
  let output = run_stderr(&["check", "-"], "# just a comment\n");
  assert_eq!(output, "✕ Error: No Hierarchies\nexpected at least one `[Base]` header\n\n");
}

#[test]
fn invalid_base_name() {
  let output = run_stderr(&["check", "-", "--base", "my-expr"], "Literal : Object value\n");
  assert_eq!(output, "✕ Error: Invalid Base Name\n`my-expr` is not a valid base name\n\n");
}

#[test]
fn file_not_found() {
  let output = run_stderr(&["check", "does-not-exist.ast"], "");
  assert_eq!(output, "✕ Error: File not found `does-not-exist.ast`\n\n");
}

#[test]
fn variant_named_visitor() {
  let file = indoc! {"
    Visitor : Token t
    Literal : Object value
  "};
  let output = run_stderr(&["generate", "-", "--base", "Expr", "--dryrun"], file);
  let expected = indoc! {"
    ✕ Error: Reserved Name `Visitor`
    `Visitor` is the name of the generated visitor interface
    hint: rename it, e.g. `Visitor_`

        ╭─[STDIN:1]
      1 │ Visitor : Token t
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn keyword_field_name() {
  let file = indoc! {"
    [Expr]
    Binary : Expr* left, Token operator, Expr* right
  "};
  let output = run_stderr(&["check", "-"], file);
  let expected = indoc! {"
    ✕ Error: Reserved Name `operator`
    `operator` is a C++ keyword
    hint: rename it, e.g. `operator_`

        ╭─[STDIN:2]
      2 │ Binary : Expr* left, Token operator, Expr* right
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn field_named_after_variant() {
  let output = run_stderr(&["check", "-", "--base", "Expr"], "Binary : Token Binary\n");
  let expected = indoc! {"
    ✕ Error: Field Name Clash
    `Binary` is already the name of a type in the hierarchy

        ╭─[STDIN:1]
      1 │ Binary : Token Binary
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn function_pointer_field() {
  let file = "Call : Value (*callback)(Value) function\n";
  let output = run_stderr(&["check", "-", "--base", "Expr"], file);
  let expected = indoc! {"
    ✕ Error: Unsupported Declarator
    function pointer and array declarators are not supported in `Value (*callback)(Value) function`
    hint: use a type alias, e.g. `using Callback = Value (*)(Value);`

        ╭─[STDIN:1]
      1 │ Call : Value (*callback)(Value) function
    ────╯
  "};
  assert_eq!(output, expected);
}

#[test]
fn result_type_is_not_a_name() {
  let output = run_stderr(
    &["generate", "-", "--base", "Expr", "--config-result-type", "std::string"],
    "Literal : Object value\n",
  );
  let expected = indoc! {"
    ✕ Error: Invalid Result Type
    `std::string` is not a valid template parameter name
    hint: use a name such as `R`, then instantiate with the type, e.g. `Expr<std::string>`

  "};
  assert_eq!(output, expected);
}

#[test]
fn result_type_clashes_with_hierarchy() {
  let output = run_stderr(
    &["generate", "-", "--base", "Expr", "--config-result-type", "Literal"],
    "Literal : Object value\n",
  );
  let expected = indoc! {"
    ✕ Error: Invalid Result Type
    `Literal` is already the name of a type in `Expr`
    hint: choose another name with `--config-result-type`

  "};
  assert_eq!(output, expected);
}
