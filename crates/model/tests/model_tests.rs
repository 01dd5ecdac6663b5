use astgen_model::{CodeModel, Document, ErrorKind, OwnershipKind, SpecError};
use indoc::indoc;

const LOX: &str = indoc! {"
  # Expressions
  [Expr]
  Assign   : Token name, Expr* value
  Binary   : Expr* left, Token oper, Expr* right
  Call     : Expr* callee, Token paren, List<Expr*> arguments
  Grouping : Expr* expression
  Literal  : Object value
  Variable : Token name

  # Statements
  [Stmt]
  Block      : List<Stmt*> statements
  Expression : Expr* expression
  If         : Expr* condition, Stmt* then_branch, Stmt* else_branch
  Return     : Token keyword, Expr* value
  While      : Expr* condition, Stmt* body
  Break      :
"};

fn models(source: &str) -> Result<Vec<CodeModel>, SpecError> {
  Document::parse(source)?
    .sections
    .iter()
    .map(|section| section.parse().map(|definition| definition.classify()))
    .collect()
}

#[test]
fn lox_grammar() {
  let models = models(LOX).unwrap();
  assert_eq!(models.len(), 2);

  let expr = &models[0];
  assert_eq!(expr.base_name, "Expr");
  assert_eq!(expr.variants.len(), 6);
  assert_eq!(expr.field_count(), 11);

  let stmt = &models[1];
  assert_eq!(stmt.base_name, "Stmt");
  assert_eq!(stmt.variants.len(), 6);
  assert!(stmt.variant("Break").unwrap().is_marker());
}

#[test]
fn line_numbers_are_relative_to_the_file() {
  let models = models(LOX).unwrap();
  let lines: Vec<_> = models[1].variants.iter().map(|v| v.line).collect();

  assert_eq!(lines, [12, 13, 14, 15, 16, 17]);
  assert_eq!(models[0].variant("Assign").unwrap().line, 3);
}

#[test]
fn any_raw_pointer_is_owning() {
  let models = models(LOX).unwrap();
  let call = models[0].variant("Call").unwrap();

  let ownership: Vec<_> = call.fields.iter().map(|field| field.ownership).collect();
  assert_eq!(ownership, [
    OwnershipKind::Owning,
    OwnershipKind::Value,
    OwnershipKind::Owning,
  ]);

  let owning: Vec<_> = models[1]
    .variant("If")
    .unwrap()
    .owning_fields()
    .map(|field| field.name.as_str())
    .collect();
  assert_eq!(owning, ["condition", "then_branch", "else_branch"]);
}

#[test]
fn pretty_print_hierarchy() {
  let source = indoc! {"
    [Stmt]
    If    : Expr* condition, Stmt* then_branch, observer_ptr<Stmt> else_branch
    Block : const List<Stmt*>& statements
    Break :
  "};
  let models = models(source).unwrap();

  let expected = indoc! {"
    Stmt
    ├─ If
    │  ├─ condition: Expr* (owning)
    │  ├─ then_branch: Stmt* (owning)
    │  ╰─ else_branch: observer_ptr<Stmt> (value)
    ├─ Block
    │  ╰─ statements: const List<Stmt*>& (owning)
    ╰─ Break
  "};
  assert_eq!(models[0].to_string(), expected);
}

#[test]
fn error_in_second_hierarchy() {
  let source = indoc! {"
    [Expr]
    Literal : Object value

    [Stmt]
    Print : Expr* expression
    Print : Expr* value
  "};
  let error = models(source).unwrap_err();

  assert_eq!(error.kind(), ErrorKind::MalformedSpec);
  assert_eq!(error.title(), "Duplicate Variant `Print`");
  assert_eq!(error.message(), "first defined on line 5");
  assert_eq!(error.line().unwrap().number, 6);
  assert_eq!(error.to_string(), "line 6: first defined on line 5");
}

#[test]
fn empty_hierarchy_in_document() {
  let source = indoc! {"
    [Expr]
    Literal : Object value

    [Stmt]
    # nothing yet
  "};
  let error = models(source).unwrap_err();

  assert_eq!(error.kind(), ErrorKind::EmptyHierarchy);
  assert_eq!(error.to_string(), "`Stmt` has no variants");
  assert!(error.line().is_none());
}
