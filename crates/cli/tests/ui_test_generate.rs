//! # UI Tests for Generating Files
#![cfg(not(miri))]

use assert_cmd::Command;
use indoc::indoc;
use std::path::PathBuf;
use std::{env, fs, process};

const EXPR: &str = indoc! {"
  Binary  : Expr* left, Token oper, Expr* right
  Literal : Object value
"};

const GRAMMAR: &str = indoc! {"
  [Expr]
  Literal : Object value

  [Stmt]
  Break :
"};

fn astgen() -> Command {
  Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn run_stdout(args: &[&str], file: &str) -> String {
  let output = astgen().args(args).write_stdin(file).output().unwrap();

  assert!(output.status.success());
  assert!(output.stderr.is_empty());
  String::from_utf8(output.stdout).unwrap()
}

/// A fresh directory to generate into, unique to this test
fn output_dir(name: &str) -> PathBuf {
  let dir = env::temp_dir().join(format!("astgen-{}-{name}", process::id()));
  let _ = fs::remove_dir_all(&dir);
  dir
}

#[test]
fn dryrun_single_hierarchy() {
  let output = run_stdout(&["generate", "-", "--base", "Expr", "--dryrun"], EXPR);
  let expected = indoc! {r#"
    // Expr.h
    #pragma once

    #include "Token.h"

    template <class R>
    class Expr
    {
    public:
      virtual ~Expr() = default;

      class Binary;
      class Literal;

      struct Visitor
      {
        virtual R visitBinaryExpr(const Expr<R>::Binary& expr) = 0;
        virtual R visitLiteralExpr(const Expr<R>::Literal& expr) = 0;
      };

      virtual R accept(Visitor& visitor) const = 0;
    };

    template <class R>
    class Expr<R>::Binary : public Expr<R>
    {
    public:
      Expr* left;
      Token oper;
      Expr* right;

      Binary(Expr* left, Token oper, Expr* right)
        : left(left), oper(oper), right(right) {}

      R accept(Expr<R>::Visitor& visitor) const override
      {
        return visitor.visitBinaryExpr(*this);
      }

      ~Binary()
      {
        delete left;
        delete right;
      }
    };

    template <class R>
    class Expr<R>::Literal : public Expr<R>
    {
    public:
      Object value;

      Literal(Object value)
        : value(value) {}

      R accept(Expr<R>::Visitor& visitor) const override
      {
        return visitor.visitLiteralExpr(*this);
      }
    };
  "#};
  assert_eq!(output, expected);
}

#[test]
fn dryrun_document() {
  let output = run_stdout(
    &["generate", "-", "--dryrun", "--config-include", "", "--config-indent-size", "4"],
    GRAMMAR,
  );
  let expected = indoc! {"
    // Expr.h
    #pragma once

    template <class R>
    class Expr
    {
    public:
        virtual ~Expr() = default;

        class Literal;

        struct Visitor
        {
            virtual R visitLiteralExpr(const Expr<R>::Literal& expr) = 0;
        };

        virtual R accept(Visitor& visitor) const = 0;
    };

    template <class R>
    class Expr<R>::Literal : public Expr<R>
    {
    public:
        Object value;

        Literal(Object value)
            : value(value) {}

        R accept(Expr<R>::Visitor& visitor) const override
        {
            return visitor.visitLiteralExpr(*this);
        }
    };

    // Stmt.h
    #pragma once

    template <class R>
    class Stmt
    {
    public:
        virtual ~Stmt() = default;

        class Break;

        struct Visitor
        {
            virtual R visitBreakStmt(const Stmt<R>::Break& stmt) = 0;
        };

        virtual R accept(Visitor& visitor) const = 0;
    };

    template <class R>
    class Stmt<R>::Break : public Stmt<R>
    {
    public:
        Break() {}

        R accept(Stmt<R>::Visitor& visitor) const override
        {
            return visitor.visitBreakStmt(*this);
        }
    };
  "};
  assert_eq!(output, expected);
}

#[test]
fn dryrun_per_variant() {
  let output = run_stdout(
    &[
      "generate",
      "-",
      "--base",
      "Expr",
      "--dryrun",
      "--config-layout",
      "per-variant",
      "--config-extension",
      "hpp",
      "--config-result-type",
      "T",
    ],
    EXPR,
  );
  let files: Vec<_> = output
    .lines()
    .filter_map(|line| line.strip_prefix("// "))
    .collect();

  assert_eq!(files, ["Expr.hpp", "ExprBinary.hpp", "ExprLiteral.hpp"]);
  assert!(output.contains("// ExprBinary.hpp\n#pragma once\n\n#include \"Expr.hpp\"\n\ntemplate <class T>\n"));
  assert!(output.contains("virtual T visitBinaryExpr(const Expr<T>::Binary& expr) = 0;"));
}

#[test]
fn dryrun_doc_comments() {
  let output = run_stdout(
    &["generate", "-", "--base", "Expr", "--dryrun", "--config-doc-comments"],
    EXPR,
  );

  assert!(output.contains("/// Abstract base of the `Expr` hierarchy.\n"));
  assert!(output.contains("    /// Visit a `Binary` node.\n"));
  assert!(output.contains("  /// Deletes the fields this variant owns.\n  ~Binary()\n"));
}

#[test]
fn dryrun_crlf_line_endings() {
  let output = run_stdout(
    &["generate", "-", "--base", "Expr", "--dryrun", "--config-line-ending", "crlf"],
    EXPR,
  );

  assert!(output.starts_with("// Expr.h\n#pragma once\r\n\r\n#include \"Token.h\"\r\n"));
  assert!(output.contains("\r\n  struct Visitor\r\n  {\r\n"));
  assert!(!output.replace("\r\n", "").trim_start_matches("// Expr.h\n").contains('\n'));
}

#[test]
fn write_and_check_files() {
  let dir = output_dir("write");
  let dir_arg = dir.to_str().unwrap();

  let output = run_stdout(&["generate", "-", "--output-dir", dir_arg], GRAMMAR);
  assert_eq!(
    output,
    format!(
      "✓ Generated {}\n✓ Generated {}\n",
      dir.join("Expr.h").display(),
      dir.join("Stmt.h").display()
    )
  );

  let generated = fs::read_to_string(dir.join("Stmt.h")).unwrap();
  assert!(generated.starts_with("#pragma once\n\n#include \"Token.h\"\n\ntemplate <class R>\nclass Stmt\n"));

  let output = run_stdout(&["generate", "-", "--output-dir", dir_arg, "--check"], GRAMMAR);
  assert!(output.is_empty());

  fs::write(dir.join("Stmt.h"), "// edited by hand\n").unwrap();
  let output = astgen()
    .args(["generate", "-", "--output-dir", dir_arg, "--check"])
    .write_stdin(GRAMMAR)
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8(output.stderr).unwrap();
  assert!(stderr.starts_with("✕ Error: File is out of date\n"));
  assert!(stderr.contains(&format!("`{}` does not match its spec", dir.join("Stmt.h").display())));
  assert!(!stderr.contains("Expr.h"));

  fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn check_missing_files() {
  let dir = output_dir("missing");
  let output = astgen()
    .args(["generate", "-", "--output-dir", dir.to_str().unwrap(), "--check"])
    .write_stdin(GRAMMAR)
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(1));
  assert!(output.stdout.is_empty());
  assert!(!dir.exists());
}

#[test]
fn nothing_written_on_error() {
  let dir = output_dir("error");
  let file = indoc! {"
    [Expr]
    Literal : Object value

    [Stmt]
    Broken
  "};
  let output = astgen()
    .args(["generate", "-", "--output-dir", dir.to_str().unwrap()])
    .write_stdin(file)
    .output()
    .unwrap();

  assert_eq!(output.status.code(), Some(2));
  assert!(output.stdout.is_empty());
  assert!(!dir.exists());
}
