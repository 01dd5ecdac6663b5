use super::GenerateOptions;
use super::diagnostics::{CodeFrame, Message, Severity};

use astgen_emitter::{EmitterConfig, OutputFile};
use astgen_model::{CodeModel, Document, SpecError};

use anstream::{eprintln, print, println};
use owo_colors::OwoColorize;
use serde_json::json;
use std::fs;
use std::path::Path;

pub enum CommandStatus {
  /// Command was successful, no errors or warnings occurred
  Success,
  /// Command ran, but found a problem
  Failure,
}

fn read_file(filename: &str) -> Result<String, ()> {
  if filename == "-" {
    return read_stdin();
  }

  match fs::read_to_string(filename) {
    Ok(file) if file.is_empty() => {
      eprintln!("{}", Message::warning(format!("Empty file `{filename}`")));
      Err(())
    }
    Ok(file) => Ok(file),
    Err(_) => {
      eprintln!("{}", Message::error(format!("File not found `{filename}`")));
      Err(())
    }
  }
}

fn read_stdin() -> Result<String, ()> {
  use std::io::{self, Read};

  let mut buffer = String::new();
  let mut stdin = io::stdin().lock();

  match stdin.read_to_string(&mut buffer) {
    Ok(_) => Ok(buffer),
    Err(_) => {
      eprintln!("{}", Message::error("Problem Reading from STDIN".into()));
      Err(())
    }
  }
}

fn report(filename: &str, error: &SpecError) {
  eprintln!("{}", Message::from(error));
  if let Some(line) = error.line() {
    eprintln!("{}", CodeFrame::new(filename, line));
  }
}

/// Parse and classify every hierarchy in the file, stopping at the first error
fn models(filename: &str, source: &str, base: Option<&str>) -> Result<Vec<CodeModel>, ()> {
  let document = match base {
    Some(base) => Document::single(base, source),
    None => Document::parse(source).map_err(|error| report(filename, &error))?,
  };

  document
    .sections
    .iter()
    .map(|section| section.parse().map(|definition| definition.classify()))
    .collect::<Result<Vec<_>, _>>()
    .map_err(|error| report(filename, &error))
}

fn display_name(filename: &str) -> &str {
  if filename == "-" { "STDIN" } else { filename }
}

fn config(options: &GenerateOptions) -> Result<EmitterConfig, ()> {
  let result_type = &options.config_result_type;
  if !astgen_model::is_identifier(result_type) || astgen_model::is_reserved(result_type) {
    eprintln!("{}", Message {
      title: "Invalid Result Type".into(),
      body: format!("`{result_type}` is not a valid template parameter name"),
      hint: Some(format!(
        "use a name such as `R`, then instantiate with the type, e.g. `Expr<{result_type}>`"
      )),
      severity: Severity::Error,
    });
    return Err(());
  }

  Ok(EmitterConfig {
    indentation: options.config_indent_size.into(),
    line_ending: options.config_line_ending.into(),
    result_type: result_type.clone(),
    includes: options
      .config_include
      .iter()
      .filter(|include| !include.is_empty())
      .cloned()
      .collect(),
    layout: options.config_layout.into(),
    extension: options.config_extension.clone(),
    doc_comments: options.config_doc_comments,
  })
}

/// The result type can't share a name with a type in the hierarchy
fn check_result_type(models: &[CodeModel], config: &EmitterConfig) -> Result<(), ()> {
  let result_type = config.result_type.as_str();
  let clash = models.iter().find(|model| {
    model.base_name == result_type || model.variant(result_type).is_some()
  });

  match clash {
    Some(model) => {
      eprintln!("{}", Message {
        title: "Invalid Result Type".into(),
        body: format!("`{result_type}` is already the name of a type in `{}`", model.base_name),
        hint: Some("choose another name with `--config-result-type`".into()),
        severity: Severity::Error,
      });
      Err(())
    }
    None => Ok(()),
  }
}

pub fn generate(options: &GenerateOptions) -> Result<CommandStatus, ()> {
  let config = config(options)?;

  let source = read_file(&options.file)?;
  let models = models(&options.file, &source, options.base.as_deref())?;
  check_result_type(&models, &config)?;
  let files: Vec<OutputFile> = models
    .iter()
    .flat_map(|model| astgen_emitter::emit(model, &config).files(&config))
    .collect();

  if options.dryrun {
    for (index, file) in files.iter().enumerate() {
      if index > 0 {
        println!();
      }
      println!("// {}", file.name);
      print!("{}", file.contents);
    }
    return Ok(CommandStatus::Success);
  }

  let output_dir = Path::new(&options.output_dir);

  if options.check {
    let mut up_to_date = true;
    for file in &files {
      let path = output_dir.join(&file.name);
      if fs::read_to_string(&path).ok().as_deref() != Some(file.contents.as_str()) {
        eprintln!("{}", Message {
          title: "File is out of date".into(),
          body: format!("`{}` does not match its spec", path.display()),
          hint: Some("run `astgen generate` to update it".into()),
          severity: Severity::Error,
        });
        up_to_date = false;
      }
    }

    return if up_to_date {
      Ok(CommandStatus::Success)
    } else {
      Ok(CommandStatus::Failure)
    };
  }

  if fs::create_dir_all(output_dir).is_err() {
    eprintln!(
      "{}",
      Message::error(format!("Problem creating directory `{}`", output_dir.display()))
    );
    return Err(());
  }

  for file in &files {
    let path = output_dir.join(&file.name);
    if fs::write(&path, &file.contents).is_err() {
      eprintln!(
        "{}",
        Message::error(format!("Problem writing to file `{}`", path.display()))
      );
      return Err(());
    }
    println!("{} Generated {}", "✓".green().bold(), path.display());
  }

  Ok(CommandStatus::Success)
}

pub fn check(filename: &str, base: Option<&str>) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let models = models(filename, &source, base)?;

  for model in &models {
    let owning: usize = model
      .variants
      .iter()
      .map(|variant| variant.owning_fields().count())
      .sum();

    println!(
      "{} {}: {}, {} ({owning} owning)",
      "✓".green().bold(),
      model.base_name.bold(),
      plural(model.variants.len(), "variant"),
      plural(model.field_count(), "field"),
    );
  }

  Ok(CommandStatus::Success)
}

fn plural(count: usize, noun: &str) -> String {
  if count == 1 {
    format!("{count} {noun}")
  } else {
    format!("{count} {noun}s")
  }
}

pub fn print_model(filename: &str, base: Option<&str>, as_json: bool) -> Result<CommandStatus, ()> {
  let source = read_file(filename)?;
  let models = models(filename, &source, base)?;

  if as_json {
    let hierarchies: Vec<_> = models.iter().map(model_json).collect();
    println!("{:#}", serde_json::Value::Array(hierarchies));
    return Ok(CommandStatus::Success);
  }

  let filename = display_name(filename);
  for model in &models {
    println!("╭─[Code Model: {filename}]");
    print!("{model}");
    println!("╯");
  }

  Ok(CommandStatus::Success)
}

fn model_json(model: &CodeModel) -> serde_json::Value {
  let variants: Vec<_> = model
    .variants
    .iter()
    .map(|variant| {
      let fields: Vec<_> = variant
        .fields
        .iter()
        .map(|field| {
          json!({
            "name": field.name,
            "type": field.type_expr,
            "ownership": field.ownership.as_str(),
          })
        })
        .collect();

      json!({
        "name": variant.name,
        "line": variant.line,
        "fields": fields,
      })
    })
    .collect();

  json!({
    "base": model.base_name,
    "variants": variants,
  })
}
