use crate::artifacts::{Artifacts, VariantArtifact};
use crate::config::Config;
use crate::naming;
use crate::writer::CodeWriter;
use astgen_model::{CodeModel, VariantDef};

/// Generates the declarations of a classified hierarchy
pub(crate) struct Emitter<'a> {
  model: &'a CodeModel,
  config: &'a Config,
}
impl<'a> Emitter<'a> {
  pub(crate) fn new(model: &'a CodeModel, config: &'a Config) -> Self {
    Self { model, config }
  }

  pub(crate) fn emit(&self) -> Artifacts {
    let visitor = self.visitor();
    let base = self.base(&visitor);
    let variants = self
      .model
      .variants
      .iter()
      .map(|variant| VariantArtifact {
        name: variant.name.clone(),
        source: self.variant(variant),
      })
      .collect();

    Artifacts {
      base_name: self.model.base_name.clone(),
      base,
      visitor,
      variants,
    }
  }

  fn base_name(&self) -> &str {
    &self.model.base_name
  }

  fn result_type(&self) -> &str {
    &self.config.result_type
  }

  fn base_template(&self) -> String {
    naming::base_template(self.base_name(), self.result_type())
  }

  fn writer(&self) -> CodeWriter<'a> {
    CodeWriter::new(self.config)
  }

  /// The visitor interface, indented to sit inside the base class
  fn visitor(&self) -> String {
    let mut w = self.writer().at_depth(1);
    let parameter = naming::visitor_parameter(self.base_name());

    w.doc(&format!("Visitor with a method for each `{}` variant.", self.base_name()));
    w.block("struct Visitor", "};", |w| {
      for (index, variant) in self.model.variants.iter().enumerate() {
        if self.config.doc_comments && index > 0 {
          w.blank();
        }
        w.doc(&format!("Visit a `{}` node.", variant.name));
        w.line(&format!(
          "virtual {} {}(const {}& {parameter}) = 0;",
          self.result_type(),
          naming::visit_method(&variant.name, self.base_name()),
          naming::qualified_variant(self.base_name(), &variant.name, self.result_type()),
        ));
      }
    });

    w.finish()
  }

  /// The abstract base class, with forward declarations and the visitor
  fn base(&self, visitor: &str) -> String {
    let mut w = self.writer();
    let base_name = self.base_name();

    w.doc(&format!("Abstract base of the `{base_name}` hierarchy."));
    w.line(&format!("template <class {}>", self.result_type()));
    w.block(&format!("class {base_name}"), "};", |w| {
      w.label("public:");
      w.line(&format!("virtual ~{base_name}() = default;"));
      w.blank();

      for variant in &self.model.variants {
        w.line(&format!("class {};", variant.name));
      }
      w.blank();

      w.raw(visitor);
      w.blank();

      w.doc("Dispatch to the visitor method for this variant.");
      w.line(&format!(
        "virtual {} accept(Visitor& visitor) const = 0;",
        self.result_type()
      ));
    });

    w.finish()
  }

  /// A concrete variant: fields, constructor, accept, and cleanup if it owns anything
  fn variant(&self, variant: &VariantDef) -> String {
    let mut w = self.writer();
    let base_template = self.base_template();

    w.doc(&format!("The `{}` variant of `{}`.", variant.name, self.base_name()));
    w.line(&format!("template <class {}>", self.result_type()));
    w.block(
      &format!(
        "class {} : public {base_template}",
        naming::qualified_variant(self.base_name(), &variant.name, self.result_type())
      ),
      "};",
      |w| {
        w.label("public:");

        if !variant.is_marker() {
          self.fields(w, variant);
          w.blank();
        }

        self.constructor(w, variant);
        w.blank();
        self.accept(w, variant);

        if variant.has_owning_fields() {
          w.blank();
          self.destructor(w, variant);
        }
      },
    );

    w.finish()
  }

  fn fields(&self, w: &mut CodeWriter, variant: &VariantDef) {
    for field in &variant.fields {
      w.line(&format!("{} {};", field.type_expr, field.name));
    }
  }

  fn constructor(&self, w: &mut CodeWriter, variant: &VariantDef) {
    if variant.is_marker() {
      w.line(&format!("{}() {{}}", variant.name));
      return;
    }

    let parameters = variant
      .fields
      .iter()
      .map(|field| format!("{} {}", field.type_expr, field.name))
      .collect::<Vec<_>>()
      .join(", ");
    let initialisers = variant
      .fields
      .iter()
      .map(|field| format!("{0}({0})", field.name))
      .collect::<Vec<_>>()
      .join(", ");

    w.line(&format!("{}({parameters})", variant.name));
    w.indented(|w| w.line(&format!(": {initialisers} {{}}")));
  }

  fn accept(&self, w: &mut CodeWriter, variant: &VariantDef) {
    let header = format!(
      "{} accept({}::Visitor& visitor) const override",
      self.result_type(),
      self.base_template()
    );
    let method = naming::visit_method(&variant.name, self.base_name());

    w.block(&header, "}", |w| {
      w.line(&format!("return visitor.{method}(*this);"));
    });
  }

  fn destructor(&self, w: &mut CodeWriter, variant: &VariantDef) {
    w.doc("Deletes the fields this variant owns.");
    w.block(&format!("~{}()", variant.name), "}", |w| {
      for field in variant.owning_fields() {
        w.line(&format!("delete {};", field.name));
      }
    });
  }
}
