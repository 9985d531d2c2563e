//! Load, edit and render entry points.
//!
//! Every load goes through the same stages whatever the surface:
//!
//! 1. read the input into a raw document (namelist text or nested mapping)
//! 2. coerce it against the program schema, failing on the first bad field
//! 3. validate the typed document, collecting every violation
//!
//! Rendering is a pure function of the typed document.

use tracing::info;
use ww3_ingest::{DataSource, StructuredFormat, read_namelist_from, read_structured_from};
use ww3_model::{
    Document, EngineConfig, LoadOptions, NamelistError, ProgramSchema, RawDocument, RawValue,
    RenderOptions, Result, ValidationReport,
};
use ww3_transform::{build_document, clear_field, program_schema, replace_field};
use ww3_validate::validate_document;

/// Parse, coerce and validate namelist text for `program`.
pub fn load_namelist(program: &str, text: &str) -> Result<Document> {
    load_namelist_with(program, text, &LoadOptions::default())
}

pub fn load_namelist_with(program: &str, text: &str, options: &LoadOptions) -> Result<Document> {
    let schema = program_schema(program)?;
    let raw = ww3_namelist::parse_namelist(text)?;
    finish(schema, &raw, options, "namelist")
}

/// Coerce and validate a raw document from any other surface.
pub fn load_structured(program: &str, raw: &RawDocument) -> Result<Document> {
    load_structured_with(program, raw, &LoadOptions::default())
}

pub fn load_structured_with(
    program: &str,
    raw: &RawDocument,
    options: &LoadOptions,
) -> Result<Document> {
    let schema = program_schema(program)?;
    finish(schema, raw, options, "structured")
}

/// Load the entry `id` of a caller-supplied source. `.json` and `.toml`
/// entries are read as nested mappings, anything else as namelist text.
pub fn load_from(
    source: &dyn DataSource,
    id: &str,
    program: &str,
    options: &LoadOptions,
) -> Result<Document> {
    let schema = program_schema(program)?;
    match StructuredFormat::from_extension(id) {
        Some(format) => {
            let raw = read_structured_from(source, id, format)?;
            finish(schema, &raw, options, "structured")
        }
        None => {
            let raw = read_namelist_from(source, id)?;
            finish(schema, &raw, options, "namelist")
        }
    }
}

fn finish(
    schema: &'static ProgramSchema,
    raw: &RawDocument,
    options: &LoadOptions,
    surface: &'static str,
) -> Result<Document> {
    let document = build_document(schema, raw)?;
    if options.validate {
        check(schema, &document)?;
    }
    info!(
        program = schema.name,
        surface,
        blocks = document.records().len(),
        validated = options.validate,
        "loaded document"
    );
    Ok(document)
}

fn check(schema: &ProgramSchema, document: &Document) -> Result<()> {
    let report = validate_document(schema, document);
    if !report.is_valid() {
        info!(
            program = schema.name,
            violations = report.len(),
            "document failed validation"
        );
    }
    report.into_result().map_err(NamelistError::from)
}

/// Run the validation layer over an already-built document.
pub fn validate(document: &Document) -> Result<ValidationReport> {
    let schema = program_schema(document.program())?;
    Ok(validate_document(schema, document))
}

/// Replace one field and re-coerce and re-validate the document.
/// `path` is relative to the block, e.g. `XCOORD%SF`.
pub fn edit(document: &Document, block: &str, path: &str, value: RawValue) -> Result<Document> {
    let schema = program_schema(document.program())?;
    let edited = replace_field(schema, document, block, path, value)?;
    check(schema, &edited)?;
    Ok(edited)
}

/// Remove one field (falling back to its default, if any) and re-validate.
pub fn clear(document: &Document, block: &str, path: &str) -> Result<Document> {
    let schema = program_schema(document.program())?;
    let edited = clear_field(schema, document, block, path)?;
    check(schema, &edited)?;
    Ok(edited)
}

/// Every block as one text.
pub fn render_all(document: &Document, options: &RenderOptions) -> String {
    ww3_namelist::render(document, options)
}

/// One block's text, or `None` if the document has no such block.
pub fn render_block(document: &Document, name: &str, options: &RenderOptions) -> Option<String> {
    ww3_namelist::render_block(document, name, options)
}

/// Entry points bound to one [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(Self::new(EngineConfig::from_toml_str(text)?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn load_namelist(&self, program: &str, text: &str) -> Result<Document> {
        load_namelist_with(program, text, &self.config.load)
    }

    pub fn load_structured(&self, program: &str, raw: &RawDocument) -> Result<Document> {
        load_structured_with(program, raw, &self.config.load)
    }

    pub fn render_all(&self, document: &Document) -> String {
        render_all(document, &self.config.render)
    }

    pub fn render_block(&self, document: &Document, name: &str) -> Option<String> {
        render_block(document, name, &self.config.render)
    }

    /// Composer over `document` with this engine's layout.
    pub fn composer(&self, document: &Document) -> ww3_namelist::RecordComposer {
        ww3_namelist::RecordComposer::from_document(document, self.config.render.clone())
    }
}
