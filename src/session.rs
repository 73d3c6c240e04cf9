use crate::config::GeneratorConfig;
use crate::generate::generate;
use crate::record::DocumentRecord;
use crate::PDFError;
use std::cell::Cell;

/// A finished document, ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Generates documents one at a time.
///
/// While a generation is in flight, further submissions are refused with
/// [PDFError::Busy] instead of being queued. The flag is cleared when the
/// generation finishes, whether it succeeded or not.
#[derive(Debug, Default)]
pub struct Session {
    config: GeneratorConfig,
    in_progress: Cell<bool>,
}

/// Marks a session busy until dropped
pub struct InProgress<'s> {
    flag: &'s Cell<bool>,
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl Session {
    pub fn new(config: GeneratorConfig) -> Session {
        Session {
            config,
            in_progress: Cell::new(false),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.in_progress.get()
    }

    /// Mark the session busy, or fail if it already is
    pub fn begin(&self) -> Result<InProgress<'_>, PDFError> {
        if self.in_progress.replace(true) {
            return Err(PDFError::Busy);
        }
        Ok(InProgress {
            flag: &self.in_progress,
        })
    }

    /// Generate `record` with this session's configuration
    pub fn submit(&self, record: &DocumentRecord) -> Result<GeneratedDocument, PDFError> {
        let _guard = self.begin()?;
        let bytes = generate(record, &self.config)?;
        let file_name = record.file_name();
        log::info!("generated {file_name} ({} bytes)", bytes.len());
        Ok(GeneratedDocument { file_name, bytes })
    }
}
