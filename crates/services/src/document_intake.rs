use std::path::Path;

use crate::error::DocumentError;

/// Extensions accepted as supporting documents.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Acknowledges supporting documents by name.
///
/// File contents are never read or stored; only the names of accepted files
/// are remembered for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIntake {
    received: Vec<String>,
}

impl DocumentIntake {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_supported(name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                ACCEPTED_EXTENSIONS
                    .iter()
                    .any(|accepted| ext.eq_ignore_ascii_case(accepted))
            })
    }

    /// Accept one file by name.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::EmptyName` for blank names and
    /// `DocumentError::UnsupportedType` for other extensions.
    pub fn acknowledge(&mut self, name: &str) -> Result<(), DocumentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DocumentError::EmptyName);
        }
        if !Self::is_supported(name) {
            tracing::debug!(name, "document rejected");
            return Err(DocumentError::UnsupportedType {
                name: name.to_string(),
            });
        }
        tracing::info!(name, "document acknowledged");
        self.received.push(name.to_string());
        Ok(())
    }

    /// Names of accepted files, in upload order.
    #[must_use]
    pub fn received(&self) -> &[String] {
        &self.received
    }
}
