use std::path::Path;

/// Result of checking an input file before it is read
#[derive(Debug, Clone, Default)]
pub struct FileValidation {
    /// Problems that will make the load fail
    pub errors: Vec<String>,

    /// Problems worth reporting that do not prevent loading
    pub warnings: Vec<String>,
}

impl FileValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

pub struct FileValidator;

impl FileValidator {
    /// Validate that a file exists and is readable
    pub fn validate_file_exists(path: &Path) -> FileValidation {
        let mut validation = FileValidation::default();

        if !path.exists() {
            validation.errors.push(format!("File not found: {}", path.display()));
            return validation;
        }
        match std::fs::metadata(path) {
            Ok(metadata) if !metadata.is_file() => {
                validation.errors.push(format!("Not a regular file: {}", path.display()));
            }
            Ok(_) => {}
            Err(e) => validation.errors.push(format!("Cannot access file: {}", e)),
        }

        validation
    }

    /// Warn when the file extension is not one of the expected ones
    pub fn validate_extension(path: &Path, expected: &[&str]) -> FileValidation {
        let mut validation = FileValidation::default();

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if expected.iter().any(|x| ext.eq_ignore_ascii_case(x)) => {}
            Some(ext) => validation.warnings.push(format!(
                "Unexpected file extension: .{} (expected .{})",
                ext,
                expected.join(" or .")
            )),
            None => validation
                .warnings
                .push(format!("File has no extension (expected .{})", expected.join(" or ."))),
        }

        validation
    }

    /// Warn about files large enough to slow down startup
    pub fn validate_file_size(path: &Path, warn_above_mb: u64) -> FileValidation {
        let mut validation = FileValidation::default();

        if let Ok(metadata) = std::fs::metadata(path) {
            let size_mb = metadata.len() / (1024 * 1024);
            if size_mb > warn_above_mb {
                validation.warnings.push(format!(
                    "Large file ({} MB) is held fully in memory",
                    size_mb
                ));
            }
        }

        validation
    }

    /// Run every check for a claim collection file
    pub fn validate_claims_file(path: &Path) -> FileValidation {
        Self::merge(vec![
            Self::validate_file_exists(path),
            Self::validate_extension(path, &["geojson", "json"]),
            Self::validate_file_size(path, 256),
        ])
    }

    /// Run every check for a statistics file
    pub fn validate_statistics_file(path: &Path) -> FileValidation {
        Self::merge(vec![
            Self::validate_file_exists(path),
            Self::validate_extension(path, &["json"]),
        ])
    }

    pub fn merge(validations: Vec<FileValidation>) -> FileValidation {
        let mut merged = FileValidation::default();

        for validation in validations {
            merged.errors.extend(validation.errors);
            merged.warnings.extend(validation.warnings);
        }

        merged
    }
}
