//! Default values and functions for configuration

// Default constants
pub(crate) const DEFAULT_DATA_DIR: &str = "data";
pub(crate) const DEFAULT_SYMPTOMS_FILE: &str = "symptoms.tsv";
pub(crate) const DEFAULT_CUI_FILE: &str = "symptoms_cui.tsv";
pub(crate) const DEFAULT_LONGTAIL_FILE: &str = "symptoms_longtail.tsv";

pub(crate) fn default_data_dir() -> std::path::PathBuf {
    std::path::PathBuf::from(DEFAULT_DATA_DIR)
}

pub(crate) fn default_symptoms_file() -> String {
    DEFAULT_SYMPTOMS_FILE.to_string()
}

pub(crate) fn default_cui_file() -> String {
    DEFAULT_CUI_FILE.to_string()
}

pub(crate) fn default_longtail_file() -> String {
    DEFAULT_LONGTAIL_FILE.to_string()
}

pub(crate) fn default_pretty() -> bool {
    true
}
