use simplestyle::{Declaration, parse_declarations};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parses `css` and flattens the result into `(property, value)` pairs.
pub fn parse_pairs(css: &str) -> Result<Vec<(String, String)>, simplestyle::CssError> {
    Ok(parse_declarations(css)?
        .into_iter()
        .map(|Declaration { property, value }| (property, value))
        .collect())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
