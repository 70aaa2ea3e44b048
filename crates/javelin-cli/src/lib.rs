use anyhow::Result;

/// Full pipeline over in-memory source text: tokenize, parse, generate.
pub fn translate_source(file: &str, src: &str) -> Result<String> {
    let unit = javelin_parse::parse_str(file, src)?;
    Ok(javelin_emit::generate(&unit))
}
