use std::fs;
use std::io::{self, Read};
use std::path::Path;

use treesoa_core::Model;

use super::CliError;

/// Load a grammar model from a file, or from stdin when the path is `-`.
pub fn load_model(path: &Path) -> Result<Model, CliError> {
    let (name, text) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: name.clone(),
            source,
        })?;
        (name, text)
    };

    parse_model(&name, &text)
}

/// Parse model JSON; `name` labels the input in error messages.
pub fn parse_model(name: &str, text: &str) -> Result<Model, CliError> {
    Model::from_json(text).map_err(|source| CliError::Model {
        path: name.to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}
