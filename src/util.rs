use std::path::Path;

use crate::MessageError;

/// Reads the message from `file` when given, else uses `inline`, else reads stdin.
pub fn read_message(file: Option<&Path>, inline: Option<&str>) -> Result<String, MessageError> {
    if let Some(path) = file {
        tracing::debug!("Reading message file: {}", path.display());
        return std::fs::read_to_string(path).map_err(|why| MessageError::CouldNotRead(path.display().to_string(), why.to_string()));
    }
    if let Some(message) = inline {
        return Ok(message.to_string());
    }
    tracing::debug!("Reading message from stdin");
    std::io::read_to_string(std::io::stdin()).map_err(|why| MessageError::CouldNotRead("stdin".to_string(), why.to_string()))
}

pub fn write_message(path: impl AsRef<Path>, message: impl AsRef<str>) -> Result<(), MessageError> {
    tracing::debug!("Writing message file: {}", path.as_ref().display());
    std::fs::write(path.as_ref(), message.as_ref()).map_err(|why| MessageError::CouldNotWrite(path.as_ref().to_path_buf(), why.to_string()))
}
