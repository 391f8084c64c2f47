//! Window descriptors and list-windows output parsing.

use crate::error::TmuxError;
use serde::Serialize;

/// Format string handed to `list-windows -F`. Index and name are separated
/// by a literal tab so names containing spaces survive the round trip.
pub const LIST_WINDOWS_FORMAT: &str = "#{window_index}\t#{window_name}";

/// One window of a session, as reported by a listing call. Not cached;
/// every listing re-queries the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub index: u32,
    pub name: String,
}

/// Parse one `list-windows` line produced with [`LIST_WINDOWS_FORMAT`].
///
/// The index field must be all digits and the name field non-empty; any
/// other shape fails, naming the offending line. Names may contain tabs
/// (only the first tab separates the fields) but not newlines, which a
/// line-oriented format cannot represent.
pub fn parse_window_line(line: &str) -> Result<Window, TmuxError> {
    let Some((index_field, name)) = line.split_once('\t') else {
        return Err(TmuxError::WindowFormat(line.to_string()));
    };
    if index_field.is_empty() || !index_field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TmuxError::WindowFormat(line.to_string()));
    }
    if name.is_empty() {
        return Err(TmuxError::WindowFormat(line.to_string()));
    }
    let index = index_field.parse::<u32>()?;
    Ok(Window {
        index,
        name: name.to_string(),
    })
}
