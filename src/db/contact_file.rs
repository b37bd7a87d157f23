use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::error::{TravelError, TravelResult};
use crate::model::EmergencyContact;

/// File name used when no path is configured.
pub const DEFAULT_FILE: &str = "emergency_contacts.json";

/// Renders contacts as a JSON array indented with four spaces.
pub fn to_json(contacts: &[EmergencyContact]) -> TravelResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    contacts.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parses a contacts file. Ids must be positive, below `u32::MAX` and
/// unique within the file.
pub fn from_json(json: &str) -> TravelResult<Vec<EmergencyContact>> {
    let contacts: Vec<EmergencyContact> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for c in &contacts {
        let reason = match c.id.0 {
            0 => Some("ids start at 1"),
            u32::MAX => Some("id is too large"),
            _ if !seen.insert(c.id) => Some("id appears more than once"),
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(TravelError::InvalidContactId {
                id: c.id.0,
                reason: reason.into(),
            });
        }
    }
    Ok(contacts)
}

/// Writes all contacts to `path`. The data goes to a sibling temp file
/// first and is renamed into place.
pub fn save(path: &Path, contacts: &[EmergencyContact]) -> TravelResult<()> {
    let json = to_json(contacts)?;
    let tmp = temp_path(path);
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), count = contacts.len(), "contacts saved");
    Ok(())
}

/// Reads all contacts from `path`. A missing file is an empty list.
pub fn load(path: &Path) -> TravelResult<Vec<EmergencyContact>> {
    let json = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no contacts file, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let contacts = from_json(&json)?;
    info!(path = %path.display(), count = contacts.len(), "contacts loaded");
    Ok(contacts)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
