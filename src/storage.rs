use crate::assignment::*;
use crate::error::*;
use crate::layout::*;
use ::serde::Serialize;
use log::*;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Reads the host's assignment list. A missing file is an empty list.
pub fn load_assignments(path: &Path) -> Result<Vec<Assignment>> {
    let file = OpenOptions::new().read(true).open(path);

    let mut file = match file {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No assignment file at {}, rendering an empty grid", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let assignments: Vec<Assignment> = from_slice_lenient(data.as_bytes())?;

    info!("Loaded {} assignment(s) from {}", assignments.len(), path.display());

    Ok(assignments)
}

pub fn save_draw_plan<T: Serialize>(path: &Path, plan: &DrawPlan<'_, T>) -> Result<()> {
    let mut writer = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let serialized_output = serde_json::to_string(plan)?;

    writer.write_all(serialized_output.as_bytes())?;

    info!("Saved draw plan to {}", path.display());

    Ok(())
}

// Tolerates trailing bytes after the top level value, e.g. a half-overwritten file.
fn from_slice_lenient<'a, T: ::serde::Deserialize<'a>>(
    v: &'a [u8],
) -> std::result::Result<T, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(v);
    ::serde::Deserialize::deserialize(&mut de)
    // note the lack of: de.end()
}
