//! JSON dump of units
//!
//! Each unit becomes `{"kind", "id", "text", "metadata", "children"}`; terminals
//! omit `id` and `children`.

use super::registry::{FormatError, Formatter};
use crate::proust::ast::Unit;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

impl Serialize for Unit<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let terminal = self.is_terminal();
        let mut map = serializer.serialize_map(Some(if terminal { 3 } else { 5 }))?;
        map.serialize_entry("kind", &self.kind())?;
        if !terminal {
            map.serialize_entry("id", &self.id())?;
        }
        map.serialize_entry("text", self.text())?;
        map.serialize_entry("metadata", self.metadata())?;
        if !terminal {
            map.serialize_entry("children", &Children(*self))?;
        }
        map.end()
    }
}

struct Children<'t>(Unit<'t>);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.child_count()))?;
        for child in self.0.children() {
            seq.serialize_element(&child)?;
        }
        seq.end()
    }
}

/// Pretty-printed JSON array of `units`.
pub fn to_json(units: &[Unit<'_>]) -> Result<String, FormatError> {
    serde_json::to_string_pretty(units)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, units: &[Unit<'_>]) -> Result<String, FormatError> {
        to_json(units)
    }

    fn description(&self) -> &str {
        "JSON array of unit objects"
    }
}
