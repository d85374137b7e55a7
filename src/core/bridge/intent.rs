//=========================================================================
// Intent & Wire Values
//
// Defines the immutable named events that cross the module boundary.
//
// An Intent pairs a dot-namespaced event name (e.g. "camera.TranslateBy")
// with an ordered payload of typed wire values. Intents are produced by
// the EventBridge catalogue methods and handed to a ModuleInstance; they
// are fire-and-forget and never acknowledged.
//
// Responsibilities:
// - Represent payload fields in a stable, typed form
// - Preserve field order as declared by the catalogue
// - Keep binary payloads (tileset bytes) raw end to end
// - Render payloads as JSON for embedders and diagnostics
//
//=========================================================================

//=== External Crates =====================================================

use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::Value;

//=== WireValue ===========================================================

/// A single payload field value.
///
/// Covers every type the event catalogue carries: flags, integral
/// dimensions and tile indices, camera floats, names and colors, raw
/// tileset bytes, and row-major layer grids.
///
/// Serialization is untagged: a `WireValue` serializes as the bare value,
/// so a payload renders as a flat mapping. `Bytes` stays a raw byte
/// sequence inside the process; transports that serialize it emit a
/// numeric sequence, never a text encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    /// Boolean flag.
    Bool(bool),

    /// Integral value (dimensions, tile indices, resize extents).
    Int(i64),

    /// Floating-point value (camera coordinates, zoom, z-order).
    Float(f64),

    /// Textual value (map/layer names, color strings).
    Text(String),

    /// Raw binary payload (tileset image bytes).
    Bytes(Vec<u8>),

    /// Row-major grid of tile indices (layer data).
    Grid(Vec<Vec<i32>>),
}

impl WireValue {
    /// Renders this value as JSON.
    ///
    /// Non-finite floats render as `null`, matching serde_json's own
    /// treatment of unrepresentable numbers.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(flag) => Value::Bool(*flag),
            Self::Int(n) => Value::from(*n),
            Self::Float(f) => Value::from(*f),
            Self::Text(s) => Value::String(s.clone()),
            Self::Bytes(bytes) => {
                Value::Array(bytes.iter().map(|&b| Value::from(b)).collect())
            }
            Self::Grid(rows) => Value::Array(
                rows.iter()
                    .map(|row| Value::Array(row.iter().map(|&t| Value::from(t)).collect()))
                    .collect(),
            ),
        }
    }
}

//--- Conversions ---------------------------------------------------------

impl From<bool> for WireValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for WireValue {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<u32> for WireValue {
    fn from(n: u32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<i64> for WireValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f32> for WireValue {
    fn from(f: f32) -> Self {
        Self::Float(f as f64)
    }
}

impl From<f64> for WireValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for WireValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<Vec<i32>>> for WireValue {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        Self::Grid(rows)
    }
}

//=== Payload =============================================================

/// Ordered field mapping carried by an [`Intent`].
///
/// Fields keep the order they were added in, matching the catalogue's
/// declared shapes. Built fluently:
///
/// ```
/// use mosaic_bridge::core::bridge::Payload;
///
/// let payload = Payload::new()
///     .field("x", 10.0_f32)
///     .field("y", -4.0_f32);
///
/// assert_eq!(payload.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Vec<(&'static str, WireValue)>,
}

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field, preserving insertion order.
    pub fn field(mut self, name: &'static str, value: impl Into<WireValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the payload carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, WireValue)> {
        self.fields.iter()
    }

    /// Renders the payload as a JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            map.insert((*name).to_string(), value.to_json());
        }
        Value::Object(map)
    }
}

//--- Trait Implementations -----------------------------------------------

/// Serializes as a flat map, fields in insertion order.
impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

//=== Intent ==============================================================

/// A named, payload-carrying event bound for the host module.
///
/// Names are dot-namespaced by domain (`world.*`, `camera.*`,
/// `resources.*`, `screen.*`) and fixed by the catalogue, so they are
/// static strings. An intent is immutable once built and carries no
/// delivery state: sending one is fire-and-forget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intent {
    /// Catalogue event name, e.g. `"world.AddMap"`.
    pub name: &'static str,

    /// Ordered payload fields.
    pub payload: Payload,
}

impl Intent {
    /// Builds an intent from a catalogue name and payload.
    pub fn new(name: &'static str, payload: Payload) -> Self {
        Self { name, payload }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
