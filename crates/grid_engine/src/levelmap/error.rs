//! Decode errors carrying the exact failure coordinates
//!
//! Level coordinates in messages follow the text format's axes: layer = Y,
//! line = Z within its layer, cell = X within its line, group = the
//! field-group slot after splitting the line on `-`.

/// Errors raised while decoding level text into a packed grid
///
/// A decode error aborts the whole level load; the grid is never partially
/// applied.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A cell token failed integer parsing
    #[error(
        "malformed cell token '{token}' (layer {layer}, line {line}, group {group}, cell {cell})"
    )]
    BadToken {
        /// The offending token after `|`/space stripping
        token: String,
        /// Layer index (Y)
        layer: usize,
        /// Line index within the layer (Z)
        line: usize,
        /// Field-group slot on the line
        group: usize,
        /// Cell index within the group (X)
        cell: usize,
        /// Underlying integer parse failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// Layers within one level disagree on line count
    #[error("ragged level: layer {layer} has {found} lines, expected {expected}")]
    RaggedLines {
        /// Layer index (Y)
        layer: usize,
        /// Line count of the first layer
        expected: usize,
        /// Line count of the offending layer
        found: usize,
    },

    /// A non-empty field group disagrees with the structural cell count
    #[error(
        "ragged line: group {group} at layer {layer}, line {line} has {found} cells, expected {expected}"
    )]
    RaggedCells {
        /// Layer index (Y)
        layer: usize,
        /// Line index within the layer (Z)
        line: usize,
        /// Field-group slot on the line
        group: usize,
        /// Cell count of the structural group
        expected: usize,
        /// Cell count of the offending group
        found: usize,
    },

    /// A cell value does not fit its field's reserved bit width
    #[error(
        "value {value} exceeds the {bits}-bit reservation of field '{field}' at ({x}, {y}, {z})"
    )]
    ValueOutOfRange {
        /// Field whose reservation was exceeded
        field: String,
        /// The oversized value
        value: u32,
        /// Reserved bit width
        bits: u32,
        /// Cell X coordinate
        x: usize,
        /// Cell Y coordinate
        y: usize,
        /// Cell Z coordinate
        z: usize,
    },

    /// Requested level index does not exist in the level set
    #[error("level index {index} out of range: the set holds {count} levels")]
    NoSuchLevel {
        /// Zero-based requested index
        index: usize,
        /// Number of levels in the set
        count: usize,
    },
}
