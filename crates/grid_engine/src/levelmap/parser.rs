//! Level text parser
//!
//! The level format is a single text blob with a fixed delimiter grammar:
//!
//! - `*` separates levels
//! - `&` separates layers within a level (layers stack along Y)
//! - `/` separates lines within a layer (lines advance along Z)
//! - `-` separates field groups within a line; the segment before the first
//!   `-` is a free-form line tag ignored by the decoder, and groups occupy
//!   slots 1..=7 after it
//! - `,` separates cells within a group (cells advance along X)
//! - `|` and whitespace are decorative and stripped before parsing
//!
//! Trailing groups may be omitted from a line, which reads as "no values"
//! for those groups. Everything else is strict: non-integer tokens and
//! ragged dimensions fail the parse with exact coordinates rather than
//! silently corrupting grid indices.

use log::debug;

use super::error::DecodeError;

/// Field-group slot that defines the structural (room) line of the format
///
/// The structural group governs the X extent of the level; every other
/// non-empty group on a line must match its cell count.
pub const STRUCTURAL_GROUP: usize = 1;

/// Highest field-group slot the format defines
pub const MAX_GROUP: usize = 7;

/// A multi-level source blob, split once and parsed per level on demand
///
/// Parsing lazily means one malformed level cannot poison the others: the
/// game can keep running the current level while a broken one is fixed.
#[derive(Debug, Clone)]
pub struct LevelSet {
    sources: Vec<String>,
}

impl LevelSet {
    /// Split a raw blob on `*` into per-level sources
    ///
    /// Empty segments (stray leading/trailing separators) are dropped.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(raw: &str) -> Self {
        let sources: Vec<String> = raw
            .split('*')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        debug!("level set split into {} level(s)", sources.len());
        Self { sources }
    }

    /// Number of levels in the set
    pub fn level_count(&self) -> usize {
        self.sources.len()
    }

    /// Parse and shape-validate one level
    pub fn parse_level(&self, index: usize) -> Result<ParsedLevel, DecodeError> {
        let source = self
            .sources
            .get(index)
            .ok_or(DecodeError::NoSuchLevel {
                index,
                count: self.sources.len(),
            })?;
        ParsedLevel::parse(source)
    }
}

/// One parsed level, indexable as `[layer][line][group][cell]`
#[derive(Debug, Clone)]
pub struct ParsedLevel {
    layers: Vec<Layer>,
}

/// One horizontal slice of a level (a Y step)
#[derive(Debug, Clone)]
pub struct Layer {
    lines: Vec<Line>,
}

/// One line of a layer (a Z step): a tag plus up to seven field groups
#[derive(Debug, Clone)]
pub struct Line {
    tag: String,
    groups: Vec<Vec<u32>>,
}

impl ParsedLevel {
    /// Parse a single level's source and validate its shape
    pub fn parse(source: &str) -> Result<Self, DecodeError> {
        let mut layers = Vec::new();
        for (layer_index, layer_source) in non_empty_segments(source, '&').enumerate() {
            let mut lines = Vec::new();
            for (line_index, line_source) in non_empty_segments(layer_source, '/').enumerate() {
                lines.push(Line::parse(line_source, layer_index, line_index)?);
            }
            layers.push(Layer { lines });
        }

        let level = Self { layers };
        level.validate_shape()?;
        Ok(level)
    }

    /// Layer count (the Y extent)
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layers in bottom-to-top order
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Every layer must agree on line count, and every non-empty field
    /// group must match the structural cell count.
    fn validate_shape(&self) -> Result<(), DecodeError> {
        let expected_lines = self.layers.first().map_or(0, |layer| layer.lines.len());
        for (layer_index, layer) in self.layers.iter().enumerate() {
            if layer.lines.len() != expected_lines {
                return Err(DecodeError::RaggedLines {
                    layer: layer_index,
                    expected: expected_lines,
                    found: layer.lines.len(),
                });
            }
        }

        let expected_cells = self
            .layers
            .iter()
            .flat_map(|layer| layer.lines.iter())
            .map(|line| line.group(STRUCTURAL_GROUP).len())
            .max()
            .unwrap_or(0);

        for (layer_index, layer) in self.layers.iter().enumerate() {
            for (line_index, line) in layer.lines.iter().enumerate() {
                for group in STRUCTURAL_GROUP..=MAX_GROUP {
                    let cells = line.group(group).len();
                    if cells != 0 && cells != expected_cells {
                        return Err(DecodeError::RaggedCells {
                            layer: layer_index,
                            line: line_index,
                            group,
                            expected: expected_cells,
                            found: cells,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl Layer {
    /// Line count of this layer (its Z extent)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in front-to-back order
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}

impl Line {
    fn parse(source: &str, layer: usize, line: usize) -> Result<Self, DecodeError> {
        let mut segments = source.split('-');
        let tag = segments.next().unwrap_or("").trim().to_owned();

        let mut groups = Vec::new();
        for (offset, group_source) in segments.enumerate() {
            let group = STRUCTURAL_GROUP + offset;
            groups.push(parse_group(group_source, layer, line, group)?);
        }

        Ok(Self { tag, groups })
    }

    /// The free-form tag before the first `-`
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Cell values of a field-group slot; empty when the group was omitted
    pub fn group(&self, slot: usize) -> &[u32] {
        debug_assert!(slot >= STRUCTURAL_GROUP, "slot 0 is the line tag");
        self.groups
            .get(slot - STRUCTURAL_GROUP)
            .map_or(&[], Vec::as_slice)
    }
}

fn non_empty_segments(source: &str, delimiter: char) -> impl Iterator<Item = &str> {
    source
        .split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

fn parse_group(
    source: &str,
    layer: usize,
    line: usize,
    group: usize,
) -> Result<Vec<u32>, DecodeError> {
    // Strip the decorative characters first so "1, 2 | 3" reads as "1,2,3"
    let cleaned: String = source
        .chars()
        .filter(|c| *c != '|' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    cleaned
        .split(',')
        .enumerate()
        .map(|(cell, token)| {
            token.parse::<u32>().map_err(|source| DecodeError::BadToken {
                token: token.to_owned(),
                layer,
                line,
                group,
                cell,
                source,
            })
        })
        .collect()
}
