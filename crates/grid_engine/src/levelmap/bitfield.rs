//! Bit-reservation layout and the pack/extract codec
//!
//! Each level-map cell is one `u32` storing several independent field values
//! at disjoint bit ranges. A [`BitFieldLayout`] declares the fields in order;
//! each field's shift is the cumulative sum of the reserved widths before it,
//! so fields can never overlap. The layout is validated once at startup and
//! then shared immutably by the grid builder and the materializer.

/// Width in bits of the packed cell storage
pub const CELL_BITS: u32 = 32;

/// Layout validation failure, fatal at startup
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Reserved widths sum past the packed cell width
    #[error("bit layout overflow: {total} reserved bits exceed the {CELL_BITS}-bit cell")]
    Overflow {
        /// Sum of all reserved widths
        total: u32,
    },

    /// A field reserved no bits and could never store a value
    #[error("field '{field}' reserves zero bits")]
    ZeroWidth {
        /// Name of the empty field
        field: String,
    },
}

/// One named field bound to a text field-group slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, used in errors and by visitor dispatch
    pub name: String,
    /// Field-group slot on each text line (1-based; slot 0 is the line tag)
    pub group: usize,
    /// Reserved bit width
    pub bits: u32,
}

impl FieldDescriptor {
    /// Create a field descriptor
    pub fn new(name: impl Into<String>, group: usize, bits: u32) -> Self {
        Self {
            name: name.into(),
            group,
            bits,
        }
    }

    /// Largest value this field can store
    pub fn max_value(&self) -> u32 {
        mask(self.bits)
    }
}

/// An ordered, validated list of bit-field reservations
#[derive(Debug, Clone)]
pub struct BitFieldLayout {
    fields: Vec<FieldDescriptor>,
    shifts: Vec<u32>,
}

impl BitFieldLayout {
    /// Validate the reservations and derive each field's shift
    ///
    /// Shifts are cumulative: `shift(field[i])` is the sum of the reserved
    /// widths of fields `0..i`. Fails with [`LayoutError`] if the total
    /// exceeds the cell width or any field is zero-width.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, LayoutError> {
        let mut shifts = Vec::with_capacity(fields.len());
        let mut total: u32 = 0;
        for field in &fields {
            if field.bits == 0 {
                return Err(LayoutError::ZeroWidth {
                    field: field.name.clone(),
                });
            }
            shifts.push(total);
            total += field.bits;
        }
        if total > CELL_BITS {
            return Err(LayoutError::Overflow { total });
        }
        Ok(Self { fields, shifts })
    }

    /// Fields with their derived shifts, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&FieldDescriptor, u32)> {
        self.fields.iter().zip(self.shifts.iter().copied())
    }

    /// Number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Look up a field and its shift by name
    pub fn field(&self, name: &str) -> Option<(&FieldDescriptor, u32)> {
        self.fields()
            .find(|(field, _)| field.name == name)
    }
}

fn mask(bits: u32) -> u32 {
    if bits >= CELL_BITS {
        u32::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Extract a field value from a packed cell
///
/// `((1 << bits) - 1) & (packed >> shift)`; total, with no failure modes
/// once the layout has validated `shift + bits <= 32`.
pub fn extract(packed: u32, bits: u32, shift: u32) -> u32 {
    mask(bits) & (packed >> shift)
}

/// Pack a field value for ORing into a cell
///
/// The value is masked to `bits` before shifting; an oversized value is
/// truncated rather than allowed to bleed into the neighboring field. The
/// grid builder rejects oversized values before calling this.
pub fn pack(value: u32, bits: u32, shift: u32) -> u32 {
    (value & mask(bits)) << shift
}

/// OR together a sequence of `(value, bits, shift)` fields
pub fn combine(fields: &[(u32, u32, u32)]) -> u32 {
    fields
        .iter()
        .fold(0, |packed, &(value, bits, shift)| packed | pack(value, bits, shift))
}
