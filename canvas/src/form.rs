//! Metadata form: text and number inputs bound to fields of the module record.
//!
//! Every keystroke in an input is applied immediately. There is no
//! validation beyond numeric coercion; what happens to unparseable numbers
//! depends on the field (see [`FormField::coerce`]).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use records::{ModuleRecord, Resource, ResourceCategory};

/// A scalar input of the metadata form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Width,
    Height,
    ColumnStrength,
    Durability,
    /// Build cost in money; written as the single `money` build-cost entry.
    Cost,
    CrewCapacity,
}

impl FormField {
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Type,
        Self::Width,
        Self::Height,
        Self::ColumnStrength,
        Self::Durability,
        Self::Cost,
        Self::CrewCapacity,
    ];

    /// Dotted label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name.................",
            Self::Type => "Type.................",
            Self::Width => "Width(#).............",
            Self::Height => "Height(#)............",
            Self::ColumnStrength => "Col. Strength........",
            Self::Durability => "Durability...........",
            Self::Cost => "Cost (x $0.01).......",
            Self::CrewCapacity => "Crew.................",
        }
    }

    #[must_use]
    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Name | Self::Type)
    }

    /// Numeric value for this field, or `None` if the input should be ignored.
    ///
    /// Width and height ignore anything that is not a number of at least one
    /// block, since the canvas cannot draw an empty module. Other numeric
    /// fields treat unparseable input as zero.
    #[must_use]
    pub fn coerce(self, raw: &str) -> Option<f64> {
        let parsed = parse_number(raw);
        match self {
            Self::Width | Self::Height => parsed.filter(|v| *v >= 1.0),
            _ => Some(parsed.unwrap_or(0.0)),
        }
    }
}

/// What an edit did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Nothing changed.
    Ignored,
    /// A field changed.
    Updated,
    /// Width or height changed; the canvas must be rescaled.
    Resized,
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Write raw input for `field` into the record. Empty input is ignored.
pub fn apply_field(record: &mut ModuleRecord, field: FormField, raw: &str) -> FieldEdit {
    if raw.trim().is_empty() {
        return FieldEdit::Ignored;
    }
    if !field.is_numeric() {
        if field == FormField::Name {
            record.name = raw.to_owned();
        } else {
            record.kind = raw.to_owned();
        }
        return FieldEdit::Updated;
    }
    let Some(value) = field.coerce(raw) else {
        return FieldEdit::Ignored;
    };
    match field {
        FormField::Width => {
            record.width = value;
            return FieldEdit::Resized;
        }
        FormField::Height => {
            record.height = value;
            return FieldEdit::Resized;
        }
        FormField::ColumnStrength => record.column_strength = value,
        FormField::Durability => record.durability = value,
        FormField::Cost => record.build_costs.replace_all(Resource::new("money", value)),
        FormField::CrewCapacity => record.crew_capacity = value,
        FormField::Name | FormField::Type => return FieldEdit::Ignored,
    }
    FieldEdit::Updated
}

/// Write a resource quantity input into the list for `category`.
///
/// Unparseable quantities count as zero, which removes the resource.
/// Returns `Ignored` when the name is blank or the list does not exist.
pub fn apply_resource(record: &mut ModuleRecord, category: ResourceCategory, name: &str, raw: &str) -> FieldEdit {
    let name = name.trim();
    if name.is_empty() {
        return FieldEdit::Ignored;
    }
    let quantity = parse_number(raw).unwrap_or(0.0);
    if record.add_resource(category, Resource::new(name, quantity)) {
        FieldEdit::Updated
    } else {
        FieldEdit::Ignored
    }
}

/// Current value of `field` rendered as input text.
#[must_use]
pub fn field_value(record: &ModuleRecord, field: FormField) -> String {
    match field {
        FormField::Name => record.name.clone(),
        FormField::Type => record.kind.clone(),
        FormField::Width => record.width.to_string(),
        FormField::Height => record.height.to_string(),
        FormField::ColumnStrength => record.column_strength.to_string(),
        FormField::Durability => record.durability.to_string(),
        FormField::Cost => record.build_costs.get("money").unwrap_or(0.0).to_string(),
        FormField::CrewCapacity => record.crew_capacity.to_string(),
    }
}
