use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use indexmap::map::Entry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;
use crate::render::Color;

/// One colored bar inside a group.
///
/// Values are expected to be `>= 0`. Zero and arbitrarily small or large
/// magnitudes are accepted; negative values render at the floor height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub value: f64,
    pub color: Color,
    /// Per-bar highlight color, preferred over the dataset-level fallback.
    pub selection_color: Option<Color>,
}

impl Bar {
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            selection_color: None,
        }
    }

    #[must_use]
    pub const fn with_selection_color(mut self, selection_color: Color) -> Self {
        self.selection_color = Some(selection_color);
        self
    }

    /// Builds a bar from a decimal amount (for example a currency total).
    pub fn from_decimal(value: Decimal, color: Color) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "bar value")?, color))
    }

    /// Color shown while the owning group is selected.
    ///
    /// Falls back from the bar's own selection color to the dataset-level
    /// selection color, then to the bar's default color.
    #[must_use]
    pub fn highlight_color(&self, fallback: Option<Color>) -> Color {
        self.selection_color.or(fallback).unwrap_or(self.color)
    }
}

/// A labeled group of bars sharing one x-axis slot.
///
/// Equality compares label and bars; the optional date is metadata only.
#[derive(Debug, Clone)]
pub struct DataElement {
    pub label: String,
    pub date: Option<DateTime<Utc>>,
    pub bars: Vec<Bar>,
}

impl DataElement {
    #[must_use]
    pub fn new(label: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            label: label.into(),
            date: None,
            bars,
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns `true` when at least one bar carries a value above zero.
    #[must_use]
    pub fn has_positive_value(&self) -> bool {
        self.bars.iter().any(|bar| bar.value > 0.0)
    }
}

impl PartialEq for DataElement {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.bars == other.bars
    }
}

/// Horizontal threshold line drawn across all groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub value: f64,
    pub color: Color,
    pub label: Option<String>,
}

impl Limit {
    #[must_use]
    pub fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Stable reference to one group: its render position plus its label key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub index: usize,
    pub label: String,
}

impl ElementRef {
    #[must_use]
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Full chart input: ordered groups plus an optional limit and selection color.
///
/// The dataset is immutable once built. Element order is render order.
/// Labels are the lookup key; when a label repeats, lookups resolve to the
/// first group carrying it.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    elements: Vec<DataElement>,
    limit: Option<Limit>,
    selection_color: Option<Color>,
    label_index: IndexMap<String, usize>,
    duplicate_labels: Vec<String>,
}

impl DataSet {
    #[must_use]
    pub fn new(elements: Vec<DataElement>) -> Self {
        let mut label_index = IndexMap::with_capacity(elements.len());
        let mut duplicate_labels = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            match label_index.entry(element.label.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(_) => {
                    if !duplicate_labels.contains(&element.label) {
                        duplicate_labels.push(element.label.clone());
                    }
                }
            }
        }

        if !duplicate_labels.is_empty() {
            warn!(
                duplicates = ?duplicate_labels,
                "dataset repeats group labels; label lookups resolve to the first match"
            );
        }

        Self {
            elements,
            limit: None,
            selection_color: None,
            label_index,
            duplicate_labels,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_selection_color(mut self, selection_color: Color) -> Self {
        self.selection_color = Some(selection_color);
        self
    }

    #[must_use]
    pub fn elements(&self) -> &[DataElement] {
        &self.elements
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&DataElement> {
        self.elements.get(index)
    }

    #[must_use]
    pub fn limit(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }

    #[must_use]
    pub fn selection_color(&self) -> Option<Color> {
        self.selection_color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.elements.iter().map(|element| element.bars.len()).sum()
    }

    /// Position of the first group with `label`.
    #[must_use]
    pub fn position_of_label(&self, label: &str) -> Option<usize> {
        self.label_index.get(label).copied()
    }

    /// Resolves `label` into an [`ElementRef`] for the first matching group.
    #[must_use]
    pub fn resolve_label(&self, label: &str) -> Option<ElementRef> {
        self.position_of_label(label)
            .map(|index| ElementRef::new(index, label))
    }

    /// Resolves an in-bounds index into an [`ElementRef`].
    #[must_use]
    pub fn resolve_index(&self, index: usize) -> Option<ElementRef> {
        self.elements
            .get(index)
            .map(|element| ElementRef::new(index, element.label.clone()))
    }

    /// Labels carried by more than one group, in first-repeat order.
    #[must_use]
    pub fn duplicate_labels(&self) -> &[String] {
        &self.duplicate_labels
    }
}

impl PartialEq for DataSet {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
            && self.limit == other.limit
            && self.selection_color == other.selection_color
    }
}
