//! Tag index, tag cloud and heat map widgets for tag usage counts.

use derive_more::{Deref, DerefMut, Display, Error};
use indexmap::IndexMap;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

mod color;
pub use color::Hsl;

mod heat;
pub use heat::{Correlation, HeatGradient, Shade};

pub mod markup;

mod order;
pub use order::{arrange, Order};

mod outline;
pub use outline::{Outline, Section};

mod render;
pub use render::{
    heat_map, tag_cloud, tag_index, CloudOptions, HeatMapOptions,
    IndexOptions, Widget,
};

mod scale;
pub use scale::{Scale, Scaling};

mod tally;
pub use tally::tally;

/// Number of times a tag has been used.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: u32) -> Self {
        TagCount {
            tag: tag.into(),
            count,
        }
    }
}

/// A set of tags with their usage counts.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref, DerefMut)]
pub struct Folksonomy(pub Vec<TagCount>);

impl FromIterator<TagCount> for Folksonomy {
    fn from_iter<T: IntoIterator<Item = TagCount>>(iter: T) -> Self {
        Folksonomy(iter.into_iter().collect())
    }
}

impl From<IndexMap<String, u32>> for Folksonomy {
    fn from(counts: IndexMap<String, u32>) -> Self {
        counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect()
    }
}

/// Smallest and largest count in `items`, `(0, 0)` for an empty slice.
pub fn count_range(items: &[TagCount]) -> (u32, u32) {
    match items.iter().map(|t| t.count).minmax() {
        MinMaxResult::NoElements => (0, 0),
        MinMaxResult::OneElement(n) => (n, n),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}

/// Widget options that can't be rendered.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum RenderError {
    #[display("gradations must be at least 2, got {gradations}")]
    TooFewGradations { gradations: usize },

    #[display("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[display("invalid control id {id:?}")]
    BadControlId { id: String },
}

/// Widget that is declared but has no renderer.
#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
#[display("{widget} is not supported")]
pub struct Unsupported {
    pub widget: &'static str,
}
