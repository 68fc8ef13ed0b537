use std::cmp::Reverse;

use clap::ValueEnum;
use itertools::{Either, Itertools};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::TagCount;

/// Order in which tags are laid out in a widget.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Keep the input order.
    #[default]
    None,
    /// Alphabetic by tag.
    Alphabetic,
    /// Least used first.
    Ascending,
    /// Most used first.
    Descending,
    /// Small and large counts alternate towards the ends, middling counts
    /// end up in the middle.
    Balanced,
    /// Shuffled.
    Random,
}

impl Order {
    pub fn sort(self, items: &mut Vec<TagCount>) {
        self.sort_with(items, &mut rand::thread_rng());
    }

    /// Sort using an explicit random number generator for the random order.
    pub fn sort_with(self, items: &mut Vec<TagCount>, rng: &mut impl Rng) {
        match self {
            Order::None => {}
            Order::Alphabetic => items.sort_by(|a, b| a.tag.cmp(&b.tag)),
            Order::Ascending => items.sort_by_key(|t| t.count),
            // Stable, equal counts stay in input order.
            Order::Descending => items.sort_by_key(|t| Reverse(t.count)),
            Order::Balanced => {
                items.sort_by_key(|t| t.count);
                let (even, odd): (Vec<_>, Vec<_>) =
                    items.drain(..).enumerate().partition_map(|(i, t)| {
                        if i % 2 == 0 {
                            Either::Left(t)
                        } else {
                            Either::Right(t)
                        }
                    });
                items.extend(even);
                items.extend(odd.into_iter().rev());
            }
            Order::Random => items.shuffle(rng),
        }
    }
}

/// Keep the `top_n` most used tags if `top_n` is nonzero, then lay them out
/// in `order`.
pub fn arrange(
    items: &[TagCount],
    order: Order,
    top_n: Option<usize>,
) -> Vec<TagCount> {
    let mut items = items.to_vec();
    let top_n = top_n.filter(|&n| n > 0);

    if let Some(n) = top_n {
        Order::Descending.sort(&mut items);
        items.truncate(n);

        // Picking the top items already left them in descending order.
        if order == Order::Descending {
            return items;
        }
    }

    order.sort(&mut items);
    items
}
