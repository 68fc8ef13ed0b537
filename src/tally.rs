use std::collections::BTreeMap;

use anyhow::Result;
use itertools::Itertools;

use crate::{Folksonomy, Order, Outline, TagCount};

/// Count tag uses in an outline of items tagged with `:tags a b c`.
///
/// Items at every depth are counted, a tag repeated in one item's list
/// counts once. Most used tags come first, equal counts in alphabetic order.
pub fn tally(outline: &Outline) -> Result<Folksonomy> {
    let mut hist: BTreeMap<String, u32> = BTreeMap::default();

    for sec in outline.iter() {
        let Some(tags) = sec.body.get::<Vec<String>>("tags")? else {
            continue;
        };

        for tag in tags.into_iter().unique() {
            *hist.entry(tag).or_default() += 1;
        }
    }

    let mut counts: Folksonomy = hist
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    Order::Descending.sort(&mut counts);

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Section;

    fn tagged(head: &str, tags: &str, children: Vec<Section>) -> Section {
        let mut body = Outline {
            attrs: Default::default(),
            children,
        };
        if !tags.is_empty() {
            body.attrs.insert("tags".into(), tags.into());
        }
        Section::new(head, body)
    }

    #[test]
    fn test_tally() {
        let outline = Outline {
            attrs: Default::default(),
            children: vec![
                tagged("Item one", "rust go", vec![]),
                tagged(
                    "Item two",
                    "rust rust",
                    vec![tagged("Nested", "go web", vec![])],
                ),
                tagged("Untagged", "", vec![]),
            ],
        };

        assert_eq!(
            *tally(&outline).unwrap(),
            vec![
                TagCount::new("go", 2),
                TagCount::new("rust", 2),
                TagCount::new("web", 1),
            ]
        );
    }

    #[test]
    fn test_tally_empty() {
        assert!(tally(&Outline::default()).unwrap().is_empty());
    }
}
