use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Item in an IDM outline, a headline with an indented body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
// Serialize using a special form that triggers IDM's raw mode.
#[serde(from = "((String,), Outline)", into = "((String,), Outline)")]
pub struct Section {
    pub head: String,
    pub body: Outline,
}

impl Section {
    pub fn new(head: impl Into<String>, body: Outline) -> Self {
        Section {
            head: head.into(),
            body,
        }
    }
}

impl From<((String,), Outline)> for Section {
    fn from(((head,), body): ((String,), Outline)) -> Self {
        Section { head, body }
    }
}

impl From<Section> for ((String,), Outline) {
    fn from(val: Section) -> Self {
        ((val.head,), val.body)
    }
}

/// Outline block with `:name value` attributes followed by child sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "((IndexMap<String, String>,), Vec<Section>)",
    into = "((IndexMap<String, String>,), Vec<Section>)"
)]
pub struct Outline {
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Section>,
}

impl Outline {
    /// Get an attribute value deserialized to type.
    pub fn get<'a, T: Deserialize<'a>>(
        &'a self,
        name: &str,
    ) -> Result<Option<T>> {
        let Some(a) = self.attrs.get(name) else {
            return Ok(None);
        };
        Ok(Some(idm::from_str(a)?))
    }

    /// Iterate all sections of the outline depth-first.
    pub fn iter(&self) -> impl Iterator<Item = &Section> + '_ {
        let mut stack = vec![self.children.iter()];
        std::iter::from_fn(move || loop {
            let sec = stack.last_mut()?.next();
            match sec {
                Some(sec) => {
                    stack.push(sec.body.children.iter());
                    return Some(sec);
                }
                None => {
                    stack.pop();
                }
            }
        })
    }
}

impl From<((IndexMap<String, String>,), Vec<Section>)> for Outline {
    fn from(
        ((attrs,), children): ((IndexMap<String, String>,), Vec<Section>),
    ) -> Self {
        Outline { attrs, children }
    }
}

impl From<Outline> for ((IndexMap<String, String>,), Vec<Section>) {
    fn from(val: Outline) -> Self {
        ((val.attrs,), val.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_depth_first() {
        let leaf = |s: &str| Section::new(s, Outline::default());
        let outline = Outline {
            attrs: Default::default(),
            children: vec![
                Section::new(
                    "a",
                    Outline {
                        attrs: Default::default(),
                        children: vec![leaf("a1"), leaf("a2")],
                    },
                ),
                leaf("b"),
            ],
        };

        let heads: Vec<&str> =
            outline.iter().map(|s| s.head.as_str()).collect();
        assert_eq!(heads, vec!["a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_get() {
        let mut outline = Outline::default();
        outline.attrs.insert("tags".into(), "rust cli".into());

        assert_eq!(
            outline.get::<Vec<String>>("tags").unwrap(),
            Some(vec!["rust".to_string(), "cli".to_string()])
        );
        assert_eq!(outline.get::<Vec<String>>("uri").unwrap(), None);
    }
}
