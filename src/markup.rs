//! HTML element trees.
//!
//! Widgets are built as a tree of [`Element`]s and written out in one go
//! through `Display`. All text and attribute values are escaped on output,
//! so callers can put arbitrary tag names and URLs in.

use std::fmt;

use indexmap::IndexMap;

const LINK_TITLE: &str = "Blog posts for ";

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.into())
    }
}

/// An HTML element with attributes, CSS classes and child nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: IndexMap<&'static str, String>,
    classes: Vec<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Element {
            name,
            attrs: Default::default(),
            classes: Default::default(),
            children: Default::default(),
        }
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(
        mut self,
        name: &'static str,
        value: impl Into<String>,
    ) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    /// Add a CSS class. Empty class names are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"")?;
            write_escaped(f, value)?;
            write!(f, "\"")?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"")?;
            write_escaped(f, &self.classes.join(" "))?;
            write!(f, "\"")?;
        }
        write!(f, ">")?;

        for child in &self.children {
            write!(f, "{child}")?;
        }

        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(e) => write!(f, "{e}"),
            Node::Text(s) => write_escaped(f, s),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let mut rest = s;
    while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
        f.write_str(&rest[..i])?;
        f.write_str(match rest.as_bytes()[i] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => "&#39;",
        })?;
        rest = &rest[i + 1..];
    }
    f.write_str(rest)
}

/// Widget container list.
pub fn container(id: &str, class: &str) -> Element {
    Element::new("ul").attr("id", id).class(class)
}

/// Link to the page for `tag`.
pub fn tag_link(url: impl Into<String>, tag: &str) -> Element {
    Element::new("a")
        .attr("href", url)
        .attr("title", format!("{LINK_TITLE}{tag}"))
        .attr("rel", "tag")
        .child(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting() {
        let list = container("tags", "tagIndex").child(
            Element::new("li")
                .child(tag_link("/tags/go", "go"))
                .child(Element::new("span").child("(3)")),
        );
        assert_eq!(
            list.to_string(),
            r#"<ul id="tags" class="tagIndex"><li><a href="/tags/go" title="Blog posts for go" rel="tag">go</a><span>(3)</span></li></ul>"#
        );
    }

    #[test]
    fn test_escaping() {
        let link = tag_link("/t?a=1&b=\"2\"", "<c++ & 'c#'>");
        assert_eq!(
            link.to_string(),
            "<a href=\"/t?a=1&amp;b=&quot;2&quot;\" \
             title=\"Blog posts for &lt;c++ &amp; &#39;c#&#39;&gt;\" \
             rel=\"tag\">&lt;c++ &amp; &#39;c#&#39;&gt;</a>"
        );
    }

    #[test]
    fn test_unicode_passes_through() {
        let e = Element::new("span").child("häkä & ŝ");
        assert_eq!(e.to_string(), "<span>häkä &amp; ŝ</span>");
    }

    #[test]
    fn test_classes() {
        let e = Element::new("a").class("").class("weight3").class("hot");
        assert_eq!(e.to_string(), r#"<a class="weight3 hot"></a>"#);
        assert_eq!(Element::new("span").to_string(), "<span></span>");
    }

    #[test]
    fn test_attr_replaces() {
        let e = Element::new("li").attr("style", "a").attr("style", "b");
        assert_eq!(e.to_string(), r#"<li style="b"></li>"#);
    }
}
