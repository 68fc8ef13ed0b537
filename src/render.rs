use anyhow::{bail, Result};
use lazy_regex::regex;

use crate::{
    arrange, count_range,
    markup::{container, tag_link, Element},
    Correlation, HeatGradient, Order, RenderError, Scale, Scaling, TagCount,
    Unsupported,
};

#[derive(Clone, Debug, PartialEq)]
pub struct IndexOptions {
    pub order: Order,
    /// Only show this many most used tags, all of them if `None` or zero.
    pub top_n: Option<usize>,
    pub control_id: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            order: Order::None,
            top_n: None,
            control_id: "tagIndex".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudOptions {
    pub order: Order,
    pub scaling: Scaling,
    pub top_n: Option<usize>,
    /// Number of weight classes, at least 2.
    pub gradations: usize,
    pub control_id: String,
}

impl Default for CloudOptions {
    fn default() -> Self {
        CloudOptions {
            order: Order::None,
            scaling: Scaling::Linear,
            top_n: None,
            gradations: 6,
            control_id: "tagCloud".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatMapOptions {
    pub correlation: Correlation,
    /// Show the tag's count next to the link.
    pub show_count: bool,
    pub top_n: Option<usize>,
    pub saturation: f64,
    pub luminance: f64,
    /// Shrink items as counts go down.
    pub taper_width: bool,
    /// Width of the narrowest item when tapering.
    pub min_width_percentage: u32,
    pub control_id: String,
}

impl Default for HeatMapOptions {
    fn default() -> Self {
        HeatMapOptions {
            correlation: Correlation::ByIndex,
            show_count: true,
            top_n: None,
            saturation: 1.0,
            luminance: 0.5,
            taper_width: true,
            min_width_percentage: 50,
            control_id: "heatMap".into(),
        }
    }
}

impl HeatMapOptions {
    fn validate(&self) -> Result<()> {
        check_control_id(&self.control_id)?;
        check_unit("saturation", self.saturation)?;
        check_unit("luminance", self.luminance)?;
        if self.min_width_percentage > 100 {
            bail!(RenderError::OutOfRange {
                name: "min_width_percentage",
                value: f64::from(self.min_width_percentage),
                min: 0.0,
                max: 100.0,
            });
        }
        Ok(())
    }
}

/// All the widgets, for callers that pick one at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Widget {
    Index(IndexOptions),
    Cloud(CloudOptions),
    HeatMap(HeatMapOptions),
    /// Parallel tag cloud, declared but never implemented. Rendering it is
    /// always an [`Unsupported`] error.
    ParallelCloud,
}

impl Widget {
    pub fn render(
        &self,
        items: &[TagCount],
        url: impl Fn(&str) -> String,
    ) -> Result<String> {
        match self {
            Widget::Index(options) => tag_index(items, url, options),
            Widget::Cloud(options) => tag_cloud(items, url, options),
            Widget::HeatMap(options) => heat_map(items, url, options),
            Widget::ParallelCloud => Err(Unsupported {
                widget: "parallel tag cloud",
            }
            .into()),
        }
    }
}

/// List of tag links with the use count after each.
pub fn tag_index(
    items: &[TagCount],
    url: impl Fn(&str) -> String,
    options: &IndexOptions,
) -> Result<String> {
    if items.is_empty() {
        return Ok(String::new());
    }
    check_control_id(&options.control_id)?;

    let items = arrange(items, options.order, options.top_n);
    log::debug!(
        "tag_index: {} tags in {:?} order",
        items.len(),
        options.order
    );

    let mut list = container(&options.control_id, "tagIndex");
    for t in &items {
        list.push(
            Element::new("li")
                .child(tag_link(url(&t.tag), &t.tag))
                .child(Element::new("span").child(format!("({})", t.count))),
        );
    }

    Ok(list.to_string())
}

/// Tag links with a `weightN` CSS class, N growing with the count.
pub fn tag_cloud(
    items: &[TagCount],
    url: impl Fn(&str) -> String,
    options: &CloudOptions,
) -> Result<String> {
    if items.is_empty() {
        return Ok(String::new());
    }
    check_control_id(&options.control_id)?;

    let items = arrange(items, options.order, options.top_n);
    let (min, max) = count_range(&items);
    let scale = Scale::new(options.scaling, min, max, options.gradations)?;
    log::debug!(
        "tag_cloud: {} tags, counts {min}..={max}, {:?} step {}",
        items.len(),
        options.scaling,
        scale.step()
    );

    let mut list = container(&options.control_id, "tagCloud");
    for t in &items {
        let weight = scale.weight(t.count);
        list.push(
            Element::new("li").child(
                tag_link(url(&t.tag), &t.tag).class(format!("weight{weight}")),
            ),
        );
    }

    Ok(list.to_string())
}

/// Most used tags first, each on a colored bar that cools down and narrows
/// as the counts go down.
pub fn heat_map(
    items: &[TagCount],
    url: impl Fn(&str) -> String,
    options: &HeatMapOptions,
) -> Result<String> {
    if items.is_empty() {
        return Ok(String::new());
    }
    options.validate()?;

    let items = arrange(items, Order::Descending, options.top_n);
    let mut gradient = HeatGradient::new(options, &items);
    log::debug!(
        "heat_map: {} tags, {:?} correlation",
        items.len(),
        options.correlation
    );

    let mut list = container(&options.control_id, "heatMap");
    for t in &items {
        let shade = gradient.next_shade(t.count);
        let mut item = Element::new("li")
            .attr("style", shade.style())
            .child(tag_link(url(&t.tag), &t.tag));

        if options.show_count {
            item.push(
                Element::new("span")
                    .class("txHmTxt")
                    .child(Element::new("a").child(t.count.to_string()))
                    .child(Element::new("span").class("txHmTri")),
            );
        }

        list.push(item);
    }

    Ok(list.to_string())
}

fn check_control_id(id: &str) -> Result<()> {
    if !regex!(r"^[A-Za-z][A-Za-z0-9_:.-]*$").is_match(id) {
        bail!(RenderError::BadControlId { id: id.into() });
    }
    Ok(())
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        bail!(RenderError::OutOfRange {
            name,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}
