//! SVG document helpers: page canvases and month groups

use svg::Document;
use svg::node::element::Group;

use super::context::RenderContext;
use super::shapes::{Draw, Drawable};
use crate::types::Length;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Page orientation for a letter-sized sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Page (width, height), 8.5" x 11" at 25 mm/inch
    pub fn size(self) -> (Length, Length) {
        let short = Length::inches(8.5);
        let long = Length::inches(11.0);
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

/// Empty page with `width`/`height` in millimeters and a matching viewBox
pub fn page_canvas(orientation: Orientation) -> Document {
    let (width, height) = orientation.size();
    Document::new()
        .set("xmlns", SVG_NAMESPACE)
        .set("width", format!("{width}mm"))
        .set("height", format!("{height}mm"))
        .set("viewBox", format!("0 0 {width} {height}"))
}

/// Draw every part of one month into a fresh group
pub fn month_group(parts: &[Drawable], ctx: &mut RenderContext) -> Group {
    parts
        .iter()
        .fold(Group::new(), |group, part| part.draw(ctx, group))
}

/// Like [`month_group`], with a `transform` attribute on the group
pub fn transformed_month_group(parts: &[Drawable], ctx: &mut RenderContext, transform: &str) -> Group {
    month_group(parts, ctx).set("transform", transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_canvas_is_letter_in_millimeters() {
        let doc = page_canvas(Orientation::Portrait).to_string();
        assert!(doc.contains(r#"width="212.5mm""#), "{doc}");
        assert!(doc.contains(r#"height="275mm""#), "{doc}");
        assert!(doc.contains(r#"viewBox="0 0 212.5 275""#), "{doc}");
        assert!(doc.contains("http://www.w3.org/2000/svg"));
    }

    #[test]
    fn landscape_swaps_dimensions() {
        assert_eq!(Orientation::Landscape.size(), (Length(275.0), Length(212.5)));
        let doc = page_canvas(Orientation::Landscape).to_string();
        assert!(doc.contains(r#"viewBox="0 0 275 212.5""#), "{doc}");
    }

    #[test]
    fn empty_month_group_is_plain_g() {
        let g = transformed_month_group(&[], &mut RenderContext::new(0.1), "scale(0.3)").to_string();
        assert!(g.starts_with("<g"), "{g}");
        assert!(g.contains(r#"transform="scale(0.3)""#), "{g}");
    }
}
