//! Document Assembler: composes a computed layout into one SVG document.
//!
//! Primitives are grouped per layer in fixed stacking order (background,
//! body, straps, pockets, logo, annotations, legend, title). The body
//! pattern, if any, is emitted as a `<defs>` entry ahead of the layers.

pub mod svg;

use apron_svg::{Defs, Element, Group, Svg};

use crate::errors::RenderError;
use crate::fill::FillRef;
use crate::geometry::{Layer, Layout};

/// Build the document tree for a layout
pub fn document(layout: &Layout) -> Element {
    let mut root = Svg::new(layout.width, layout.height);

    if let FillRef::Pattern(tile) = &layout.fill {
        root.push(Defs {
            children: vec![svg::pattern(tile).into()],
        });
    }

    let mut ordered: Vec<_> = layout.primitives.iter().collect();
    ordered.sort_by_key(|p| p.layer);

    for layer in Layer::ALL {
        let mut group = Group {
            id: Some(format!("layer-{}", layer.name())),
            ..Default::default()
        };
        for prim in ordered.iter().filter(|p| p.layer == layer) {
            group.push(svg::primitive(prim));
        }
        if !group.children.is_empty() {
            root.push(group);
        }
    }

    root.into()
}

/// Serialize a layout to SVG markup
pub fn assemble(layout: &Layout) -> Result<String, RenderError> {
    let markup = apron_svg::to_string(&document(layout))?;
    crate::log::debug!(bytes = markup.len(), "document assembled");
    Ok(markup)
}
