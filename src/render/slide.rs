//! Slide rendering: visibility plus concurrent fan-out over visual nodes.
use super::visual::{render_visual, Primitive, RenderContext};
use crate::common::Result;
use crate::encoder::Slide;
use crate::node::SlideNode;
use futures::future::try_join_all;
use tracing::debug;

/// Everything a slide contributes to the document, in input order.
#[derive(Debug, Default)]
pub(crate) struct RenderedSlide {
    hidden: Option<bool>,
    primitives: Vec<Primitive>,
}

impl RenderedSlide {
    /// Append the buffered primitives to `slide` in input order.
    pub(crate) fn apply(self, slide: &mut Slide) -> Result<()> {
        if let Some(hidden) = self.hidden {
            slide.set_hidden(hidden);
        }
        for primitive in self.primitives {
            primitive.apply(slide)?;
        }
        Ok(())
    }
}

/// Render every visual node of `node` concurrently.
///
/// Completion order does not matter: results are collected positionally and
/// applied later. The first failure aborts the slide.
pub(crate) async fn render_slide(
    ctx: &RenderContext<'_>,
    index: usize,
    node: &SlideNode,
) -> Result<RenderedSlide> {
    let nodes = node.nodes();
    debug!(slide = index, nodes = nodes.len(), hidden = ?node.hidden, "rendering slide");

    let results = try_join_all(
        nodes
            .iter()
            .enumerate()
            .map(|(position, visual)| render_visual(ctx, index, position, visual)),
    )
    .await?;

    Ok(RenderedSlide {
        hidden: node.hidden,
        primitives: results.into_iter().flatten().collect(),
    })
}
