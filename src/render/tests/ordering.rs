use super::{FakeFetcher, marked_png};
use crate::encoder::{Document, ShapeBody};
use crate::node::{Geometry, ImageNode, PresentationNode, SlideNode, VisualNode};
use crate::render::{RenderOptions, Renderer};

/// Build a deck whose image `(slide, position)` is served after `delay(slide, position)` ms.
///
/// Each image carries the marker byte `slide * 16 + position`.
pub(super) fn delayed_deck(
    slides: usize,
    per_slide: usize,
    delay: impl Fn(usize, usize) -> u64,
) -> (PresentationNode, FakeFetcher) {
    let mut fetcher = FakeFetcher::new();
    let mut slide_nodes = Vec::with_capacity(slides);
    for slide in 0..slides {
        let mut nodes: Vec<VisualNode> = Vec::with_capacity(per_slide);
        for position in 0..per_slide {
            let url = format!("https://cdn.test/{slide}/{position}.png");
            let marker = (slide * 16 + position) as u8;
            fetcher = fetcher.with_image(&url, marked_png(marker), delay(slide, position));
            nodes.push(ImageNode::new(url, Geometry::new(position as f64, 0.0, 1.0, 1.0)).into());
        }
        slide_nodes.push(SlideNode::new().with_children(nodes));
    }
    (PresentationNode::new().with_children(slide_nodes), fetcher)
}

/// Marker bytes of every picture, grouped per slide in document order.
pub(super) fn markers(doc: &Document) -> Vec<Vec<u8>> {
    doc.slides()
        .iter()
        .map(|slide| {
            slide
                .shapes()
                .iter()
                .filter_map(|shape| match shape.body() {
                    ShapeBody::Picture { data, .. } => data.last().copied(),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

pub(super) fn expected_markers(slides: usize, per_slide: usize) -> Vec<Vec<u8>> {
    (0..slides)
        .map(|slide| (0..per_slide).map(|p| (slide * 16 + p) as u8).collect())
        .collect()
}

#[tokio::test]
async fn slide_order_survives_reversed_latency() {
    // Earlier slides are the slowest to resolve.
    let (tree, fetcher) = delayed_deck(5, 1, |slide, _| (5 - slide as u64) * 15);
    let doc = Renderer::new(fetcher).render_document(&tree).await.unwrap();
    assert_eq!(markers(&doc), expected_markers(5, 1));
}

#[tokio::test]
async fn node_order_within_slide_survives_reversed_latency() {
    let (tree, fetcher) = delayed_deck(2, 4, |_, position| (4 - position as u64) * 15);
    let doc = Renderer::new(fetcher).render_document(&tree).await.unwrap();
    assert_eq!(markers(&doc), expected_markers(2, 4));

    // Shape ids follow input order too.
    let ids: Vec<u32> = doc.slides()[0].shapes().iter().map(|s| s.shape_id()).collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
}

#[tokio::test]
async fn order_holds_with_limited_concurrency() {
    let (tree, fetcher) = delayed_deck(3, 3, |slide, position| ((slide + position) % 3) as u64 * 10);
    let renderer = Renderer::new(fetcher)
        .with_options(RenderOptions::new().with_max_concurrent_fetches(2));
    let doc = renderer.render_document(&tree).await.unwrap();
    assert_eq!(markers(&doc), expected_markers(3, 3));
}
