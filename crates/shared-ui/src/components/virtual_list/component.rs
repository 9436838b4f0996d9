use dioxus::prelude::*;
use std::ops::Range;
use std::rc::Rc;

/// Scroll measurements reported to the `on_scroll` handler, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content.
    pub scroll_top: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

/// Rows intersecting the viewport for the given scroll position, padded by
/// `overscan` rows on each side.
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    row_count: usize,
    overscan: usize,
) -> Range<usize> {
    if row_count == 0 || row_height <= 0.0 {
        return 0..0;
    }
    let first = ((scroll_top / row_height).floor().max(0.0) as usize).min(row_count);
    let visible = (viewport_height / row_height).ceil() as usize + 1;
    let start = first.saturating_sub(overscan);
    let end = (first + visible + overscan).min(row_count);
    start..end
}

/// Fixed-row-height windowed list.
///
/// Renders only the rows intersecting the viewport, absolutely positioned
/// inside a spacer sized for the full item count. Scroll measurements are
/// forwarded to `on_scroll` so the host can decide when to fetch more.
#[derive(Props, Clone, PartialEq)]
pub struct VirtualListProps<T: Clone + PartialEq + 'static> {
    pub items: Vec<T>,
    /// Height of every row, in pixels.
    pub row_height: f64,
    /// Height of the scrollable viewport, in pixels.
    pub height: f64,
    #[props(default = 3)]
    pub overscan: usize,
    #[props(default)]
    pub on_scroll: EventHandler<ScrollMetrics>,
    pub render_row: Callback<T, Element>,
}

#[component]
pub fn VirtualList<T: Clone + PartialEq + 'static>(props: VirtualListProps<T>) -> Element {
    let mut mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut scroll_top = use_signal(|| 0.0f64);

    let row_height = props.row_height;
    let viewport_height = props.height;
    let total_height = row_height * props.items.len() as f64;
    let range = visible_range(
        scroll_top(),
        viewport_height,
        row_height,
        props.items.len(),
        props.overscan,
    );
    let on_scroll = props.on_scroll;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "virtual-list",
            style: "height: {viewport_height}px;",
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onscroll: move |_| {
                let Some(el) = mounted() else {
                    return;
                };
                spawn(async move {
                    let offset = el.get_scroll_offset().await;
                    let size = el.get_scroll_size().await;
                    if let (Ok(offset), Ok(size)) = (offset, size) {
                        scroll_top.set(offset.y);
                        on_scroll.call(ScrollMetrics {
                            scroll_top: offset.y,
                            content_height: size.height,
                            viewport_height,
                        });
                    }
                });
            },
            div {
                class: "virtual-list-spacer",
                style: "height: {total_height}px;",
                for (idx, item) in props.items.iter().enumerate().skip(range.start).take(range.len()) {
                    div {
                        class: "virtual-list-row",
                        style: "top: {idx as f64 * row_height}px; height: {row_height}px;",
                        {props.render_row.call(item.clone())}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_has_empty_range() {
        assert_eq!(visible_range(0.0, 250.0, 50.0, 0, 3), 0..0);
    }

    #[test]
    fn top_of_list_starts_at_zero() {
        // 250px viewport over 50px rows shows rows 0..=5, plus overscan below.
        assert_eq!(visible_range(0.0, 250.0, 50.0, 100, 3), 0..9);
    }

    #[test]
    fn scrolled_range_is_offset() {
        // scroll_top 500 => first visible row 10; overscan pads both sides.
        assert_eq!(visible_range(500.0, 250.0, 50.0, 100, 3), 7..19);
    }

    #[test]
    fn range_clamps_to_item_count() {
        let range = visible_range(10_000.0, 250.0, 50.0, 12, 3);
        assert!(range.end <= 12);
        assert!(range.start <= range.end);
    }

    #[test]
    fn zero_row_height_yields_empty_range() {
        assert_eq!(visible_range(0.0, 250.0, 0.0, 100, 3), 0..0);
    }

    #[test]
    fn fractional_scroll_positions_round_down() {
        // 49.9px of scroll still starts at row 0.
        assert_eq!(visible_range(49.9, 250.0, 50.0, 100, 0), 0..6);
        // 50.0px of scroll starts at row 1.
        assert_eq!(visible_range(50.0, 250.0, 50.0, 100, 0), 1..7);
    }
}
