// SPDX-License-Identifier: MPL-2.0
//! Strip geometry: where each slide sits inside a scrolling row or column,
//! which slide is closest to the viewport center, and the scroll offset that
//! brings a slide to the center.

use iced::{Point, Rectangle, Size};

/// Scroll direction of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn span(self, bounds: Rectangle) -> (f32, f32) {
        match self {
            Axis::Horizontal => (bounds.x, bounds.x + bounds.width),
            Axis::Vertical => (bounds.y, bounds.y + bounds.height),
        }
    }

    fn center(self, bounds: Rectangle) -> f32 {
        let center = bounds.center();
        match self {
            Axis::Horizontal => center.x,
            Axis::Vertical => center.y,
        }
    }
}

/// Returns the slide whose center is nearest to the viewport center along `axis`.
///
/// Ties keep the earliest slide. Returns `None` for an empty iterator.
pub fn closest_to_center<I>(viewport: Rectangle, slides: I, axis: Axis) -> Option<usize>
where
    I: IntoIterator<Item = (usize, Rectangle)>,
{
    let target = axis.center(viewport);
    let mut best: Option<(usize, f32)> = None;

    for (number, bounds) in slides {
        let distance = (axis.center(bounds) - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((number, distance)),
        }
    }

    best.map(|(number, _)| number)
}

/// Layout of `count` equally sized slides laid out along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    axis: Axis,
    slide: Size,
    gap: f32,
    padding: f32,
    count: usize,
}

impl StripLayout {
    #[must_use]
    pub fn new(axis: Axis, slide: Size, gap: f32, padding: f32, count: usize) -> Self {
        Self {
            axis,
            slide,
            gap: gap.max(0.0),
            padding: padding.max(0.0),
            count,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn stride(&self) -> f32 {
        self.axis.main(self.slide) + self.gap
    }

    /// Bounds of slide `number` (1-based) in content coordinates.
    #[must_use]
    pub fn slide_bounds(&self, number: usize) -> Option<Rectangle> {
        if number == 0 || number > self.count {
            return None;
        }
        let along = self.padding + (number - 1) as f32 * self.stride();
        let position = match self.axis {
            Axis::Horizontal => Point::new(along, self.padding),
            Axis::Vertical => Point::new(self.padding, along),
        };
        Some(Rectangle::new(position, self.slide))
    }

    /// Total size of the scrollable content, padding included.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let slides = self.count as f32 * self.axis.main(self.slide);
        let gaps = self.count.saturating_sub(1) as f32 * self.gap;
        let main = slides + gaps + 2.0 * self.padding;
        match self.axis {
            Axis::Horizontal => Size::new(main, self.slide.height + 2.0 * self.padding),
            Axis::Vertical => Size::new(self.slide.width + 2.0 * self.padding, main),
        }
    }

    /// Slide nearest to the center of `viewport` (content coordinates).
    #[must_use]
    pub fn closest_slide(&self, viewport: Rectangle) -> Option<usize> {
        closest_to_center(
            viewport,
            (1..=self.count).filter_map(|n| self.slide_bounds(n).map(|b| (n, b))),
            self.axis,
        )
    }

    /// Whether slide `number` lies entirely inside `viewport` along the axis.
    #[must_use]
    pub fn is_fully_visible(&self, number: usize, viewport: Rectangle) -> bool {
        let Some(bounds) = self.slide_bounds(number) else {
            return false;
        };
        let (start, end) = self.axis.span(bounds);
        let (visible_start, visible_end) = self.axis.span(viewport);
        start >= visible_start - 0.5 && end <= visible_end + 0.5
    }

    /// Relative scroll offset (`0.0..=1.0` along the axis) that centers
    /// slide `number` in a viewport of `viewport` size.
    #[must_use]
    pub fn centering_offset(&self, number: usize, viewport: Size) -> Option<f32> {
        let bounds = self.slide_bounds(number)?;
        let visible = self.axis.main(viewport);
        let max_scroll = self.axis.main(self.content_size()) - visible;
        if max_scroll <= 0.0 {
            return Some(0.0);
        }
        let absolute = self.axis.center(bounds) - visible / 2.0;
        Some((absolute / max_scroll).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn row(count: usize) -> StripLayout {
        StripLayout::new(Axis::Horizontal, Size::new(400.0, 225.0), 20.0, 20.0, count)
    }

    #[test]
    fn slide_bounds_follow_stride() {
        let layout = row(3);
        let second = layout.slide_bounds(2).unwrap();
        assert_abs_diff_eq!(second.x, 440.0);
        assert_abs_diff_eq!(second.y, 20.0);
        assert!(layout.slide_bounds(0).is_none());
        assert!(layout.slide_bounds(4).is_none());
    }

    #[test]
    fn content_size_includes_gaps_and_padding() {
        let size = row(3).content_size();
        assert_abs_diff_eq!(size.width, 3.0 * 400.0 + 2.0 * 20.0 + 40.0);
        assert_abs_diff_eq!(size.height, 265.0);
    }

    #[test]
    fn closest_slide_tracks_viewport_center() {
        let layout = row(5);
        let viewport = |x: f32| Rectangle::new(Point::new(x, 0.0), Size::new(500.0, 300.0));

        assert_eq!(layout.closest_slide(viewport(0.0)), Some(1));
        // Center at 1080: slide 3 spans 860..1260.
        assert_eq!(layout.closest_slide(viewport(830.0)), Some(3));
    }

    #[test]
    fn ties_go_to_earlier_slide() {
        let a = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let b = Rectangle::new(Point::new(200.0, 0.0), Size::new(100.0, 100.0));
        let viewport = Rectangle::new(Point::new(50.0, 0.0), Size::new(200.0, 100.0));

        assert_eq!(
            closest_to_center(viewport, [(1, a), (2, b)], Axis::Horizontal),
            Some(1)
        );
        assert_eq!(
            closest_to_center(viewport, Vec::<(usize, Rectangle)>::new(), Axis::Horizontal),
            None
        );
    }

    #[test]
    fn centering_offset_is_relative_and_clamped() {
        let layout = row(5);
        let viewport = Size::new(500.0, 300.0);

        assert_abs_diff_eq!(layout.centering_offset(1, viewport).unwrap(), 0.0);
        assert_abs_diff_eq!(layout.centering_offset(5, viewport).unwrap(), 1.0);

        let middle = layout.centering_offset(3, viewport).unwrap();
        assert!(middle > 0.0 && middle < 1.0);
    }

    #[test]
    fn short_strip_never_scrolls() {
        let layout = row(1);
        assert_abs_diff_eq!(
            layout.centering_offset(1, Size::new(1000.0, 800.0)).unwrap(),
            0.0
        );
    }

    #[test]
    fn vertical_strip_uses_height() {
        let layout = StripLayout::new(Axis::Vertical, Size::new(400.0, 225.0), 10.0, 0.0, 4);
        assert_abs_diff_eq!(layout.slide_bounds(3).unwrap().y, 470.0);
        assert_abs_diff_eq!(layout.content_size().height, 930.0);
    }

    #[test]
    fn full_visibility_is_checked_along_the_axis() {
        let layout = row(5);
        // Slide 2 spans 440..840, slide 3 spans 860..1260.
        let viewport = Rectangle::new(Point::new(430.0, 100.0), Size::new(500.0, 50.0));

        assert!(layout.is_fully_visible(2, viewport));
        assert!(!layout.is_fully_visible(3, viewport));
        assert!(!layout.is_fully_visible(9, viewport));
    }
}
