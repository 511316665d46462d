// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable presentation of the arrows and dots.

use alloc::vec::Vec;

use crate::DotState;

/// Produces the nodes used for the carousel's arrows and dots.
///
/// `Node` is whatever the host UI builds: a widget handle, a display-list
/// fragment, or a plain description. The carousel only decides which nodes
/// are needed and in what state.
pub trait CarouselChrome {
    /// Node type produced for the host UI.
    type Node;

    /// Renders the dot for one slide.
    fn render_dot(&self, dot: DotState) -> Self::Node;

    /// Renders the "previous" arrow.
    fn render_left_arrow(&self) -> Self::Node;

    /// Renders the "next" arrow.
    fn render_right_arrow(&self) -> Self::Node;
}

/// Text glyphs for hosts without custom presentation.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultChrome;

impl CarouselChrome for DefaultChrome {
    type Node = &'static str;

    fn render_dot(&self, dot: DotState) -> Self::Node {
        if dot.active { "\u{25cf}" } else { "\u{25cb}" }
    }

    fn render_left_arrow(&self) -> Self::Node {
        "\u{25c0}"
    }

    fn render_right_arrow(&self) -> Self::Node {
        "\u{25b6}"
    }
}

/// The previous/next arrow pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrows<N> {
    /// Navigates to the previous slide.
    pub left: N,
    /// Navigates to the next slide.
    pub right: N,
}

/// Rendered chrome; hidden parts are `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome<N> {
    /// Arrows, unless hidden.
    pub arrows: Option<Arrows<N>>,
    /// One node per slide paired with its index, unless hidden.
    pub dots: Option<Vec<(usize, N)>>,
}

impl<N> Chrome<N> {
    /// Builds the chrome from dot states and visibility flags.
    pub fn build<C>(
        chrome: &C,
        dots: impl IntoIterator<Item = DotState>,
        hide_arrows: bool,
        hide_dots: bool,
    ) -> Self
    where
        C: CarouselChrome<Node = N> + ?Sized,
    {
        let arrows = (!hide_arrows).then(|| Arrows {
            left: chrome.render_left_arrow(),
            right: chrome.render_right_arrow(),
        });
        let dots = (!hide_dots).then(|| {
            dots.into_iter()
                .map(|dot| (dot.index, chrome.render_dot(dot)))
                .collect()
        });
        Self { arrows, dots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct Marks;

    impl CarouselChrome for Marks {
        type Node = char;

        fn render_dot(&self, dot: DotState) -> char {
            if dot.active { '*' } else { '.' }
        }

        fn render_left_arrow(&self) -> char {
            '<'
        }

        fn render_right_arrow(&self) -> char {
            '>'
        }
    }

    fn dots() -> Vec<DotState> {
        (0..3)
            .map(|index| DotState {
                index,
                active: index == 1,
            })
            .collect()
    }

    #[test]
    fn custom_chrome_renders_every_part() {
        let chrome = Chrome::build(&Marks, dots(), false, false);
        assert_eq!(
            chrome.arrows,
            Some(Arrows {
                left: '<',
                right: '>'
            })
        );
        assert_eq!(chrome.dots, Some(vec![(0, '.'), (1, '*'), (2, '.')]));
    }

    #[test]
    fn hidden_parts_are_not_rendered() {
        let chrome = Chrome::build(&DefaultChrome, dots(), true, true);
        assert_eq!(chrome.arrows, None);
        assert_eq!(chrome.dots, None);
    }
}
